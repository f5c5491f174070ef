use convert_case::{Case, Casing};

/// Word-capitalized display form of a type name (`string_literal` becomes `StringLiteral`).
pub fn display_name(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// Case- and separator-insensitive form of a type name used for comparisons.
///
/// # Examples
///
/// ```
/// use irdoc_core::slug::normalize_name;
///
/// assert_eq!(normalize_name("ErrorResponse"), normalize_name("error-response"));
/// ```
pub fn normalize_name(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Derives the anchor slug of a heading.
///
/// Punctuation is dropped first, so section numbers collapse into one
/// word, then the rest is converted to kebab case:
///
/// ```
/// use irdoc_core::slug::heading_slug;
///
/// assert_eq!(heading_slug("3.1.2 StringLiteral"), "312-string-literal");
/// ```
pub fn heading_slug(heading: &str) -> String {
    let stripped: String = heading
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace() || *ch == '-' || *ch == '_')
        .collect();
    stripped.to_case(Case::Kebab)
}

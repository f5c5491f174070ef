//! Validation rules rendered as prose.

use irdoc_core::ir::format_number;
use irdoc_core::Rule;

/// The sentence describing one rule, or `None` for rules that have none.
pub fn rule_sentence(rule: &Rule) -> Option<String> {
    let sentence = match rule {
        Rule::ArrayMaxItems { max } => format!(
            "MUST have at most `{}` item{}.",
            format_number(max.value),
            plural(max.value)
        ),
        Rule::ArrayMinItems { min } => format!(
            "MUST have at least `{}` item{}.",
            format_number(min.value),
            plural(min.value)
        ),
        Rule::ArrayUniqueItems => "MUST have unique items.".to_string(),
        Rule::NumberGt { value } => {
            format!("MUST be greater than `{}`.", format_number(value.value))
        }
        Rule::NumberGte { value } => format!(
            "MUST be greater than or equal to `{}`.",
            format_number(value.value)
        ),
        Rule::NumberLt { value } => format!("MUST be less than `{}`.", format_number(value.value)),
        Rule::NumberLte { value } => format!(
            "MUST be less than or equal to `{}`.",
            format_number(value.value)
        ),
        Rule::StringMaxLength { length } => format!(
            "MUST have a length of at most `{}`.",
            format_number(length.value)
        ),
        Rule::StringMinLength { length } => format!(
            "MUST have a length of at least `{}`.",
            format_number(length.value)
        ),
        Rule::StringPattern { pattern } => {
            format!("MUST match the pattern `{}`.", pattern.value)
        }
        Rule::StringFormat { format } => format!("MUST be a valid `{}`.", format.value),
        // Requiredness has its own marker in the table.
        Rule::Required => return None,
        Rule::Unknown => return None,
    };
    Some(sentence)
}

fn plural(count: f64) -> &'static str {
    if count == 1.0 { "" } else { "s" }
}

/// HTML list of every rule sentence; empty when no rule produces one.
pub fn rules_block(rules: &[Rule]) -> String {
    let sentences: Vec<String> = rules.iter().filter_map(rule_sentence).collect();
    if sentences.is_empty() {
        return String::new();
    }

    let mut block = String::from("<br/>Rules:<br/><ul>");
    for sentence in sentences {
        block.push_str("<li>");
        block.push_str(&sentence);
        block.push_str("</li>");
    }
    block.push_str("</ul>");
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use irdoc_core::Literal;

    #[test]
    fn item_counts_agree_in_number() {
        assert_eq!(
            rule_sentence(&Rule::max_items(1.0)).unwrap(),
            "MUST have at most `1` item."
        );
        assert_eq!(
            rule_sentence(&Rule::max_items(3.0)).unwrap(),
            "MUST have at most `3` items."
        );
        assert_eq!(
            rule_sentence(&Rule::min_items(1.0)).unwrap(),
            "MUST have at least `1` item."
        );
        assert_eq!(
            rule_sentence(&Rule::min_items(0.0)).unwrap(),
            "MUST have at least `0` items."
        );
    }

    #[test]
    fn numeric_and_string_rules() {
        let cases = [
            (
                Rule::NumberGt {
                    value: Literal::new(0.0),
                },
                "MUST be greater than `0`.",
            ),
            (
                Rule::NumberGte {
                    value: Literal::new(1.5),
                },
                "MUST be greater than or equal to `1.5`.",
            ),
            (
                Rule::NumberLt {
                    value: Literal::new(-2.0),
                },
                "MUST be less than `-2`.",
            ),
            (
                Rule::NumberLte {
                    value: Literal::new(100.0),
                },
                "MUST be less than or equal to `100`.",
            ),
            (
                Rule::StringMaxLength {
                    length: Literal::new(64.0),
                },
                "MUST have a length of at most `64`.",
            ),
            (
                Rule::StringMinLength {
                    length: Literal::new(1.0),
                },
                "MUST have a length of at least `1`.",
            ),
            (Rule::pattern("^[a-z]+$"), "MUST match the pattern `^[a-z]+$`."),
            (
                Rule::StringFormat {
                    format: "date-time".into(),
                },
                "MUST be a valid `date-time`.",
            ),
            (Rule::ArrayUniqueItems, "MUST have unique items."),
        ];

        for (rule, expected) in cases {
            assert_eq!(rule_sentence(&rule).as_deref(), Some(expected), "{rule:?}");
        }
    }

    #[test]
    fn unknown_and_required_rules_are_skipped() {
        assert_eq!(rule_sentence(&Rule::Unknown), None);
        assert_eq!(rule_sentence(&Rule::Required), None);
        insta::assert_snapshot!(
            rules_block(&[Rule::Unknown, Rule::ArrayUniqueItems]),
            @"<br/>Rules:<br/><ul><li>MUST have unique items.</li></ul>"
        );
    }

    #[test]
    fn empty_rules_render_nothing() {
        assert_eq!(rules_block(&[]), "");
        assert_eq!(rules_block(&[Rule::Required, Rule::Unknown]), "");
    }

    #[test]
    fn block_keeps_rule_order() {
        assert_eq!(
            rules_block(&[Rule::min_items(1.0), Rule::max_items(3.0)]),
            "<br/>Rules:<br/><ul><li>MUST have at least `1` item.</li><li>MUST have at most `3` items.</li></ul>"
        );
    }
}

//! Document prelude and version substitution.

use irdoc_core::DocError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Placeholder replaced with the resolved version.
pub const VERSION_TOKEN: &str = "{{version}}";

/// Version used when no metadata is available.
pub const UNKNOWN_VERSION: &str = "unknown";

const BUNDLED: &str = include_str!("../templates/ir.md");

static LOADED: Lazy<Mutex<HashMap<PathBuf, Arc<str>>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Prose that precedes the generated sections.
#[derive(Debug, Clone)]
pub struct Template {
    source: Arc<str>,
}

impl Template {
    /// The template compiled into the crate.
    pub fn bundled() -> Self {
        Self {
            source: Arc::from(BUNDLED),
        }
    }

    /// Wraps template text.
    pub fn from_source(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Reads a template file. Each path is read at most once per process.
    pub fn load(path: &Path) -> Result<Self, DocError> {
        let mut cache = LOADED.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(source) = cache.get(path) {
            return Ok(Self {
                source: Arc::clone(source),
            });
        }

        let source: Arc<str> = std::fs::read_to_string(path)
            .map_err(|e| DocError::io(path, e))?
            .into();
        log::debug!("Loaded template from {}", path.display());
        cache.insert(path.to_path_buf(), Arc::clone(&source));
        Ok(Self { source })
    }

    /// Unrendered template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the text mentions the version placeholder.
    pub fn needs_version(&self) -> bool {
        self.source.contains(VERSION_TOKEN)
    }

    /// Text with every placeholder replaced by `version`.
    pub fn render(&self, version: &str) -> String {
        self.source.replace(VERSION_TOKEN, version)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Reads `version` from a `package.json`-style file.
///
/// Falls back to [`UNKNOWN_VERSION`] with a warning when the path is absent,
/// unreadable, not JSON, or has no string `version`.
pub fn resolve_version(metadata_path: Option<&Path>) -> String {
    let Some(path) = metadata_path else {
        log::warn!("No version metadata configured; using `{}`", UNKNOWN_VERSION);
        return UNKNOWN_VERSION.to_string();
    };

    match read_version(path) {
        Ok(version) => version,
        Err(reason) => {
            log::warn!(
                "Could not read version from {} ({}); using `{}`",
                path.display(),
                reason,
                UNKNOWN_VERSION
            );
            UNKNOWN_VERSION.to_string()
        }
    }
}

fn read_version(path: &Path) -> Result<String, String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let metadata: serde_json::Value = serde_json::from_str(&text).map_err(|e| e.to_string())?;
    metadata
        .get("version")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| "missing `version`".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn bundled_template_mentions_version() {
        let template = Template::bundled();
        assert!(template.needs_version());
        let rendered = template.render("1.2.3");
        assert!(rendered.contains("1.2.3"));
        assert!(!rendered.contains(VERSION_TOKEN));
    }

    #[test]
    fn render_replaces_every_token() {
        let template = Template::from_source("v{{version}} and {{version}}");
        assert_eq!(template.render("0.1.0"), "v0.1.0 and 0.1.0");
        assert!(!Template::from_source("plain").needs_version());
    }

    #[test]
    fn version_from_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "package.json", r#"{"name":"x","version":"0.4.1"}"#);
        assert_eq!(resolve_version(Some(&path)), "0.4.1");
    }

    #[test]
    fn missing_metadata_gives_unknown() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_version(None), UNKNOWN_VERSION);
        assert_eq!(
            resolve_version(Some(&dir.path().join("absent.json"))),
            UNKNOWN_VERSION
        );

        let malformed = write(&dir, "bad.json", "{ not json");
        assert_eq!(resolve_version(Some(&malformed)), UNKNOWN_VERSION);

        let versionless = write(&dir, "none.json", r#"{"version": 3}"#);
        assert_eq!(resolve_version(Some(&versionless)), UNKNOWN_VERSION);
    }

    #[test]
    fn load_reads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "intro.md", "# Intro {{version}}");
        let first = Template::load(&path).unwrap();
        assert_eq!(first.source(), "# Intro {{version}}");

        std::fs::remove_file(&path).unwrap();
        let second = Template::load(&path).unwrap();
        assert_eq!(second.source(), first.source());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, DocError::Io { .. }), "{err:?}");
    }
}

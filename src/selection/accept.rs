//! `accept` descriptors for the file picker
//!
//! Mirrors the HTML `accept` attribute: a comma-separated list of file
//! extensions (`.png`), MIME types (`image/png`) or MIME families
//! (`image/*`). Glob tokens such as `report-*.csv` are also understood.
//! The selection manager stores the descriptor untouched; only the picker
//! uses [`AcceptFilter::matches`] to hide files.

use glob::Pattern;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
enum AcceptToken {
    Extension(String),
    MimeType(String),
    MimeFamily(String),
    Glob(Pattern),
}

impl AcceptToken {
    fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }

        if let Some(ext) = token.strip_prefix('.') {
            return Some(Self::Extension(ext.to_ascii_lowercase()));
        }

        if token.contains(['*', '?', '[']) && !token.contains('/') {
            return Pattern::new(token).ok().map(Self::Glob);
        }

        match token.split_once('/') {
            Some((family, "*")) => Some(Self::MimeFamily(family.to_ascii_lowercase())),
            Some(_) => Some(Self::MimeType(token.to_ascii_lowercase())),
            None => Some(Self::Extension(token.to_ascii_lowercase())),
        }
    }

    fn matches(&self, path: &Path) -> bool {
        match self {
            Self::Extension(ext) => path
                .extension()
                .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(ext)),
            Self::MimeType(mime) => mime_guess::from_path(path)
                .iter()
                .any(|guess| guess.essence_str().eq_ignore_ascii_case(mime)),
            Self::MimeFamily(family) => mime_guess::from_path(path)
                .iter()
                .any(|guess| guess.type_().as_str().eq_ignore_ascii_case(family)),
            Self::Glob(pattern) => path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy())),
        }
    }
}

/// Parsed `accept` descriptor
///
/// Keeps the raw text so it can be displayed exactly as configured.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcceptFilter {
    raw: Option<String>,
    tokens: Vec<AcceptToken>,
}

impl AcceptFilter {
    /// Filter that accepts every file
    #[must_use]
    pub const fn any() -> Self {
        Self {
            raw: None,
            tokens: Vec::new(),
        }
    }

    /// Parse a descriptor such as `".png,.jpg,application/pdf"`
    ///
    /// Unparseable tokens are skipped. A descriptor with no usable tokens
    /// accepts everything.
    #[must_use]
    pub fn parse(descriptor: &str) -> Self {
        let trimmed = descriptor.trim();
        if trimmed.is_empty() {
            return Self::any();
        }

        Self {
            raw: Some(trimmed.to_string()),
            tokens: trimmed.split(',').filter_map(AcceptToken::parse).collect(),
        }
    }

    /// Build from an optional descriptor
    #[must_use]
    pub fn from_option(descriptor: Option<&str>) -> Self {
        descriptor.map_or_else(Self::any, Self::parse)
    }

    /// The descriptor as given
    #[must_use]
    pub fn descriptor(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Whether the filter lets every file through
    #[must_use]
    pub fn accepts_all(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the picker should show this file
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        self.accepts_all() || self.tokens.iter().any(|token| token.matches(path))
    }
}

impl fmt::Display for AcceptFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "Accepted: {raw}"),
            None => write!(f, "Any file type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_accepts_everything() {
        let filter = AcceptFilter::any();
        assert!(filter.accepts_all());
        assert!(filter.matches(Path::new("whatever.bin")));
        assert!(filter.matches(Path::new("no_extension")));
        assert_eq!(filter.to_string(), "Any file type");
    }

    #[test]
    fn test_blank_descriptor_is_any() {
        assert_eq!(AcceptFilter::parse("   "), AcceptFilter::any());
        assert_eq!(AcceptFilter::from_option(None), AcceptFilter::any());
    }

    #[test]
    fn test_extension_tokens() {
        let filter = AcceptFilter::parse(".png, .JPG");
        assert!(filter.matches(Path::new("photo.png")));
        assert!(filter.matches(Path::new("dir/photo.jpg")));
        assert!(!filter.matches(Path::new("notes.txt")));
        assert!(!filter.matches(Path::new("png")));
    }

    #[test]
    fn test_mime_family() {
        let filter = AcceptFilter::parse("image/*");
        assert!(filter.matches(Path::new("photo.png")));
        assert!(filter.matches(Path::new("scan.jpeg")));
        assert!(!filter.matches(Path::new("report.pdf")));
    }

    #[test]
    fn test_exact_mime_type() {
        let filter = AcceptFilter::parse("application/pdf");
        assert!(filter.matches(Path::new("report.pdf")));
        assert!(!filter.matches(Path::new("photo.png")));
    }

    #[test]
    fn test_glob_token() {
        let filter = AcceptFilter::parse("report-*.csv");
        assert!(filter.matches(Path::new("data/report-2024.csv")));
        assert!(!filter.matches(Path::new("data/summary.csv")));
    }

    #[test]
    fn test_display_keeps_descriptor() {
        let filter = AcceptFilter::parse(" .csv,.tsv ");
        assert_eq!(filter.descriptor(), Some(".csv,.tsv"));
        assert_eq!(filter.to_string(), "Accepted: .csv,.tsv");
    }
}

//! Decoding terminal drop payloads
//!
//! Terminal emulators deliver a dropped file as pasted text: one or more
//! paths separated by whitespace, shell-quoted or backslash-escaped, and
//! sometimes as `file://` URIs. [`parse_drop_text`] turns that text back
//! into an ordered list of paths.

use std::path::PathBuf;
use url::Url;

/// Split pasted text into shell-style words
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') => match chars.next() {
                Some(next @ ('"' | '\\')) => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(current);
    }

    words
}

/// Convert a single word to a path, decoding `file://` URIs
fn word_to_path(word: String) -> PathBuf {
    if word.starts_with("file://")
        && let Ok(url) = Url::parse(&word)
        && let Ok(path) = url.to_file_path()
    {
        return path;
    }
    PathBuf::from(word)
}

/// Parse the text of a terminal drop into paths
///
/// Empty or whitespace-only text yields an empty payload.
#[must_use]
pub fn parse_drop_text(text: &str) -> Vec<PathBuf> {
    split_words(text).into_iter().map(word_to_path).collect()
}

//! Input resolution for the address bar
//!
//! 1. Trim spaces and tabs
//! 2. Reject anything that is not a URI reference at all
//! 3. No scheme → `"<scheme>:/" + input`
//! 4. Parse the result; that is what gets loaded

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ValidationError;
use crate::Result;

/// Scheme prepended to input that has none
pub const DEFAULT_SCHEME: &str = "http";

/// An absolute URL ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedUrl(Url);

impl ResolvedUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

pub struct UrlResolver {
    /// Scheme used when the user typed none
    scheme: String,
}

impl UrlResolver {
    pub fn new() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }

    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = scheme.into();
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Resolve user input into a loadable URL
    pub fn resolve(&self, input: &str) -> Result<ResolvedUrl> {
        let trimmed = input.trim_matches(|c: char| c == ' ' || c == '\t');

        if !is_uri_reference(trimmed) {
            tracing::warn!(input = %input, "Invalid URL");
            return Err(ValidationError::Malformed(input.to_string()));
        }

        let candidate = if scheme_of(trimmed).is_some() {
            trimmed.to_string()
        } else {
            // Literal concatenation: the candidate's own leading slash structure
            // supplies the rest of "//".
            format!("{}:/{}", self.scheme, trimmed)
        };

        match Url::parse(&candidate) {
            Ok(url) => {
                tracing::debug!(input = %input, url = %url, "Resolved address bar input");
                Ok(ResolvedUrl(url))
            }
            Err(e) => {
                tracing::warn!(input = %input, candidate = %candidate, error = %e, "Invalid URL");
                Err(ValidationError::Malformed(input.to_string()))
            }
        }
    }
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `scheme` is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Leading `scheme:` of a URI reference, if any.
///
/// Only a colon that appears before the first `/`, `?` or `#` can end a scheme.
fn scheme_of(input: &str) -> Option<&str> {
    let end = input.find([':', '/', '?', '#'])?;
    if input.as_bytes()[end] != b':' {
        return None;
    }

    let scheme = &input[..end];
    is_valid_scheme(scheme).then_some(scheme)
}

/// Whether `input` is syntactically a URI reference (absolute or relative).
fn is_uri_reference(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let bytes = input.as_bytes();
    let mut seen_fragment = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escaped = bytes.get(i + 1..i + 3);
                if !escaped.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                    return false;
                }
                i += 3;
                continue;
            }
            b'#' if seen_fragment => return false,
            b'#' => seen_fragment = true,
            b if is_uri_char(b) => {}
            _ => return false,
        }
        i += 1;
    }

    true
}

fn is_uri_char(b: u8) -> bool {
    matches!(b,
        b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9'
        // unreserved
        | b'-' | b'.' | b'_' | b'~'
        // gen-delims
        | b':' | b'/' | b'?' | b'[' | b']' | b'@'
        // sub-delims
        | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

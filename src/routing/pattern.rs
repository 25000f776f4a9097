//! Path pattern compilation.
//!
//! # Responsibilities
//! - Parse route paths (`/kitten/{size}`, `/kitten/:size`) into typed segments
//! - Reject malformed patterns at load time
//! - Match a split request path and bind captures
//!
//! # Design Decisions
//! - Patterns are parsed once; matching never re-parses
//! - `{name}` and `:name` are two spellings of the same capture
//! - Literals compare byte-for-byte (case-sensitive)

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::routing::matcher::strip_trailing_slash;

/// Captured path parameters, keyed by capture name.
pub type Params = BTreeMap<String, String>;

/// A single compiled path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly.
    Literal(String),
    /// Binds any non-empty request segment under this name.
    Capture(String),
}

/// Errors raised while compiling a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("path `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("path `{0}` contains an empty segment")]
    EmptySegment(String),

    #[error("path `{path}` has a capture with no name")]
    EmptyCaptureName { path: String },

    #[error("path `{path}` has invalid capture name `{name}`")]
    InvalidCaptureName { path: String, name: String },

    #[error("path `{path}` binds `{name}` more than once")]
    DuplicateCapture { path: String, name: String },
}

/// A compiled route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a route path.
    ///
    /// `/` compiles to the empty segment list. A single trailing slash is
    /// ignored so that `/about/` and `/about` are the same pattern.
    pub fn parse(path: &str) -> Result<Self, PatternError> {
        let rest = path
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(path.to_string()))?;
        let rest = strip_trailing_slash(rest);

        let mut segments = Vec::new();
        if rest.is_empty() {
            return Ok(Self { segments });
        }

        for raw in rest.split('/') {
            if raw.is_empty() {
                return Err(PatternError::EmptySegment(path.to_string()));
            }
            let segment = match capture_name(raw) {
                Some(name) => {
                    validate_capture_name(path, name)?;
                    if segments
                        .iter()
                        .any(|s| matches!(s, Segment::Capture(existing) if existing == name))
                    {
                        return Err(PatternError::DuplicateCapture {
                            path: path.to_string(),
                            name: name.to_string(),
                        });
                    }
                    Segment::Capture(name.to_string())
                }
                None => Segment::Literal(raw.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match an already-split request path.
    ///
    /// Returns the bound captures when every segment matches, `None` otherwise.
    pub fn captures(&self, path: &[&str]) -> Option<Params> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != value {
                        return None;
                    }
                }
                Segment::Capture(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), (*value).to_string());
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => write!(f, "/{}", literal)?,
                Segment::Capture(name) => write!(f, "/{{{}}}", name)?,
            }
        }
        Ok(())
    }
}

/// Returns the capture name if `raw` is written as a capture.
fn capture_name(raw: &str) -> Option<&str> {
    if let Some(name) = raw.strip_prefix(':') {
        return Some(name);
    }
    raw.strip_prefix('{').and_then(|r| r.strip_suffix('}'))
}

fn validate_capture_name(path: &str, name: &str) -> Result<(), PatternError> {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => {
            return Err(PatternError::EmptyCaptureName {
                path: path.to_string(),
            })
        }
    };

    let valid = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(PatternError::InvalidCaptureName {
            path: path.to_string(),
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert!(pattern.segments().is_empty());
        assert_eq!(pattern.to_string(), "/");
    }

    #[test]
    fn test_parse_both_capture_spellings() {
        let braces = PathPattern::parse("/kitten/{size}").unwrap();
        let colon = PathPattern::parse("/kitten/:size").unwrap();
        assert_eq!(braces, colon);
        assert_eq!(
            braces.segments(),
            &[
                Segment::Literal("kitten".into()),
                Segment::Capture("size".into())
            ]
        );
        assert_eq!(colon.to_string(), "/kitten/{size}");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            PathPattern::parse("about"),
            Err(PatternError::MissingLeadingSlash("about".into()))
        );
        assert!(matches!(
            PathPattern::parse("//"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            PathPattern::parse("/a//b"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            PathPattern::parse("/kitten/{}"),
            Err(PatternError::EmptyCaptureName { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/kitten/:9lives"),
            Err(PatternError::InvalidCaptureName { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/pair/{id}/{id}"),
            Err(PatternError::DuplicateCapture { .. })
        ));
    }

    #[test]
    fn test_captures() {
        let pattern = PathPattern::parse("/secrets/{magic_word}").unwrap();

        let params = pattern.captures(&["secrets", "xyzzy"]).unwrap();
        assert_eq!(params.get("magic_word").map(String::as_str), Some("xyzzy"));

        // Case-sensitive literal
        assert!(pattern.captures(&["Secrets", "xyzzy"]).is_none());
        // Empty capture
        assert!(pattern.captures(&["secrets", ""]).is_none());
        // Segment count mismatch
        assert!(pattern.captures(&["secrets"]).is_none());
        assert!(pattern.captures(&["secrets", "a", "b"]).is_none());
    }
}

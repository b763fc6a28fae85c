//! Correct-answer marker detection.
//!
//! Models are asked to prefix the correct option with a sentinel token.
//! Detection is behind a trait so the token (or the whole strategy) can be
//! swapped in configuration and tests.

/// Strategy for finding and removing correct-answer markers in option lines
pub trait MarkerDetector: Send + Sync {
    /// Token the model is instructed to write before the correct option
    fn token(&self) -> &str;

    /// Whether the line carries the marker
    fn is_marked(&self, line: &str) -> bool;

    /// The line with every marker occurrence removed
    fn strip(&self, line: &str) -> String;
}

/// Literal substring marker, `"Correct:"` by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelMarker {
    token: String,
}

impl SentinelMarker {
    pub const DEFAULT_TOKEN: &'static str = "Correct:";

    /// # Panics
    /// Panics if the token is empty
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        assert!(!token.is_empty(), "Marker token cannot be empty");
        Self { token }
    }

    /// Try to create a marker, returning None for an empty token
    pub fn try_new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self { token })
        }
    }
}

impl Default for SentinelMarker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOKEN)
    }
}

impl MarkerDetector for SentinelMarker {
    fn token(&self) -> &str {
        &self.token
    }

    fn is_marked(&self, line: &str) -> bool {
        line.contains(&self.token)
    }

    fn strip(&self, line: &str) -> String {
        line.replace(&self.token, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sentinel() {
        let marker = SentinelMarker::default();
        assert_eq!(marker.token(), "Correct:");
        assert!(marker.is_marked("Correct:b) 4"));
        assert!(marker.is_marked("b) 4 Correct:"));
        assert!(!marker.is_marked("b) correct: 4"));
        assert_eq!(marker.strip("Correct:b) 4"), "b) 4");
    }

    #[test]
    fn test_custom_sentinel() {
        let marker = SentinelMarker::new("**");
        assert!(marker.is_marked("**Paris**"));
        assert_eq!(marker.strip("**Paris**"), "Paris");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(SentinelMarker::try_new("").is_none());
        assert!(SentinelMarker::try_new("OK:").is_some());
    }
}

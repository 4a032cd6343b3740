use std::{fmt, io};

/// Errors raised while reading or parsing lumi masks and run/lumi listings.
/// Formatting itself never fails.
#[derive(Debug)]
pub enum LumiError {
    Io(io::Error),
    Json(serde_json::Error),
    /// A listing line that could not be parsed. `line` is 1-based.
    InvalidLine { line: usize, content: String },
}

impl fmt::Display for LumiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LumiError::Io(e) => write!(f, "i/o error: {}", e),
            LumiError::Json(e) => write!(f, "invalid lumi json: {}", e),
            LumiError::InvalidLine { line, content } => {
                write!(f, "invalid run/lumi line {}: {}", line, content)
            }
        }
    }
}

impl std::error::Error for LumiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LumiError::Io(e) => Some(e),
            LumiError::Json(e) => Some(e),
            LumiError::InvalidLine { .. } => None,
        }
    }
}

impl From<io::Error> for LumiError {
    fn from(e: io::Error) -> Self {
        LumiError::Io(e)
    }
}

impl From<serde_json::Error> for LumiError {
    fn from(e: serde_json::Error) -> Self {
        LumiError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_line_display() {
        let e = LumiError::InvalidLine {
            line: 3,
            content: "abc 1,2".to_string(),
        };
        assert_eq!(e.to_string(), "invalid run/lumi line 3: abc 1,2");
        assert!(std::error::Error::source(&e).is_none());
    }

    #[test]
    fn test_json_error_has_source() {
        let je = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = LumiError::from(je);
        assert!(e.to_string().starts_with("invalid lumi json:"));
        assert!(std::error::Error::source(&e).is_some());
    }
}

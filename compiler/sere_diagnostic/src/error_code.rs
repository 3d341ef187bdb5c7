use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Dedent does not match any outer indentation level
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Block header without an indented body
    E1003,
    /// Or-pattern alternatives bind different names
    E1004,
    /// More than one star pattern in a sequence pattern
    E1005,
    /// Duplicate literal key in a mapping pattern
    E1006,
    /// `try` without `except` or `finally`
    E1007,
    /// Decorator not followed by a definition
    E1008,
    /// Unexpected end of input
    E1009,
    /// Invalid assignment or deletion target
    E1010,
    /// Invalid parameter list
    E1011,
    /// Keyword repeated in a class pattern
    E1012,
    /// Invalid pattern
    E1013,
    /// Name bound more than once in a pattern
    E1014,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
        }
    }

    /// Short description, used as the default diagnostic message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character",
            ErrorCode::E0003 => "unindent does not match any outer indentation level",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "expected an indented block",
            ErrorCode::E1004 => "alternative patterns bind different names",
            ErrorCode::E1005 => "multiple starred names in sequence pattern",
            ErrorCode::E1006 => "mapping pattern checks duplicate key",
            ErrorCode::E1007 => "expected `except` or `finally` block",
            ErrorCode::E1008 => "decorator must be followed by a definition",
            ErrorCode::E1009 => "unexpected end of input",
            ErrorCode::E1010 => "invalid target",
            ErrorCode::E1011 => "invalid parameter list",
            ErrorCode::E1012 => "keyword argument repeated in class pattern",
            ErrorCode::E1013 => "invalid pattern",
            ErrorCode::E1014 => "name bound more than once in pattern",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
        assert_eq!(ErrorCode::E0003.as_str(), "E0003");
    }

    #[test]
    fn test_error_code_phase() {
        assert!(ErrorCode::E0001.is_lexer_error());
        assert!(!ErrorCode::E0001.is_parser_error());
        assert!(ErrorCode::E1014.is_parser_error());
    }

    #[test]
    fn test_descriptions_are_lowercase_phrases() {
        for code in [ErrorCode::E1003, ErrorCode::E1004, ErrorCode::E1007] {
            let desc = code.description();
            assert!(!desc.is_empty());
            assert!(!desc.ends_with('.'));
        }
    }
}

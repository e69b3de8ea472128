//! Error codes for compiler diagnostics.
//!
//! Format: E#### where the first digit indicates the phase. The structural
//! passes only report internal compiler errors, the E9xxx range.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Internal Errors (E9xxx)
    /// Type of an unexpected shape reached a structural builder
    E9101,
    /// Structural type resolved twice
    E9102,
    /// Structural case not supported by canonicalization
    E9103,
    /// Declaration statement of an element type not found
    E9104,
    /// Variable referenced by a type not found in its scope
    E9105,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E9101 => "E9101",
            ErrorCode::E9102 => "E9102",
            ErrorCode::E9103 => "E9103",
            ErrorCode::E9104 => "E9104",
            ErrorCode::E9105 => "E9105",
        }
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
    fn test_display_matches_as_str() {
        for code in [
            ErrorCode::E9101,
            ErrorCode::E9102,
            ErrorCode::E9103,
            ErrorCode::E9104,
            ErrorCode::E9105,
        ] {
            assert_eq!(code.to_string(), code.as_str());
        }
    }
}

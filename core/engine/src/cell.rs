//! FILENAME: core/engine/src/cell.rs
//! PURPOSE: Defines the value held by a single spreadsheet cell.
//! CONTEXT: Rows coming out of a loaded workbook are sequences of `CellValue`.
//! A cell is either absent (`Empty`), text, a number, a boolean or an error
//! carried over from the source file.

use serde::{Deserialize, Serialize};

/// Represents the possible errors a cell can hold (e.g., #DIV/0!)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellError {
    Div0,       // Division by zero
    Ref,        // Invalid reference
    Name,       // Unknown function name
    Value,      // Wrong type of argument
    NA,         // Value not available
    Other(String),
}

/// Represents the raw data within a cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    Error(CellError),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Returns the string payload for `Text` cells only.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the display value of the cell as a String.
    pub fn display_value(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => {
                if *b { "TRUE" } else { "FALSE" }.to_string()
            }
            CellValue::Error(CellError::Other(e)) => format!("#{}", e).to_uppercase(),
            CellValue::Error(e) => format!("#{:?}", e).to_uppercase(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value() {
        assert_eq!(CellValue::Number(100.0).display_value(), "100");
        assert_eq!(CellValue::Number(12.5).display_value(), "12.5");
        assert_eq!(CellValue::Empty.display_value(), "");
        assert_eq!(CellValue::Boolean(true).display_value(), "TRUE");
        assert_eq!(CellValue::Error(CellError::Div0).display_value(), "#DIV0");
    }

    #[test]
    fn test_as_text_only_for_text() {
        assert_eq!(CellValue::text("Alice").as_text(), Some("Alice"));
        assert_eq!(CellValue::Number(1.0).as_text(), None);
        assert_eq!(CellValue::Empty.as_text(), None);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(CellValue::default(), CellValue::Empty);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&CellValue::text("x")).unwrap();
        assert_eq!(json, r#"{"Text":"x"}"#);
    }
}

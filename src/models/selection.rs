//! Report selection model
//!
//! Captures what the user asked for: an account range, a period range, and
//! an output format. Every field is optional; missing bounds widen to the
//! full range of the data and an unset format means "nothing to display".

use serde::{Deserialize, Serialize};
use std::fmt;

use super::period::Period;

/// Output format for a rendered balance report
///
/// A closed set so rendering dispatch is exhaustive. `Unset` is the
/// "no format chosen yet" state and renders nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// No format selected; the report is empty and nothing is rendered
    #[default]
    Unset,
    /// Delimited text, one line per row
    Csv,
    /// An HTML table
    Html,
}

impl OutputFormat {
    /// Parse an output format from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "html" => Some(Self::Html),
            _ => None,
        }
    }

    /// Check whether a format has been chosen
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Csv => write!(f, "CSV"),
            Self::Html => write!(f, "HTML"),
        }
    }
}

/// The user's filter selection for a balance report
///
/// `None` bounds mean "use the widest value present in the data". The caller
/// maps unparsable user input to `None` rather than reporting an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSelection {
    /// Lowest account code to include (inclusive)
    pub start_account: Option<u32>,

    /// Highest account code to include (inclusive)
    pub end_account: Option<u32>,

    /// Earliest period to include (inclusive)
    pub start_period: Option<Period>,

    /// Latest period to include (inclusive)
    pub end_period: Option<Period>,

    /// Chosen output format
    pub format: OutputFormat,
}

impl ReportSelection {
    /// Create a selection with no bounds for the given format
    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("csv"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::parse("CSV"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::parse(" html "), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::parse("pdf"), None);
        assert_eq!(OutputFormat::parse(""), None);
    }

    #[test]
    fn test_format_default_is_unset() {
        assert_eq!(OutputFormat::default(), OutputFormat::Unset);
        assert!(!OutputFormat::default().is_set());
        assert!(OutputFormat::Csv.is_set());
    }

    #[test]
    fn test_default_selection_has_no_bounds() {
        let selection = ReportSelection::default();
        assert_eq!(selection.start_account, None);
        assert_eq!(selection.end_account, None);
        assert_eq!(selection.start_period, None);
        assert_eq!(selection.end_period, None);
        assert_eq!(selection.format, OutputFormat::Unset);
    }

    #[test]
    fn test_with_format() {
        let selection = ReportSelection::with_format(OutputFormat::Csv);
        assert_eq!(selection.format, OutputFormat::Csv);
        assert_eq!(selection.start_account, None);
    }
}

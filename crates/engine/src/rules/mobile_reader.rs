//! First reader rule: mobile readers for the US market.
//!
//! This runs before the regional rule, which may overwrite its choice;
//! the M2 picked here survives only when no later rule matches.

use crate::traits::Rule;
use selection::{Country, ReaderType, Recommendation, SelectionInput};

/// Recommends the M2 for US businesses that want a mobile reader.
pub struct MobileReaderRule;

impl Rule for MobileReaderRule {
    fn name(&self) -> &str {
        "MobileReaderRule"
    }

    fn apply(&self, input: &SelectionInput, rec: &mut Recommendation) -> bool {
        if input.country == Country::Us && input.reader_type == ReaderType::Mpos {
            rec.reader = "M2".to_string();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_mpos_selects_m2() {
        let input = SelectionInput {
            country: Country::Us,
            reader_type: ReaderType::Mpos,
            ..SelectionInput::default()
        };

        let mut rec = Recommendation::default();
        assert!(MobileReaderRule.apply(&input, &mut rec));
        assert_eq!(rec.reader, "M2");
    }

    #[test]
    fn test_spos_does_not_match() {
        let input = SelectionInput {
            country: Country::Us,
            reader_type: ReaderType::Spos,
            ..SelectionInput::default()
        };

        let mut rec = Recommendation::default();
        assert!(!MobileReaderRule.apply(&input, &mut rec));
        assert_eq!(rec.reader, "");
    }

    #[test]
    fn test_non_us_mpos_does_not_match() {
        let input = SelectionInput {
            country: Country::France,
            reader_type: ReaderType::Mpos,
            ..SelectionInput::default()
        };

        let mut rec = Recommendation::default();
        assert!(!MobileReaderRule.apply(&input, &mut rec));
        assert_eq!(rec.reader, "");
    }
}

//! Second reader rule: regional and business-type driven reader choice.
//!
//! The three branches are one `if / else if / else if` chain, not three
//! separate rules: at most one branch fires per evaluation, and the branch
//! order matters (France/sPOS is checked before the Australia/countertop
//! catch-all even when both would match).

use crate::traits::Rule;
use selection::{BusinessType, Country, ReaderType, Recommendation, SelectionInput};

/// Picks a reader by region and business type, overwriting whatever the
/// mobile-reader rule chose.
pub struct RegionalReaderRule;

impl Rule for RegionalReaderRule {
    fn name(&self) -> &str {
        "RegionalReaderRule"
    }

    fn apply(&self, input: &SelectionInput, rec: &mut Recommendation) -> bool {
        if input.country == Country::Us
            && matches!(
                input.business_type,
                BusinessType::Events | BusinessType::Roaming
            )
        {
            rec.reader = "M2".to_string();
            true
        } else if matches!(input.country, Country::France | Country::Germany)
            && input.reader_type == ReaderType::Spos
        {
            rec.reader = "S700".to_string();
            true
        } else if input.country == Country::Australia
            || input.business_type == BusinessType::Countertop
        {
            rec.reader = "S700".to_string();
            true
        } else {
            false
        }
    }
}

//! Tap to Pay special-case overrides.
//!
//! These run last and unconditionally overwrite both the reader and the
//! connectivity when they match: a software-only reader has no separate
//! hardware to connect, so connectivity becomes "N/A" regardless of what
//! the connectivity rule chose.

use crate::traits::Rule;
use selection::{Country, PosPlatform, PosSetup, Recommendation, SelectionInput};

/// Overrides the recommendation with Tap to Pay where the platform
/// supports it.
///
/// The two guards are checked independently, but they can never both match
/// on one input (the platform cannot be `iphone` and `android` at once).
/// The iPhone guard matches the `iphone` platform value only, never `iOS`.
pub struct TapToPayOverrideRule;

impl Rule for TapToPayOverrideRule {
    fn name(&self) -> &str {
        "TapToPayOverrideRule"
    }

    fn apply(&self, input: &SelectionInput, rec: &mut Recommendation) -> bool {
        let mut matched = false;

        if input.pos_platform == PosPlatform::Iphone && input.country == Country::Us {
            rec.reader = "Tap to Pay on iPhone".to_string();
            rec.connectivity = "N/A".to_string();
            matched = true;
        }
        if input.pos_platform == PosPlatform::Android && input.pos_setup == PosSetup::AllInOne {
            rec.reader = "Tap to Pay on Android".to_string();
            rec.connectivity = "N/A".to_string();
            matched = true;
        }

        matched
    }
}

//! Integration-shape rule.
//!
//! Independent of reader selection: offline processing requires an
//! on-device Terminal SDK chosen by platform, while online-only businesses
//! always get the server-driven path.

use crate::traits::Rule;
use selection::{PosPlatform, Recommendation, SelectionInput};

/// Selects the SDK/integration path.
///
/// Note the offline branch matches `iphone`/`ipad` but not `iOS`: the rule
/// table treats them as distinct platform values, so an offline `iOS`
/// selection leaves the integration shape empty.
pub struct IntegrationShapeRule;

impl Rule for IntegrationShapeRule {
    fn name(&self) -> &str {
        "IntegrationShapeRule"
    }

    fn apply(&self, input: &SelectionInput, rec: &mut Recommendation) -> bool {
        if input.offline_processing {
            let shape = match input.pos_platform {
                PosPlatform::Web => Some("Terminal JavaScript SDK"),
                PosPlatform::Android => Some("Terminal Android SDK"),
                PosPlatform::Ipad | PosPlatform::Iphone => Some("Terminal iOS SDK"),
                PosPlatform::Desktop => Some("Terminal .NET SDK or Java SDK"),
                PosPlatform::Ios => None,
            };
            match shape {
                Some(shape) => {
                    rec.integration_shape = shape.to_string();
                    true
                }
                None => false,
            }
        } else {
            rec.integration_shape = "Server-driven integration (SDI)".to_string();
            true
        }
    }
}

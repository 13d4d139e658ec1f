//! Connectivity rule.
//!
//! Chooses a connection medium from the business type. Always matches:
//! events and services fall through to the WiFi default. The Tap to Pay
//! overrides later in the pipeline may replace this with "N/A".

use crate::traits::Rule;
use selection::{BusinessType, Recommendation, SelectionInput};

/// Selects the connection medium for the recommended reader.
pub struct ConnectivityRule;

impl Rule for ConnectivityRule {
    fn name(&self) -> &str {
        "ConnectivityRule"
    }

    fn apply(&self, input: &SelectionInput, rec: &mut Recommendation) -> bool {
        rec.connectivity = match input.business_type {
            BusinessType::Countertop => "Ethernet or USB",
            BusinessType::Roaming => "WiFi or Bluetooth",
            // Default for events & services
            BusinessType::Events | BusinessType::Services => "WiFi",
        }
        .to_string();
        true
    }
}

//! Core domain types for the questionnaire.
//!
//! Every input field is a closed enumeration; the engine never sees a
//! free-form string. The serde renames reproduce the wire vocabulary of the
//! documentation page exactly (`"US"`, `"mPOS"`, `"all-in-one"`, ...), and
//! `FromStr`/`Display` are defined over the same strings so the CLI and the
//! JSON layer cannot drift apart.

use crate::error::SelectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Input Enumerations
// =============================================================================

/// Country the business operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "US")]
    Us,
    France,
    Germany,
    Australia,
}

impl Country {
    pub const ALL: [Country; 4] = [
        Country::Us,
        Country::France,
        Country::Germany,
        Country::Australia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Us => "US",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Australia => "Australia",
        }
    }
}

/// Reader hardware category.
///
/// `sPOS` is a standalone smart reader, `mPOS` a handheld/mobile reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReaderType {
    #[serde(rename = "sPOS")]
    Spos,
    #[serde(rename = "mPOS")]
    Mpos,
}

impl ReaderType {
    pub const ALL: [ReaderType; 2] = [ReaderType::Spos, ReaderType::Mpos];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReaderType::Spos => "sPOS",
            ReaderType::Mpos => "mPOS",
        }
    }
}

/// Whether the reader pairs with a separate point-of-sale device or is
/// all-in-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PosSetup {
    Separate,
    AllInOne,
}

impl PosSetup {
    pub const ALL: [PosSetup; 2] = [PosSetup::Separate, PosSetup::AllInOne];

    pub fn as_str(&self) -> &'static str {
        match self {
            PosSetup::Separate => "separate",
            PosSetup::AllInOne => "all-in-one",
        }
    }
}

/// Platform the point-of-sale application runs on.
///
/// `iOS` and `iphone`/`ipad` are deliberately distinct values: the rule
/// table matches them separately, and collapsing them would change which
/// rules can fire. See the Tap to Pay override in the engine crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosPlatform {
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "iphone")]
    Iphone,
    #[serde(rename = "ipad")]
    Ipad,
    #[serde(rename = "desktop")]
    Desktop,
}

impl PosPlatform {
    pub const ALL: [PosPlatform; 6] = [
        PosPlatform::Web,
        PosPlatform::Android,
        PosPlatform::Ios,
        PosPlatform::Iphone,
        PosPlatform::Ipad,
        PosPlatform::Desktop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PosPlatform::Web => "web",
            PosPlatform::Android => "android",
            PosPlatform::Ios => "iOS",
            PosPlatform::Iphone => "iphone",
            PosPlatform::Ipad => "ipad",
            PosPlatform::Desktop => "desktop",
        }
    }
}

/// How the business sells in person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Countertop,
    Roaming,
    Events,
    Services,
}

impl BusinessType {
    pub const ALL: [BusinessType; 4] = [
        BusinessType::Countertop,
        BusinessType::Roaming,
        BusinessType::Events,
        BusinessType::Services,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Countertop => "countertop",
            BusinessType::Roaming => "roaming",
            BusinessType::Events => "events",
            BusinessType::Services => "services",
        }
    }
}

// =============================================================================
// FromStr / Display
// =============================================================================

macro_rules! impl_str_conversions {
    ($ty:ident, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = SelectionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| SelectionError::UnknownValue {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_str_conversions!(Country, "country");
impl_str_conversions!(ReaderType, "readerType");
impl_str_conversions!(PosSetup, "posSetup");
impl_str_conversions!(PosPlatform, "posPlatform");
impl_str_conversions!(BusinessType, "businessType");

// =============================================================================
// Input / Output Records
// =============================================================================

/// One complete set of questionnaire answers.
///
/// All fields are required; the engine is re-evaluated from scratch on any
/// change, so there is no partial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionInput {
    pub country: Country,
    pub reader_type: ReaderType,
    pub offline_processing: bool,
    pub pos_setup: PosSetup,
    pub pos_platform: PosPlatform,
    pub business_type: BusinessType,
}

impl SelectionInput {
    /// Iterate the entire input domain (4 x 2 x 2 x 2 x 6 x 4 = 768
    /// combinations), in a fixed order.
    pub fn all() -> impl Iterator<Item = SelectionInput> {
        Country::ALL.into_iter().flat_map(|country| {
            ReaderType::ALL.into_iter().flat_map(move |reader_type| {
                [false, true].into_iter().flat_map(move |offline_processing| {
                    PosSetup::ALL.into_iter().flat_map(move |pos_setup| {
                        PosPlatform::ALL.into_iter().flat_map(move |pos_platform| {
                            BusinessType::ALL.into_iter().map(move |business_type| {
                                SelectionInput {
                                    country,
                                    reader_type,
                                    offline_processing,
                                    pos_setup,
                                    pos_platform,
                                    business_type,
                                }
                            })
                        })
                    })
                })
            })
        })
    }

    /// Total number of distinct inputs, for sanity checks over [`all`].
    ///
    /// [`all`]: SelectionInput::all
    pub const DOMAIN_SIZE: usize = Country::ALL.len()
        * ReaderType::ALL.len()
        * 2
        * PosSetup::ALL.len()
        * PosPlatform::ALL.len()
        * BusinessType::ALL.len();
}

impl Default for SelectionInput {
    /// The questionnaire's initial state before the user touches anything.
    fn default() -> Self {
        Self {
            country: Country::Us,
            reader_type: ReaderType::Spos,
            offline_processing: false,
            pos_setup: PosSetup::Separate,
            pos_platform: PosPlatform::Web,
            business_type: BusinessType::Countertop,
        }
    }
}

/// The engine's output: three always-populated string fields.
///
/// "Populated" includes the empty string: a combination no rule matches
/// leaves the field at its default rather than failing. Callers render
/// these as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Hardware reader model, or empty if no rule matched.
    pub reader: String,
    /// SDK/integration path, or empty if no rule matched.
    pub integration_shape: String,
    /// Connection medium, or "N/A" for software-only readers.
    pub connectivity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_round_trips_display() {
        for country in Country::ALL {
            assert_eq!(country.as_str().parse::<Country>().unwrap(), country);
        }
        for platform in PosPlatform::ALL {
            assert_eq!(platform.as_str().parse::<PosPlatform>().unwrap(), platform);
        }
        for setup in PosSetup::ALL {
            assert_eq!(setup.as_str().parse::<PosSetup>().unwrap(), setup);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("us".parse::<Country>().unwrap(), Country::Us);
        assert_eq!("MPOS".parse::<ReaderType>().unwrap(), ReaderType::Mpos);
        assert_eq!("All-In-One".parse::<PosSetup>().unwrap(), PosSetup::AllInOne);
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        let err = "Canada".parse::<Country>().unwrap_err();
        match err {
            SelectionError::UnknownValue { field, value } => {
                assert_eq!(field, "country");
                assert_eq!(value, "Canada");
            }
        }
    }

    #[test]
    fn serde_uses_wire_vocabulary() {
        let input = SelectionInput {
            country: Country::Us,
            reader_type: ReaderType::Mpos,
            offline_processing: true,
            pos_setup: PosSetup::AllInOne,
            pos_platform: PosPlatform::Iphone,
            business_type: BusinessType::Roaming,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["country"], "US");
        assert_eq!(json["readerType"], "mPOS");
        assert_eq!(json["offlineProcessing"], true);
        assert_eq!(json["posSetup"], "all-in-one");
        assert_eq!(json["posPlatform"], "iphone");
        assert_eq!(json["businessType"], "roaming");
    }

    #[test]
    fn ios_and_iphone_are_distinct_values() {
        assert_ne!(PosPlatform::Ios, PosPlatform::Iphone);
        assert_eq!("iOS".parse::<PosPlatform>().unwrap(), PosPlatform::Ios);
        assert_eq!("iphone".parse::<PosPlatform>().unwrap(), PosPlatform::Iphone);
    }

    #[test]
    fn domain_enumeration_is_complete_and_unique() {
        let inputs: Vec<SelectionInput> = SelectionInput::all().collect();
        assert_eq!(inputs.len(), SelectionInput::DOMAIN_SIZE);
        assert_eq!(inputs.len(), 768);

        let unique: std::collections::HashSet<SelectionInput> =
            inputs.iter().copied().collect();
        assert_eq!(unique.len(), inputs.len());
    }

    #[test]
    fn default_input_matches_initial_page_state() {
        let input = SelectionInput::default();
        assert_eq!(input.country, Country::Us);
        assert_eq!(input.reader_type, ReaderType::Spos);
        assert!(!input.offline_processing);
        assert_eq!(input.pos_setup, PosSetup::Separate);
        assert_eq!(input.pos_platform, PosPlatform::Web);
        assert_eq!(input.business_type, BusinessType::Countertop);
    }

    #[test]
    fn default_recommendation_is_empty_strings() {
        let rec = Recommendation::default();
        assert_eq!(rec.reader, "");
        assert_eq!(rec.integration_shape, "");
        assert_eq!(rec.connectivity, "");
    }
}

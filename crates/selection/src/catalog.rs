//! Static catalog of the reader hardware the questionnaire can recommend.

use crate::types::Country;
use serde::Serialize;

/// Broad hardware category, used for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormFactor {
    /// Handheld/mobile reader paired with a separate POS device.
    Mobile,
    /// Standalone smart reader running its own apps.
    Smart,
    /// No dedicated hardware; the POS device itself accepts taps.
    SoftwareOnly,
}

/// One entry in the hardware catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReaderModel {
    pub name: &'static str,
    pub form_factor: FormFactor,
    /// Countries the model is positioned for.
    pub countries: &'static [Country],
    /// One-line positioning blurb from the documentation page.
    pub notes: &'static str,
}

const ALL_COUNTRIES: &[Country] = &Country::ALL;

static READERS: &[ReaderModel] = &[
    ReaderModel {
        name: "WisePad 3",
        form_factor: FormFactor::Mobile,
        countries: &[Country::France, Country::Germany, Country::Australia],
        notes: "Mobility, low cost, and a small form factor",
    },
    ReaderModel {
        name: "M2",
        form_factor: FormFactor::Mobile,
        countries: &[Country::Us],
        notes: "Mobility, low cost, and a small form factor; built for the US market",
    },
    ReaderModel {
        name: "WisePOS E",
        form_factor: FormFactor::Smart,
        countries: &[Country::Us],
        notes: "Low-cost smart reader",
    },
    ReaderModel {
        name: "S700",
        form_factor: FormFactor::Smart,
        countries: ALL_COUNTRIES,
        notes: "Premium checkout experience",
    },
    ReaderModel {
        name: "Tap to Pay on iPhone",
        form_factor: FormFactor::SoftwareOnly,
        countries: &[Country::Us],
        notes: "Accept contactless payments directly on iPhone",
    },
    ReaderModel {
        name: "Tap to Pay on Android",
        form_factor: FormFactor::SoftwareOnly,
        countries: ALL_COUNTRIES,
        notes: "Accept contactless payments directly on an Android device",
    },
];

/// All catalog entries, in display order.
pub fn readers() -> &'static [ReaderModel] {
    READERS
}

/// Catalog entries positioned for a given country.
pub fn readers_for_country(country: Country) -> impl Iterator<Item = &'static ReaderModel> {
    READERS
        .iter()
        .filter(move |model| model.countries.contains(&country))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_recommendable_reader() {
        let names: Vec<&str> = readers().iter().map(|m| m.name).collect();

        // Every reader the rule table can emit must exist in the catalog.
        for expected in ["M2", "S700", "Tap to Pay on iPhone", "Tap to Pay on Android"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn s700_is_available_everywhere() {
        for country in Country::ALL {
            assert!(
                readers_for_country(country).any(|m| m.name == "S700"),
                "S700 should be listed for {country:?}"
            );
        }
    }

    #[test]
    fn m2_is_us_only() {
        assert!(readers_for_country(Country::Us).any(|m| m.name == "M2"));
        assert!(!readers_for_country(Country::France).any(|m| m.name == "M2"));
        assert!(!readers_for_country(Country::Australia).any(|m| m.name == "M2"));
    }
}

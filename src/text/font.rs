//! Font descriptions and the installed font catalog.

use crate::error::{Error, Result};

use itertools::Itertools;
use pango::prelude::{FontFamilyExt, FontMapExt};
use std::collections::BTreeSet;

/// Builds a pango description for a CSS-like family list, numeric weight and
/// pixel size.
pub fn describe(family: &str, weight: u16, size: f64) -> pango::FontDescription {
    let mut desc = pango::FontDescription::new();
    desc.set_family(family);
    desc.set_weight(weight_of(weight));
    desc.set_absolute_size(size * pango::SCALE as f64);
    desc
}

/// Maps a CSS numeric weight to the nearest pango weight.
pub fn weight_of(weight: u16) -> pango::Weight {
    match weight {
        0..=150 => pango::Weight::Thin,
        151..=250 => pango::Weight::Ultralight,
        251..=325 => pango::Weight::Light,
        326..=365 => pango::Weight::Semilight,
        366..=390 => pango::Weight::Book,
        391..=450 => pango::Weight::Normal,
        451..=550 => pango::Weight::Medium,
        551..=650 => pango::Weight::Semibold,
        651..=750 => pango::Weight::Bold,
        751..=850 => pango::Weight::Ultrabold,
        851..=950 => pango::Weight::Heavy,
        _ => pango::Weight::Ultraheavy,
    }
}

/// Splits a family list such as `"Inter", Arial, sans-serif`.
pub fn families(list: &str) -> Vec<String> {
    list.split(',')
        .map(|f| f.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

/// Family names known to the default pango font map.
pub struct FontCatalog {
    names: BTreeSet<String>,
}

impl FontCatalog {
    const GENERIC: [&'static str; 3] = ["sans-serif", "serif", "monospace"];

    pub fn load() -> Self {
        let map = pangocairo::FontMap::new();
        let names = map
            .list_families()
            .iter()
            .map(|f| f.name().to_lowercase())
            .collect();
        Self { names }
    }

    pub fn contains(&self, family: &str) -> bool {
        let family = family.to_lowercase();
        Self::GENERIC.contains(&family.as_str()) || self.names.contains(&family)
    }

    /// Checks that at least one family of the list can be resolved.
    pub fn check(&self, list: &str) -> Result<()> {
        let names = families(list);
        if names.iter().any(|f| self.contains(f)) {
            Ok(())
        } else {
            Err(Error::unknown_font(names.iter().join(", ")))
        }
    }
}

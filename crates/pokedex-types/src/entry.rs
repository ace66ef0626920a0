//! The catalog record and its nested attributes.
//!
//! A [`CatalogEntry`] is built wholesale by the fetcher, either from a data
//! service response or from the built-in fallback table, and is never
//! mutated afterwards. Views filter and sort clones or references of it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::EntryId;

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// Image references for one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EntryImages {
    /// Small front-facing sprite.
    pub sprite: Option<String>,
    /// High-resolution official artwork.
    pub artwork: Option<String>,
}

impl EntryImages {
    /// The image shown on the detail page: artwork if present, else the sprite.
    pub fn detail_image(&self) -> Option<&str> {
        self.artwork.as_deref().or(self.sprite.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// The six recognized base statistics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "bindings/")]
pub enum StatKind {
    /// Hit points.
    Hp,
    /// Physical attack.
    Attack,
    /// Physical defense.
    Defense,
    /// Special attack.
    SpecialAttack,
    /// Special defense.
    SpecialDefense,
    /// Speed.
    Speed,
}

impl StatKind {
    /// All stat kinds in display order.
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// Look up a stat kind by its service name (`special-attack`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// The service name of this stat.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }
}

/// One named base statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Stat {
    /// Service name of the stat, e.g. `special-defense`.
    pub name: String,
    /// Base value, 0..=255 in practice.
    pub value: u16,
}

impl Stat {
    /// Create a stat from a name and value.
    pub fn new(name: impl Into<String>, value: u16) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The recognized kind of this stat, if its name is in the vocabulary.
    pub fn kind(&self) -> Option<StatKind> {
        StatKind::from_name(&self.name)
    }
}

// ---------------------------------------------------------------------------
// CatalogEntry
// ---------------------------------------------------------------------------

/// One creature record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CatalogEntry {
    /// Unique, stable lookup key.
    pub id: EntryId,
    /// Lowercase display and search name.
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Base experience yield. The service reports `null` for some forms.
    pub base_experience: Option<u32>,
    /// Sprite and artwork references.
    pub images: EntryImages,
    /// Type names in display order.
    pub types: Vec<String>,
    /// Ability names in display order.
    pub abilities: Vec<String>,
    /// Base stats in display order.
    pub stats: Vec<Stat>,
}

impl CatalogEntry {
    /// Enforce the per-entry uniqueness rules.
    ///
    /// Later duplicates in `types`, `abilities`, and recognized `stats` are
    /// dropped; first-occurrence order is kept. Unrecognized stat names
    /// pass through untouched.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.types = dedup_preserving_order(self.types);
        self.abilities = dedup_preserving_order(self.abilities);

        let mut seen = BTreeSet::new();
        self.stats
            .retain(|stat| stat.kind().is_none_or(|kind| seen.insert(kind)));
        self
    }

    /// Whether the entry carries the given type tag.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// Case-insensitive substring match on the name. An empty query matches.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Value of the given stat, if present.
    pub fn stat(&self, kind: StatKind) -> Option<u16> {
        self.stats
            .iter()
            .find(|stat| stat.kind() == Some(kind))
            .map(|stat| stat.value)
    }
}

/// Drop repeated names, keeping the first occurrence of each.
fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// SummaryRef
// ---------------------------------------------------------------------------

/// A `(name, url)` pair identifying a record without its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SummaryRef {
    /// Entry name.
    pub name: String,
    /// Service address of the full record, e.g. `.../pokemon/25/`.
    pub url: String,
}

impl SummaryRef {
    /// The trailing numeric id of the url path.
    ///
    /// A single trailing `/` is ignored, so both `.../pokemon/25/` and
    /// `.../pokemon/25` yield 25. Anything else yields `None`.
    pub fn entry_id(&self) -> Option<EntryId> {
        let path = self.url.strip_suffix('/').unwrap_or(&self.url);
        path.rsplit('/').next()?.parse().ok()
    }
}

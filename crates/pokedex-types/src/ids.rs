//! Catalog entry identifiers and the fixed catalog bounds.
//!
//! Entry ids are the national dex numbers used by the data service. They
//! double as the lookup key and as the basis for prior/next navigation,
//! so they get their own newtype instead of a bare integer.

use core::num::ParseIntError;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of entries in the catalog.
pub const CATALOG_SIZE: u32 = 151;

/// Lowest valid entry id.
pub const FIRST_ENTRY_ID: EntryId = EntryId(1);

/// Highest valid entry id.
pub const LAST_ENTRY_ID: EntryId = EntryId(CATALOG_SIZE);

/// Numeric identifier of a catalog entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct EntryId(pub u32);

impl EntryId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// The id immediately before this one, if it stays within the catalog.
    pub fn previous(self) -> Option<Self> {
        if self <= FIRST_ENTRY_ID {
            return None;
        }
        self.0.checked_sub(1).map(Self)
    }

    /// The id immediately after this one, if it stays within the catalog.
    pub fn next(self) -> Option<Self> {
        if self >= LAST_ENTRY_ID {
            return None;
        }
        self.0.checked_add(1).map(Self)
    }

    /// Whether the id lies inside `FIRST_ENTRY_ID..=LAST_ENTRY_ID`.
    pub fn is_in_catalog(self) -> bool {
        (FIRST_ENTRY_ID..=LAST_ENTRY_ID).contains(&self)
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<EntryId> for u32 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

//! Transient view controls: list sort option and gallery filter option.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Field the list view can sort on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SortField {
    /// Entry name, locale-aware.
    #[default]
    Name,
    /// Entry id.
    Id,
    /// Height.
    Height,
    /// Weight.
    Weight,
}

impl SortField {
    /// Parse a field name. Unknown names fall back to [`SortField::Name`].
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "id" => Self::Id,
            "height" => Self::Height,
            "weight" => Self::Weight,
            _ => Self::Name,
        }
    }

    /// Lowercase field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }
}

/// Sort direction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow shown next to the active sort control.
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "\u{2191}",
            Self::Desc => "\u{2193}",
        }
    }
}

/// Active sort of the list view. Defaults to name ascending.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct SortOption {
    /// Field being sorted on.
    pub field: SortField,
    /// Direction of the sort.
    pub direction: SortDirection,
}

impl SortOption {
    /// Build an option from user-supplied names.
    ///
    /// An unknown field gives name ascending regardless of `direction`.
    pub fn parse(field: &str, direction: &str) -> Self {
        let parsed = SortField::parse_or_default(field);
        if parsed == SortField::Name && !field.trim().eq_ignore_ascii_case("name") {
            return Self::default();
        }
        let direction = if direction.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self {
            field: parsed,
            direction,
        }
    }

    /// Apply a click on a sort control.
    ///
    /// The active field flips direction; any other field becomes active
    /// in ascending order.
    #[must_use]
    pub fn toggled(self, field: SortField) -> Self {
        let direction = if self.field == field {
            self.direction.flipped()
        } else {
            SortDirection::Asc
        };
        Self { field, direction }
    }
}

/// One selectable type tag in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FilterOption {
    /// Type tag name.
    pub type_name: String,
    /// Whether the tag is part of the active filter.
    pub selected: bool,
}

impl FilterOption {
    /// An unselected option for the given tag.
    pub fn unselected(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            selected: false,
        }
    }
}

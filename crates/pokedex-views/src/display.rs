//! Pure display derivations shared by every presentation layer.

use pokedex_types::{EntryId, Stat, StatKind};

/// Route of the list view.
pub const LIST_PATH: &str = "/";

/// Stat value that fills a bar completely.
pub const STAT_BAR_CAP: u16 = 150;

/// Bar color for stats outside the known vocabulary.
pub const DEFAULT_STAT_COLOR: &str = "#95a5a6";

/// Link target of an entry's detail page.
pub fn entry_path(id: EntryId) -> String {
    format!("/entry/{id}")
}

/// Zero-padded dex number, e.g. `#007`.
pub fn dex_number(id: EntryId) -> String {
    format!("#{:03}", id.into_inner())
}

/// Format a tenths value the way a number prints: `6.9`, `13`, `0.7`.
pub fn format_tenths(tenths: u32) -> String {
    let whole = tenths / 10;
    let fraction = tenths % 10;
    if fraction == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Height in metres for display, e.g. `0.7m`.
pub fn height_label(decimetres: u32) -> String {
    format!("{}m", format_tenths(decimetres))
}

/// Weight in kilograms for display, e.g. `6.9kg`.
pub fn weight_label(hectograms: u32) -> String {
    format!("{}kg", format_tenths(hectograms))
}

/// Bar width in percent for a stat value, clamped to 100.
pub fn stat_bar_percent(value: u16) -> f64 {
    (f64::from(value) / f64::from(STAT_BAR_CAP) * 100.0).min(100.0)
}

/// Bar color for a stat name.
pub fn stat_color(name: &str) -> &'static str {
    StatKind::from_name(name).map_or(DEFAULT_STAT_COLOR, |kind| match kind {
        StatKind::Hp => "#ff6b6b",
        StatKind::Attack => "#ff8e53",
        StatKind::Defense => "#4ecdc4",
        StatKind::SpecialAttack => "#45b7d1",
        StatKind::SpecialDefense => "#96ceb4",
        StatKind::Speed => "#feca57",
    })
}

/// Display-ready stat row.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StatBar {
    /// Stat name.
    pub name: String,
    /// Raw value.
    pub value: u16,
    /// Bar width, 0..=100.
    pub percent: f64,
    /// Bar color.
    pub color: &'static str,
}

impl From<&Stat> for StatBar {
    fn from(stat: &Stat) -> Self {
        Self {
            name: stat.name.clone(),
            value: stat.value,
            percent: stat_bar_percent(stat.value),
            color: stat_color(&stat.name),
        }
    }
}

/// Header line for list and gallery results.
pub fn result_count_line(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} Pokemon")
}

//! Text and JSON rendering of the three views.
//!
//! Rendering only reads view state; it never triggers a load.

use std::io::Write;

use pokedex_types::{CatalogEntry, EntryId, FilterOption};
use pokedex_views::display::{
    LIST_PATH, StatBar, dex_number, entry_path, height_label, result_count_line, weight_label,
};
use pokedex_views::{DetailView, GalleryView, ListView};
use serde::Serialize;

use crate::error::CliError;

/// Character width of a full stat bar.
const BAR_WIDTH: usize = 20;

/// Write the list view.
pub fn render_list(view: &ListView, out: &mut impl Write) -> Result<(), CliError> {
    let sort = view.sort();
    let shown = view.visible();
    let count = view.result_count();

    writeln!(out, "Pokemon Search")?;
    if !view.search().is_empty() {
        writeln!(out, "Search: {}", view.search())?;
    }
    writeln!(out, "Sort by: {} {}", sort.field.as_str(), sort.direction.arrow())?;
    writeln!(out, "{}", result_count_line(count.shown, count.total))?;
    writeln!(out)?;
    for entry in shown {
        write_card(entry, out)?;
    }
    Ok(())
}

/// Write the gallery view.
pub fn render_gallery(view: &GalleryView, out: &mut impl Write) -> Result<(), CliError> {
    let shown = view.visible();

    writeln!(out, "Pokemon Gallery")?;
    writeln!(out, "Filter by Type: {}", filter_line(view.filters()))?;
    writeln!(out, "{}", result_count_line(shown.len(), view.state().ready().map_or(0, Vec::len)))?;
    writeln!(out)?;
    for entry in shown {
        write_card(entry, out)?;
    }
    Ok(())
}

/// Write the detail view, including navigation controls.
pub fn render_detail(view: &DetailView, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(message) = view.state().error_message() {
        writeln!(out, "{message}")?;
        writeln!(out, "Back to Search: {LIST_PATH}")?;
        return Ok(());
    }
    let Some(entry) = view.state().entry() else {
        writeln!(out, "Loading Pokemon details...")?;
        return Ok(());
    };

    writeln!(out, "Back to Search: {LIST_PATH}")?;
    writeln!(
        out,
        "{}  {}",
        nav_control("Previous", view.can_go_previous(), view.id().previous()),
        nav_control("Next", view.can_go_next(), view.id().next()),
    )?;
    writeln!(out)?;
    render_entry(entry, out)
}

/// Write every attribute of one entry.
pub fn render_entry(entry: &CatalogEntry, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{} {}", dex_number(entry.id), entry.name)?;
    if let Some(image) = entry.images.detail_image() {
        writeln!(out, "Image: {image}")?;
    }
    writeln!(out)?;
    writeln!(out, "Basic Info")?;
    writeln!(out, "  Height: {}", height_label(entry.height))?;
    writeln!(out, "  Weight: {}", weight_label(entry.weight))?;
    match entry.base_experience {
        Some(experience) => writeln!(out, "  Base Experience: {experience}")?,
        None => writeln!(out, "  Base Experience: -")?,
    }
    writeln!(out, "Types: {}", entry.types.join(", "))?;
    writeln!(out, "Abilities: {}", entry.abilities.join(", "))?;
    writeln!(out)?;
    writeln!(out, "Base Stats")?;
    for stat in &entry.stats {
        let bar = StatBar::from(stat);
        writeln!(
            out,
            "  {:<16}{:>4} {:<width$} {:>3.0}% {}",
            bar.name,
            bar.value,
            bar_glyphs(bar.value),
            bar.percent,
            bar.color,
            width = BAR_WIDTH,
        )?;
    }
    Ok(())
}

/// Write an error state with the reload hint.
pub fn render_failure(message: &str, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{message}")?;
    writeln!(out, "Run the command again to retry.")?;
    Ok(())
}

/// Serialize any view projection as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T, out: &mut impl Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_card(entry: &CatalogEntry, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(
        out,
        "{} {:<14} [{}]  {}",
        dex_number(entry.id),
        entry.name,
        entry.types.join(", "),
        entry_path(entry.id)
    )?;
    Ok(())
}

fn filter_line(filters: &[FilterOption]) -> String {
    filters
        .iter()
        .map(|f| {
            if f.selected {
                format!("[x] {}", f.type_name)
            } else {
                format!("[ ] {}", f.type_name)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn nav_control(label: &str, enabled: bool, target: Option<EntryId>) -> String {
    match target {
        Some(id) if enabled => format!("{label}: {}", entry_path(id)),
        _ => format!("{label} (disabled)"),
    }
}

/// Bar of `#` characters proportional to the stat value, capped at full width.
fn bar_glyphs(value: u16) -> String {
    let cap = usize::from(pokedex_views::display::STAT_BAR_CAP);
    let filled = usize::from(value)
        .saturating_mul(BAR_WIDTH)
        .checked_div(cap)
        .unwrap_or(0)
        .min(BAR_WIDTH);
    "#".repeat(filled)
}

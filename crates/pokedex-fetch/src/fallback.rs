//! Built-in fallback dataset.
//!
//! A small, fixed set of complete records served whenever the data service
//! is unreachable. The table is immutable and private to the fetcher;
//! callers get fresh owned copies.

use pokedex_types::{CatalogEntry, EntryId, EntryImages, Stat, StatKind, SummaryRef};

/// Base address of the sprite repository the service links to.
const SPRITE_BASE_URL: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// One row of the fallback table.
struct FallbackRecord {
    id: u32,
    name: &'static str,
    height: u32,
    weight: u32,
    base_experience: u32,
    types: &'static [&'static str],
    abilities: &'static [&'static str],
    /// Base stats in [`StatKind::ALL`] order.
    stats: [u16; 6],
}

const FALLBACK_RECORDS: [FallbackRecord; 2] = [
    FallbackRecord {
        id: 1,
        name: "bulbasaur",
        height: 7,
        weight: 69,
        base_experience: 64,
        types: &["grass", "poison"],
        abilities: &["overgrow", "chlorophyll"],
        stats: [45, 49, 49, 65, 65, 45],
    },
    FallbackRecord {
        id: 2,
        name: "ivysaur",
        height: 10,
        weight: 130,
        base_experience: 142,
        types: &["grass", "poison"],
        abilities: &["overgrow", "chlorophyll"],
        stats: [60, 62, 63, 80, 80, 60],
    },
];

impl FallbackRecord {
    fn to_entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: EntryId(self.id),
            name: self.name.to_owned(),
            height: self.height,
            weight: self.weight,
            base_experience: Some(self.base_experience),
            images: EntryImages {
                sprite: Some(format!("{SPRITE_BASE_URL}/{}.png", self.id)),
                artwork: Some(format!(
                    "{SPRITE_BASE_URL}/other/official-artwork/{}.png",
                    self.id
                )),
            },
            types: self.types.iter().map(|t| (*t).to_owned()).collect(),
            abilities: self.abilities.iter().map(|a| (*a).to_owned()).collect(),
            stats: StatKind::ALL
                .into_iter()
                .zip(self.stats)
                .map(|(kind, value)| Stat::new(kind.as_str(), value))
                .collect(),
        }
    }
}

/// Number of records in the fallback dataset.
pub const fn fallback_len() -> usize {
    FALLBACK_RECORDS.len()
}

/// The full fallback dataset, in id order.
pub fn fallback_entries() -> Vec<CatalogEntry> {
    FALLBACK_RECORDS.iter().map(FallbackRecord::to_entry).collect()
}

/// Summary references for the fallback dataset.
///
/// Addresses follow the service convention `{base}/pokemon/{id}/` so they
/// resolve through the normal detail path.
pub fn fallback_summaries(api_base_url: &str) -> Vec<SummaryRef> {
    FALLBACK_RECORDS
        .iter()
        .map(|record| SummaryRef {
            name: record.name.to_owned(),
            url: format!("{api_base_url}/pokemon/{}/", record.id),
        })
        .collect()
}

/// Fallback record with the given id.
pub fn fallback_by_id(id: EntryId) -> Option<CatalogEntry> {
    FALLBACK_RECORDS
        .iter()
        .find(|record| record.id == id.into_inner())
        .map(FallbackRecord::to_entry)
}

/// Fallback record whose name matches case-insensitively.
pub fn fallback_by_name(name: &str) -> Option<CatalogEntry> {
    let wanted = name.trim().to_lowercase();
    FALLBACK_RECORDS
        .iter()
        .find(|record| record.name == wanted)
        .map(FallbackRecord::to_entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_satisfy_model_invariants() {
        for entry in fallback_entries() {
            assert_eq!(entry.clone().normalized(), entry);
            assert!(!entry.types.is_empty());
            assert_eq!(entry.stats.len(), StatKind::ALL.len());
        }
    }

    #[test]
    fn summaries_resolve_back_to_ids() {
        let summaries = fallback_summaries("https://pokeapi.co/api/v2");
        assert_eq!(summaries.len(), fallback_len());
        let ids: Vec<Option<EntryId>> = summaries.iter().map(SummaryRef::entry_id).collect();
        assert_eq!(ids, vec![Some(EntryId(1)), Some(EntryId(2))]);
        assert_eq!(
            summaries.first().map(|s| s.url.as_str()),
            Some("https://pokeapi.co/api/v2/pokemon/1/")
        );
    }

    #[test]
    fn lookup_by_id_and_name() {
        assert_eq!(fallback_by_id(EntryId(2)).map(|e| e.name), Some(String::from("ivysaur")));
        assert!(fallback_by_id(EntryId(25)).is_none());
        assert_eq!(fallback_by_name("BulbaSaur").map(|e| e.id), Some(EntryId(1)));
        assert!(fallback_by_name("pikachu").is_none());
    }

    #[test]
    fn bulbasaur_stats_match_table() {
        let bulbasaur = fallback_by_id(EntryId(1));
        assert_eq!(
            bulbasaur.and_then(|e| e.stat(StatKind::SpecialAttack)),
            Some(65)
        );
    }
}

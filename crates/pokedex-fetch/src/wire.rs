//! Data service JSON shapes and their conversion into the record model.
//!
//! The service nests every tag inside a named-resource object
//! (`{"type": {"name": "grass", "url": ...}}`). Decoding flattens that into
//! [`CatalogEntry`] and normalizes away duplicate tags.

use pokedex_types::{CatalogEntry, EntryId, EntryImages, Stat, SummaryRef};
use serde::Deserialize;

/// Response of `GET /pokemon?limit=N`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    /// Total number of records the service knows about.
    #[serde(default)]
    pub count: Option<u32>,
    /// Next page address.
    #[serde(default)]
    pub next: Option<String>,
    /// Previous page address.
    #[serde(default)]
    pub previous: Option<String>,
    /// The summary references on this page.
    pub results: Vec<SummaryRef>,
}

/// `{"name": ..., "url": ...}` reference to another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name.
    pub name: String,
    /// Resource address. Not used by the catalog.
    #[serde(default)]
    pub url: Option<String>,
}

/// Artwork block under `sprites.other`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireArtwork {
    /// Artwork image address.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// `sprites.other` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireOtherSprites {
    /// Official artwork.
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<WireArtwork>,
}

/// `sprites` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireSprites {
    /// Front sprite address.
    #[serde(default)]
    pub front_default: Option<String>,
    /// Alternate artwork.
    #[serde(default)]
    pub other: Option<WireOtherSprites>,
}

/// Entry of the `types` array.
#[derive(Debug, Clone, Deserialize)]
pub struct WireTypeSlot {
    /// The type resource.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Entry of the `abilities` array.
#[derive(Debug, Clone, Deserialize)]
pub struct WireAbilitySlot {
    /// The ability resource.
    pub ability: NamedResource,
}

/// Entry of the `stats` array.
#[derive(Debug, Clone, Deserialize)]
pub struct WireStat {
    /// Base value.
    pub base_stat: u16,
    /// The stat resource.
    pub stat: NamedResource,
}

/// Response of `GET /pokemon/{id or name}`, reduced to the fields we use.
#[derive(Debug, Clone, Deserialize)]
pub struct WireRecord {
    /// Dex number.
    pub id: u32,
    /// Lowercase name.
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Base experience, `null` for some forms.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Image references.
    #[serde(default)]
    pub sprites: WireSprites,
    /// Type slots.
    #[serde(default)]
    pub types: Vec<WireTypeSlot>,
    /// Ability slots.
    #[serde(default)]
    pub abilities: Vec<WireAbilitySlot>,
    /// Base stats.
    #[serde(default)]
    pub stats: Vec<WireStat>,
}

impl From<WireRecord> for CatalogEntry {
    fn from(wire: WireRecord) -> Self {
        let artwork = wire
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|art| art.front_default);

        Self {
            id: EntryId(wire.id),
            name: wire.name.to_lowercase(),
            height: wire.height,
            weight: wire.weight,
            base_experience: wire.base_experience,
            images: EntryImages {
                sprite: wire.sprites.front_default,
                artwork,
            },
            types: wire.types.into_iter().map(|slot| slot.kind.name).collect(),
            abilities: wire
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            stats: wire
                .stats
                .into_iter()
                .map(|stat| Stat::new(stat.stat.name, stat.base_stat))
                .collect(),
        }
        .normalized()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pokedex_types::StatKind;

    use super::*;

    #[test]
    fn decodes_service_record() {
        let json = serde_json::json!({
            "id": 25,
            "name": "Pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "order": 35,
            "sprites": {
                "front_default": "https://img/25.png",
                "back_default": null,
                "other": {
                    "official-artwork": { "front_default": "https://img/art/25.png" },
                    "home": { "front_default": null }
                }
            },
            "types": [
                { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
            ],
            "abilities": [
                { "ability": { "name": "static", "url": "x" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "lightning-rod", "url": "y" }, "is_hidden": true, "slot": 3 }
            ],
            "stats": [
                { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "z" } },
                { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "z" } }
            ]
        });

        let wire: WireRecord = serde_json::from_value(json).unwrap();
        let entry = CatalogEntry::from(wire);

        assert_eq!(entry.id, EntryId(25));
        assert_eq!(entry.name, "pikachu");
        assert_eq!(entry.base_experience, Some(112));
        assert_eq!(entry.types, vec!["electric"]);
        assert_eq!(entry.abilities, vec!["static", "lightning-rod"]);
        assert_eq!(entry.stat(StatKind::Speed), Some(90));
        assert_eq!(entry.images.detail_image(), Some("https://img/art/25.png"));
    }

    #[test]
    fn missing_artwork_and_null_experience() {
        let json = serde_json::json!({
            "id": 10,
            "name": "caterpie",
            "height": 3,
            "weight": 29,
            "base_experience": null,
            "sprites": { "front_default": "https://img/10.png", "other": null },
            "types": [{ "type": { "name": "bug" } }],
            "abilities": [],
            "stats": []
        });

        let wire: WireRecord = serde_json::from_value(json).unwrap();
        let entry = CatalogEntry::from(wire);

        assert_eq!(entry.base_experience, None);
        assert_eq!(entry.images.artwork, None);
        assert_eq!(entry.images.detail_image(), Some("https://img/10.png"));
    }

    #[test]
    fn list_response_tolerates_missing_paging_fields() {
        let json = serde_json::json!({
            "results": [{ "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" }]
        });
        let list: Result<ListResponse, _> = serde_json::from_value(json);
        assert!(list.is_ok_and(|l| l.results.len() == 1 && l.count.is_none()));
    }

    #[test]
    fn record_without_id_is_rejected() {
        let json = serde_json::json!({ "name": "missingno" });
        assert!(serde_json::from_value::<WireRecord>(json).is_err());
    }
}

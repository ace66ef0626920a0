//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use pokedex_types::{EntryId, SortOption};

/// Browse the first-generation Pokedex from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about)]
pub struct Cli {
    /// Serve every request from the built-in fallback data.
    #[arg(long, global = true)]
    pub offline: bool,

    /// Print the derived view as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// View to show.
    #[command(subcommand)]
    pub command: Command,
}

/// The available views.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Searchable, sortable list.
    List(ListArgs),
    /// Gallery filtered by type.
    Gallery(GalleryArgs),
    /// One entry by id.
    Detail(DetailArgs),
    /// One entry by name.
    Name(NameArgs),
}

/// Arguments of `pokedex list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive name fragment.
    #[arg(long, short, default_value = "")]
    pub search: String,

    /// Sort field: name, id, height, or weight. Unknown fields sort by name.
    #[arg(long, default_value = "name")]
    pub sort: String,

    /// Sort descending.
    #[arg(long)]
    pub desc: bool,
}

impl ListArgs {
    /// The sort option these arguments describe.
    pub fn sort_option(&self) -> SortOption {
        SortOption::parse(&self.sort, if self.desc { "desc" } else { "asc" })
    }
}

/// Arguments of `pokedex gallery`.
#[derive(Debug, Args)]
pub struct GalleryArgs {
    /// Type to include; repeat for several. Entries matching any are shown.
    #[arg(long = "type", short = 't')]
    pub types: Vec<String>,

    /// Select every type.
    #[arg(long, conflicts_with = "types")]
    pub all: bool,
}

/// Arguments of `pokedex detail`.
#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Entry id, 1 through 151.
    pub id: EntryId,

    /// Show the entry before `id` instead.
    #[arg(long, conflicts_with = "next")]
    pub previous: bool,

    /// Show the entry after `id` instead.
    #[arg(long)]
    pub next: bool,
}

/// Arguments of `pokedex name`.
#[derive(Debug, Args)]
pub struct NameArgs {
    /// Entry name, any case.
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::unreachable)]
mod tests {
    use clap::CommandFactory;
    use pokedex_types::{SortDirection, SortField};

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_with_sort() {
        let cli = Cli::try_parse_from(["pokedex", "list", "--search", "saur", "--sort", "weight", "--desc"]);
        let Ok(Cli {
            command: Command::List(args),
            ..
        }) = cli
        else {
            unreachable!("list command expected");
        };
        assert_eq!(args.search, "saur");
        assert_eq!(
            args.sort_option(),
            SortOption {
                field: SortField::Weight,
                direction: SortDirection::Desc,
            }
        );
    }

    #[test]
    fn unknown_sort_field_means_name_ascending() {
        let cli = Cli::try_parse_from(["pokedex", "list", "--sort", "color", "--desc"]);
        let Ok(Cli {
            command: Command::List(args),
            ..
        }) = cli
        else {
            unreachable!("list command expected");
        };
        assert_eq!(args.sort_option(), SortOption::default());
    }

    #[test]
    fn parses_gallery_types_and_globals() {
        let cli = Cli::try_parse_from(["pokedex", "--offline", "gallery", "-t", "fire", "-t", "water"]);
        let Ok(Cli {
            offline,
            command: Command::Gallery(args),
            ..
        }) = cli
        else {
            unreachable!("gallery command expected");
        };
        assert!(offline);
        assert_eq!(args.types, vec!["fire", "water"]);
    }

    #[test]
    fn detail_rejects_both_directions() {
        assert!(Cli::try_parse_from(["pokedex", "detail", "5", "--previous", "--next"]).is_err());
        assert!(Cli::try_parse_from(["pokedex", "detail", "pikachu"]).is_err());
    }
}

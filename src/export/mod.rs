//! Serializer components, one per scraped dataset shape.
//!
//! Each component is a pure function from one recognized record shape plus
//! an extension-less destination path stub to a durable `.csv` file. The
//! components are independent: there is no shared pipeline state, and their
//! quoting, null-handling and empty-input policies deliberately differ per
//! dataset (see the table in the crate documentation). All writes are
//! synchronous: when a call returns `Ok`, the file is on disk and may be
//! read back immediately.

/// A module writing the head-to-head section groups of a match page.
pub mod head_to_head;

/// A module writing home/away rosters with a team discriminator column.
pub mod lineups;

/// A module writing pre-delimited match statistics under a fixed header.
pub mod match_stats;

/// A module flattening one match-summary record into a single CSV row.
pub mod match_summary;

/// A module writing the per-player statistics table of a match.
pub mod player_stats;

/// A module writing the headerless point-by-point event feed.
pub mod point_by_point;

/// A module writing uniform record lists (results, odds, standings,
/// countries/leagues) with configurable header, quoting and null policies.
pub mod table;

// Re-export the entry points for easier access
pub use head_to_head::export_head_to_head;
pub use lineups::export_lineups;
pub use match_stats::{MATCH_STATS_HEADER, export_match_stats};
pub use match_summary::export_match_summary;
pub use player_stats::export_player_stats;
pub use point_by_point::export_point_by_point;
pub use table::{
    TableWriter, TableWriterBuilder, export_countries_and_leagues, export_odds, export_results,
    export_standings, export_table,
};

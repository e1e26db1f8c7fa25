//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use inflect::CacheStats;

/// Format cache activity counters as an ASCII table.
pub fn format_stats_table(stats: &CacheStats) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Counter", "Value"]);

    table.add_row(vec!["lookup hits".to_string(), stats.lookup_hits.to_string()]);
    table.add_row(vec![
        "lookup misses".to_string(),
        stats.lookup_misses.to_string(),
    ]);
    table.add_row(vec![
        "lookup hit ratio".to_string(),
        format!("{:.1}%", stats.lookup_hit_ratio() * 100.0),
    ]);
    table.add_row(vec!["evictions".to_string(), stats.evictions.to_string()]);
    table.add_row(vec![
        "pattern compilations".to_string(),
        stats.pattern_compilations.to_string(),
    ]);

    table
}

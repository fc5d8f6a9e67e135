//! Catalog statistics.
//!
//! Gives a quick summary of what was loaded: totals, per-type counts,
//! regions, price range, and vintage span. Used by `winelist stats` to
//! confirm the data file is being read as expected.

use anyhow::Result;

use wine_list_core::stats::catalog_stats;

use crate::loader::LoadedCatalog;

/// Run the stats command: compute and print a summary.
pub fn run_stats(loaded: &LoadedCatalog, json: bool) -> Result<()> {
    let stats = catalog_stats(loaded.catalog.wines());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Wine List — Catalog Stats");
    println!("=========================");
    println!();
    println!("  Source:      {}", loaded.source);
    println!(
        "  Status:      {}",
        if loaded.available { "loaded" } else { "unavailable (empty)" }
    );
    println!("  Loaded at:   {}", loaded.loaded_at.format("%Y-%m-%d %H:%M:%S UTC"));
    if loaded.skipped > 0 {
        println!("  Skipped:     {} malformed record(s)", loaded.skipped);
    }
    println!();
    println!("  Wines:       {}", stats.total);
    println!("  Regions:     {}", stats.regions);
    println!(
        "  Price range: {}",
        match (stats.price_min, stats.price_max) {
            (Some(min), Some(max)) => format!("{:.2} – {:.2}", min, max),
            _ => "N/A".to_string(),
        }
    );
    println!(
        "  Vintages:    {}",
        match (stats.earliest_vintage, stats.latest_vintage) {
            (Some(first), Some(last)) if first == last => first.to_string(),
            (Some(first), Some(last)) => format!("{} – {}", first, last),
            _ => "N/A".to_string(),
        }
    );

    println!();
    println!("  By type:");
    println!("  {:<12} {:>6}", "TYPE", "WINES");
    println!("  {}", "-".repeat(19));
    for t in &stats.types {
        println!("  {:<12} {:>6}", t.wine_type, t.count);
    }
    println!();

    Ok(())
}

//! Browsing commands: filtered wine lists, the region index, and whole
//! page views.
//!
//! Each command builds a [`CatalogController`] for the matching page
//! context and prints its rendered view, either as aligned text or (with
//! `--json`) as the same JSON the HTTP server returns.

use anyhow::Result;

use wine_list_core::links::LinkBuilder;
use wine_list_core::view::{PageView, RegionEntry, WineRow};
use wine_list_core::{CatalogController, FilterState, PageContext, QueryParams};

use crate::loader::LoadedCatalog;
use crate::show::print_detail;

/// `winelist wines`: print the wines passing `filter`.
pub fn run_wines(
    loaded: &LoadedCatalog,
    links: &LinkBuilder,
    filter: FilterState,
    json: bool,
) -> Result<()> {
    let mut controller = CatalogController::from_params(
        loaded.catalog.clone(),
        PageContext::Wines,
        &QueryParams::default(),
    )
    .with_links(links.clone());
    let view = controller.apply(filter);
    emit(&view, json)
}

/// `winelist regions`: print the region index.
pub fn run_regions(
    loaded: &LoadedCatalog,
    links: &LinkBuilder,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let mut controller = CatalogController::from_params(
        loaded.catalog.clone(),
        PageContext::Regions,
        &QueryParams::default(),
    )
    .with_links(links.clone());
    let view = controller.set_search_text(search);
    emit(&view, json)
}

/// `winelist page`: render `page` for a URL query string.
///
/// Returns `false` when the page is a detail page whose wine was not
/// found, so the caller can set the exit code.
pub fn run_page(
    loaded: &LoadedCatalog,
    links: &LinkBuilder,
    page: PageContext,
    query: &str,
    json: bool,
) -> Result<bool> {
    let params = QueryParams::parse(query);
    if let Some(ref raw) = params.invalid_type {
        tracing::debug!(value = %raw, "ignoring unknown wine type in query");
    }

    let controller = CatalogController::from_params(loaded.catalog.clone(), page, &params)
        .with_links(links.clone());
    let view = controller.render();
    emit(&view, json)?;
    Ok(!view.is_not_found())
}

fn emit(view: &PageView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print_view(view);
    }
    Ok(())
}

/// Print a page view as plain text.
pub fn print_view(view: &PageView) {
    match view {
        PageView::Home {
            total,
            types,
            regions,
        } => {
            println!("Wine List — {} wines", total);
            println!();
            for tile in types {
                println!("  {:<12} {:>5}   {}", tile.wine_type, tile.count, tile.link);
            }
            println!();
            print_regions(regions);
        }
        PageView::Regions { regions } => print_regions(regions),
        PageView::Wines {
            filter, total, rows, ..
        } => {
            print_filter(filter);
            print_rows(rows);
            println!();
            println!("{} wine{}", total, if *total == 1 { "" } else { "s" });
        }
        PageView::Detail { id, wine } => match wine {
            Some(wine) => print_detail(wine),
            None => println!(
                "Wine not found: {}",
                id.as_deref().unwrap_or("(no id given)")
            ),
        },
    }
}

fn print_filter(filter: &FilterState) {
    let mut parts = Vec::new();
    if let Some(t) = filter.type_filter {
        parts.push(format!("type={}", t));
    }
    if let Some(r) = filter.region() {
        parts.push(format!("region={}", r));
    }
    if let Some(needle) = filter.search_needle() {
        parts.push(format!("search=\"{}\"", needle));
    }
    if !parts.is_empty() {
        println!("Filter: {}", parts.join("  "));
        println!();
    }
}

fn print_rows(rows: &[WineRow]) {
    if rows.is_empty() {
        println!("No wines.");
        return;
    }

    println!(
        "{:<8} {:<34} {:<10} {:<20} {:>5} {:>9}",
        "ID", "NAME", "TYPE", "REGION", "YEAR", "PRICE"
    );
    println!("{}", "-".repeat(91));
    for row in rows {
        println!(
            "{:<8} {:<34} {:<10} {:<20} {:>5} {:>9}",
            row.id,
            truncate(&row.name, 34),
            row.wine_type,
            truncate(&row.region, 20),
            row.year,
            row.price
        );
    }
}

fn print_regions(regions: &[RegionEntry]) {
    if regions.is_empty() {
        println!("No regions.");
        return;
    }

    println!("{:<28} {:>6}   LINK", "REGION", "WINES");
    println!("{}", "-".repeat(60));
    for entry in regions {
        println!("{:<28} {:>6}   {}", entry.region, entry.count, entry.link);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Barolo", 10), "Barolo");
        assert_eq!(truncate("Brunello di Montalcino", 10), "Brunello …");
        assert_eq!(truncate("Südtirol", 8), "Südtirol");
    }
}

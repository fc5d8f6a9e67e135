//! Wine detail lookup by id.
//!
//! Used by the `winelist show` CLI command. The HTTP server resolves the
//! same view through `GET /api/wines/{id}`.

use anyhow::Result;

use wine_list_core::links::LinkBuilder;
use wine_list_core::view::{PageView, WineDetailView};
use wine_list_core::{CatalogController, PageContext, QueryParams};

use crate::loader::LoadedCatalog;

/// Resolve a wine's detail view. `None` means not found.
pub fn find_wine(
    loaded: &LoadedCatalog,
    links: &LinkBuilder,
    id: &str,
) -> Option<WineDetailView> {
    let params = QueryParams {
        id: Some(id.to_string()),
        ..Default::default()
    };
    let controller =
        CatalogController::from_params(loaded.catalog.clone(), PageContext::Detail, &params)
            .with_links(links.clone());
    match controller.render() {
        PageView::Detail { wine, .. } => wine,
        _ => None,
    }
}

/// CLI entry point. Prints the detail view, exiting with status 1 when
/// the id is unknown.
pub fn run_show(loaded: &LoadedCatalog, links: &LinkBuilder, id: &str, json: bool) -> Result<()> {
    let wine = match find_wine(loaded, links, id) {
        Some(w) => w,
        None => {
            eprintln!("Error: wine not found: {}", id);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&wine)?);
    } else {
        print_detail(&wine);
    }

    Ok(())
}

pub fn print_detail(wine: &WineDetailView) {
    println!("--- {} ---", wine.name);
    println!("id:          {}", wine.id);
    println!("type:        {}", wine.wine_type);
    println!("region:      {}", wine.region);
    println!("varietals:   {}", wine.varietals);
    println!("vintage:     {} ({})", wine.vintage, wine.year);
    println!("price:       {}", wine.price);
    println!("alcohol:     {}", wine.alcohol);
    println!("aging:       {}", wine.aging);
    if let Some(ref link) = wine.region_link {
        println!("region link: {}", link);
    }
    println!();
    println!("{}", wine.description);
}

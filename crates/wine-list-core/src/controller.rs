//! Catalog view controller.
//!
//! Owns one page's state: a shared, read-only catalog, the fixed
//! [`ViewState`], and the mutable [`FilterState`]. Every mutation
//! re-derives and returns the new [`PageView`] in the same call, so a
//! caller never observes a filter change without the matching view.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::links::LinkBuilder;
use crate::models::{FilterState, WineType};
use crate::page::{PageContext, QueryParams, ViewState};
use crate::view::{derive, render_page, DerivedView, PageView};

pub struct CatalogController {
    catalog: Arc<Catalog>,
    page: PageContext,
    state: ViewState,
    filter: FilterState,
    links: LinkBuilder,
}

impl CatalogController {
    /// Attach a controller to `page`, seeding state from the URL query
    /// string.
    pub fn new(catalog: Arc<Catalog>, page: PageContext, query: &str) -> Self {
        Self::from_params(catalog, page, &QueryParams::parse(query))
    }

    pub fn from_params(catalog: Arc<Catalog>, page: PageContext, params: &QueryParams) -> Self {
        Self {
            catalog,
            page,
            state: ViewState::resolve(page, params),
            filter: params.filter_state(),
            links: LinkBuilder::default(),
        }
    }

    pub fn with_links(mut self, links: LinkBuilder) -> Self {
        self.links = links;
        self
    }

    pub fn page(&self) -> PageContext {
        self.page
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_type_filter(&mut self, wine_type: Option<WineType>) -> PageView {
        self.filter.type_filter = wine_type;
        self.render()
    }

    pub fn set_region_filter(&mut self, region: Option<String>) -> PageView {
        self.filter.region_filter = region;
        self.render()
    }

    pub fn set_search_text(&mut self, text: Option<String>) -> PageView {
        self.filter.search_text = text;
        self.render()
    }

    /// Replace the whole filter at once.
    pub fn apply(&mut self, filter: FilterState) -> PageView {
        self.filter = filter;
        self.render()
    }

    pub fn derive(&self) -> DerivedView<'_> {
        derive(self.catalog.wines(), &self.filter)
    }

    pub fn render(&self) -> PageView {
        render_page(&self.state, self.catalog.wines(), &self.filter, &self.links)
    }
}

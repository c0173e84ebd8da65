//! Listing page state machine.
//!
//! A [`PageController`] owns the [`ViewState`] for one view of the catalog.
//! Input is dispatched as [`ViewAction`]s; every transition is followed by a
//! full Filter -> Paginate -> Card render producing a [`ListingView`].

use serde::{Deserialize, Serialize};

use crate::card::{CardView, encode_uri_component, render_card};
use crate::catalog::Catalog;
use crate::category::CategoryFilter;
use crate::filter::filter_games;
use crate::paginate::{PageControls, page_count, paginate};

/// Listing route used for generated navigation links.
pub const LISTING_PATH: &str = "/games";

/// Default number of cards per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Raw navigation parameters as they arrive in a query string.
///
/// `page` stays a string so a malformed value degrades to page 1 instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub category: CategoryFilter,
    pub search_term: String,
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search_term: String::new(),
            page: 1,
        }
    }
}

impl ViewState {
    /// Listing URL reproducing this state. Default values are omitted.
    pub fn href(&self) -> String {
        let mut params = Vec::new();
        if !self.category.is_all() {
            params.push(format!(
                "category={}",
                encode_uri_component(self.category.as_str())
            ));
        }
        if !self.search_term.is_empty() {
            params.push(format!("q={}", encode_uri_component(&self.search_term)));
        }
        if self.page != 1 {
            params.push(format!("page={}", self.page));
        }
        if params.is_empty() {
            LISTING_PATH.to_string()
        } else {
            format!("{LISTING_PATH}?{}", params.join("&"))
        }
    }

    /// Link to another page of the same filter.
    pub fn href_for_page(&self, page: usize) -> String {
        Self {
            page,
            ..self.clone()
        }
        .href()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetCategory(CategoryFilter),
    SetSearchTerm(String),
    SetPage(usize),
}

/// A filter button. `href` keeps the current search term and resets the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ListingBody {
    Results {
        cards: Vec<CardView>,
        pagination: PageControls,
    },
    /// The filter matched nothing. Pagination is skipped entirely.
    NoResults,
}

/// Everything needed to draw the listing for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    pub state: ViewState,
    pub categories: Vec<CategoryButton>,
    pub total_matches: usize,
    #[serde(flatten)]
    pub body: ListingBody,
}

pub struct PageController<'c> {
    catalog: &'c Catalog,
    page_size: usize,
    state: ViewState,
}

impl<'c> PageController<'c> {
    pub fn new(catalog: &'c Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            state: ViewState::default(),
        }
    }

    /// Controller preset from query parameters, applied in the order a user
    /// would: category, then search term, then page.
    ///
    /// Categories missing from the catalog's category set fall back to
    /// `All`; invalid pages leave the controller on page 1.
    pub fn from_query(catalog: &'c Catalog, query: &ListingQuery, page_size: usize) -> Self {
        let mut controller = Self::new(catalog, page_size);

        if let Some(raw) = query.category.as_deref() {
            let category = CategoryFilter::parse(raw);
            let known = match &category {
                CategoryFilter::All => true,
                CategoryFilter::Tag(tag) => catalog.categories().contains(tag),
            };
            if known {
                controller.apply(ViewAction::SetCategory(category));
            } else {
                tracing::debug!(category = raw, "ignoring unknown category");
            }
        }
        if let Some(term) = query.q.as_deref() {
            controller.apply(ViewAction::SetSearchTerm(term.to_string()));
        }
        if let Some(page) = query
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
        {
            controller.apply(ViewAction::SetPage(page));
        }
        controller
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for the current category and term (0 when empty).
    pub fn total_pages(&self) -> usize {
        let matches = filter_games(
            self.catalog.games(),
            &self.state.category,
            &self.state.search_term,
        );
        page_count(matches.len(), self.page_size)
    }

    /// Apply a transition without rendering. Returns `false` when the action
    /// was rejected (page outside `1..=total_pages`).
    pub fn apply(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::SetCategory(category) => {
                self.state.category = category;
                self.state.page = 1;
                true
            },
            ViewAction::SetSearchTerm(term) => {
                self.state.search_term = term.trim().to_string();
                self.state.page = 1;
                true
            },
            ViewAction::SetPage(page) => {
                if page >= 1 && page <= self.total_pages() {
                    self.state.page = page;
                    true
                } else {
                    false
                }
            },
        }
    }

    /// Apply a transition and re-render.
    pub fn dispatch(&mut self, action: ViewAction) -> ListingView {
        self.apply(action);
        self.render()
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> ListingView {
        self.dispatch(ViewAction::SetCategory(category))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> ListingView {
        self.dispatch(ViewAction::SetSearchTerm(term.into()))
    }

    pub fn set_page(&mut self, page: usize) -> ListingView {
        self.dispatch(ViewAction::SetPage(page))
    }

    pub fn render(&self) -> ListingView {
        let categories = self.catalog.categories();
        let matches = filter_games(
            self.catalog.games(),
            &self.state.category,
            &self.state.search_term,
        );

        let body = if matches.is_empty() {
            ListingBody::NoResults
        } else {
            let page = paginate(&matches, self.page_size, self.state.page);
            ListingBody::Results {
                cards: page
                    .items
                    .iter()
                    .map(|game| render_card(game, categories))
                    .collect(),
                pagination: page.controls(),
            }
        };

        ListingView {
            state: self.state.clone(),
            categories: self.category_buttons(),
            total_matches: matches.len(),
            body,
        }
    }

    fn category_buttons(&self) -> Vec<CategoryButton> {
        let all = (CategoryFilter::All, "All Games".to_string());
        std::iter::once(all)
            .chain(
                self.catalog
                    .categories()
                    .iter()
                    .map(|tag| (CategoryFilter::Tag(tag.id.clone()), tag.name.clone())),
            )
            .map(|(filter, name)| {
                let target = ViewState {
                    category: filter.clone(),
                    search_term: self.state.search_term.clone(),
                    page: 1,
                };
                CategoryButton {
                    id: filter.as_str().to_string(),
                    name,
                    active: filter == self.state.category,
                    href: target.href(),
                }
            })
            .collect()
    }
}

// src/services/catalog.rs

//! Listing view state.
//!
//! A [`CatalogView`] is one mounted listing: it owns the loaded collection,
//! the user's [`ViewParameters`], and the bookkeeping for the collection
//! fetch. Only the most recently issued fetch may replace the collection;
//! results of superseded fetches are dropped.

use crate::error::Result;
use crate::models::ScholarshipRecord;
use crate::view::{self, Collection, ViewParameters, ViewResult};

use super::source::ScholarshipSource;

/// Progress of the collection fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No fetch issued yet
    #[default]
    Idle,
    /// A fetch is in flight; the view renders an empty collection
    Pending,
    /// The collection is loaded
    Loaded,
    /// The last fetch failed; the view renders an empty collection
    Failed(String),
}

/// Marker for one issued fetch. Only the newest ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// One listing view instance.
#[derive(Debug, Clone)]
pub struct CatalogView {
    collection: Collection,
    params: ViewParameters,
    state: LoadState,
    generation: u64,
}

impl CatalogView {
    /// Mount a view with default parameters and an empty collection.
    pub fn new(page_size: usize) -> Self {
        Self {
            collection: Collection::empty(),
            params: ViewParameters::new(page_size),
            state: LoadState::Idle,
            generation: 0,
        }
    }

    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    /// Parameters for user interaction. Setters enforce the page reset rule.
    pub fn params_mut(&mut self) -> &mut ViewParameters {
        &mut self.params
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Start a fetch. Any earlier ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.collection = Collection::empty();
        self.state = LoadState::Pending;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Deliver the result of a fetch.
    ///
    /// Returns `false` when the ticket was superseded and the result was
    /// discarded. A failed fetch leaves an empty collection and
    /// [`LoadState::Failed`].
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ScholarshipRecord>>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale fetch result (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(records) => {
                self.collection = Collection::new(records);
                self.state = LoadState::Loaded;
                log::debug!("Catalog loaded with {} records", self.collection.len());
            }
            Err(e) => {
                log::warn!("Failed to load scholarships: {e}");
                self.collection = Collection::empty();
                self.state = LoadState::Failed(e.to_string());
            }
        }
        true
    }

    /// Fetch from `source` and install the result.
    pub async fn refresh(&mut self, source: &dyn ScholarshipSource) -> &LoadState {
        let ticket = self.begin_fetch();
        let result = source.fetch_scholarships().await;
        self.complete_fetch(ticket, result);
        &self.state
    }

    /// Current page of the listing.
    pub fn render(&self) -> ViewResult<'_> {
        view::derive_view(&self.collection, &self.params)
    }
}

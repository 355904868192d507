//! Service layer for the scholarship client.
//!
//! This module contains:
//! - Collection sources (`HttpScholarshipSource`, `FileScholarshipSource`)
//! - Listing view state with last-fetch-wins loading (`CatalogView`)

mod catalog;
mod source;

pub use catalog::{CatalogView, FetchTicket, LoadState};
pub use source::{FileScholarshipSource, HttpScholarshipSource, ScholarshipSource};

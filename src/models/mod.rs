// src/models/mod.rs

//! Domain models for the scholarship client.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod application;
mod config;
mod decode;
mod review;
mod scholarship;
mod session;

// Re-export all public types
pub use application::{Application, ApplicationStatus};
pub use config::{ApiConfig, Config, LoggingConfig, ViewConfig};
pub use review::{MAX_RATING, Review};
pub use scholarship::ScholarshipRecord;
pub use session::{Role, Session, UserProfile};

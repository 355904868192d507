// src/lib.rs

//! Scholarship marketplace client library

pub mod dashboard;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod view;

//! Restaurant-menu recommendation service.
//!
//! Filters an in-memory table of restaurant reviews by menu and region,
//! ranks the matches under a user-selected priority (cost-efficiency, taste
//! or portion size) with a keyword bonus extracted from review summaries,
//! and collects lightweight user feedback into an append-only CSV log.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

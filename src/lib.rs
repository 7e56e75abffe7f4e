//! Therapist search client
//!
//! Builds search requests from a free-text query and filters, sends them to
//! the search API and turns the ranked results into provider cards.

pub mod backend;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod query;
pub mod render;
pub mod ui;

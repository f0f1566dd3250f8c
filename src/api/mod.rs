//! Artwork catalog client and types.
//!
//! This module provides the interface for fetching pages from the remote catalog.

mod client;
pub mod error;
pub mod types;

pub use client::CatalogClient;
pub use error::ApiError;
pub use types::{Artwork, ArtworkPage};

//! Artview - a terminal browser for a public artwork catalog.
//!
//! Pages through the catalog's artwork listing in a table, keeps a
//! selection that survives page changes, and can select the first N rows
//! of the current page in one step.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod page;
pub mod selection;
pub mod tasks;
pub mod ui;

//! Terminal client for the revenue dashboard.
//!
//! Fetches a user profile, a wallet balance and a transaction list from a
//! remote API and renders them as a navigation bar, a balance/chart panel and
//! a filterable transaction table. A slide-out filter drawer narrows the list
//! by date range, transaction type and status.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod format;
pub mod loader;
pub mod ui;

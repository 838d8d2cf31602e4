//! Resolves free-text title queries to a single movie or TV series with a
//! regional viewing link, and keeps a ranked per-title usage ledger.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

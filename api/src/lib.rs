//! Iron Fish API: block ingest, asset supply ledger and explorer read endpoints

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod queue;
pub mod routes;
pub mod services;

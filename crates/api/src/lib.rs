//! `portero-api` — HTTP surface for the auth core.

pub mod app;
pub mod middleware;

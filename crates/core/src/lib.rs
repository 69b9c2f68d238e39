//! `portero-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod audit;
pub mod subject;

pub use audit::{Audit, AuditStamp, SYSTEM_ACTOR};
pub use subject::Subject;

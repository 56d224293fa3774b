//! # Domain Models
//!
//! Pure domain types with minimal dependencies (`serde`, `strum`, optionally `utoipa`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple rules.

pub mod config;
pub mod constants;
pub mod registry;
pub mod zoo;

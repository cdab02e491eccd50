//! # Domain Models
//!
//! Pure fun-mode types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O and no host interop, just the code set, its static conflict
//! table and the persisted configuration.

pub mod codes;
pub mod config;
pub mod race;

//! Parcel persistence contracts and SQLite implementation.
//!
//! # Responsibility
//! - Translate parcel operations into single parameterized statements.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Status-gated mutations are one statement with a compound predicate.
//! - Reads report `NotFound` separately from driver errors.

pub mod parcel_repo;

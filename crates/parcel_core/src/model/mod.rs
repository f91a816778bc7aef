//! Parcel domain model.
//!
//! # Responsibility
//! - Define the canonical parcel record stored by the tracker.
//! - Own the status lifecycle and its text encoding.
//!
//! # Invariants
//! - A parcel `number` is assigned by storage and never reused.
//! - Address and deletion are only allowed while status is `registered`.

pub mod parcel;

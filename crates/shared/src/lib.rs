//! BigEye Shared Types
//!
//! This crate contains the server-defined record types shared between the
//! admin client layer and its front ends. Every invariant behind these
//! records (credit conservation, job state transitions, slip verification)
//! is enforced server-side; the client only renders reported state.

pub mod types;

pub use types::*;

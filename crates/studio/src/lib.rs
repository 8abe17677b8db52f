//! BigEye Studio mockup
//!
//! The data model and interaction state behind the tagging studio demo: a
//! hardcoded sample library of photo and video assets, plus the selection,
//! inspector and keyword-editing state the mock UI drives. Everything is
//! in-memory; no backend calls happen here.

pub mod assets;
pub mod state;

pub use assets::{sample_library, Asset, AssetKind, AssetStatus};
pub use state::{StudioError, StudioState};

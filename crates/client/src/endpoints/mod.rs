//! Typed endpoint calls, one module per admin page surface.
//!
//! Paths and payload shapes follow the backend's REST surface; every call
//! funnels through the request wrapper in [`crate::http`].

mod audit;
mod auth;
mod dashboard;
mod finance;
mod jobs;
mod promo;
mod slips;
mod system;
mod users;

pub use promo::PromoAction;

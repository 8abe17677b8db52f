//! Subcommand handlers, one module per admin page.

pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod finance;
pub mod jobs;
pub mod promo;
pub mod slips;
pub mod system;
pub mod users;

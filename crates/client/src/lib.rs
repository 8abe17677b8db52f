//! BigEye Admin Client
//!
//! The client-side data-access and session layer behind the admin surfaces:
//! a token store, an authenticated request wrapper, the auth session
//! provider, typed endpoint calls and per-page data loaders. The backend
//! enforces every business invariant; this crate only carries state to and
//! from it.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod pages;
pub mod session;
pub mod token;

pub use config::ClientConfig;
pub use endpoints::PromoAction;
pub use error::{ApiError, ApiResult};
pub use http::AdminClient;
pub use pages::{
    AuditPage, AuditQuery, JobsPage, PageQuery, PendingDelete, PromotionsPage, SlipsPage, UsersPage,
};
pub use session::{
    FileSessionStore, MemorySessionStore, Session, SessionState, SessionStore, StoredSession,
};
pub use token::TokenStore;

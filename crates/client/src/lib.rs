//! HTTP client and page view models for the logistics API.
//!
//! [`http::ApiClient`] issues the requests, [`api`] groups one function per
//! endpoint by namespace, [`session::Session`] owns the login state, and
//! [`views`] turns results into what a page renders.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod session;
pub mod views;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use session::{Session, SessionState};

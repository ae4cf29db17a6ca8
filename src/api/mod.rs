//! API layer for viewstore
//!
//! HTTP dispatch for the five callable operations. This layer is
//! deliberately thin: handlers translate between JSON bodies and
//! facade calls and carry no logic of their own.
//!
//! # Operations
//!
//! - `GET  /api/v1/service/ready`: service liveness, always `true`
//! - `GET  /api/v1/storage/ready`: storage configuration present
//! - `GET  /api/v1/content-views/exists`: usable data exists
//! - `GET  /api/v1/content-views`: fetch the aggregate
//! - `POST /api/v1/content-views`: assemble and fully replace

mod request;
mod server;

pub use request::CreateContentViewsRequest;
pub use server::ApiServer;

//! HTTP middleware.

pub mod logger;
pub mod request_id;

//! Data Transfer Objects
//!
//! DTOs for API request/response serialization. Field names are camelCase
//! on the wire.

pub mod request;
pub mod response;

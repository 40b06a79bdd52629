//! # Domain Layer
//!
//! The domain layer contains the core business types of the service.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (User, Match, Message, Profile, UserLanguage)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities reference each other by ID, resolved through the repositories

pub mod entities;

// Re-export commonly used types
pub use entities::*;

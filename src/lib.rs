//! # SkillSwap Server Library
//!
//! Backend of a skill-exchange platform: users, their profiles and
//! languages, matches between two users, and the messages exchanged within a
//! match with per-message read state.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities and repository traits
//! - **Application Layer**: Services and DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory repositories, metrics
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ```text
//! skillswap_server/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Storage backends and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors and validation helpers
//! ```

pub mod config;

pub mod domain;

pub mod application;

pub mod infrastructure;

pub mod presentation;

pub mod shared;

pub mod startup;

pub mod telemetry;

//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - User identity records
//! - **MatchRepository** - Pairings between users
//! - **MessageRepository** - Messages with ordered retrieval and batch read updates
//! - **ProfileRepository** - Per-user profile attributes
//! - **UserLanguageRepository** - Languages and skills listed by users
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgMatchRepository, PgMessageRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let match_repo = PgMatchRepository::new(pool.clone());
//!     let message_repo = PgMessageRepository::new(pool.clone());
//! }
//! ```

pub mod user_repository;
pub mod match_repository;
pub mod message_repository;
pub mod profile_repository;
pub mod language_repository;

pub use user_repository::PgUserRepository;
pub use match_repository::PgMatchRepository;
pub use message_repository::PgMessageRepository;
pub use profile_repository::PgProfileRepository;
pub use language_repository::PgUserLanguageRepository;

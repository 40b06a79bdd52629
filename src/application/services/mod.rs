//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **MessageService**: Messaging within a match and read-state tracking
//! - **UserService**: User registration and partial updates
//! - **MatchService**: Pairings between users
//! - **ProfileService**: Profile attributes
//! - **LanguageService**: Languages and skills listed by users

pub mod message_service;
pub mod user_service;
pub mod match_service;
pub mod profile_service;
pub mod language_service;

// Re-export message service types
pub use message_service::{
    MessageDto, MessageError, MessageService, MessageServiceImpl, ReadUpdate, SendMessageDto,
};

// Re-export user service types
pub use user_service::{UserError, UserService, UserServiceImpl};

// Re-export match service types
pub use match_service::{MatchError, MatchService, MatchServiceImpl};

// Re-export profile service types
pub use profile_service::{ProfileError, ProfileService, ProfileServiceImpl};

// Re-export language service types
pub use language_service::{LanguageError, LanguageService, LanguageServiceImpl};

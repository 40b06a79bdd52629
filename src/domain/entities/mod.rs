//! # Domain Entities
//!
//! Core domain entities representing the main business objects of the
//! skill-matching service. All entities map directly to their corresponding
//! database tables.
//!
//! ## Core Entities
//!
//! - **User**: Identity record of a registered student
//! - **Match**: A pairing between two users who may exchange messages
//! - **Message**: A text message sent within a match
//!
//! ## Supporting Entities
//!
//! - **Profile**: Free-form attributes shown to potential matches
//! - **UserLanguage**: Languages and skills a user lists
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod user;
mod matches;
mod message;
mod profile;
mod language;

pub use user::{NewUser, User, UserPatch, UserRepository};
pub use matches::{Match, MatchRepository, NewMatch};
pub use message::{
    content_length, trim_content, Message, MessageRepository, NewMessage, MAX_MESSAGE_LENGTH,
};
pub use profile::{NewProfile, Profile, ProfileAttributes, ProfileRepository};
pub use language::{NewUserLanguage, UserLanguage, UserLanguageRepository};

#[cfg(test)]
pub use user::MockUserRepository;
#[cfg(test)]
pub use matches::MockMatchRepository;
#[cfg(test)]
pub use message::MockMessageRepository;
#[cfg(test)]
pub use profile::MockProfileRepository;
#[cfg(test)]
pub use language::MockUserLanguageRepository;

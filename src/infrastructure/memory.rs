//! In-Memory Store
//!
//! A process-local implementation of every repository trait. Used when no
//! database URL is configured and by the integration tests.
//!
//! All tables live behind one `RwLock`, so every call (including a batch
//! save) is applied atomically with respect to other callers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{
    Match, MatchRepository, Message, MessageRepository, NewMatch, NewMessage, NewProfile,
    NewUser, NewUserLanguage, Profile, ProfileRepository, User, UserLanguage,
    UserLanguageRepository, UserRepository,
};
use crate::shared::error::AppError;

/// One table: rows keyed by ID plus the last ID handed out.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Table<User>,
    matches: Table<Match>,
    messages: Table<Message>,
    profiles: Table<Profile>,
    languages: Table<UserLanguage>,
}

/// In-memory store implementing all repository traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn missing(entity: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} {} not found", entity, id))
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.read().users.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.tables.read().users.get(id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.tables.read().users.rows.contains_key(&id))
    }

    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.write();
        let user = User {
            id: tables.users.next_id(),
            first_name: user.first_name,
            last_name: user.last_name,
            university: user.university,
            email: user.email,
        };
        tables.users.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let mut tables = self.tables.write();
        let row = tables
            .users
            .rows
            .get_mut(&user.id)
            .ok_or_else(|| missing("User", user.id))?;
        *row = user.clone();
        Ok(user.clone())
    }
}

#[async_trait]
impl MatchRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Match>, AppError> {
        Ok(self.tables.read().matches.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Match>, AppError> {
        Ok(self.tables.read().matches.get(id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.tables.read().matches.rows.contains_key(&id))
    }

    async fn create(&self, new_match: NewMatch) -> Result<Match, AppError> {
        let mut tables = self.tables.write();
        let created = Match {
            id: tables.matches.next_id(),
            user_one_id: new_match.user_one_id,
            user_two_id: new_match.user_two_id,
            matched_at: new_match.matched_at,
        };
        tables.matches.rows.insert(created.id, created.clone());
        Ok(created)
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError> {
        Ok(self.tables.read().messages.get(id))
    }

    async fn find_by_match_ordered(&self, match_id: i64) -> Result<Vec<Message>, AppError> {
        let tables = self.tables.read();
        let mut messages: Vec<Message> = tables
            .messages
            .rows
            .values()
            .filter(|m| m.match_id == match_id)
            .cloned()
            .collect();
        messages.sort_by_key(|m| (m.sent_at, m.id));
        Ok(messages)
    }

    async fn find_latest_by_match(&self, match_id: i64) -> Result<Option<Message>, AppError> {
        let tables = self.tables.read();
        let latest = tables
            .messages
            .rows
            .values()
            .filter(|m| m.match_id == match_id)
            .max_by_key(|m| (m.sent_at, m.id))
            .cloned();
        Ok(latest)
    }

    async fn create(&self, message: NewMessage) -> Result<Message, AppError> {
        let mut tables = self.tables.write();
        let created = Message {
            id: tables.messages.next_id(),
            match_id: message.match_id,
            sender_id: message.sender_id,
            content: message.content,
            sent_at: message.sent_at,
            is_read: false,
        };
        tables.messages.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, message: &Message) -> Result<Message, AppError> {
        let mut tables = self.tables.write();
        let row = tables
            .messages
            .rows
            .get_mut(&message.id)
            .ok_or_else(|| missing("Message", message.id))?;
        row.is_read = message.is_read;
        Ok(row.clone())
    }

    async fn save_batch(&self, messages: Vec<Message>) -> Result<Vec<Message>, AppError> {
        let mut tables = self.tables.write();

        // Check every row first so a failed batch leaves nothing behind.
        if let Some(absent) = messages
            .iter()
            .find(|m| !tables.messages.rows.contains_key(&m.id))
        {
            return Err(missing("Message", absent.id));
        }

        let mut saved = Vec::with_capacity(messages.len());
        for message in messages {
            if let Some(row) = tables.messages.rows.get_mut(&message.id) {
                row.is_read = message.is_read;
                saved.push(row.clone());
            }
        }
        Ok(saved)
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Profile>, AppError> {
        Ok(self.tables.read().profiles.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>, AppError> {
        Ok(self.tables.read().profiles.get(id))
    }

    async fn create(&self, profile: NewProfile) -> Result<Profile, AppError> {
        let mut tables = self.tables.write();
        let created = Profile {
            id: tables.profiles.next_id(),
            user_id: profile.user_id,
            attributes: profile.attributes,
        };
        tables.profiles.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, profile: &Profile) -> Result<Profile, AppError> {
        let mut tables = self.tables.write();
        let row = tables
            .profiles
            .rows
            .get_mut(&profile.id)
            .ok_or_else(|| missing("Profile", profile.id))?;
        row.attributes = profile.attributes.clone();
        Ok(row.clone())
    }
}

#[async_trait]
impl UserLanguageRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<UserLanguage>, AppError> {
        Ok(self.tables.read().languages.all())
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<UserLanguage>, AppError> {
        let tables = self.tables.read();
        Ok(tables
            .languages
            .rows
            .values()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, language: NewUserLanguage) -> Result<UserLanguage, AppError> {
        let mut tables = self.tables.write();
        let created = UserLanguage {
            id: tables.languages.next_id(),
            user_id: language.user_id,
            language_name: language.language_name,
            proficiency_level: language.proficiency_level,
        };
        tables.languages.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.tables.write().languages.rows.remove(&id).is_some())
    }
}

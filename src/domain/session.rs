use super::errors::DomainError;
use super::ports::KeyValueStore;

/// Store key holding the logged-in phone number.
pub const SESSION_KEY: &str = "userPhone";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Not yet read from the store.
    #[default]
    Uninitialized,
    Anonymous,
    Active { phone: String },
}

/// Which user is logged in, persisted through a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    state: SessionState,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Restore the session at startup. A store that cannot be read leaves
    /// the user logged out rather than failing.
    pub fn load<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> &SessionState {
        self.state = match store.get(SESSION_KEY) {
            Ok(Some(phone)) if !phone.trim().is_empty() => SessionState::Active { phone },
            Ok(_) => SessionState::Anonymous,
            Err(e) => {
                log::warn!("Error checking login status: {}", e);
                SessionState::Anonymous
            }
        };
        &self.state
    }

    pub fn save<S: KeyValueStore + ?Sized>(&mut self, store: &S, phone: &str) -> Result<(), DomainError> {
        store.set(SESSION_KEY, phone)?;
        self.state = SessionState::Active {
            phone: phone.to_string(),
        };
        Ok(())
    }

    pub fn clear<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> Result<(), DomainError> {
        store.remove(SESSION_KEY)?;
        self.state = SessionState::Anonymous;
        Ok(())
    }

    pub fn phone(&self) -> Option<&str> {
        match &self.state {
            SessionState::Active { phone } => Some(phone.as_str()),
            _ => None,
        }
    }

    pub fn require_phone(&self) -> Result<&str, DomainError> {
        self.phone().ok_or(DomainError::Unauthenticated)
    }
}

//! Conversation session identity

use uuid::Uuid;

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// Opaque correlation token sent with every chat request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    id: String,
}

impl Session {
    /// Prefix of locally generated identifiers
    pub const ID_PREFIX: &'static str = "session_";

    /// Generate a new random session, e.g. `session_4fzq0k1ab`
    pub fn generate() -> Self {
        Self {
            id: format!(
                "{}{}",
                Self::ID_PREFIX,
                base36_suffix(Uuid::new_v4().as_u128())
            ),
        }
    }

    /// Generate a session guaranteed to differ from this one
    pub fn regenerate(&self) -> Self {
        loop {
            let next = Self::generate();
            if next.id != self.id {
                return next;
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Take over an identifier assigned by the server
    ///
    /// Returns `true` when the identifier changed.
    pub fn adopt(&mut self, id: &str) -> bool {
        if id.is_empty() || id == self.id {
            return false;
        }
        self.id = id.to_string();
        true
    }
}

fn base36_suffix(mut value: u128) -> String {
    let mut suffix = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        suffix.push(char::from(ID_ALPHABET[(value % 36) as usize]));
        value /= 36;
    }
    suffix
}

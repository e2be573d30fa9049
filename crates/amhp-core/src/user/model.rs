//! User session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An anonymous session, created by "start anonymous". Guests never get one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Opaque identifier.
    pub id: String,
    pub anonymous: bool,
    pub created: DateTime<Utc>,
}

impl UserSession {
    pub fn anonymous(created: DateTime<Utc>) -> Self {
        Self {
            id: format!("user_{}", Uuid::new_v4().simple()),
            anonymous: true,
            created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session() {
        let session = UserSession::anonymous(Utc::now());
        assert!(session.anonymous);
        assert!(session.id.starts_with("user_"));
        assert_ne!(session.id, UserSession::anonymous(Utc::now()).id);
    }
}

//! Caller identity forwarded to catalog stores
//!
//! The import handler never establishes or checks identity itself. Whoever
//! invokes an import passes the active [`Session`] explicitly, and the
//! handler hands it to the store untouched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller session
///
/// # Example
///
/// ```rust
/// use mondrian_catalog_import::auth::Session;
///
/// let admin = Session::authenticated("admin");
/// assert!(admin.is_authenticated());
///
/// let guest = Session::anonymous();
/// assert_eq!(guest.user(), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque session identifier
    pub session_id: String,
    /// Name of the signed-in user, if any
    pub user: Option<String>,
    /// Whether the session has been authenticated upstream
    pub authenticated: bool,
}

impl Session {
    /// Session for a user authenticated by the caller
    pub fn authenticated(user: impl Into<String>) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            user: Some(user.into()),
            authenticated: true,
        }
    }

    /// Session with no associated user
    pub fn anonymous() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            user: None,
            authenticated: false,
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

//! Verified token claims.

use serde::{Deserialize, Serialize};

use crate::repo::User;
use crate::types::{RecordId, Role, Username};

/// The identity carried by a verified access token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: RecordId,
    pub username: Username,
    #[serde(default)]
    pub role: Role,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for Claims {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }
}

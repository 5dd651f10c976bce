//! Explicit session object for the demo login. The app trusts it fully;
//! there is no credential check behind it.

use serde::{Deserialize, Serialize};

use super::entities::{UserProfile, UserRole};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    /// Station scope for GSO roles; `None` for head-office roles.
    pub station_id: Option<String>,
}

impl Session {
    pub fn for_user(user: &UserProfile) -> Self {
        Session {
            user_id: user.id.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
            station_id: user.assigned_station_id.clone(),
        }
    }

    pub fn role_label(&self) -> &'static str {
        self.role.display_name()
    }
}

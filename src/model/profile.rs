
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::store::record_store::RecordPatch;

pub const ACCESS_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The manager's own record. There is exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub last_access: NaiveDateTime,
}

impl Profile {
    /// Label/value pairs in the order the profile page lists them.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("Nombre", self.name.clone()),
            ("Email", self.email.clone()),
            ("Teléfono", self.phone.clone()),
            ("Rol", self.role.clone()),
            ("Último Acceso", self.last_access.format(ACCESS_FORMAT).to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ProfileForUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl RecordPatch<Profile> for ProfileForUpdate {
    fn apply(self, record: &mut Profile) {
        if let Some(name) = self.name { record.name = name }
        if let Some(email) = self.email { record.email = email }
        if let Some(phone) = self.phone { record.phone = phone }
    }
}

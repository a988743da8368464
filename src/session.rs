
use tracing::{info, warn};

use crate::{Error, Result};

pub const MANAGER_USERNAME: &str = "gerente";
const INITIAL_PASSWORD: &str = "1234";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRole {
    Manager,
}

impl SessionRole {
    pub fn label(&self) -> &'static str {
        match self {
            SessionRole::Manager => "Gerente",
        }
    }
}

/// Login state of the single manager account, plus the login form fields.
#[derive(Debug)]
pub struct Session {
    role: Option<SessionRole>,
    password: String,
    pub username_field: String,
    pub password_field: String,
}

impl Session {
    pub fn new() -> Self {
        Self {
            role: None,
            password: INITIAL_PASSWORD.to_string(),
            username_field: MANAGER_USERNAME.to_string(),
            password_field: INITIAL_PASSWORD.to_string(),
        }
    }

    pub fn role(&self) -> Option<SessionRole> {
        self.role
    }

    pub fn is_logged_in(&self) -> bool {
        self.role.is_some()
    }

    pub fn is_manager(&self) -> bool {
        self.role == Some(SessionRole::Manager)
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<SessionRole> {
        if username == MANAGER_USERNAME && password == self.password {
            info!("{:<12} - {username}", "LOGIN");
            self.role = Some(SessionRole::Manager);
            self.username_field = username.to_string();
            self.password_field = password.to_string();
            Ok(SessionRole::Manager)
        } else {
            warn!("{:<12} - rejected credentials for '{username}'", "LOGIN");
            self.role = None;
            self.username_field = username.to_string();
            self.password_field.clear();
            Err(Error::LoginFail)
        }
    }

    pub fn logout(&mut self) {
        info!("{:<12} - session closed", "LOGOUT");
        self.role = None;
        self.username_field.clear();
        self.password_field.clear();
    }

    /// Replaces the manager password and closes the session.
    pub fn change_password(&mut self, current: &str, new: &str, confirm: &str) -> Result<()> {
        if !self.is_logged_in() {
            return Err(Error::NotLoggedIn);
        }
        if current != self.password {
            return Err(Error::WrongCurrentPassword);
        }
        if new != confirm {
            return Err(Error::PasswordsDoNotMatch);
        }
        if new.is_empty() {
            return Err(Error::MissingField { field: "nueva contraseña" });
        }
        self.password = new.to_string();
        self.logout();
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}


pub mod account;
pub mod branches;
pub mod contact;
pub mod host;
pub mod inventory;
pub mod reports;
pub mod services;
pub mod staff;

use crate::assets::AssetDir;
use crate::panel::page::Page;
use crate::panel::view::View;
use crate::panel::window_mgr::WindowMgr;
use crate::session::Session;
use crate::store::Database;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
}

/// What a dialog would have said after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level: Level::Info, title: title.into(), message: message.into() }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level: Level::Warning, title: title.into(), message: message.into() }
    }
}

/// Application controller. Owns every piece of state for the life of the
/// process; each user action is one method returning a notice or an error.
pub struct App {
    db: Database,
    session: Session,
    windows: WindowMgr,
    assets: AssetDir,
}

impl App {
    pub fn new(db: Database, assets: AssetDir) -> Self {
        Self {
            db,
            session: Session::new(),
            windows: WindowMgr::new(),
            assets,
        }
    }

    #[cfg(test)]
    pub fn db(&self) -> &Database {
        &self.db
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn current_page(&self) -> Page {
        self.windows.current()
    }

    pub fn nav_entries(&self) -> Vec<&'static str> {
        self.windows.nav_entries(&self.session)
    }

    pub fn screen(&self) -> String {
        self.view().screen(self.windows.current(), &self.nav_entries())
    }

    fn view(&self) -> View<'_> {
        View { db: &self.db, session: &self.session, assets: &self.assets }
    }

    fn require_manager(&self) -> Result<()> {
        if self.session.is_manager() {
            Ok(())
        } else {
            Err(Error::NotLoggedIn)
        }
    }

    fn require_login(&self) -> Result<()> {
        if self.session.is_logged_in() {
            Ok(())
        } else {
            Err(Error::NotLoggedIn)
        }
    }
}

/// Trimmed value, or `default` when the field was left out.
fn field_or(value: Option<String>, default: &str) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_else(|| default.to_string())
}

/// A required text field: present and not blank.
fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingField { field }),
    }
}

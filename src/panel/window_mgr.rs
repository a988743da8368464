
use tracing::debug;

use super::page::Page;
use crate::session::Session;
use crate::{Error, Result};

pub const LOGOUT_LABEL: &str = "🚪 Cerrar Sesión";

/// Tracks which page fills the content area.
#[derive(Debug)]
pub struct WindowMgr {
    current: Page,
}

impl WindowMgr {
    pub fn new() -> Self {
        Self { current: Page::Login }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Switches to `page`. A page the session may not see lands on Login and
    /// reports the denial.
    pub fn navigate(&mut self, page: Page, session: &Session) -> Result<Page> {
        if page.allows(session) {
            debug!("{:<12} - {page}", "NAVIGATE");
            self.current = page;
            Ok(page)
        } else {
            debug!("{:<12} - {page} denied, back to login", "NAVIGATE");
            self.current = Page::Login;
            Err(Error::AccessDenied { page: page.to_string() })
        }
    }

    /// Used after login/logout, where the target is always allowed.
    pub fn force(&mut self, page: Page) {
        self.current = page;
    }

    pub fn nav_entries(&self, session: &Session) -> Vec<&'static str> {
        let mut entries: Vec<&'static str> = Page::NAV
            .iter()
            .filter(|page| page.listed_for(session))
            .map(|page| page.nav_label())
            .collect();
        if session.is_logged_in() {
            entries.push(LOGOUT_LABEL);
        }
        entries
    }
}

impl Default for WindowMgr {
    fn default() -> Self {
        Self::new()
    }
}


use chrono::Local;
use tracing::info;

use super::{App, Notice};
use crate::model::profile::ProfileForUpdate;
use crate::panel::page::Page;
use crate::store::record_store::RecordPatch;
use crate::{Error, Result};

impl App {
    pub fn navigate(&mut self, page: Page) -> Result<Page> {
        self.windows.navigate(page, &self.session)
    }

    /// Pre-fills the login form's user field.
    pub fn remember_username(&mut self, username: &str) {
        self.session.username_field = username.to_string();
    }

    /// Missing credentials fall back to what the login form still holds.
    pub fn login(&mut self, username: Option<&str>, password: Option<&str>) -> Result<Notice> {
        let username = username.map(str::to_string).unwrap_or_else(|| self.session.username_field.clone());
        let password = password.map(str::to_string).unwrap_or_else(|| self.session.password_field.clone());

        let role = match self.session.login(&username, &password) {
            Ok(role) => role,
            Err(err) => {
                self.windows.force(Page::Login);
                return Err(err);
            }
        };
        self.db.profile.last_access = Local::now().naive_local();
        self.windows.force(Page::Reports);
        Ok(Notice::info("Éxito", format!("Bienvenido, {}.", role.label())))
    }

    pub fn logout(&mut self) -> Result<Notice> {
        self.require_login()?;
        self.session.logout();
        self.windows.force(Page::Login);
        Ok(Notice::info("Cerrar Sesión", "Has cerrado la sesión correctamente."))
    }

    pub fn edit_profile(&mut self, update: ProfileForUpdate) -> Result<Notice> {
        self.require_manager()?;
        if update.is_empty() {
            return Err(Error::MissingField { field: "nombre, email o teléfono" });
        }
        for (value, field) in [(&update.name, "nombre"), (&update.email, "email"), (&update.phone, "teléfono")] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(Error::MissingField { field });
            }
        }

        update.apply(&mut self.db.profile);
        info!("{:<12} - manager profile updated", "PROFILE");
        self.windows.force(Page::Profile);
        Ok(Notice::info("Guardar", "Datos actualizados exitosamente. Se recargará su perfil."))
    }

    pub fn change_password(&mut self, current: &str, new: &str, confirm: &str) -> Result<Notice> {
        self.require_manager()?;
        self.session.change_password(current, new, confirm)?;
        self.windows.force(Page::Login);
        Ok(Notice::info(
            "Actualizar",
            "Contraseña cambiada exitosamente. Debe iniciar sesión de nuevo.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{app, manager_app};
    use super::*;

    #[test]
    fn login_lands_on_reports() {
        let mut app = app();
        let notice = app.login(Some("gerente"), Some("1234")).unwrap();
        assert_eq!(notice.message, "Bienvenido, Gerente.");
        assert_eq!(app.current_page(), Page::Reports);
        assert!(app.screen().contains("✅ Sesión: Gerente"));
    }

    #[test]
    fn bad_login_clears_password_field() {
        let mut app = app();
        assert_eq!(app.login(Some("gerente"), Some("0000")), Err(Error::LoginFail));
        assert_eq!(app.session().password_field, "");
        // the remembered password is gone, so a bare retry fails too
        assert_eq!(app.login(None, None), Err(Error::LoginFail));
        assert!(app.login(None, Some("1234")).is_ok());
    }

    #[test]
    fn bad_login_while_logged_in_drops_the_session() {
        let mut app = manager_app();
        app.navigate(Page::Inventory).unwrap();
        assert_eq!(app.login(Some("intruso"), Some("0000")), Err(Error::LoginFail));
        assert!(!app.session().is_logged_in());
        assert_eq!(app.current_page(), Page::Login);
        assert!(!app.screen().contains("✅ Sesión: Gerente"));
        assert_eq!(
            app.edit_profile(ProfileForUpdate { name: Some("Otro".to_string()), ..Default::default() }),
            Err(Error::NotLoggedIn)
        );
    }

    #[test]
    fn login_stamps_last_access() {
        let mut app = app();
        let seeded = app.db().profile.last_access;
        app.login(None, None).unwrap();
        assert_ne!(app.db().profile.last_access, seeded);
    }

    #[test]
    fn protected_navigation_while_logged_out() {
        let mut app = app();
        assert_eq!(app.navigate(Page::Home), Ok(Page::Home));
        assert!(matches!(app.navigate(Page::Profile), Err(Error::AccessDenied { .. })));
        assert_eq!(app.current_page(), Page::Login);
    }

    #[test]
    fn logout_returns_to_login() {
        let mut app = manager_app();
        app.navigate(Page::Inventory).unwrap();
        app.logout().unwrap();
        assert_eq!(app.current_page(), Page::Login);
        assert_eq!(app.logout(), Err(Error::NotLoggedIn));
    }

    #[test]
    fn profile_edit_changes_only_given_fields() {
        let mut app = manager_app();
        let update = ProfileForUpdate { phone: Some("55 0000 0000".to_string()), ..Default::default() };
        app.edit_profile(update).unwrap();
        assert_eq!(app.db().profile.phone, "55 0000 0000");
        assert_eq!(app.db().profile.name, "Andrea Mendoza");
        assert_eq!(app.current_page(), Page::Profile);

        assert!(app.edit_profile(ProfileForUpdate::default()).is_err());
        let blank = ProfileForUpdate { email: Some(" ".to_string()), ..Default::default() };
        assert_eq!(app.edit_profile(blank), Err(Error::MissingField { field: "email" }));
    }

    #[test]
    fn password_change_requires_new_login() {
        let mut app = manager_app();
        app.change_password("1234", "lava", "lava").unwrap();
        assert!(!app.session().is_logged_in());
        assert_eq!(app.current_page(), Page::Login);
        assert_eq!(app.login(Some("gerente"), Some("1234")), Err(Error::LoginFail));
        assert!(app.login(Some("gerente"), Some("lava")).is_ok());
    }
}

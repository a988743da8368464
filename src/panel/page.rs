
use crate::model::normalize;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Home,
    Profile,
    Staff,
    Reports,
    Inventory,
    Branches,
    Services,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    LoggedIn,
    Manager,
}

impl Page {
    /// Navigation bar order.
    pub const NAV: [Page; 8] = [
        Page::Home,
        Page::Profile,
        Page::Staff,
        Page::Reports,
        Page::Inventory,
        Page::Branches,
        Page::Services,
        Page::Contact,
    ];

    pub fn access(&self) -> Access {
        match self {
            Page::Login | Page::Home => Access::Public,
            Page::Contact => Access::LoggedIn,
            _ => Access::Manager,
        }
    }

    pub fn allows(&self, session: &Session) -> bool {
        match self.access() {
            Access::Public => true,
            Access::LoggedIn => session.is_logged_in(),
            Access::Manager => session.is_manager(),
        }
    }

    /// Shown in the navigation bar. Logged-out users still see public and
    /// "any role" entries.
    pub fn listed_for(&self, session: &Session) -> bool {
        match self.access() {
            Access::Public | Access::LoggedIn => true,
            Access::Manager => session.is_manager(),
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Login => "🔑 Login",
            Page::Home => "🏠 Inicio",
            Page::Profile => "⚙️ Perfil",
            Page::Staff => "👨‍💼 Personal",
            Page::Reports => "📈 Reportes",
            Page::Inventory => "🧺 Inventario",
            Page::Branches => "🏢 Sucursales",
            Page::Services => "🏷️ Servicios",
            Page::Contact => "📧 Contacto",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "🔑 Iniciar Sesión (SOLO GERENTE)",
            Page::Home => "🏠 Lavandería Lavanderos",
            Page::Profile => "⚙️ Perfil de Gerente",
            Page::Staff => "👨‍💼 Gestión de Personal",
            Page::Reports => "📈 Reportes Financieros",
            Page::Inventory => "🧺 Gestión de Inventario",
            Page::Branches => "🏢 Gestión de Sucursales",
            Page::Services => "🏷️ Servicios y Precios",
            Page::Contact => "📧 Contacto y Soporte",
        }
    }

    pub fn images(&self) -> &'static [&'static str] {
        match self {
            Page::Login | Page::Profile => &["gerente.png"],
            Page::Home => &["lavadoras.png"],
            Page::Staff => &["personal.png", "lavando.png"],
            Page::Reports => &["estadisticas.png"],
            Page::Inventory => &["inventario.png"],
            Page::Branches => &["sucursales.png"],
            Page::Services => &["servicios.png"],
            Page::Contact => &["contacto.png"],
        }
    }

    pub fn parse(value: &str) -> Option<Page> {
        let page = match normalize(value).as_str() {
            "login" | "sesion" => Page::Login,
            "inicio" | "home" => Page::Home,
            "perfil" | "profile" => Page::Profile,
            "personal" | "staff" | "empleados" => Page::Staff,
            "reportes" | "reports" | "finanzas" => Page::Reports,
            "inventario" | "inventory" => Page::Inventory,
            "sucursales" | "branches" => Page::Branches,
            "servicios" | "services" => Page::Services,
            "contacto" | "contact" => Page::Contact,
            _ => return None,
        };
        Some(page)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spanish_and_english_names() {
        assert_eq!(Page::parse("Sucursales"), Some(Page::Branches));
        assert_eq!(Page::parse("branches"), Some(Page::Branches));
        assert_eq!(Page::parse("sesión"), Some(Page::Login));
        assert_eq!(Page::parse("nada"), None);
    }

    #[test]
    fn access_rules() {
        let mut session = Session::new();
        assert!(Page::Home.allows(&session));
        assert!(Page::Login.allows(&session));
        assert!(!Page::Contact.allows(&session));
        assert!(!Page::Reports.allows(&session));

        session.login("gerente", "1234").unwrap();
        assert!(Page::NAV.iter().all(|page| page.allows(&session)));
    }
}

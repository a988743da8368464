
use tracing::info;

use super::{required, App, Notice};
use crate::Result;

const SNIPPET_CHARS: usize = 50;

impl App {
    /// Echoes the start of the reply; the ticket list itself is static.
    pub fn respond_ticket(&self, text: Option<String>) -> Result<Notice> {
        self.require_login()?;
        let text = required(text, "respuesta")?;
        let snippet: String = text.chars().take(SNIPPET_CHARS).collect();

        info!("{:<12} - ticket reply sent ({} chars)", "CONTACT", text.chars().count());
        Ok(Notice::info(
            "Respuesta Enviada",
            format!("Respuesta enviada:\n\n'{snippet}...'\n\nEl formulario se marcó como 'Atendido'."),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{app, manager_app};
    use crate::Error;

    #[test]
    fn reply_echoes_first_fifty_chars() {
        let app = manager_app();
        let long = "ñ".repeat(60);
        let notice = app.respond_ticket(Some(long)).unwrap();
        assert!(notice.message.contains(&format!("'{}...'", "ñ".repeat(50))));
        assert!(!notice.message.contains(&"ñ".repeat(51)));
    }

    #[test]
    fn reply_needs_text_and_login() {
        assert_eq!(
            manager_app().respond_ticket(Some("  ".to_string())),
            Err(Error::MissingField { field: "respuesta" })
        );
        assert_eq!(app().respond_ticket(Some("hola".to_string())), Err(Error::NotLoggedIn));
    }
}

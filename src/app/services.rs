
use tracing::info;

use super::reports::choice_or;
use super::{field_or, App, Notice};
use crate::model::catalog::{Promotion, Service, DEFAULT_NEW_PRICE};
use crate::model::Choice;
use crate::{Error, Result};

impl App {
    pub fn new_service(&self) -> Result<Notice> {
        self.require_manager()?;
        Ok(Notice::info(
            "Servicios",
            "Abriendo formulario para añadir nuevo servicio (Simulación: Se abre otra ventana para definir tarifas y descripción).",
        ))
    }

    pub fn edit_service(&self, service: Option<String>) -> Result<Notice> {
        self.require_manager()?;
        let service = choice_or(service, Service::BasicWash)?;
        Ok(Notice::info(
            "Servicios",
            format!("Abriendo edición de detalles para: {service} (Simulación: Se abre otra ventana para cambiar descripción, nombre, etc.)."),
        ))
    }

    pub fn deactivate_service(&self, service: Option<String>) -> Result<Notice> {
        self.require_manager()?;
        let service = choice_or(service, Service::BasicWash)?;
        info!("{:<12} - service {} deactivated", "SERVICES", service.key());
        Ok(Notice::warning(
            "Servicios",
            format!("El servicio {service} ha sido desactivado. (Simulación: No aparecerá en los pedidos web)."),
        ))
    }

    pub fn adjust_prices(&self, price: Option<String>, promotion: Option<String>) -> Result<Notice> {
        self.require_manager()?;
        let price = parse_price(field_or(price, DEFAULT_NEW_PRICE))?;
        let promotion = choice_or(promotion, Promotion::Express)?;

        info!("{:<12} - base price {price:.2}, promotion {}", "SERVICES", promotion.key());
        Ok(Notice::info(
            "Ajuste Aplicado",
            format!("Precio base actualizado a ${price:.2}. Promoción activa: {promotion}."),
        ))
    }

    pub fn create_promotion(&self) -> Result<Notice> {
        self.require_manager()?;
        Ok(Notice::info(
            "Promociones",
            "Abriendo formulario para configurar nueva promoción (Simulación: Se abre otra ventana para establecer reglas).",
        ))
    }
}

fn parse_price(value: String) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(Error::InvalidAmount { value }),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::manager_app;
    use super::super::Level;
    use super::*;

    #[test]
    fn prices_default_and_format() {
        let app = manager_app();
        assert_eq!(
            app.adjust_prices(None, None).unwrap().message,
            "Precio base actualizado a $27.00. Promoción activa: 10% Express."
        );
        let notice = app.adjust_prices(Some("30.5".to_string()), Some("ninguna".to_string())).unwrap();
        assert_eq!(notice.message, "Precio base actualizado a $30.50. Promoción activa: Ninguna.");
    }

    #[test]
    fn prices_reject_bad_amounts() {
        let app = manager_app();
        for bad in ["-1", "abc", "NaN", "inf", ""] {
            assert!(
                matches!(app.adjust_prices(Some(bad.to_string()), None), Err(Error::InvalidAmount { .. })),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn deactivation_is_a_warning() {
        let app = manager_app();
        let notice = app.deactivate_service(Some("express".to_string())).unwrap();
        assert_eq!(notice.level, Level::Warning);
        assert!(notice.message.starts_with("El servicio Servicio Express ha sido desactivado."));
        assert!(app.edit_service(None).unwrap().message.contains("Lavado Básico (Kg)"));
        assert!(app.edit_service(Some("tintoreria".to_string())).is_err());
    }
}

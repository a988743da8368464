
use chrono::NaiveDate;
use tracing::info;

use super::{field_or, App, Notice};
use crate::model::catalog::{Currency, FiscalPeriod, ReportFormat, ReportKind};
use crate::model::Choice;
use crate::{Error, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_FROM: &str = "2025-11-01";
const DEFAULT_TO: &str = "2025-11-30";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesReportInput {
    pub kind: Option<String>,
    pub format: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl App {
    pub fn sales_report(&self, input: SalesReportInput) -> Result<Notice> {
        self.require_manager()?;
        let kind = choice_or(input.kind, ReportKind::ByBranch)?;
        let format = choice_or(input.format, ReportFormat::Pdf)?;
        let from = parse_date(field_or(input.from, DEFAULT_FROM))?;
        let to = parse_date(field_or(input.to, DEFAULT_TO))?;
        if from > to {
            return Err(Error::DateRangeInverted { from: from.to_string(), to: to.to_string() });
        }

        info!("{:<12} - sales report {} as {} for {from}..{to}", "REPORTS", kind.key(), format.key());
        Ok(Notice::info(
            "Reporte Generado",
            format!("Generando y descargando reporte de {kind} en formato {format} para el rango {from} - {to}."),
        ))
    }

    pub fn income_statement(&self, period: Option<String>, currency: Option<String>) -> Result<Notice> {
        self.require_manager()?;
        let period = choice_or(period, FiscalPeriod::Monthly)?;
        let currency = choice_or(currency, Currency::Mxn)?;

        info!("{:<12} - income statement {} in {}", "REPORTS", period.key(), currency.code());
        Ok(Notice::info(
            "Reporte Generado",
            format!(
                "Generando Estado de Resultados {period} en {}. Revisar su carpeta de descargas.",
                currency.code()
            ),
        ))
    }
}

/// Parses a form option, falling back to the form's preselected value.
pub(super) fn choice_or<C: Choice>(value: Option<String>, default: C) -> Result<C> {
    match value {
        Some(value) => C::parse_choice(&value),
        None => Ok(default),
    }
}

fn parse_date(value: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| Error::InvalidDate { value })
}

#[cfg(test)]
mod tests {
    use super::super::tests::{app, manager_app};
    use super::*;

    #[test]
    fn sales_report_defaults_to_november() {
        let app = manager_app();
        let notice = app.sales_report(SalesReportInput::default()).unwrap();
        assert_eq!(
            notice.message,
            "Generando y descargando reporte de Ventas por Sucursal en formato PDF para el rango 2025-11-01 - 2025-11-30."
        );
    }

    #[test]
    fn sales_report_checks_dates() {
        let app = manager_app();
        let inverted = SalesReportInput {
            from: Some("2025-12-01".to_string()),
            to: Some("2025-11-01".to_string()),
            ..Default::default()
        };
        assert!(matches!(app.sales_report(inverted), Err(Error::DateRangeInverted { .. })));

        let garbage = SalesReportInput { from: Some("01/11/2025".to_string()), ..Default::default() };
        assert_eq!(
            app.sales_report(garbage),
            Err(Error::InvalidDate { value: "01/11/2025".to_string() })
        );

        let same_day = SalesReportInput {
            kind: Some("totales".to_string()),
            format: Some("csv".to_string()),
            from: Some("2025-11-15".to_string()),
            to: Some("2025-11-15".to_string()),
        };
        assert!(app.sales_report(same_day).unwrap().message.contains("Ventas Totales en formato CSV"));
    }

    #[test]
    fn income_statement_uses_currency_code() {
        let app = manager_app();
        let notice = app.income_statement(Some("anual".to_string()), Some("usd".to_string())).unwrap();
        assert_eq!(
            notice.message,
            "Generando Estado de Resultados Anual (2025) en USD. Revisar su carpeta de descargas."
        );
        assert!(matches!(
            app.income_statement(Some("semanal".to_string()), None),
            Err(Error::UnknownChoice { .. })
        ));
    }

    #[test]
    fn reports_need_the_manager() {
        assert_eq!(app().income_statement(None, None), Err(Error::NotLoggedIn));
    }
}

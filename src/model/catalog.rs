
//! Fixed option lists behind the report, service and pricing forms.

use super::Choice;

macro_rules! choice {
    ($name:ident, $kind:literal, { $($variant:ident => ($label:literal, $key:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice!(Service, "servicio", {
    BasicWash => ("Lavado Básico (Kg)", "lavado"),
    Drying => ("Secado (Extra)", "secado"),
    Ironing => ("Planchado (Unidad)", "planchado"),
    Express => ("Servicio Express", "express"),
});

choice!(Promotion, "promoción", {
    Express => ("10% Express", "express"),
    Students => ("20% Estudiantes", "estudiantes"),
    NoPromotion => ("Ninguna", "ninguna"),
});

choice!(ReportKind, "tipo de reporte", {
    ByBranch => ("Ventas por Sucursal", "sucursal"),
    ByService => ("Ventas por Servicio", "servicio"),
    Total => ("Ventas Totales", "totales"),
});

choice!(ReportFormat, "formato", {
    Pdf => ("PDF", "pdf"),
    Csv => ("CSV", "csv"),
    Excel => ("Excel", "excel"),
});

choice!(FiscalPeriod, "periodo fiscal", {
    Monthly => ("Mensual (Noviembre)", "mensual"),
    Quarterly => ("Trimestral (Q4)", "trimestral"),
    Yearly => ("Anual (2025)", "anual"),
});

choice!(Currency, "moneda", {
    Mxn => ("MXN - Pesos Mexicanos", "mxn"),
    Usd => ("USD - Dólares Americanos", "usd"),
});

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Mxn => "MXN",
            Currency::Usd => "USD",
        }
    }
}

/// Month, sales and cost rows of the performance chart on the reports page.
pub const MONTHLY_PERFORMANCE: [(&str, i64, i64); 4] = [
    ("Agosto", 70_000, 40_000),
    ("Septiembre", 75_500, 42_000),
    ("Octubre", 82_000, 44_500),
    ("Noviembre", 85_450, 45_000),
];

pub const BASE_RATE_PER_KG: &str = "25.00";
pub const DEFAULT_NEW_PRICE: &str = "27.00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub id: &'static str,
    pub subject: &'static str,
    pub pending: bool,
}

pub const TICKETS: [Ticket; 2] = [
    Ticket { id: "T1001", subject: "Solicitud de material de limpieza (Centro)", pending: true },
    Ticket { id: "T0998", subject: "Fuga en lavadora industrial", pending: false },
];

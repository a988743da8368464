
use tracing::info;

use super::{field_or, required, App, Notice};
use crate::model::branch::{Branch, BranchForUpdate};
use crate::panel::table::Table;
use crate::panel::view::branch_table;
use crate::{Error, Result};

const DEFAULT_STAFF: &str = "3";
const DEFAULT_MAINTENANCE_BRANCH: &str = "Centro";
const DEFAULT_EQUIPMENT: &str = "Lavadora Industrial #3";
const DEFAULT_FAULT: &str = "Fuga de agua constante al inicio del ciclo de centrifugado.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceInput {
    pub branch: Option<String>,
    pub equipment: Option<String>,
    pub description: Option<String>,
}

impl App {
    pub fn list_branches(&self) -> Result<Table> {
        self.require_manager()?;
        Ok(branch_table(&self.db))
    }

    pub fn toggle_branch(&mut self, id: &str) -> Result<Notice> {
        self.require_manager()?;
        let branch = self.branch(id)?;
        let status = branch.status.toggled();
        let name = branch.name.clone();

        self.db.branches.update(id, BranchForUpdate { status: Some(status), ..Default::default() });
        info!("{:<12} - branch {id} now {}", "BRANCHES", status.label());
        Ok(Notice::info("Cambio de Estado", format!("Sucursal {name} marcada como '{}'.", status.label())))
    }

    pub fn open_branch(&mut self, name: Option<String>, staff: Option<String>) -> Result<Notice> {
        self.require_manager()?;
        let name = required(name, "nombre de la sucursal")?;
        let staff = parse_staff(&field_or(staff, DEFAULT_STAFF));

        let id = self.db.branches.add(Branch::open(name.clone(), staff));
        info!("{:<12} - branch {id} opened", "BRANCHES");
        Ok(Notice::info(
            "Apertura Exitosa",
            format!("¡La nueva sucursal '{name}' (ID: {id}) ha sido registrada y está 'Operando'!"),
        ))
    }

    pub fn expense_detail(&self) -> Result<Notice> {
        self.require_manager()?;
        Ok(Notice::info(
            "Sucursales",
            "Abriendo desglose de costos detallado por sucursal (Simulación de reporte).",
        ))
    }

    pub fn request_maintenance(&mut self, input: MaintenanceInput) -> Result<Notice> {
        self.require_manager()?;
        let branch_name = field_or(input.branch, DEFAULT_MAINTENANCE_BRANCH);
        let branch = self.db.branch_by_name(&branch_name)
            .ok_or_else(|| Error::UnknownBranch { name: branch_name.clone() })?;
        if !branch.is_operating() {
            return Err(Error::BranchNotOperating { name: branch_name });
        }
        let equipment = required(Some(field_or(input.equipment, DEFAULT_EQUIPMENT)), "equipo")?;
        let description = field_or(input.description, DEFAULT_FAULT);

        info!("{:<12} - maintenance for {equipment} at {branch_name}: {description}", "BRANCHES");
        Ok(Notice::info(
            "Solicitud Enviada",
            format!("Mantenimiento solicitado para {equipment} en {branch_name}. Un técnico será asignado en 24 horas."),
        ))
    }

    fn branch(&self, id: &str) -> Result<&Branch> {
        self.db.branches.find(id)
            .ok_or_else(|| Error::EntityNotFound { entity: "sucursal", id: id.to_string() })
    }
}

/// Anything but plain digits counts as zero; counts past `u32::MAX` saturate.
fn parse_staff(value: &str) -> u32 {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    value.parse().unwrap_or(u32::MAX)
}

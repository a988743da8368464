
use tracing::info;

use super::{field_or, required, App, Notice};
use crate::model::employee::{EmployeeForCreate, EmployeeForUpdate, Role, DEFAULT_SCHEDULE};
use crate::model::Choice;
use crate::panel::table::Table;
use crate::panel::view::employee_table;
use crate::{Error, Result};

const DEFAULT_ROLE: &str = "Lavandero";
const DEFAULT_BRANCH: &str = "Centro";

/// Raw employee form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeInput {
    pub name: Option<String>,
    pub role: Option<String>,
    pub branch: Option<String>,
    pub schedule: Option<String>,
}

impl App {
    pub fn list_employees(&self) -> Result<Table> {
        self.require_manager()?;
        Ok(employee_table(&self.db))
    }

    pub fn add_employee(&mut self, input: EmployeeInput) -> Result<Notice> {
        self.require_manager()?;
        let name = required(input.name, "nombre")?;
        let role = Role::parse_choice(&required(Some(field_or(input.role, DEFAULT_ROLE)), "puesto")?)?;
        let branch = self.existing_branch(field_or(input.branch, DEFAULT_BRANCH))?;
        let schedule = field_or(input.schedule, DEFAULT_SCHEDULE);

        let id = self.db.employees.add(
            EmployeeForCreate { name: name.clone(), role, schedule, branch }.into(),
        );
        info!("{:<12} - employee {id} added", "STAFF");
        Ok(Notice::info(
            "Registro",
            format!("¡Nuevo empleado '{name}' ({role}) registrado con ID: {id} con éxito!"),
        ))
    }

    pub fn edit_employee(&mut self, id: &str, input: EmployeeInput) -> Result<Notice> {
        self.require_manager()?;
        if self.db.employees.find(id).is_none() {
            return Err(Error::EntityNotFound { entity: "empleado", id: id.to_string() });
        }

        let update = EmployeeForUpdate {
            name: input.name.map(|name| required(Some(name), "nombre")).transpose()?,
            role: input.role.map(|role| Role::parse_choice(&role)).transpose()?,
            branch: input.branch.map(|branch| self.existing_branch(branch)).transpose()?,
            schedule: input.schedule.map(|schedule| schedule.trim().to_string()),
        };
        if update.is_empty() {
            return Err(Error::MissingField { field: "campos a editar" });
        }

        self.db.employees.update(id, update);
        info!("{:<12} - employee {id} updated", "STAFF");
        Ok(Notice::info("Guardar", format!("Datos del empleado {id} actualizados correctamente.")))
    }

    pub fn remove_employee(&mut self, id: &str) -> Result<Notice> {
        self.require_manager()?;
        let removed = self.db.employees.remove(id)
            .ok_or_else(|| Error::EntityNotFound { entity: "empleado", id: id.to_string() })?;
        info!("{:<12} - employee {id} removed", "STAFF");
        Ok(Notice::info("Baja Exitosa", format!("{} ha sido dado de baja.", removed.name)))
    }

    /// Employees reference branches by name; the name has to exist today.
    fn existing_branch(&self, name: String) -> Result<String> {
        let name = name.trim().to_string();
        match self.db.branch_by_name(&name) {
            Some(_) => Ok(name),
            None => Err(Error::UnknownBranch { name }),
        }
    }
}

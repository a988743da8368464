
use serde::{Deserialize, Serialize};

use super::Choice;
use crate::store::record_id::IdScheme;
use crate::store::record_store::{Record, RecordPatch};

pub const DEFAULT_SCHEDULE: &str = "9:00 - 17:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Lavandero,
    Lavandera,
    Repartidor,
    #[serde(rename = "Atención Cliente")]
    AtencionCliente,
    Supervisor,
}

impl Choice for Role {
    const KIND: &'static str = "puesto";
    const ALL: &'static [Self] = &[
        Role::Lavandero,
        Role::Lavandera,
        Role::Repartidor,
        Role::AtencionCliente,
        Role::Supervisor,
    ];

    fn label(&self) -> &'static str {
        match self {
            Role::Lavandero => "Lavandero",
            Role::Lavandera => "Lavandera",
            Role::Repartidor => "Repartidor",
            Role::AtencionCliente => "Atención Cliente",
            Role::Supervisor => "Supervisor",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Role::AtencionCliente => "atencion",
            Role::Lavandero => "lavandero",
            Role::Lavandera => "lavandera",
            Role::Repartidor => "repartidor",
            Role::Supervisor => "supervisor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub schedule: String,
    pub branch: String,
}

impl Record for Employee {
    const SCHEME: IdScheme = IdScheme::new("", 3, 101);

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone)]
pub struct EmployeeForCreate {
    pub name: String,
    pub role: Role,
    pub schedule: String,
    pub branch: String,
}

impl From<EmployeeForCreate> for Employee {
    fn from(value: EmployeeForCreate) -> Self {
        Self {
            id: String::new(),
            name: value.name,
            role: value.role,
            schedule: value.schedule,
            branch: value.branch,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForUpdate {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub schedule: Option<String>,
    pub branch: Option<String>,
}

impl EmployeeForUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl RecordPatch<Employee> for EmployeeForUpdate {
    fn apply(self, record: &mut Employee) {
        if let Some(name) = self.name { record.name = name }
        if let Some(role) = self.role { record.role = role }
        if let Some(schedule) = self.schedule { record.schedule = schedule }
        if let Some(branch) = self.branch { record.branch = branch }
    }
}

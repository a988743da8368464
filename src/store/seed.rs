
use chrono::NaiveDateTime;

use crate::model::branch::{Branch, BranchStatus};
use crate::model::employee::{Employee, Role};
use crate::model::inventory::{InventoryOrder, OrderStatus};
use crate::model::profile::{Profile, ACCESS_FORMAT};

pub(super) fn profile() -> Profile {
    Profile {
        name: "Andrea Mendoza".to_string(),
        email: "gerencia@lavanderos.com".to_string(),
        phone: "55 1234 5678".to_string(),
        role: "Gerente General".to_string(),
        last_access: NaiveDateTime::parse_from_str("2025-12-01 20:30", ACCESS_FORMAT).unwrap_or_default(),
    }
}

fn employee(id: &str, name: &str, role: Role, schedule: &str, branch: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        role,
        schedule: schedule.to_string(),
        branch: branch.to_string(),
    }
}

pub(super) fn employees() -> Vec<Employee> {
    vec![
        employee("101", "Luis Pérez", Role::Lavandero, "7:00 - 15:00", "Centro"),
        employee("102", "Ana Ruiz", Role::AtencionCliente, "10:00 - 18:00", "Norte"),
        employee("103", "Javier Cruz", Role::Repartidor, "9:00 - 17:00", "Sur"),
        employee("104", "Sofía Mendoza", Role::Lavandera, "14:00 - 22:00", "Aeropuerto"),
    ]
}

fn branch(id: &str, name: &str, sales: i64, operating_cost: i64, staff: u32) -> Branch {
    Branch {
        id: id.to_string(),
        name: name.to_string(),
        status: BranchStatus::Operating,
        sales,
        operating_cost,
        staff,
    }
}

pub(super) fn branches() -> Vec<Branch> {
    vec![
        branch("S01", "Centro", 22_000, 11_500, 4),
        branch("S02", "Norte", 25_000, 12_000, 5),
        branch("S03", "Sur", 18_000, 10_000, 3),
        branch("S04", "Aeropuerto", 17_000, 9_000, 3),
    ]
}

pub(super) fn orders() -> Vec<InventoryOrder> {
    vec![
        InventoryOrder {
            id: "P001".to_string(),
            item: "Detergente Azul".to_string(),
            quantity: 100,
            supplier: "Clean Supplies S.A.".to_string(),
            status: OrderStatus::Pending,
        },
        InventoryOrder {
            id: "P002".to_string(),
            item: "Suavizante".to_string(),
            quantity: 50,
            supplier: "Química Azul Ltda.".to_string(),
            status: OrderStatus::Received,
        },
    ]
}

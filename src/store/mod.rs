
pub mod record_id;
pub mod record_store;
mod seed;

use serde::Serialize;

use crate::model::{branch::Branch, employee::Employee, inventory::InventoryOrder, profile::Profile};
use record_store::RecordStore;

/// Every collection the panel works on. Lives as long as the process.
#[derive(Debug, Clone, Serialize)]
pub struct Database {
    pub profile: Profile,
    pub employees: RecordStore<Employee>,
    pub branches: RecordStore<Branch>,
    pub orders: RecordStore<InventoryOrder>,
}

impl Database {
    pub fn seeded() -> Self {
        Self {
            profile: seed::profile(),
            employees: RecordStore::seeded(seed::employees()),
            branches: RecordStore::seeded(seed::branches()),
            orders: RecordStore::seeded(seed::orders()),
        }
    }

    pub fn branch_by_name(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.name == name)
    }

    pub fn operating_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|branch| branch.is_operating())
    }
}

#[cfg(test)]
mod tests {
    use super::Database;

    #[test]
    fn seeds_match_the_sample_data() {
        let db = Database::seeded();
        assert_eq!(db.employees.ids(), vec!["101", "102", "103", "104"]);
        assert_eq!(db.branches.ids(), vec!["S01", "S02", "S03", "S04"]);
        assert_eq!(db.orders.ids(), vec!["P001", "P002"]);
        assert_eq!(db.operating_branches().count(), 4);
        assert_eq!(db.branch_by_name("Norte").unwrap().staff, 5);
        assert!(db.branch_by_name("Oriente").is_none());
        assert_eq!(db.profile.name, "Andrea Mendoza");
    }

    #[test]
    fn dumps_as_json() {
        let json = serde_json::to_value(Database::seeded()).unwrap();
        assert_eq!(json["employees"]["records"][1]["role"], "Atención Cliente");
        assert_eq!(json["branches"]["records"][0]["status"], "Operando");
        assert_eq!(json["orders"]["records"][0]["status"], "Pendiente");
        assert_eq!(json["profile"]["last_access"], "2025-12-01T20:30:00");
    }
}


use serde::{Deserialize, Serialize};

use crate::store::record_id::IdScheme;
use crate::store::record_store::{Record, RecordPatch};

/// Branches with a margin above this are highlighted in the performance table.
pub const BEST_MARGIN: i64 = 12_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchStatus {
    #[serde(rename = "Operando")]
    Operating,
    #[serde(rename = "Cerrada")]
    Closed,
}

impl BranchStatus {
    pub fn toggled(self) -> Self {
        match self {
            BranchStatus::Operating => BranchStatus::Closed,
            BranchStatus::Closed => BranchStatus::Operating,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BranchStatus::Operating => "Operando",
            BranchStatus::Closed => "Cerrada",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchTag {
    Best,
    Closed,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub status: BranchStatus,
    pub sales: i64,
    pub operating_cost: i64,
    pub staff: u32,
}

impl Branch {
    /// A newly opened branch: operating, with no sales or costs yet.
    pub fn open(name: String, staff: u32) -> Self {
        Self {
            id: String::new(),
            name,
            status: BranchStatus::Operating,
            sales: 0,
            operating_cost: 0,
            staff,
        }
    }

    pub fn margin(&self) -> i64 {
        self.sales - self.operating_cost
    }

    pub fn is_operating(&self) -> bool {
        self.status == BranchStatus::Operating
    }

    pub fn tag(&self) -> BranchTag {
        if self.status == BranchStatus::Closed {
            BranchTag::Closed
        } else if self.margin() > BEST_MARGIN {
            BranchTag::Best
        } else {
            BranchTag::Normal
        }
    }
}

impl Record for Branch {
    const SCHEME: IdScheme = IdScheme::new("S", 2, 1);

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Default)]
pub struct BranchForUpdate {
    pub name: Option<String>,
    pub status: Option<BranchStatus>,
    pub sales: Option<i64>,
    pub operating_cost: Option<i64>,
    pub staff: Option<u32>,
}

impl RecordPatch<Branch> for BranchForUpdate {
    fn apply(self, record: &mut Branch) {
        if let Some(name) = self.name { record.name = name }
        if let Some(status) = self.status { record.status = status }
        if let Some(sales) = self.sales { record.sales = sales }
        if let Some(cost) = self.operating_cost { record.operating_cost = cost }
        if let Some(staff) = self.staff { record.staff = staff }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(sales: i64, cost: i64) -> Branch {
        Branch { sales, operating_cost: cost, ..Branch::open("Centro".to_string(), 4) }
    }

    #[test]
    fn tags_follow_margin_and_status() {
        assert_eq!(branch(25_000, 12_000).tag(), BranchTag::Best);
        assert_eq!(branch(22_000, 11_500).tag(), BranchTag::Normal);
        // exactly the threshold is not "best"
        assert_eq!(branch(24_000, 12_000).tag(), BranchTag::Normal);

        let mut closed = branch(25_000, 12_000);
        closed.status = BranchStatus::Closed;
        assert_eq!(closed.tag(), BranchTag::Closed);
    }

    #[test]
    fn status_toggles_both_ways() {
        let status = BranchStatus::Operating.toggled();
        assert_eq!(status, BranchStatus::Closed);
        assert_eq!(status.toggled(), BranchStatus::Operating);
    }

    #[test]
    fn opened_branch_is_empty() {
        let opened = Branch::open("Poniente".to_string(), 3);
        assert!(opened.is_operating());
        assert_eq!(opened.margin(), 0);
        assert_eq!(opened.staff, 3);
    }
}

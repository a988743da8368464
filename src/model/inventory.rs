
use serde::{Deserialize, Serialize};

use crate::store::record_id::IdScheme;
use crate::store::record_store::{Record, RecordPatch};

pub const SUPPLIERS: [&str; 2] = ["Clean Supplies S.A.", "Química Azul Ltda."];
pub const DEFAULT_QUANTITY: &str = "100";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Recibido")]
    Received,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Received => "Recibido",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryOrder {
    pub id: String,
    pub item: String,
    pub quantity: u32,
    pub supplier: String,
    pub status: OrderStatus,
}

impl InventoryOrder {
    pub fn pending(item: String, quantity: u32, supplier: String) -> Self {
        Self {
            id: String::new(),
            item,
            quantity,
            supplier,
            status: OrderStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

impl Record for InventoryOrder {
    const SCHEME: IdScheme = IdScheme::new("P", 3, 1);

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Pending -> Received. There is no way back.
pub struct MarkReceived;

impl RecordPatch<InventoryOrder> for MarkReceived {
    fn apply(self, record: &mut InventoryOrder) {
        record.status = OrderStatus::Received;
    }
}

/// Row of the static stock sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockItem {
    pub item: &'static str,
    pub units: u32,
    pub location: &'static str,
    pub critical: bool,
}

pub const STOCK: [StockItem; 4] = [
    StockItem { item: "Detergente Azul", units: 45, location: "Almacén Central", critical: false },
    StockItem { item: "Suavizante Aroma Floral", units: 120, location: "Almacén Central", critical: false },
    StockItem { item: "Perchas Metálicas", units: 15, location: "Sucursal Centro", critical: true },
    StockItem { item: "Lavadora Industrial #5", units: 1, location: "Sucursal Norte", critical: false },
];

/// Parses a quantity field: digits only, greater than zero.
pub fn parse_quantity(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().filter(|qty| *qty > 0)
}


use tracing::info;

use super::{field_or, required, App, Notice};
use crate::model::inventory::{parse_quantity, InventoryOrder, MarkReceived, DEFAULT_QUANTITY, SUPPLIERS};
use crate::model::normalize;
use crate::panel::table::Table;
use crate::panel::view::{order_table, stock_table};
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderInput {
    pub item: Option<String>,
    pub quantity: Option<String>,
    pub supplier: Option<String>,
}

impl App {
    pub fn view_stock(&self) -> Result<Table> {
        self.require_manager()?;
        Ok(stock_table())
    }

    pub fn start_audit(&self) -> Result<Notice> {
        self.require_manager()?;
        Ok(Notice::info("Inventario", "Iniciando proceso de conteo físico (Auditoría Manual)."))
    }

    pub fn list_orders(&self) -> Result<Table> {
        self.require_manager()?;
        Ok(order_table(&self.db))
    }

    pub fn place_order(&mut self, input: OrderInput) -> Result<Notice> {
        self.require_manager()?;
        let item = required(input.item, "artículo")?;
        let quantity_text = field_or(input.quantity, DEFAULT_QUANTITY);
        let quantity = parse_quantity(&quantity_text)
            .ok_or(Error::InvalidQuantity { value: quantity_text })?;
        let supplier = supplier(input.supplier)?;

        let id = self.db.orders.add(InventoryOrder::pending(item.clone(), quantity, supplier.to_string()));
        info!("{:<12} - order {id} placed with {supplier}", "INVENTORY");
        Ok(Notice::info(
            "Pedido Enviado",
            format!("Pedido {id} de {quantity} unidades de {item} a {supplier} registrado con éxito."),
        ))
    }

    /// Only pending orders can be cancelled; cancelling drops the order.
    pub fn cancel_order(&mut self, id: &str) -> Result<Notice> {
        self.require_manager()?;
        let order = self.order(id)?;
        if !order.is_pending() {
            return Err(Error::OrderNotPending { id: id.to_string() });
        }

        self.db.orders.remove(id);
        info!("{:<12} - order {id} cancelled", "INVENTORY");
        Ok(Notice::info("Cancelación", format!("El pedido {id} ha sido cancelado y eliminado de la lista.")))
    }

    pub fn mark_received(&mut self, id: &str) -> Result<Notice> {
        self.require_manager()?;
        if !self.order(id)?.is_pending() {
            return Ok(Notice::warning("Advertencia", "El pedido ya está marcado como Recibido."));
        }

        self.db.orders.update(id, MarkReceived);
        info!("{:<12} - order {id} received", "INVENTORY");
        Ok(Notice::info(
            "Recepción",
            format!("El pedido {id} ha sido marcado como Recibido. (Stock Actualizado: Simulado)."),
        ))
    }

    fn order(&self, id: &str) -> Result<&InventoryOrder> {
        self.db.orders.find(id)
            .ok_or_else(|| Error::EntityNotFound { entity: "pedido", id: id.to_string() })
    }
}

fn supplier(value: Option<String>) -> Result<&'static str> {
    let Some(value) = value else {
        return Ok(SUPPLIERS[0]);
    };
    let wanted = normalize(&value);
    SUPPLIERS
        .iter()
        .copied()
        .find(|known| normalize(known) == wanted || normalize(known).starts_with(&format!("{wanted} ")))
        .ok_or(Error::UnknownChoice { kind: "proveedor", value })
}

#[cfg(test)]
mod tests {
    use super::super::tests::manager_app;
    use super::*;
    use crate::model::inventory::OrderStatus;

    fn item(name: &str, qty: &str) -> OrderInput {
        OrderInput { item: Some(name.to_string()), quantity: Some(qty.to_string()), supplier: None }
    }

    #[test]
    fn place_order_appends_pending() {
        let mut app = manager_app();
        let notice = app.place_order(item("Detergente Azul", "100")).unwrap();
        assert_eq!(
            notice.message,
            "Pedido P003 de 100 unidades de Detergente Azul a Clean Supplies S.A. registrado con éxito."
        );
        let order = app.db().orders.find("P003").unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.quantity, 100);
    }

    #[test]
    fn place_order_validates_input() {
        let mut app = manager_app();
        assert!(matches!(app.place_order(item("Suavizante", "diez")), Err(Error::InvalidQuantity { .. })));
        assert!(matches!(app.place_order(item("Suavizante", "0")), Err(Error::InvalidQuantity { .. })));
        assert_eq!(app.place_order(item(" ", "5")), Err(Error::MissingField { field: "artículo" }));
        let unknown = OrderInput { supplier: Some("Acme".to_string()), ..item("Suavizante", "5") };
        assert!(matches!(app.place_order(unknown), Err(Error::UnknownChoice { .. })));
        assert_eq!(app.db().orders.len(), 2);
    }

    #[test]
    fn supplier_by_short_name() {
        assert_eq!(supplier(Some("quimica azul".to_string())).unwrap(), "Química Azul Ltda.");
        assert_eq!(supplier(Some("Clean Supplies S.A.".to_string())).unwrap(), "Clean Supplies S.A.");
        assert_eq!(supplier(None).unwrap(), "Clean Supplies S.A.");
    }

    #[test]
    fn receive_is_one_way_and_warns_on_repeat() {
        let mut app = manager_app();
        let first = app.mark_received("P001").unwrap();
        assert_eq!(first.level, super::super::Level::Info);
        assert_eq!(app.db().orders.find("P001").unwrap().status, OrderStatus::Received);

        let again = app.mark_received("P001").unwrap();
        assert_eq!(again.level, super::super::Level::Warning);
        assert_eq!(again.message, "El pedido ya está marcado como Recibido.");
        assert_eq!(app.db().orders.find("P001").unwrap().status, OrderStatus::Received);
    }

    #[test]
    fn cancel_only_pending() {
        let mut app = manager_app();
        assert_eq!(app.cancel_order("P002"), Err(Error::OrderNotPending { id: "P002".to_string() }));
        app.cancel_order("P001").unwrap();
        assert!(app.db().orders.find("P001").is_none());
        assert!(matches!(app.cancel_order("P001"), Err(Error::EntityNotFound { .. })));
        assert!(matches!(app.mark_received("P404"), Err(Error::EntityNotFound { .. })));
    }
}

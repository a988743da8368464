
use tracing::info;

use super::reports::choice_or;
use super::{App, Notice};
use crate::model::catalog::Service;
use crate::shell::command::Command;
use crate::shell::{Host, Reply};
use crate::{Error, Result};

impl App {
    fn with_screen(&self, notice: Notice) -> Reply {
        Reply::notice(notice).with_text(self.screen())
    }
}

impl Host for App {
    fn execute(&mut self, command: Command) -> Result<Reply> {
        use Command::*;

        let reply = match command {
            Help | Quit => Reply::default(),
            Nav => Reply::text(self.nav_entries().join(" | ")),
            Show => Reply::text(self.screen()),
            Go(page) => {
                self.navigate(page)?;
                info!("{:<12} - page {page}", "NAV");
                Reply::text(self.screen())
            }

            Login { username, password } => {
                let notice = self.login(username.as_deref(), password.as_deref())?;
                self.with_screen(notice)
            }
            Logout => {
                let notice = self.logout()?;
                self.with_screen(notice)
            }
            ProfileEdit(update) => {
                let notice = self.edit_profile(update)?;
                self.with_screen(notice)
            }
            ProfilePassword { current, new, confirm } => {
                let notice = self.change_password(&current, &new, &confirm)?;
                self.with_screen(notice)
            }

            EmployeeList => Reply::text(self.list_employees()?.to_string()),
            EmployeeAdd(input) => Reply::notice(self.add_employee(input)?),
            EmployeeEdit { id, input } => Reply::notice(self.edit_employee(&id, input)?),
            EmployeeRemove { id } => Reply::notice(self.remove_employee(&id)?),

            Stock => Reply::text(self.view_stock()?.to_string()),
            StockAudit => Reply::notice(self.start_audit()?),
            OrderList => Reply::text(self.list_orders()?.to_string()),
            OrderPlace(input) => Reply::notice(self.place_order(input)?),
            OrderCancel { id } => Reply::notice(self.cancel_order(&id)?),
            OrderReceive { id } => Reply::notice(self.mark_received(&id)?),

            BranchList => Reply::text(self.list_branches()?.to_string()),
            BranchOpen { name, staff } => Reply::notice(self.open_branch(name, staff)?),
            BranchToggle { id } => Reply::notice(self.toggle_branch(&id)?),
            BranchExpenses => Reply::notice(self.expense_detail()?),
            BranchMaintenance(input) => Reply::notice(self.request_maintenance(input)?),

            ReportSales(input) => Reply::notice(self.sales_report(input)?),
            ReportIncome { period, currency } => Reply::notice(self.income_statement(period, currency)?),

            ServiceNew => Reply::notice(self.new_service()?),
            ServiceEdit { service } => Reply::notice(self.edit_service(service)?),
            ServiceDeactivate { service } => Reply::notice(self.deactivate_service(service)?),
            ServicePrices { price, promotion } => Reply::notice(self.adjust_prices(price, promotion)?),
            ServicePromotion => Reply::notice(self.create_promotion()?),

            TicketReply { text } => Reply::notice(self.respond_ticket(text)?),
        };
        Ok(reply)
    }

    /// Only asked when the action would go ahead; unknown ids and bad input
    /// fail straight away.
    fn confirmation(&self, command: &Command) -> Option<String> {
        if !self.session.is_manager() {
            return None;
        }
        match command {
            Command::EmployeeRemove { id } => {
                let employee = self.db.employees.find(id)?;
                Some(format!("¿Está seguro que desea dar de baja a {} (ID: {id})?", employee.name))
            }
            Command::OrderCancel { id } => self.db.orders.find(id)
                .filter(|order| order.is_pending())
                .map(|_| format!("¿Está seguro que desea cancelar el pedido {id}?")),
            Command::OrderReceive { id } => self.db.orders.find(id)
                .filter(|order| order.is_pending())
                .map(|_| format!("¿Confirma que el pedido {id} ha sido recibido y cargado al stock?")),
            Command::BranchToggle { id } => {
                let branch = self.db.branches.find(id)?;
                Some(format!(
                    "¿Desea cambiar el estado de la sucursal {} a '{}'?",
                    branch.name,
                    branch.status.toggled().label()
                ))
            }
            Command::ServiceDeactivate { service } => {
                let service = choice_or(service.clone(), Service::BasicWash).ok()?;
                Some(format!("¿Está seguro que desea desactivar el servicio '{service}'?"))
            }
            _ => None,
        }
    }

    /// Denied pages and failed logins land on Login, so show it.
    fn after_failure(&self, err: &Error) -> Option<String> {
        match err {
            Error::AccessDenied { .. } | Error::LoginFail => Some(self.screen()),
            _ => None,
        }
    }
}

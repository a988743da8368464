
use crate::app::branches::MaintenanceInput;
use crate::app::inventory::OrderInput;
use crate::app::reports::SalesReportInput;
use crate::app::staff::EmployeeInput;
use crate::model::profile::ProfileForUpdate;
use crate::panel::page::Page;

/// One parsed shell line. Text fields are kept as typed; the handlers
/// validate and apply defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Nav,
    Show,
    Go(Page),

    Login { username: Option<String>, password: Option<String> },
    Logout,
    ProfileEdit(ProfileForUpdate),
    ProfilePassword { current: String, new: String, confirm: String },

    EmployeeList,
    EmployeeAdd(EmployeeInput),
    EmployeeEdit { id: String, input: EmployeeInput },
    EmployeeRemove { id: String },

    Stock,
    StockAudit,
    OrderList,
    OrderPlace(OrderInput),
    OrderCancel { id: String },
    OrderReceive { id: String },

    BranchList,
    BranchOpen { name: Option<String>, staff: Option<String> },
    BranchToggle { id: String },
    BranchExpenses,
    BranchMaintenance(MaintenanceInput),

    ReportSales(SalesReportInput),
    ReportIncome { period: Option<String>, currency: Option<String> },

    ServiceNew,
    ServiceEdit { service: Option<String> },
    ServiceDeactivate { service: Option<String> },
    ServicePrices { price: Option<String>, promotion: Option<String> },
    ServicePromotion,

    TicketReply { text: Option<String> },
}

pub const HELP: &str = "\
Comandos:
  help | quit | nav | show | go <página>
  login [usuario] [contraseña] | logout
  profile edit [name=] [email=] [phone=]
  profile password <actual> <nueva> <confirmar>
  employee list | add <nombre> [role=] [branch=] [schedule=]
  employee edit <id> [name=] [role=] [branch=] [schedule=] | remove <id>
  stock [audit]
  order list | place <artículo> [qty=] [supplier=] | cancel <id> | receive <id>
  branch list | open <nombre> [staff=] | toggle <id> | expenses
  branch maintenance [branch=] [equipment=] [description=]
  report sales [kind=] [format=] [from=AAAA-MM-DD] [to=AAAA-MM-DD]
  report income [period=] [currency=]
  service new | edit [servicio] | deactivate [servicio] | promotion
  service prices [price=] [promo=]
  ticket reply <texto>
Los valores con espacios van entre comillas: name=\"Ana Ruiz\".";



use super::page::Page;
use super::table::{money, thousands, RowTag, Table};
use crate::assets::AssetDir;
use crate::model::branch::BranchTag;
use crate::model::catalog::{BASE_RATE_PER_KG, MONTHLY_PERFORMANCE, TICKETS};
use crate::model::inventory::{OrderStatus, STOCK};
use crate::store::Database;
use crate::session::Session;

const RULE_WIDTH: usize = 72;
const HEADER_TAGLINE: &str = "HABLA CON NOSOTROS";
pub const FOOTER: &str =
    "🧺 Copyright © 2024 Lavandería Lavanderos. Todos los derechos reservados.   • Políticas de Privacidad";

/// Everything the content area needs to draw one page.
pub struct View<'a> {
    pub db: &'a Database,
    pub session: &'a Session,
    pub assets: &'a AssetDir,
}

impl View<'_> {
    pub fn header(&self) -> String {
        let status = match self.session.role() {
            Some(role) => format!("✅ Sesión: {}", role.label()),
            None => HEADER_TAGLINE.to_string(),
        };
        format!("{}  LAVANDEROS    {status}", self.assets.logo())
    }

    pub fn screen(&self, page: Page, nav: &[&str]) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let thin = "-".repeat(RULE_WIDTH);
        format!(
            "{rule}\n{}\n{thin}\nNavegación: {}\n{thin}\n{}{thin}\n{FOOTER}\n{rule}\n",
            self.header(),
            nav.join(" | "),
            self.content(page),
        )
    }

    pub fn content(&self, page: Page) -> String {
        let images: String = page.images().iter().map(|image| format!("{}\n", self.assets.image(image))).collect();
        let mut out = format!("{}\n\n{images}\n", page.title());
        out.push_str(&match page {
            Page::Login => self.login(),
            Page::Home => home(),
            Page::Profile => self.profile(),
            Page::Staff => self.staff(),
            Page::Reports => reports(),
            Page::Inventory => inventory(),
            Page::Branches => self.branches(),
            Page::Services => services(),
            Page::Contact => contact(),
        });
        out
    }

    fn login(&self) -> String {
        let masked = "*".repeat(self.session.password_field.chars().count());
        format!(
            "Usuario:    {}\nContraseña: {masked}\n\nAcciones: login [usuario] [contraseña]\n",
            self.session.username_field
        )
    }

    fn profile(&self) -> String {
        let mut out: String = self.db.profile.fields()
            .iter()
            .map(|(label, value)| format!("{:<15} {value}\n", format!("{label}:")))
            .collect();
        out.push_str("\nAcciones: profile edit [name=] [email=] [phone=] | profile password <actual> <nueva> <confirmar>\n");
        out
    }

    fn staff(&self) -> String {
        format!(
            "Administración de la plantilla, registro de nuevos empleados y control de asistencia.\n\n\
             Empleados Activos: {}\n\
             Faltas en la última semana: 2 (Ana Ruiz, Juan Salas)\n\
             Próxima Evaluación de Desempeño: Enero 2026\n\n\
             Acciones: employee list | employee add name= [role=] [branch=] [schedule=] | employee edit <id> ... | employee remove <id>\n",
            self.db.employees.len()
        )
    }

    fn branches(&self) -> String {
        format!(
            "Monitorea el rendimiento, estado de equipos y capacidad operativa de cada ubicación.\n\n\
             Sucursales Operativas: {}\n\
             Última Auditoría de Calidad: Norte (Aprobada)\n\
             Mantenimientos Pendientes: 1 (Lavadora Industrial #3 en Centro)\n\n\
             Acciones: branch list | branch open name= [staff=] | branch toggle <id> | branch expenses | branch maintenance [branch=] [equipment=] [description=]\n",
            self.db.operating_branches().count()
        )
    }
}

fn home() -> String {
    "Hemos logrado el éxito porque nuestra prioridad es tu tiempo y la calidad en el cuidado de tu ropa. \
     Nos especializamos en ofrecer un servicio integral a domicilio: tú agendas la recolección y la entrega \
     a través de nuestra plataforma, y nosotros nos encargamos del resto.\n\n\
     Nuestra Misión es ofrecer el mejor servicio de lavandería a domicilio, garantizando el cuidado de tu ropa \
     con los más altos estándares de calidad.\n\n\
     Nuestra Visión es ser la lavandería líder en el mercado, reconocida por la puntualidad en la recolección \
     y entrega, y nuestro compromiso ecológico.\n"
        .to_string()
}

fn reports() -> String {
    let (_, sales, cost) = MONTHLY_PERFORMANCE[MONTHLY_PERFORMANCE.len() - 1];
    let mut chart = Table::new(&["Mes", "Ventas ($)", "Costos ($)"]);
    for (month, month_sales, month_cost) in MONTHLY_PERFORMANCE {
        chart = chart.row(vec![month.to_string(), thousands(month_sales), thousands(month_cost)], RowTag::Plain);
    }
    format!(
        "Acceda a los datos críticos del negocio para la toma de decisiones.\n\n\
         Ventas de Noviembre (al día): {}\n\
         Costo Operativo Mensual: {}\n\
         Margen Bruto (Noviembre): {}\n\n\
         Gráfico de Rendimiento Mensual (Ventas vs. Costos):\n{chart}\n\
         Acciones: report sales [kind=] [format=] [from=] [to=] | report income [period=] [currency=]\n",
        money(sales),
        money(cost),
        money(sales - cost),
    )
}

fn inventory() -> String {
    "Control total de insumos, químicos y refacciones de equipos.\n\n\
     Nivel de Stock de Detergente Azul: Bajo (45 unidades)\n\
     Próximo Pedido Programado: 2025-12-05\n\
     Valor Total de Inventario: $15,500.00\n\n\
     Acciones: stock | stock audit | order list | order place item= [qty=] [supplier=] | order cancel <id> | order receive <id>\n"
        .to_string()
}

fn services() -> String {
    format!(
        "Administración centralizada de todos los servicios ofrecidos, tarifas y promociones.\n\n\
         Tarifa Base Actual (por Kg): ${BASE_RATE_PER_KG}\n\
         Servicio Más Popular: Lavado Básico\n\
         Promociones Activas: 2\n\n\
         Acciones: service new | service edit <servicio> | service deactivate <servicio> | service prices [price=] [promo=] | service promotion\n"
    )
}

fn contact() -> String {
    let mut tickets = Table::new(&["ID", "Asunto", "Estado"]);
    for ticket in TICKETS {
        let (status, tag) = if ticket.pending { ("Pendiente", RowTag::Pending) } else { ("Atendido", RowTag::Plain) };
        tickets = tickets.row(vec![ticket.id.to_string(), ticket.subject.to_string(), status.to_string()], tag);
    }
    format!(
        "Revisión de solicitudes de clientes, quejas y consultas internas.\n\n\
         Tickets Pendientes (Gerencia): 1\n\
         Última Queja: Demora en la entrega (Cliente: Carla Pérez)\n\
         Tiempo Promedio de Respuesta: 3 horas\n\n{tickets}\n\
         Acciones: ticket reply <respuesta>\n"
    )
}

pub fn employee_table(db: &Database) -> Table {
    db.employees.iter().fold(
        Table::new(&["ID", "Nombre", "Puesto", "Horario", "Sucursal"]),
        |table, e| {
            table.row(
                vec![e.id.clone(), e.name.clone(), e.role.to_string(), e.schedule.clone(), e.branch.clone()],
                RowTag::Plain,
            )
        },
    )
}

pub fn branch_table(db: &Database) -> Table {
    db.branches.iter().fold(
        Table::new(&["ID", "Sucursal", "Estado", "Ventas", "Costo Op.", "Margen", "Personal"]),
        |table, b| {
            let tag = match b.tag() {
                BranchTag::Best => RowTag::Good,
                BranchTag::Closed => RowTag::Bad,
                BranchTag::Normal => RowTag::Plain,
            };
            table.row(
                vec![
                    b.id.clone(),
                    b.name.clone(),
                    b.status.label().to_string(),
                    thousands(b.sales),
                    thousands(b.operating_cost),
                    thousands(b.margin()),
                    b.staff.to_string(),
                ],
                tag,
            )
        },
    )
}

pub fn order_table(db: &Database) -> Table {
    db.orders.iter().fold(
        Table::new(&["ID", "Insumo", "Cantidad", "Proveedor", "Estado"]),
        |table, o| {
            let tag = match o.status {
                OrderStatus::Pending => RowTag::Pending,
                OrderStatus::Received => RowTag::Good,
            };
            table.row(
                vec![o.id.clone(), o.item.clone(), o.quantity.to_string(), o.supplier.clone(), o.status.label().to_string()],
                tag,
            )
        },
    )
}

pub fn stock_table() -> Table {
    STOCK.iter().fold(Table::new(&["Insumo", "Unidades", "Ubicación"]), |table, s| {
        let tag = if s.critical { RowTag::Critical } else { RowTag::Plain };
        table.row(vec![s.item.to_string(), s.units.to_string(), s.location.to_string()], tag)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_view(session: &Session, f: impl FnOnce(&View)) {
        let db = Database::seeded();
        let assets = AssetDir::new("/nonexistent/lavanderos/assets");
        f(&View { db: &db, session, assets: &assets });
    }

    #[test]
    fn header_shows_session_state() {
        let mut session = Session::new();
        with_view(&session, |view| {
            assert_eq!(view.header(), "[LOGO]  LAVANDEROS    HABLA CON NOSOTROS");
        });
        session.login("gerente", "1234").unwrap();
        with_view(&session, |view| assert!(view.header().ends_with("✅ Sesión: Gerente")));
    }

    #[test]
    fn pages_show_live_counts() {
        let session = Session::new();
        with_view(&session, |view| {
            assert!(view.content(Page::Staff).contains("Empleados Activos: 4"));
            assert!(view.content(Page::Branches).contains("Sucursales Operativas: 4"));
            assert!(view.content(Page::Reports).contains("Margen Bruto (Noviembre): $40,450.00"));
            assert!(view.content(Page::Staff).contains("[IMAGEN LAVANDO.PNG]"));
        });
    }

    #[test]
    fn screen_has_all_sections() {
        let session = Session::new();
        with_view(&session, |view| {
            let screen = view.screen(Page::Login, &["🏠 Inicio", "📧 Contacto"]);
            assert!(screen.contains("Navegación: 🏠 Inicio | 📧 Contacto"));
            assert!(screen.contains("Usuario:    gerente"));
            assert!(screen.contains("Contraseña: ****"));
            assert!(screen.contains("Políticas de Privacidad"));
        });
    }

    #[test]
    fn tables_cover_every_record() {
        let db = Database::seeded();
        assert_eq!(employee_table(&db).len(), 4);
        assert_eq!(branch_table(&db).len(), 4);
        assert_eq!(order_table(&db).len(), 2);
        assert!(branch_table(&db).to_string().contains("13,000"));
        assert_eq!(stock_table().len(), 4);
    }
}


use std::fmt;

use super::command::*;
use crate::app::branches::MaintenanceInput;
use crate::app::inventory::OrderInput;
use crate::app::reports::SalesReportInput;
use crate::app::staff::EmployeeInput;
use crate::model::normalize;
use crate::model::profile::ProfileForUpdate;
use crate::panel::page::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErr {
    EmptyLine,
    UnknownCommand(String),
    MissingSubcommand(String),
    IncorrectNArguments(String, u8, u8),
    MissingArgument(String, &'static str),
    UnknownArgument(String, String),
    UnterminatedQuote,
    UnknownPage(String),
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErr::EmptyLine => write!(f, "línea vacía"),
            ParseErr::UnknownCommand(command) => write!(f, "comando desconocido: {command}"),
            ParseErr::MissingSubcommand(command) => write!(f, "falta el subcomando de '{command}'"),
            ParseErr::IncorrectNArguments(command, actual, expected) => {
                write!(f, "número incorrecto de argumentos para '{command}': {actual}/{expected}")
            }
            ParseErr::MissingArgument(command, argument) => {
                write!(f, "falta el argumento <{argument}> de '{command}'")
            }
            ParseErr::UnknownArgument(command, key) => {
                write!(f, "argumento desconocido '{key}' para '{command}'")
            }
            ParseErr::UnterminatedQuote => write!(f, "comillas sin cerrar"),
            ParseErr::UnknownPage(page) => write!(f, "página desconocida: {page}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Word(String),
    Named(String, String),
}

fn flush(buffer: &mut String, key: &mut Option<String>, tokens: &mut Vec<Token>) {
    let value = std::mem::take(buffer);
    tokens.push(match key.take() {
        Some(key) => Token::Named(key, value),
        None => Token::Word(value),
    });
}

/// Positional words and `key=value` pairs following the command words.
struct Args {
    command: String,
    positional: Vec<String>,
    named: Vec<(String, String)>,
}

impl Args {
    fn new(command: String, tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut positional = vec![];
        let mut named = vec![];
        for token in tokens {
            match token {
                Token::Word(word) => positional.push(word),
                Token::Named(key, value) => named.push((key, value)),
            }
        }
        Self { command, positional, named }
    }

    /// Removes the named argument matching any of `keys`.
    fn take(&mut self, keys: &[&str]) -> Option<String> {
        let index = self.named.iter().position(|(key, _)| keys.contains(&normalize(key).as_str()))?;
        Some(self.named.remove(index).1)
    }

    fn positional_at_most(&self, max: u8) -> Result<(), ParseErr> {
        if self.positional.len() > max as usize {
            return Err(ParseErr::IncorrectNArguments(self.command.clone(), self.positional.len() as u8, max));
        }
        Ok(())
    }

    fn exact(&mut self, n: u8) -> Result<Vec<String>, ParseErr> {
        if self.positional.len() != n as usize {
            return Err(ParseErr::IncorrectNArguments(self.command.clone(), self.positional.len() as u8, n));
        }
        Ok(std::mem::take(&mut self.positional))
    }

    fn id(&mut self) -> Result<String, ParseErr> {
        if self.positional.is_empty() {
            return Err(ParseErr::MissingArgument(self.command.clone(), "id"));
        }
        Ok(self.exact(1)?.remove(0))
    }

    /// First positional word, or the named form of the same field.
    fn first_or(&mut self, keys: &[&str]) -> Result<Option<String>, ParseErr> {
        self.positional_at_most(1)?;
        let named = self.take(keys);
        Ok(self.positional.pop().or(named))
    }

    fn finish(self, command: Command) -> Result<Command, ParseErr> {
        if let Some((key, _)) = self.named.into_iter().next() {
            return Err(ParseErr::UnknownArgument(self.command, key));
        }
        if !self.positional.is_empty() {
            let count = self.positional.len() as u8;
            return Err(ParseErr::IncorrectNArguments(self.command, count, 0));
        }
        Ok(command)
    }
}

/// Commands whose second word picks the action.
const GROUPS: &[&str] = &["profile", "employee", "stock", "order", "branch", "report", "service", "ticket"];

const NAME: &[&str] = &["name", "nombre"];
const ROLE: &[&str] = &["role", "puesto"];
const BRANCH: &[&str] = &["branch", "sucursal"];
const SCHEDULE: &[&str] = &["schedule", "horario"];

pub struct Parser {
}

impl Parser {
    /// Splits on whitespace outside double quotes. A word with an unquoted
    /// `=` becomes a named argument.
    pub(crate) fn lex(&self, line: &str) -> Result<Vec<Token>, ParseErr> {
        let mut tokens = vec![];
        let mut buffer = String::new();
        let mut key: Option<String> = None;
        let mut started = false;
        let mut quoted = false;
        let mut in_quotes = false;

        for c in line.chars() {
            match c {
                '"' => {
                    in_quotes = !in_quotes;
                    quoted = true;
                    started = true;
                }
                '=' if !in_quotes && !quoted && key.is_none() && !buffer.is_empty() => {
                    key = Some(std::mem::take(&mut buffer));
                }
                c if c.is_whitespace() && !in_quotes => {
                    if started {
                        flush(&mut buffer, &mut key, &mut tokens);
                    }
                    started = false;
                    quoted = false;
                }
                c => {
                    buffer.push(c);
                    started = true;
                }
            }
        }
        if in_quotes {
            return Err(ParseErr::UnterminatedQuote);
        }
        if started {
            flush(&mut buffer, &mut key, &mut tokens);
        }
        Ok(tokens)
    }

    pub fn parse(&mut self, line: &str) -> Result<Command, ParseErr> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Err(ParseErr::EmptyLine);
        }
        let mut tokens = self.lex(line)?;
        let command = match tokens.first() {
            Some(Token::Word(word)) => word.to_lowercase(),
            Some(Token::Named(key, _)) => return Err(ParseErr::UnknownCommand(key.clone())),
            None => return Err(ParseErr::EmptyLine),
        };
        tokens.remove(0);

        let grouped = GROUPS.contains(&command.as_str());
        let sub = match tokens.first() {
            Some(Token::Word(word)) if grouped => Some(word.to_lowercase()),
            _ => None,
        };
        if sub.is_some() {
            tokens.remove(0);
        } else if grouped && command != "stock" {
            return Err(ParseErr::MissingSubcommand(command));
        }

        let label = match &sub {
            Some(sub) => format!("{command} {sub}"),
            None => command.clone(),
        };
        let mut args = Args::new(label.clone(), tokens);

        let parsed = match (command.as_str(), sub.as_deref()) {
            ("help" | "ayuda", None) => Command::Help,
            ("quit" | "exit" | "salir", None) => Command::Quit,
            ("nav", None) => Command::Nav,
            ("show", None) => Command::Show,
            ("go", None) => {
                let page = args.exact(1)?.remove(0);
                Command::Go(Page::parse(&page).ok_or(ParseErr::UnknownPage(page))?)
            }
            ("login", None) => {
                args.positional_at_most(2)?;
                let mut words = std::mem::take(&mut args.positional).into_iter();
                let username = words.next().or_else(|| args.take(&["user", "usuario"]));
                let password = words.next().or_else(|| args.take(&["password", "contraseña", "contrasena"]));
                Command::Login { username, password }
            }
            ("logout", None) => Command::Logout,

            ("profile", Some("edit")) => Command::ProfileEdit(ProfileForUpdate {
                name: args.take(NAME),
                email: args.take(&["email", "correo"]),
                phone: args.take(&["phone", "telefono"]),
            }),
            ("profile", Some("password")) => {
                let mut words = args.exact(3)?.into_iter();
                let mut next = || words.next().unwrap_or_default();
                Command::ProfilePassword { current: next(), new: next(), confirm: next() }
            }

            ("employee", Some("list")) => Command::EmployeeList,
            ("employee", Some("add")) => {
                let name = args.first_or(NAME)?;
                Command::EmployeeAdd(employee_input(&mut args, name))
            }
            ("employee", Some("edit")) => {
                let id = args.id()?;
                let name = args.take(NAME);
                Command::EmployeeEdit { id, input: employee_input(&mut args, name) }
            }
            ("employee", Some("remove")) => Command::EmployeeRemove { id: args.id()? },

            ("stock", None) => Command::Stock,
            ("stock", Some("audit")) => Command::StockAudit,

            ("order", Some("list")) => Command::OrderList,
            ("order", Some("place")) => {
                let item = args.first_or(&["item", "articulo"])?;
                Command::OrderPlace(OrderInput {
                    item,
                    quantity: args.take(&["qty", "quantity", "cantidad"]),
                    supplier: args.take(&["supplier", "proveedor"]),
                })
            }
            ("order", Some("cancel")) => Command::OrderCancel { id: args.id()? },
            ("order", Some("receive")) => Command::OrderReceive { id: args.id()? },

            ("branch", Some("list")) => Command::BranchList,
            ("branch", Some("open")) => {
                let name = args.first_or(NAME)?;
                Command::BranchOpen { name, staff: args.take(&["staff", "personal"]) }
            }
            ("branch", Some("toggle")) => Command::BranchToggle { id: args.id()? },
            ("branch", Some("expenses")) => Command::BranchExpenses,
            ("branch", Some("maintenance")) => Command::BranchMaintenance(MaintenanceInput {
                branch: args.take(BRANCH),
                equipment: args.take(&["equipment", "equipo"]),
                description: args.take(&["description", "descripcion"]),
            }),

            ("report", Some("sales")) => Command::ReportSales(SalesReportInput {
                kind: args.take(&["kind", "tipo"]),
                format: args.take(&["format", "formato"]),
                from: args.take(&["from", "desde"]),
                to: args.take(&["to", "hasta"]),
            }),
            ("report", Some("income")) => Command::ReportIncome {
                period: args.take(&["period", "periodo"]),
                currency: args.take(&["currency", "moneda"]),
            },

            ("service", Some("new")) => Command::ServiceNew,
            ("service", Some("edit")) => Command::ServiceEdit { service: args.first_or(&["service", "servicio"])? },
            ("service", Some("deactivate")) => {
                Command::ServiceDeactivate { service: args.first_or(&["service", "servicio"])? }
            }
            ("service", Some("prices")) => Command::ServicePrices {
                price: args.take(&["price", "precio"]),
                promotion: args.take(&["promo", "promotion", "promocion"]),
            },
            ("service", Some("promotion")) => Command::ServicePromotion,

            ("ticket", Some("reply")) => {
                let words = std::mem::take(&mut args.positional);
                let text = if words.is_empty() { args.take(&["text", "texto"]) } else { Some(words.join(" ")) };
                Command::TicketReply { text }
            }

            _ => return Err(ParseErr::UnknownCommand(label)),
        };
        args.finish(parsed)
    }
}

fn employee_input(args: &mut Args, name: Option<String>) -> EmployeeInput {
    EmployeeInput {
        name,
        role: args.take(ROLE),
        branch: args.take(BRANCH),
        schedule: args.take(SCHEDULE),
    }
}

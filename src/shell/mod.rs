
pub mod command;
pub mod parser;

use std::io::{BufRead, Write};

use color_print::cformat;
use tracing::{debug, warn};

use crate::app::{Level, Notice};
use crate::model::normalize;
use crate::{Error, Result};
use command::{Command, HELP};
use parser::{ParseErr, Parser};

pub const DEFAULT_PROMPT: &str = "(lavanderos)> ";

/// What the shell drives. The panel controller is the only real host;
/// tests plug in their own.
pub trait Host {
    fn execute(&mut self, command: Command) -> Result<Reply>;

    /// Question to ask before running `command`, if it needs one.
    fn confirmation(&self, command: &Command) -> Option<String>;

    /// Text to print after `err` is reported, e.g. the page it moved to.
    fn after_failure(&self, _err: &Error) -> Option<String> {
        None
    }
}

/// Output of one command: an optional dialog and an optional block of text
/// (a table or a redrawn page).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    pub notice: Option<Notice>,
    pub text: Option<String>,
}

impl Reply {
    pub fn notice(notice: Notice) -> Self {
        Self { notice: Some(notice), text: None }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self { notice: None, text: Some(text.into()) }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Prompts, keeps going after failures.
    Interactive,
    /// No prompt; the first failure ends the run.
    Batch,
}

pub struct Shell<'a, T> where T: Host {
    host: &'a mut T,
    prompt: String,
    mode: Mode,
    assume_yes: bool,
}

impl<'a, T> Shell<'a, T> where T: Host {
    pub fn new(host: &'a mut T) -> Self {
        Self {
            host,
            prompt: String::from(DEFAULT_PROMPT),
            mode: Mode::Interactive,
            assume_yes: false,
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn start<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut parser = Parser {};
        let mut lines = input.lines();
        let mut number = 0;

        loop {
            self.print_prompt(out)?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            number += 1;

            let command = match parser.parse(&line) {
                Ok(command) => command,
                Err(ParseErr::EmptyLine) => continue,
                Err(err) => {
                    warn!("{:<12} - line {number}: {err}", "SHELL");
                    if self.mode == Mode::Batch {
                        return Err(Error::Parse { line: number, message: err.to_string() });
                    }
                    writeln!(out, "{}", cformat!("<red>[Error]</red> {}", err))?;
                    continue;
                }
            };

            match command {
                Command::Quit => return Ok(()),
                Command::Help => {
                    writeln!(out, "{HELP}")?;
                    continue;
                }
                _ => {}
            }

            if let Some(question) = self.host.confirmation(&command) {
                if !self.confirm(&question, &mut lines, out)? {
                    writeln!(out, "Operación cancelada.")?;
                    continue;
                }
            }

            debug!("{:<12} - line {number}: {command:?}", "SHELL");
            match self.host.execute(command) {
                Ok(reply) => self.print_reply(&reply, out)?,
                Err(err) => {
                    warn!("{:<12} - line {number}: {err}", "SHELL");
                    writeln!(
                        out,
                        "{}",
                        cformat!("<red>[{}]</red> {}", err.client_title(), err.client_message())
                    )?;
                    if let Some(text) = self.host.after_failure(&err) {
                        writeln!(out, "{text}")?;
                    }
                    if self.mode == Mode::Batch {
                        return Err(Error::Script { line: number, cause: Box::new(err) });
                    }
                }
            }
        }
    }

    fn print_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.mode == Mode::Interactive {
            write!(out, "{}", self.prompt)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Yes/no question. `--yes` answers for the user; batch runs without it
    /// decline.
    fn confirm<R: BufRead, W: Write>(
        &self,
        question: &str,
        lines: &mut std::io::Lines<R>,
        out: &mut W,
    ) -> Result<bool> {
        write!(out, "{question} [s/N] ")?;
        if self.assume_yes {
            writeln!(out, "s")?;
            return Ok(true);
        }
        if self.mode == Mode::Batch {
            writeln!(out, "n")?;
            return Ok(false);
        }
        out.flush()?;
        let answer = match lines.next() {
            Some(line) => line?,
            None => return Ok(false),
        };
        Ok(matches!(normalize(&answer).as_str(), "s" | "si" | "y" | "yes"))
    }

    fn print_reply<W: Write>(&self, reply: &Reply, out: &mut W) -> Result<()> {
        if let Some(notice) = &reply.notice {
            let title = match notice.level {
                Level::Info => cformat!("<green>[{}]</green>", notice.title),
                Level::Warning => cformat!("<yellow>[{}]</yellow>", notice.title),
            };
            writeln!(out, "{title} {}", notice.message)?;
        }
        if let Some(text) = &reply.text {
            writeln!(out, "{text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Records what it was asked to run; `OrderCancel` always needs a yes.
    #[derive(Default)]
    struct Recorder {
        executed: Vec<Command>,
    }

    impl Host for Recorder {
        fn execute(&mut self, command: Command) -> Result<Reply> {
            let reply = match &command {
                Command::OrderCancel { id } if id == "P404" => {
                    return Err(Error::EntityNotFound { entity: "pedido", id: id.clone() })
                }
                Command::Nav => Reply::text("🏠 Inicio | 📞 Contacto"),
                _ => Reply::notice(Notice::info("Ok", "hecho")),
            };
            self.executed.push(command);
            Ok(reply)
        }

        fn confirmation(&self, command: &Command) -> Option<String> {
            match command {
                Command::OrderCancel { id } => Some(format!("¿Cancelar {id}?")),
                _ => None,
            }
        }
    }

    fn run(host: &mut Recorder, mode: Mode, yes: bool, input: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = Shell::new(host).mode(mode).assume_yes(yes).start(Cursor::new(input), &mut out);
        (result, String::from_utf8_lossy(&out).to_string())
    }

    #[test]
    fn interactive_keeps_going_after_errors() {
        let mut host = Recorder::default();
        let (result, out) = run(&mut host, Mode::Interactive, false, "bailar\nnav\n\nquit\nnav\n");
        assert!(result.is_ok());
        assert!(out.starts_with(DEFAULT_PROMPT));
        assert!(out.contains("comando desconocido: bailar"));
        assert!(out.contains("🏠 Inicio | 📞 Contacto"));
        // nothing after quit runs
        assert_eq!(host.executed, vec![Command::Nav]);
    }

    #[test]
    fn interactive_confirmation_reads_next_line() {
        let mut host = Recorder::default();
        let (_, out) = run(&mut host, Mode::Interactive, false, "order cancel P001\nno\norder cancel P002\nsí\n");
        assert!(out.contains("¿Cancelar P001? [s/N]"));
        assert!(out.contains("Operación cancelada."));
        assert_eq!(host.executed, vec![Command::OrderCancel { id: "P002".to_string() }]);
    }

    #[test]
    fn batch_declines_unless_yes() {
        let mut host = Recorder::default();
        let (result, out) = run(&mut host, Mode::Batch, false, "order cancel P001\n");
        assert!(result.is_ok());
        assert!(!out.contains(DEFAULT_PROMPT));
        assert!(host.executed.is_empty());

        let (result, _) = run(&mut host, Mode::Batch, true, "# comentario\norder cancel P001\n");
        assert!(result.is_ok());
        assert_eq!(host.executed.len(), 1);
    }

    #[test]
    fn batch_stops_at_first_failure() {
        let mut host = Recorder::default();
        let (result, out) = run(&mut host, Mode::Batch, true, "nav\norder cancel P404\nnav\n");
        assert_eq!(
            result,
            Err(Error::Script {
                line: 2,
                cause: Box::new(Error::EntityNotFound { entity: "pedido", id: "P404".to_string() }),
            })
        );
        assert!(out.contains("No existe pedido con ID P404."));
        assert_eq!(host.executed, vec![Command::Nav]);

        let (result, _) = run(&mut host, Mode::Batch, true, "\n\ngo\n");
        assert!(matches!(result, Err(Error::Parse { line: 3, .. })));
    }
}

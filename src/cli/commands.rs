//! CLI Command Implementations
//!
//! The workbench loop: read a line, run it against the session, report.

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::error::Result;
use crate::ifs::format_ifs_codes;
use crate::input::{parse_command, Command};
use crate::render::{AsciiRenderer, Renderer};
use crate::session::{Outcome, Session};

const HELP: &str = "\
keys:     left up right down | a d s w z x | q e | c | - + | space | l | p | ctrl-r
commands: click X Y | pixel PX PY | nudge DIR | scale x|y|both grow|shrink
          rotate cw|ccw | recall | level up|down | confirm | by-level | spray | reset
meta:     codes [--json] | status | help | quit";

/// Interactive front end around one session
pub struct Workbench<W: Write> {
    session: Session,
    out: W,
    /// Preview size in characters; `None` disables drawing
    preview: Option<(usize, usize)>,
}

impl<W: Write> Workbench<W> {
    pub fn new(session: Session, out: W, preview: Option<(usize, usize)>) -> Self {
        Self {
            session,
            out,
            preview,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.out)
    }

    /// Process every line of `input` until it ends or `quit` is read
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!("Workbench started in {} stage", self.session.stage());
        for line in input.lines() {
            let line = line?;
            if !self.execute_line(&line)? {
                break;
            }
        }
        info!("Workbench finished in {} stage", self.session.stage());
        Ok(())
    }

    /// Run a single line. Returns `false` when the user asked to quit.
    pub fn execute_line(&mut self, line: &str) -> Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(true);
        }

        let tokens: Vec<String> = trimmed
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect();
        let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();

        match tokens.as_slice() {
            ["quit"] | ["exit"] => return Ok(false),
            ["help"] | ["?"] => {
                writeln!(self.out, "{}", HELP)?;
                return Ok(true);
            }
            ["status"] => {
                self.print_status()?;
                return Ok(true);
            }
            ["codes"] => {
                self.print_codes()?;
                return Ok(true);
            }
            ["codes", "--json"] => {
                let json = serde_json::to_string_pretty(&self.session.ifs_codes())?;
                writeln!(self.out, "{}", json)?;
                return Ok(true);
            }
            _ => {}
        }

        match parse_command(trimmed, self.session.config().canvas()) {
            Ok(command) => self.apply(command)?,
            Err(err) if err.is_recoverable() => {
                warn!("{}", err);
                writeln!(self.out, "error [{}]: {}", err.error_code(), err)?;
            }
            Err(err) => return Err(err),
        }
        Ok(true)
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        match self.session.handle(command) {
            Outcome::Ignored => {
                writeln!(
                    self.out,
                    "ignored: {} is not available in {} stage",
                    command.name(),
                    self.session.stage()
                )?;
            }
            Outcome::Applied => {
                if matches!(command, Command::ConfirmOrCommit) {
                    self.print_codes()?;
                }
                if matches!(command, Command::IncrementLevel | Command::DecrementLevel) {
                    writeln!(self.out, "Fractalization Levels : {}", self.session.level())?;
                }
                self.preview()?;
            }
        }
        Ok(())
    }

    fn preview(&mut self) -> Result<()> {
        if let Some((cols, rows)) = self.preview {
            let mut renderer = AsciiRenderer::new(&mut self.out, cols, rows);
            renderer.render(&self.session.frame())?;
        }
        Ok(())
    }

    fn print_codes(&mut self) -> Result<()> {
        let codes = self.session.ifs_codes();
        if codes.is_empty() {
            writeln!(self.out, "(no clones placed)")?;
        } else {
            write!(self.out, "{}", format_ifs_codes(&codes))?;
        }
        Ok(())
    }

    fn print_status(&mut self) -> Result<()> {
        let session = &self.session;
        writeln!(self.out, "Stage : {}", session.stage())?;
        writeln!(self.out, "Seed Vertices : {}", session.seed().len())?;
        writeln!(self.out, "Clones : {}", session.transforms().len())?;
        writeln!(self.out, "Fractalization Levels : {}", session.level())?;
        writeln!(self.out, "Vertex Count : {}", session.vertex_count())?;
        Ok(())
    }
}

//! The read-resolve-dispatch loop.
//!
//! Each cycle prints the prompt, reads one line, resolves it to a command and
//! runs the handler. Local errors are printed and the loop carries on; fatal
//! ones (out of memory, a broken output stream) end the loop with `Err`.

use crate::command::{parse_line, CommandRegistry, Reply};
use crate::context::SessionContext;
use crate::error::{ShellError, ShellResult};
use crate::input::LineReader;
use std::io::{BufRead, Write};

pub const PROMPT: &str = " > ";

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

pub struct Shell<R, W> {
    reader: LineReader<R>,
    out: W,
    ctx: SessionContext,
    registry: CommandRegistry,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(ctx: SessionContext, registry: CommandRegistry, input: R, out: W) -> Self {
        Self::with_reader(ctx, registry, LineReader::new(input), out)
    }

    pub fn with_reader(
        ctx: SessionContext,
        registry: CommandRegistry,
        reader: LineReader<R>,
        out: W,
    ) -> Self {
        Self {
            reader,
            out,
            ctx,
            registry,
        }
    }

    /// Run until `quit`, end of input, or a fatal error.
    pub fn run(&mut self) -> ShellResult<()> {
        while self.step()? == Step::Continue {}
        self.out.flush()?;
        Ok(())
    }

    /// One prompt cycle.
    pub fn step(&mut self) -> ShellResult<Step> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()?;

        let Some(line) = self.reader.read_line()? else {
            log::debug!("end of input");
            writeln!(self.out)?;
            return Ok(Step::Stop);
        };

        let (mode, args) = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                if let ShellError::WrongArgumentCount { command, expected, found } = &e {
                    log::debug!("'{}' takes {} words, got {}", command, expected, found);
                } else {
                    log::debug!("no command matches {:?}", line);
                }
                self.report(&e)?;
                return Ok(Step::Continue);
            }
        };
        drop(line);

        match self.registry.dispatch(mode, &args, &mut self.ctx) {
            Ok(Reply::Quit) => Ok(Step::Stop),
            Ok(Reply::Output(text)) => {
                if !text.is_empty() {
                    writeln!(self.out, "{}", text)?;
                }
                Ok(Step::Continue)
            }
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                self.report(&e)?;
                Ok(Step::Continue)
            }
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn report(&mut self, err: &ShellError) -> ShellResult<()> {
        writeln!(self.out, "{}", err.report_line())?;
        Ok(())
    }
}

use bmpshell::{CanvasSize, CommandRegistry, SessionContext, Shell, ShellError};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "bmpshell",
    version,
    about = "Interactive shell for layering BMP images onto a canvas"
)]
struct Cli {
    /// Canvas width and height in pixels
    #[arg(value_name = "WIDTH HEIGHT", allow_hyphen_values = true)]
    canvas: Vec<String>,

    #[arg(long, default_value = "warn", help = "Log filter used when RUST_LOG is not set")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            let raw: Vec<String> = std::env::args().skip(1).collect();
            return fail(&rejected_args(&raw));
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let canvas = match CanvasSize::from_args(&cli.canvas) {
        Ok(canvas) => canvas,
        Err(e) => {
            log::debug!("rejected canvas arguments {:?}", cli.canvas);
            return fail(&e);
        }
    };
    log::info!("starting with a {} canvas", canvas);

    let ctx = SessionContext::new(canvas);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = writeln!(out, "{}", ctx.banner()) {
        return fail(&ShellError::Io(e));
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(ctx, CommandRegistry::default_commands(), stdin.lock(), out);
    let result = shell.run();
    drop(shell);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("shell stopped: {:?}", e);
            fail(&e)
        }
    }
}

/// Error for arguments clap refused. Two dash-led values are still a
/// canvas size, just an invalid one.
fn rejected_args(raw: &[String]) -> ShellError {
    match CanvasSize::from_args(raw) {
        Err(e) => e,
        Ok(_) => ShellError::WrongParameterCount,
    }
}

fn fail(err: &ShellError) -> ExitCode {
    report(&mut io::stdout(), err);
    ExitCode::from(err.exit_code())
}

/// Print the error line; a failed write is only logged since we exit next.
fn report<W: Write>(out: &mut W, err: &ShellError) -> bool {
    match writeln!(out, "{}", err.report_line()) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("could not report {:?}: {}", err, e);
            false
        }
    }
}

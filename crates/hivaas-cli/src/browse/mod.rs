//! Interactive, line-driven browse session over stdin.

mod command;
mod session;

use std::io::{self, BufRead, Write};

use hivaas_core::{AppConfig, CatalogStore};

use self::command::BrowseCommand;
use self::session::{Session, Step};

/// Reads commands from stdin until `quit` or end of input.
///
/// # Errors
///
/// Returns an error only if stdin or stdout fail.
pub(crate) fn run_browse(store: CatalogStore, config: &AppConfig) -> anyhow::Result<()> {
    let mut session = Session::new(store, config.clone());
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write!(stdout, "{}", session.page())?;
    writeln!(stdout, "Type `help` for commands.")?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let cmd = match BrowseCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "{e:#}")?;
                continue;
            }
        };
        match session.execute(cmd) {
            Step::Continue(out) => write!(stdout, "{out}")?,
            Step::Quit => break,
        }
    }
    writeln!(stdout)?;
    Ok(())
}

//! Interactive session on the terminal.

use std::io::{self, IsTerminal};

use chameleon_core::GameConfig;
use tracing::debug;

use crate::repl::{self, EditorSource, LineSource, ReaderSource};

pub fn run(config: GameConfig) -> Result<(), String> {
    let mut game = super::new_game(config)?;

    // Line editing only makes sense on a terminal; piped input is read as-is.
    let mut source: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(EditorSource::new()?)
    } else {
        Box::new(ReaderSource::new(io::stdin().lock()))
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let termination = repl::run(&mut game, source.as_mut(), &mut out)?;
    debug!(?termination, "interactive session finished");

    Ok(())
}

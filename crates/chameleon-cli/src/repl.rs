//! The interactive read-eval loop.
//!
//! Reads one line per turn, normalises it and dispatches it to the engine and
//! renderers until the player quits or the input ends.

use std::io::{self, BufRead, Write};

use chameleon_core::ChameleonGame;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use crate::render;

const PROMPT: &str = "> ";

/// A parsed interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deal a new topic and roll both dice.
    Roll,
    /// Show roll statistics.
    Stats,
    /// Show the command list.
    Help,
    /// End the session. Accepts `quit`, `exit` and `q`.
    Quit,
    /// A blank line.
    Empty,
    /// Anything else, holding the trimmed input.
    Unknown(String),
}

impl Command {
    /// Parse a line of input, ignoring surrounding whitespace and case.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Self::Empty,
            "roll" => Self::Roll,
            "stats" => Self::Stats,
            "help" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The player typed a quit command.
    Quit,
    /// The input stream ended.
    EndOfInput,
    /// The read was interrupted.
    Interrupted,
}

/// One read from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, without any guarantee about trailing whitespace.
    Line(String),
    /// The input stream ended.
    EndOfInput,
    /// The read was interrupted (Ctrl-C).
    Interrupted,
}

/// Where the loop reads its commands from.
pub trait LineSource {
    /// Show `prompt` and block until the next line, end of input or interrupt.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Input>;
}

/// Reads lines from any buffered reader, writing the prompt to the output.
///
/// Used for piped stdin and tests.
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Input> {
        write!(out, "{prompt}")?;
        out.flush()?;

        // Invalid UTF-8 becomes replacement characters, not a read error.
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf)? {
            0 => Ok(Input::EndOfInput),
            _ => Ok(Input::Line(String::from_utf8_lossy(&self.buf).into_owned())),
        }
    }
}

/// Line editor for an interactive terminal, with history and Ctrl-C/Ctrl-D
/// handling.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    /// Create a line editor bound to the terminal.
    pub fn new() -> Result<Self, String> {
        let editor = DefaultEditor::new().map_err(|e| format!("failed to open terminal: {e}"))?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Input> {
        out.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!(error = %e, "failed to record history entry");
                    }
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Eof) => Ok(Input::EndOfInput),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

/// Run the loop until it terminates.
///
/// Shows the current grid and dice once before the first prompt.
pub fn run<S, W>(
    game: &mut ChameleonGame,
    source: &mut S,
    out: &mut W,
) -> Result<Termination, String>
where
    S: LineSource + ?Sized,
    W: Write,
{
    render::grid(out, game.state()).map_err(|e| e.to_string())?;
    render::dice(out, game.state(), None, None).map_err(|e| e.to_string())?;
    writeln!(out, "  Type 'help' for commands, 'quit' to exit.\n").map_err(|e| e.to_string())?;

    let termination = loop {
        let line = match source.read_line(PROMPT, out).map_err(|e| e.to_string())? {
            Input::Line(line) => line,
            Input::EndOfInput => break Termination::EndOfInput,
            Input::Interrupted => break Termination::Interrupted,
        };

        let command = Command::parse(&line);
        debug!(?command, "dispatching");
        match command {
            Command::Quit => break Termination::Quit,
            Command::Empty => continue,
            command => dispatch(game, &command, out)?,
        }
    };

    if termination != Termination::Quit {
        // Keep the farewell off the unanswered prompt line.
        writeln!(out).map_err(|e| e.to_string())?;
    }
    writeln!(out, "  {}", "Goodbye!".bold()).map_err(|e| e.to_string())?;
    info!(?termination, "session ended");
    Ok(termination)
}

fn dispatch<W: Write>(
    game: &mut ChameleonGame,
    command: &Command,
    out: &mut W,
) -> Result<(), String> {
    match command {
        Command::Roll => {
            game.reshuffle_topic()
                .map_err(|e| format!("failed to deal a new topic: {e}"))?;
            let (d6, d8) = game.roll_both_dice();
            render::grid(out, game.state()).map_err(|e| e.to_string())?;
            render::dice(out, game.state(), Some(d6), Some(d8)).map_err(|e| e.to_string())?;
        }
        Command::Stats => render::statistics(out, game.state()).map_err(|e| e.to_string())?,
        Command::Help => render::help(out).map_err(|e| e.to_string())?,
        Command::Unknown(input) => {
            let msg = format!("Unknown command: '{input}'. Type 'help' for commands.");
            writeln!(out, "  {}", msg.yellow()).map_err(|e| e.to_string())?;
        }
        Command::Quit | Command::Empty => {}
    }
    writeln!(out).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chameleon_core::GameConfig;
    use std::io::Cursor;

    fn test_game() -> ChameleonGame {
        ChameleonGame::new(GameConfig::default().with_seed(42)).unwrap()
    }

    fn run_script(game: &mut ChameleonGame, script: &str) -> (Termination, String) {
        run_bytes(game, script.as_bytes())
    }

    fn run_bytes(game: &mut ChameleonGame, script: &[u8]) -> (Termination, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut source = ReaderSource::new(Cursor::new(script.to_vec()));
        let termination = run(game, &mut source, &mut out).unwrap();
        (termination, String::from_utf8(out).unwrap())
    }

    /// Source that reports an interrupt on the first read.
    struct InterruptedSource;

    impl LineSource for InterruptedSource {
        fn read_line(&mut self, _prompt: &str, _out: &mut dyn Write) -> io::Result<Input> {
            Ok(Input::Interrupted)
        }
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("roll"), Command::Roll);
        assert_eq!(Command::parse("  ROLL \n"), Command::Roll);
        assert_eq!(Command::parse("Stats"), Command::Stats);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("EXIT"), Command::Quit);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(
            Command::parse(" Dance "),
            Command::Unknown("Dance".to_string())
        );
    }

    #[test]
    fn quit_immediately() {
        let mut game = test_game();
        let (termination, out) = run_script(&mut game, "quit\n");
        assert_eq!(termination, Termination::Quit);
        assert!(out.contains("Goodbye!"));
        assert_eq!(out.matches("> ").count(), 1);
    }

    #[test]
    fn initial_render_before_prompt() {
        let mut game = test_game();
        let (_, out) = run_script(&mut game, "quit\n");
        let prompt = out.find("> ").unwrap();
        let topic = out.find("Topic:").unwrap();
        let dice = out.find("d6: 1").unwrap();
        assert!(topic < prompt);
        assert!(dice < prompt);
    }

    #[test]
    fn roll_then_quit() {
        let mut game = test_game();
        let (termination, out) = run_script(&mut game, "roll\nquit\nstats\n");
        assert_eq!(termination, Termination::Quit);

        let state = game.state();
        assert_eq!(state.reshuffles, 1);
        assert_eq!(state.d6_stats.total(), 1);
        assert_eq!(state.d8_stats.total(), 1);

        // initial render plus one turn
        assert_eq!(out.matches("Topic:").count(), 2);
        assert_eq!(out.matches("d6: ").count(), 2);
        assert!(out.contains(&format!("d6: {}", state.d6_value)));
        assert!(out.contains(&format!("d8: {}", state.d8_value)));

        // nothing after quit is processed
        assert_eq!(out.matches("> ").count(), 2);
        assert!(!out.contains("Roll Statistics"));
    }

    #[test]
    fn unknown_command() {
        let mut game = test_game();
        let (termination, out) = run_script(&mut game, "unknown\nquit\n");
        assert_eq!(termination, Termination::Quit);
        assert_eq!(out.matches("Unknown command").count(), 1);
        assert!(out.contains("Unknown command: 'unknown'"));
    }

    #[test]
    fn invalid_utf8_is_an_unknown_command() {
        let mut game = test_game();
        let (termination, out) = run_bytes(&mut game, b"\xff\xfe\nstats\nquit\n");
        assert_eq!(termination, Termination::Quit);
        assert_eq!(out.matches("Unknown command").count(), 1);
        assert!(out.contains("No rolls yet"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn stats_without_rolls() {
        let mut game = test_game();
        let (_, out) = run_script(&mut game, "stats\nquit\n");
        assert!(out.contains("No rolls yet"));
    }

    #[test]
    fn stats_after_roll() {
        let mut game = test_game();
        let (_, out) = run_script(&mut game, "roll\nstats\nq\n");
        assert!(out.contains("Roll Statistics"));
        assert_eq!(out.matches("Total rolls: 1").count(), 2);
    }

    #[test]
    fn help_command() {
        let mut game = test_game();
        let (_, out) = run_script(&mut game, "help\nexit\n");
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn blank_lines_reprompt() {
        let mut game = test_game();
        let (_, out) = run_script(&mut game, "\n   \nquit\n");
        assert_eq!(out.matches("> ").count(), 3);
        assert!(!out.contains("Unknown command"));
    }

    #[test]
    fn end_of_input_terminates() {
        let mut game = test_game();
        let (termination, out) = run_script(&mut game, "roll\n");
        assert_eq!(termination, Termination::EndOfInput);
        assert!(out.contains("Goodbye!"));
        assert_eq!(game.state().reshuffles, 1);
    }

    #[test]
    fn interrupt_terminates() {
        colored::control::set_override(false);
        let mut game = test_game();
        let mut out = Vec::new();
        let termination = run(&mut game, &mut InterruptedSource, &mut out).unwrap();
        assert_eq!(termination, Termination::Interrupted);
        assert!(String::from_utf8(out).unwrap().contains("Goodbye!"));
    }
}

//! Line-oriented console front end.
//!
//! Reads one command per line and answers on the output stream. Input is
//! handled strictly one command at a time, so every action is fully
//! resolved and printed before the next line is read.
//!
//! | Input | Effect |
//! |-------|--------|
//! | `d`, `draw` | current player draws |
//! | `p`, `play` | current player plays |
//! | `r`, `restart` | new game (only once the game is over) |
//! | `s`, `status` | print the board |
//! | `h`, `help` | list commands |
//! | `q`, `quit` | leave |

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::core::Action;

use super::table::Table;

/// A parsed console command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Draw,
    Play,
    Restart,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Case and surrounding whitespace are ignored.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "d" | "draw" => Some(Command::Draw),
            "p" | "play" => Some(Command::Play),
            "r" | "restart" => Some(Command::Restart),
            "s" | "status" => Some(Command::Status),
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "Commands: [d]raw, [p]lay, [s]tatus, [r]estart, [h]elp, [q]uit";
const PROMPT_ACTION: &str = "Draw or play? (d/p)";
const PROMPT_RESTART: &str = "Type r to restart or q to quit";

/// Run the console until `quit` or end of input.
pub fn run(table: &mut Table, input: &mut dyn BufRead, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", table.board())?;
    prompt(table, out)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = Command::parse(&line) else {
            writeln!(out, "Unknown command {:?}. {HELP}", line.trim())?;
            continue;
        };
        debug!(?command, "console command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Status => writeln!(out, "{}", table.board())?,
            Command::Draw | Command::Play => {
                if table.state().is_over() {
                    writeln!(out, "The game is over. {PROMPT_RESTART}")?;
                    continue;
                }
                let action = if command == Command::Draw { Action::Draw } else { Action::Play };
                match table.act(action) {
                    Ok(report) => {
                        writeln!(out, "{}", report.log)?;
                        if !report.record.outcome.ends_turn() {
                            let name = table.state().roster().name(report.record.player).unwrap_or("?");
                            writeln!(out, "{name} goes again.")?;
                        }
                        writeln!(out, "{}", table.board())?;
                    }
                    Err(e) => writeln!(out, "{e}")?,
                }
                prompt(table, out)?;
            }
            Command::Restart => {
                if !table.state().is_over() {
                    writeln!(out, "The game is still running. {PROMPT_ACTION}")?;
                    continue;
                }
                table.reset();
                writeln!(out, "{}", table.board())?;
                prompt(table, out)?;
            }
        }
    }

    out.flush()
}

fn prompt(table: &Table, out: &mut dyn Write) -> io::Result<()> {
    if table.state().is_over() {
        writeln!(out, "{PROMPT_RESTART}")
    } else {
        writeln!(out, "{PROMPT_ACTION}")
    }
}

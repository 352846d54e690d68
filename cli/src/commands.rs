use puzzle2048_common::puzzle2048::{Direction, direction_from_key};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    NewGame,
    Continue,
    Help,
    Quit,
}

pub const HELP: &str = "Moves: w/a/s/d or up/left/down/right. n: new game, c: continue after a win, h: help, q: quit";

pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "" => None,
        "q" | "quit" | "exit" => Some(Command::Quit),
        "n" | "new" => Some(Command::NewGame),
        "c" | "continue" => Some(Command::Continue),
        "h" | "help" | "?" => Some(Command::Help),
        _ => direction_from_key(input).map(Command::Move),
    }
}

use std::io::{self, BufRead, Write};

use puzzle2048_common::config::ConfigContentProvider;
use puzzle2048_common::log;
use puzzle2048_common::puzzle2048::{GameStatus, Puzzle2048GameState};
use puzzle2048_common::storage::BestScoreStore;
use puzzle2048_common::TileRng;

use crate::commands::{Command, HELP, parse_command};
use crate::render::Renderer;

pub struct App<'a, P: ConfigContentProvider, R: TileRng> {
    game: Puzzle2048GameState,
    rng: &'a mut R,
    best_scores: &'a BestScoreStore<P>,
    best_score: u64,
    renderer: Renderer,
}

impl<'a, P: ConfigContentProvider, R: TileRng> App<'a, P, R> {
    pub fn new(
        game: Puzzle2048GameState,
        rng: &'a mut R,
        best_scores: &'a BestScoreStore<P>,
        renderer: Renderer,
    ) -> Self {
        let best_score = best_scores.best_score();
        Self {
            game,
            rng,
            best_scores,
            best_score,
            renderer,
        }
    }

    pub fn game(&self) -> &Puzzle2048GameState {
        &self.game
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, output: &mut O) -> io::Result<()> {
        writeln!(output, "{}", HELP)?;
        self.draw(output)?;

        for line in input.lines() {
            let line = line?;
            let Some(command) = parse_command(&line) else {
                writeln!(output, "Unknown command {:?}. {}", line.trim(), HELP)?;
                continue;
            };

            match command {
                Command::Quit => break,
                Command::Help => writeln!(output, "{}", HELP)?,
                Command::NewGame => {
                    self.game.reset(&mut *self.rng);
                    log!("New game started");
                    self.draw(output)?;
                }
                Command::Continue => {
                    if self.game.continue_playing() {
                        log!("Continuing after reaching {}", self.game.target_value());
                        self.draw(output)?;
                    } else {
                        writeln!(output, "Nothing to continue")?;
                    }
                }
                Command::Move(direction) => {
                    if !self.game.apply_move(direction, &mut *self.rng) {
                        continue;
                    }
                    self.update_best_score();
                    self.draw(output)?;
                    self.announce(output)?;
                }
            }
        }

        Ok(())
    }

    fn update_best_score(&mut self) {
        let score = self.game.score();
        if score <= self.best_score {
            return;
        }
        self.best_score = score;
        if let Err(e) = self.best_scores.record(score) {
            log!("Failed to save best score: {}", e);
        }
    }

    fn draw<O: Write>(&self, output: &mut O) -> io::Result<()> {
        let text = self
            .renderer
            .render(self.game.board(), self.game.score(), self.best_score);
        write!(output, "{}", text)?;
        output.flush()
    }

    fn announce<O: Write>(&self, output: &mut O) -> io::Result<()> {
        match self.game.status() {
            GameStatus::Won => {
                log!("Reached {} after {} moves", self.game.target_value(), self.game.moves_made());
                writeln!(
                    output,
                    "You reached {}! Type c to keep playing or n for a new game.",
                    self.game.target_value()
                )
            }
            GameStatus::Lost => {
                log!(
                    "Game over: score {}, highest tile {}, {} moves",
                    self.game.score(),
                    self.game.highest_tile(),
                    self.game.moves_made()
                );
                writeln!(
                    output,
                    "Game over! Final score: {}. Type n to play again.",
                    self.game.score()
                )
            }
            GameStatus::InProgress => Ok(()),
        }
    }
}

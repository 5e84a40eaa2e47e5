use super::bot_controller::select_move;
use super::difficulty::Difficulty;
use super::error::SessionError;
use super::game_state::Round;
use super::scoreboard::{Outcome, Scoreboard};
use super::session_rng::SessionRng;
use super::types::{Mark, RoundStatus};

/// A human side playing successive rounds against the computer.
pub struct MatchSession {
    round: Round,
    difficulty: Difficulty,
    player_mark: Mark,
    computer_mark: Mark,
    scoreboard: Scoreboard,
    rng: SessionRng,
}

impl MatchSession {
    pub fn new(difficulty: Difficulty, player_mark: Mark, rng: SessionRng) -> Self {
        Self {
            round: Round::new(),
            difficulty,
            player_mark,
            computer_mark: player_mark.opponent(),
            scoreboard: Scoreboard::new(),
            rng,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_mark(&self) -> Mark {
        self.player_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_player_turn(&self) -> bool {
        !self.round.status().is_over() && self.round.current_mark() == self.player_mark
    }

    pub fn player_move(&mut self, index: isize) -> Result<RoundStatus, SessionError> {
        let status = self.round.apply(index, self.player_mark)?;
        self.record_if_over(status);
        Ok(status)
    }

    pub fn computer_move(&mut self) -> Result<usize, SessionError> {
        let index = select_move(
            self.round.board(),
            self.difficulty,
            self.computer_mark,
            self.player_mark,
            &mut self.rng,
        )?;
        let status = self.round.apply(index as isize, self.computer_mark)?;
        self.record_if_over(status);
        Ok(index)
    }

    pub fn next_round(&mut self) {
        self.round.reset();
        crate::log!("Round started ({}), {}", self.difficulty, self.scoreboard);
    }

    pub fn new_game(&mut self) {
        self.scoreboard.reset();
        self.round.reset();
        crate::log!("New game started ({})", self.difficulty);
    }

    /// Switching tiers abandons the current round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.round.reset();
        crate::log!("Difficulty set to {}", difficulty);
    }

    fn record_if_over(&mut self, status: RoundStatus) {
        let outcome = match status {
            RoundStatus::InProgress => return,
            RoundStatus::Won(mark) if mark == self.player_mark => Outcome::PlayerWin,
            RoundStatus::Won(_) => Outcome::ComputerWin,
            RoundStatus::Drawn => Outcome::Draw,
        };
        self.scoreboard.record(outcome);
        crate::log!("Round over: {:?}. {}", outcome, self.scoreboard);
    }
}

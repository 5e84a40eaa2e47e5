use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    PlayerAhead,
    Even,
    ComputerAhead,
}

/// Running tally across rounds; survives `next_round`, cleared by `new_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.player_wins + self.computer_wins + self.draws
    }

    pub fn player_win_rate(&self) -> f64 {
        self.rate(self.player_wins)
    }

    pub fn computer_win_rate(&self) -> f64 {
        self.rate(self.computer_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    pub fn standing(&self) -> Standing {
        match self.player_wins.cmp(&self.computer_wins) {
            std::cmp::Ordering::Greater => Standing::PlayerAhead,
            std::cmp::Ordering::Equal => Standing::Even,
            std::cmp::Ordering::Less => Standing::ComputerAhead,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn rate(&self, count: u32) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(count) / f64::from(total) * 100.0
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player: {} | Computer: {} | Draws: {} | Win Rate: {:.1}%",
            self.player_wins,
            self.computer_wins,
            self.draws,
            self.player_win_rate()
        )
    }
}

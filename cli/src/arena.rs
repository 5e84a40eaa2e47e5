use std::fmt;

use crate::config::ArenaConfig;
use tictactoe_engine::{
    Difficulty, Mark, Round, RoundStatus, SessionError, SessionRng, log, select_move,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ArenaTally {
    fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won(Mark::X) => self.x_wins += 1,
            RoundStatus::Won(Mark::O) => self.o_wins += 1,
            RoundStatus::Drawn => self.draws += 1,
            RoundStatus::InProgress => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for ArenaTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X wins: {} | O wins: {} | Draws: {} | Rounds: {}",
            self.x_wins,
            self.o_wins,
            self.draws,
            self.total()
        )
    }
}

pub fn play_round(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<RoundStatus, SessionError> {
    let mut round = Round::new();

    while !round.status().is_over() {
        let mark = round.current_mark();
        let difficulty = match mark {
            Mark::X => x_difficulty,
            Mark::O => o_difficulty,
        };
        let index = select_move(round.board(), difficulty, mark, mark.opponent(), rng)?;
        round.apply(index as isize, mark)?;
    }

    Ok(round.status())
}

pub fn run_arena(settings: &ArenaConfig, rng: &mut SessionRng) -> Result<ArenaTally, SessionError> {
    log!(
        "Arena: X={} vs O={}, {} rounds, seed {}",
        settings.x_difficulty,
        settings.o_difficulty,
        settings.rounds,
        rng.seed()
    );

    let mut tally = ArenaTally::default();
    for _ in 0..settings.rounds {
        let status = play_round(settings.x_difficulty, settings.o_difficulty, rng)?;
        tally.record(status);
    }

    log!("Arena finished: {}", tally);
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expert_mirror_always_draws() {
        let settings = ArenaConfig {
            x_difficulty: Difficulty::Expert,
            o_difficulty: Difficulty::Expert,
            rounds: 2,
            seed: None,
        };
        let tally = run_arena(&settings, &mut SessionRng::new(5)).unwrap();
        assert_eq!(tally, ArenaTally { x_wins: 0, o_wins: 0, draws: 2 });
    }

    #[test]
    fn test_expert_never_loses_to_easy() {
        let settings = ArenaConfig {
            x_difficulty: Difficulty::Easy,
            o_difficulty: Difficulty::Expert,
            rounds: 20,
            seed: None,
        };
        let tally = run_arena(&settings, &mut SessionRng::new(17)).unwrap();
        assert_eq!(tally.total(), 20);
        assert_eq!(tally.x_wins, 0);
    }

    #[test]
    fn test_hard_mirror_is_deterministic_draw() {
        let mut rng = SessionRng::new(0);
        assert_eq!(
            play_round(Difficulty::Hard, Difficulty::Hard, &mut rng),
            Ok(RoundStatus::Drawn)
        );
    }

    #[test]
    fn test_tally_display() {
        let tally = ArenaTally { x_wins: 3, o_wins: 1, draws: 2 };
        assert_eq!(tally.to_string(), "X wins: 3 | O wins: 1 | Draws: 2 | Rounds: 6");
    }
}

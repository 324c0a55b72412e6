use super::report::Report;
use super::showdown::Showdown;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::ruleset::Ruleset;
use crate::cards::strength::Strength;
use crate::error::Error;
use rand::Rng;

/// Bounds on a simulation run.
pub const MIN_GAMES: usize = 1;
pub const MAX_GAMES: usize = 20;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// One game's outcome: every seat's hand and score, plus the winner set.
///
/// `winners` holds every tied-best seat index; it is never empty for a
/// played game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub hands: Vec<Hand>,
    pub strengths: Vec<Strength>,
    pub winners: Vec<usize>,
}

/// A fixed batch of games against one ruleset.
///
/// The session takes its counts as already-validated integers; anything out
/// of bounds is a configuration error, never a prompt. Re-prompting lives
/// in the binaries' input layer.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    ruleset: Ruleset,
    games: usize,
}

impl Session {
    pub fn new(ruleset: Ruleset, games: usize) -> Result<Self, Error> {
        if !(MIN_GAMES..=MAX_GAMES).contains(&games) {
            return Err(Error::Configuration(format!(
                "game count {} outside {}..={}",
                games, MIN_GAMES, MAX_GAMES
            )));
        }
        Ok(Self { ruleset, games })
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }
    pub fn games(&self) -> usize {
        self.games
    }

    /// Deals and scores one game for the given seat count.
    pub fn game<R: Rng>(&self, players: usize, rng: &mut R) -> Result<GameResult, Error> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(Error::Configuration(format!(
                "player count {} outside {}..={}",
                players, MIN_PLAYERS, MAX_PLAYERS
            )));
        }
        let mut deck = Deck::new(self.ruleset);
        deck.shuffle(rng);
        let hands = deck.deal(players)?;
        let strengths = hands
            .iter()
            .map(|hand| hand.strength(self.ruleset))
            .collect::<Vec<_>>();
        let winners = Showdown::from(strengths.clone()).winners();
        log::debug!("{} seats, winners {:?}", players, winners);
        Ok(GameResult {
            hands,
            strengths,
            winners,
        })
    }

    /// Plays the whole session, one seat count per game, forwarding each
    /// result to the reporter. Seat counts are validated up front so a bad
    /// one fails the run before any deal.
    pub fn play<R: Rng>(
        &self,
        seats: &[usize],
        rng: &mut R,
        report: &mut dyn Report,
    ) -> Result<(), Error> {
        if seats.len() != self.games {
            return Err(Error::Configuration(format!(
                "{} seat counts supplied for {} games",
                seats.len(),
                self.games
            )));
        }
        if let Some(&players) = seats
            .iter()
            .find(|players| !(MIN_PLAYERS..=MAX_PLAYERS).contains(*players))
        {
            return Err(Error::Configuration(format!(
                "player count {} outside {}..={}",
                players, MIN_PLAYERS, MAX_PLAYERS
            )));
        }
        report.begin(self.games)?;
        for (game, &players) in seats.iter().enumerate() {
            let result = self.game(players, rng)?;
            report.game(game + 1, &result)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Recording {
        begun: Option<usize>,
        games: Vec<GameResult>,
    }
    impl Report for Recording {
        fn begin(&mut self, games: usize) -> std::io::Result<()> {
            self.begun = Some(games);
            Ok(())
        }
        fn game(&mut self, _game: usize, result: &GameResult) -> std::io::Result<()> {
            self.games.push(result.clone());
            Ok(())
        }
    }

    #[test]
    fn game_count_bounds() {
        assert!(Session::new(Ruleset::Standard, 0).is_err());
        assert!(Session::new(Ruleset::Standard, 21).is_err());
        assert!(Session::new(Ruleset::Standard, 1).is_ok());
        assert!(Session::new(Ruleset::Standard, 20).is_ok());
    }

    #[test]
    fn player_count_bounds() {
        let session = Session::new(Ruleset::Standard, 1).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(1);
        assert!(session.game(1, rng).is_err());
        assert!(session.game(7, rng).is_err());
        assert!(session.game(2, rng).is_ok());
        assert!(session.game(6, rng).is_ok());
    }

    #[test]
    fn bad_seat_list_fails_before_dealing() {
        let session = Session::new(Ruleset::Standard, 2).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(1);
        let ref mut report = Recording::default();
        let result = session.play(&[4, 9], rng, report);
        assert!(matches!(result, Err(Error::Configuration(_))));
        assert!(report.begun.is_none());
        assert!(report.games.is_empty());
    }

    #[test]
    fn seat_list_length_must_match_games() {
        let session = Session::new(Ruleset::Standard, 3).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(1);
        let ref mut report = Recording::default();
        assert!(session.play(&[2, 2], rng, report).is_err());
    }

    #[test]
    fn every_game_reaches_the_reporter() {
        let session = Session::new(Ruleset::Widget, 5).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(9);
        let ref mut report = Recording::default();
        session.play(&[2, 3, 4, 5, 6], rng, report).unwrap();
        assert_eq!(report.begun, Some(5));
        assert_eq!(report.games.len(), 5);
        for (result, players) in report.games.iter().zip([2usize, 3, 4, 5, 6]) {
            assert_eq!(result.hands.len(), players);
            assert_eq!(result.strengths.len(), players);
            assert!(!result.winners.is_empty());
            assert!(result.winners.iter().all(|&w| w < players));
        }
    }

    #[test]
    fn dealt_cards_never_repeat_within_a_game() {
        let session = Session::new(Ruleset::Standard, 1).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(13);
        let result = session.game(6, rng).unwrap();
        let unique = result
            .hands
            .iter()
            .flat_map(|hand| hand.cards())
            .collect::<HashSet<_>>();
        assert_eq!(unique.len(), 30);
    }

    #[test]
    fn winners_hold_the_best_strength() {
        let session = Session::new(Ruleset::Standard, 1).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(21);
        let result = session.game(4, rng).unwrap();
        let best = result.strengths.iter().max().unwrap();
        for (seat, strength) in result.strengths.iter().enumerate() {
            assert_eq!(result.winners.contains(&seat), strength == best);
        }
    }

    #[test]
    fn seeded_games_reproduce() {
        let session = Session::new(Ruleset::Standard, 1).unwrap();
        let a = session.game(4, &mut SmallRng::seed_from_u64(5)).unwrap();
        let b = session.game(4, &mut SmallRng::seed_from_u64(5)).unwrap();
        assert_eq!(a.hands, b.hands);
        assert_eq!(a.winners, b.winners);
    }
}

use super::session::GameResult;
use super::trial::Tally;
use crate::cards::ruleset::Ruleset;
use std::io;
use std::io::Write;

/// Reporting capability handed to the driver.
///
/// The driver forwards structured results only; formatting and destination
/// belong to the implementation. Methods default to no-ops so a reporter
/// implements just the mode it cares about.
pub trait Report {
    /// Called once before the first game of a session.
    fn begin(&mut self, games: usize) -> io::Result<()> {
        let _ = games;
        Ok(())
    }
    /// Called after each game with its full outcome. Games number from 1.
    fn game(&mut self, game: usize, result: &GameResult) -> io::Result<()> {
        let _ = (game, result);
        Ok(())
    }
    /// Called once with the finished probability tally.
    fn tally(&mut self, tally: &Tally) -> io::Result<()> {
        let _ = tally;
        Ok(())
    }
}

/// Plain-text report: a frequency table for probability runs, per-game
/// player and winner blocks for sessions.
pub struct TextReport<W> {
    ruleset: Ruleset,
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(ruleset: Ruleset, out: W) -> Self {
        Self { ruleset, out }
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for TextReport<W> {
    fn begin(&mut self, games: usize) -> io::Result<()> {
        writeln!(self.out, "{} games of {} will be played!", games, self.ruleset)?;
        writeln!(self.out, "===========================")
    }

    fn game(&mut self, game: usize, result: &GameResult) -> io::Result<()> {
        writeln!(self.out, "Game #{} ({} players)", game, result.hands.len())?;
        for (seat, (hand, strength)) in result.hands.iter().zip(&result.strengths).enumerate() {
            writeln!(self.out)?;
            writeln!(self.out, "Player {} ({})", seat + 1, strength.ranking())?;
            for card in hand.cards() {
                writeln!(self.out, "{}", card.named(self.ruleset))?;
            }
        }
        writeln!(self.out)?;
        match result.winners.as_slice() {
            [winner] => writeln!(
                self.out,
                "The Winner of game {} is player {} with a {}",
                game,
                winner + 1,
                result.strengths[*winner].ranking()
            )?,
            winners => {
                write!(self.out, "The Winners of game {} are", game)?;
                for winner in winners {
                    write!(
                        self.out,
                        " player {} with a {}",
                        winner + 1,
                        result.strengths[*winner].ranking()
                    )?;
                }
                writeln!(self.out)?;
            }
        }
        writeln!(self.out, "==========================================================")?;
        writeln!(self.out)
    }

    fn tally(&mut self, tally: &Tally) -> io::Result<()> {
        writeln!(self.out, "Name\t#Hands\tProbability")?;
        for ranking in self.ruleset.rankings() {
            writeln!(
                self.out,
                "{}\t{}\t{:.6}",
                ranking,
                tally.count(ranking),
                tally.frequency(ranking)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::session::Session;
    use crate::driver::trial::Trials;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rendered<F>(ruleset: Ruleset, write: F) -> String
    where
        F: FnOnce(&mut TextReport<Vec<u8>>),
    {
        let mut report = TextReport::new(ruleset, Vec::new());
        write(&mut report);
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn tally_lists_every_category_once() {
        let tally = Trials::new(Ruleset::Widget, 20).unwrap().run(3).unwrap();
        let text = rendered(Ruleset::Widget, |report| report.tally(&tally).unwrap());
        assert_eq!(text.lines().count(), 11); // header + ten categories
        assert!(text.contains("Five of a kind"));
        assert!(!text.contains("Royal Flush"));
    }

    #[test]
    fn game_block_names_every_seat_and_a_winner() {
        let session = Session::new(Ruleset::Standard, 1).unwrap();
        let result = session.game(3, &mut SmallRng::seed_from_u64(8)).unwrap();
        let text = rendered(Ruleset::Standard, |report| {
            report.begin(1).unwrap();
            report.game(1, &result).unwrap();
        });
        assert!(text.contains("1 games of poker will be played!"));
        assert!(text.contains("Game #1 (3 players)"));
        for seat in 1..=3 {
            assert!(text.contains(&format!("Player {} (", seat)));
        }
        assert!(text.contains("of game 1"));
    }
}

//! Turn outcomes and the status history shown to the player.

use std::fmt;

/// Result of a player action. Every rule outcome is a value here, never an
/// error: rejected actions are ordinary branches of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The target cell holds an obstacle or lies off the board.
    Blocked,
    /// The round is already over.
    Inactive,
    /// The player and the monster ended up on the same cell.
    Lost,
    /// The player reached the treasure.
    FoundTreasure,
    /// The round goes on.
    Continue { has_arrow: bool },
    /// A shot was attempted with the arrow already spent.
    NoArrows,
    /// The arrow struck the monster.
    HitMonster,
    /// The arrow missed and is gone.
    MissedMonster,
}

impl Outcome {
    /// Status line for the player.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Blocked => "You can't move there! It's blocked by an obstacle.",
            Outcome::Inactive => "The round is over. Start a new round to keep playing.",
            Outcome::Lost => "You ran into the Wumpus! You lose!",
            Outcome::FoundTreasure => "You found the gold! You win!",
            Outcome::Continue { has_arrow: true } => "Keep hunting! You still have an arrow.",
            Outcome::Continue { has_arrow: false } => "Keep hunting! You are out of arrows.",
            Outcome::NoArrows => "You have no arrows left!",
            Outcome::HitMonster => "You hit the Wumpus! You win!",
            Outcome::MissedMonster => "You missed the Wumpus!",
        }
    }

    /// Whether the player won the round with this outcome.
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::FoundTreasure | Outcome::HitMonster)
    }

    /// Whether the player lost the round with this outcome.
    pub fn is_loss(self) -> bool {
        matches!(self, Outcome::Lost)
    }

    /// Whether this outcome ended the round.
    pub fn ends_round(self) -> bool {
        self.is_win() || self.is_loss()
    }

    /// Whether the action was refused without touching the game state.
    pub fn is_rejected(self) -> bool {
        matches!(self, Outcome::Blocked | Outcome::Inactive | Outcome::NoArrows)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Entries kept before the oldest ones are dropped.
const MAX_ENTRIES: usize = 1000;
/// Entries dropped at once when the log is full.
const TRIM_ENTRIES: usize = 100;

/// A single status entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub outcome: Outcome,
    /// First entry of a round.
    pub round_start: bool,
    /// How many identical entries directly followed this one.
    pub dups: u32,
}

/// Status history across rounds.
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    entries: Vec<StatusEntry>,
    next_round_start: bool,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a new round (next entry gets a round marker).
    pub fn new_round(&mut self) {
        self.next_round_start = true;
    }

    /// Record an outcome.
    pub fn push(&mut self, outcome: Outcome) {
        if let Some(last) = self.entries.last_mut() {
            if last.outcome == outcome && !self.next_round_start {
                last.dups += 1;
                return;
            }
        }

        self.entries.push(StatusEntry {
            outcome,
            round_start: self.next_round_start,
            dups: 0,
        });
        self.next_round_start = false;

        if self.entries.len() > MAX_ENTRIES {
            self.entries.drain(0..TRIM_ENTRIES);
        }
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&StatusEntry> {
        self.entries.last()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    /// Up to `n` most recent entries, oldest first.
    pub fn recent(&self, n: usize) -> &[StatusEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Status lines for the most recent `n` entries, with repeat counts.
    pub fn recent_lines(&self, n: usize) -> Vec<String> {
        self.recent(n)
            .iter()
            .map(|e| {
                let mut s = String::new();
                if e.round_start {
                    s.push_str("• ");
                }
                s.push_str(e.outcome.message());
                if e.dups > 0 {
                    s.push_str(&format!(" ({}×)", e.dups + 1));
                }
                s
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continue_message_tracks_arrow() {
        assert!(
            Outcome::Continue { has_arrow: true }
                .message()
                .contains("still have an arrow")
        );
        assert!(
            Outcome::Continue { has_arrow: false }
                .message()
                .contains("out of arrows")
        );
    }

    #[test]
    fn classification() {
        assert!(Outcome::FoundTreasure.is_win());
        assert!(Outcome::HitMonster.is_win());
        assert!(Outcome::Lost.is_loss());
        assert!(Outcome::Lost.ends_round());
        assert!(!Outcome::MissedMonster.ends_round());
        assert!(!Outcome::MissedMonster.is_rejected());
        assert!(Outcome::Blocked.is_rejected());
        assert!(Outcome::NoArrows.is_rejected());
        assert!(Outcome::Inactive.is_rejected());
    }

    #[test]
    fn consecutive_duplicates_fold() {
        let mut log = StatusLog::new();
        log.push(Outcome::Blocked);
        log.push(Outcome::Blocked);
        log.push(Outcome::Blocked);
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.last().map(|e| e.dups), Some(2));
        assert_eq!(log.recent_lines(1), vec![format!("{} (3×)", Outcome::Blocked)]);
    }

    #[test]
    fn round_marker_breaks_folding() {
        let mut log = StatusLog::new();
        log.push(Outcome::Lost);
        log.new_round();
        log.push(Outcome::Lost);
        assert_eq!(log.entries().len(), 2);
        assert!(!log.entries()[0].round_start);
        assert!(log.entries()[1].round_start);
        assert!(log.recent_lines(1)[0].starts_with("• "));
    }

    #[test]
    fn recent_is_clamped() {
        let mut log = StatusLog::new();
        log.push(Outcome::MissedMonster);
        log.push(Outcome::NoArrows);
        assert_eq!(log.recent(10).len(), 2);
        assert_eq!(log.recent(1)[0].outcome, Outcome::NoArrows);
        assert!(log.recent(0).is_empty());
    }

    #[test]
    fn log_is_bounded() {
        let mut log = StatusLog::new();
        for i in 0..(MAX_ENTRIES + 1) {
            let outcome = if i % 2 == 0 {
                Outcome::Blocked
            } else {
                Outcome::NoArrows
            };
            log.push(outcome);
        }
        assert_eq!(log.entries().len(), MAX_ENTRIES + 1 - TRIM_ENTRIES);
    }
}

use crate::card::CardId;
use crate::rng::DrawRng;
use crate::tracker::counts::DeckCounts;
use crate::tracker::hand::Hand;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackerError {
    #[error("hand position {position} is out of range (hand has {len} cards)")]
    PositionOutOfRange { position: usize, len: usize },
}

/// Complete tracker state: the remaining deck and the drawn hand.
///
/// The deck and hand are consistent complements of the initial full deck at
/// all times; the only way to change either is through the operations below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    counts: DeckCounts,
    hand: Hand,
}

impl Tracker {
    /// Fresh state: full deck, empty hand
    pub fn new() -> Self {
        Tracker {
            counts: DeckCounts::full(),
            hand: Hand::new(),
        }
    }

    pub fn counts(&self) -> &DeckCounts {
        &self.counts
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Total cards remaining in the deck
    pub fn remaining(&self) -> u32 {
        self.counts.total()
    }

    /// Move one copy of `card` from the deck to the hand.
    /// Returns false (and changes nothing) when no copies remain.
    pub fn draw(&mut self, card: CardId) -> bool {
        if !self.counts.decrement(card) {
            return false;
        }
        self.hand.add_card(card);
        true
    }

    /// Draw a card chosen uniformly over the remaining multiset.
    /// Returns the drawn identity, or None when the deck is exhausted.
    pub fn draw_random(&mut self, rng: &mut DrawRng) -> Option<CardId> {
        let total = self.counts.total();
        if total == 0 {
            return None;
        }
        let mut pick = rng.random_range(total as usize);
        let mut chosen = None;
        for (card, count) in self.counts.remaining() {
            let count = usize::from(count);
            if pick < count {
                chosen = Some(card);
                break;
            }
            pick -= count;
        }
        // pick < total, so the walk always lands on a non-empty slot
        let card = chosen?;
        self.draw(card);
        Some(card)
    }

    /// Move the hand entry at `position` back into the deck
    pub fn return_to_deck(&mut self, position: usize) -> Result<CardId, TrackerError> {
        let card = self
            .hand
            .remove_card(position)
            .ok_or(TrackerError::PositionOutOfRange {
                position,
                len: self.hand.size(),
            })?;
        self.counts.increment(card);
        Ok(card)
    }

    /// Return every hand entry to the deck, one count per entry
    pub fn clear_hand(&mut self) {
        for i in 0..self.hand.size() {
            let card = self.hand.cards()[i];
            self.counts.increment(card);
        }
        self.hand.clear();
    }

    /// Restore the initial state: full deck, empty hand.
    /// Authoritative recovery; does not depend on hand contents.
    pub fn reset_all(&mut self) {
        self.counts.reset();
        self.hand.clear();
    }

    /// Chance of drawing `card` next, as a percentage of the remaining deck.
    /// Returns 0.0 when the deck is exhausted.
    pub fn probability_of(&self, card: CardId) -> f64 {
        let total = self.counts.total();
        if total == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.counts.get(card)) / f64::from(total)
    }

    /// Read-only serializable view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            remaining: self
                .counts
                .remaining()
                .map(|(card, count)| SlotSnapshot {
                    card: card.to_string(),
                    count,
                })
                .collect(),
            hand: self.hand.cards().iter().map(CardId::to_string).collect(),
            total_remaining: self.counts.total(),
        }
    }
}

/// Point-in-time view of the tracker for display and JSON output
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub remaining: Vec<SlotSnapshot>,
    pub hand: Vec<String>,
    pub total_remaining: u32,
}

/// One non-empty deck slot in a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SlotSnapshot {
    pub card: String,
    pub count: u8,
}

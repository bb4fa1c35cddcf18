use crate::card::{CardId, DECK_SIZE};

/// Copies of each identity present in a fresh single deck
pub const INITIAL_COUNT: u8 = 1;

/// Per-identity remaining counts for the undrawn deck.
///
/// Fixed 52-slot table indexed by `CardId::index()`. Counts are unsigned, so
/// they can never go negative; `decrement` refuses to move below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckCounts {
    counts: [u8; DECK_SIZE],
}

impl DeckCounts {
    /// A full single deck: one copy of every identity
    pub fn full() -> Self {
        DeckCounts {
            counts: [INITIAL_COUNT; DECK_SIZE],
        }
    }

    pub fn get(&self, card: CardId) -> u8 {
        self.counts[card.index()]
    }

    /// Total cards remaining across all identities
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Take one copy of `card` out of the deck.
    /// Returns false (and changes nothing) when none remain.
    pub fn decrement(&mut self, card: CardId) -> bool {
        let slot = &mut self.counts[card.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Put one copy of `card` back into the deck
    pub fn increment(&mut self, card: CardId) {
        self.counts[card.index()] += 1;
    }

    /// Restore every slot to the full-deck count
    pub fn reset(&mut self) {
        self.counts = [INITIAL_COUNT; DECK_SIZE];
    }

    /// Identities with at least one copy remaining, in canonical order
    pub fn remaining(&self) -> impl Iterator<Item = (CardId, u8)> + '_ {
        CardId::all()
            .map(|card| (card, self.get(card)))
            .filter(|&(_, count)| count > 0)
    }
}

impl Default for DeckCounts {
    fn default() -> Self {
        DeckCounts::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn test_full_deck_totals() {
        let counts = DeckCounts::full();
        assert_eq!(counts.total(), 52);
        assert!(!counts.is_exhausted());
        for card in CardId::all() {
            assert_eq!(counts.get(card), 1);
        }
    }

    #[test]
    fn test_decrement_stops_at_zero() {
        let mut counts = DeckCounts::full();
        let card = CardId::new(Rank::King, Suit::Spades);

        assert!(counts.decrement(card));
        assert_eq!(counts.get(card), 0);

        // Second take must refuse and leave the table untouched
        assert!(!counts.decrement(card));
        assert_eq!(counts.get(card), 0);
        assert_eq!(counts.total(), 51);
    }

    #[test]
    fn test_increment_restores() {
        let mut counts = DeckCounts::full();
        let card = CardId::new(Rank::Seven, Suit::Clubs);

        counts.decrement(card);
        counts.increment(card);
        assert_eq!(counts, DeckCounts::full());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut counts = DeckCounts::full();
        for card in CardId::all() {
            counts.decrement(card);
        }
        assert!(counts.is_exhausted());
        assert_eq!(counts.total(), 0);

        counts.reset();
        assert_eq!(counts, DeckCounts::full());
    }

    #[test]
    fn test_remaining_skips_empty_slots() {
        let mut counts = DeckCounts::full();
        let card = CardId::new(Rank::Ace, Suit::Hearts);
        counts.decrement(card);

        let remaining: Vec<_> = counts.remaining().collect();
        assert_eq!(remaining.len(), 51);
        assert!(remaining.iter().all(|&(c, n)| c != card && n == 1));
    }
}

use crate::card::CardId;

/// Hand - drawn cards in insertion order.
///
/// Duplicates are allowed; entries are removed by position rather than by
/// identity so repeated identities stay independently tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<CardId>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn add_card(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Remove the entry at `index`; later entries shift down by one
    pub fn remove_card(&mut self, index: usize) -> Option<CardId> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
}

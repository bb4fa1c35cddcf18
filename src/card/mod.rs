pub mod types;

pub use types::{CardId, ParseCardError, Rank, Suit, DECK_SIZE};

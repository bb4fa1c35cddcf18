pub mod counts;
pub mod hand;
pub mod state;

pub use counts::DeckCounts;
pub use hand::Hand;
pub use state::{Snapshot, SlotSnapshot, Tracker, TrackerError};

pub mod card;
pub mod cli;
pub mod rng;
pub mod tracker;

// Word Bingo Server Library - Core Module Organization
//
// Card loading and validation, word marking, winner detection and round
// ordering, plus the HTTP layer and the game simulator built on them.

// Core data structures and errors
pub mod card;
pub mod enums;
pub mod errors;
pub mod word_banks;

// Game logic implementation
pub mod ordering;
pub mod parser;
pub mod rounds;
pub mod simulation;
pub mod winners;

// Server implementation
pub mod application;
pub mod config;
pub mod server;

// Re-export common types for convenient access
pub use crate::application::{BingoService, CallOutcome};
pub use crate::card::Card;
pub use crate::enums::Language;
pub use crate::errors::{BingoError, BingoResult, CardLineError, CardStateError, InfrastructureError};
pub use crate::ordering::order_words;
pub use crate::parser::{parse_cards, ParseOutcome};
pub use crate::rounds::shuffle_rounds;
pub use crate::winners::detect_winners;
pub use crate::word_banks::WordBanks;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

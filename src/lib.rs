//! State for a Swiss-system tournament: player registration, match results
//! and next-round pairings.
//!
//! Callers mutate a [`StandingsStore`] and then ask [`swiss_pairings`] for the
//! next round. [`SqliteStore`] persists to an SQLite file; [`MemoryStore`]
//! keeps everything in memory with the same behaviour.

pub mod data;
pub mod db;
pub mod error;
pub mod memory;
pub mod pairing;
pub mod sqlite;
pub mod store;

pub use data::{MatchResult, Outcome, Pairing, PlayerId, Standing};
pub use error::{Error, PairingError, StoreError};
pub use memory::MemoryStore;
pub use pairing::{pair_standings, swiss_pairings};
pub use sqlite::SqliteStore;
pub use store::StandingsStore;

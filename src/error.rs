use thiserror::Error;

use crate::data::PlayerId;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("database error: {0}")]
	Sqlite(#[from] rusqlite::Error),

	#[error("no player with id {0}")]
	UnknownPlayer(PlayerId),

	#[error("player {0} cannot play against themselves")]
	SamePlayer(PlayerId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
	#[error("cannot pair an odd number of players ({0})")]
	OddPlayerCount(usize),
}

#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Store(#[from] StoreError),

	#[error(transparent)]
	Pairing(#[from] PairingError),

	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	#[error("row {row} of {path}: {source}")]
	Load {
		path: String,
		row: usize,
		source: StoreError,
	},
}

pub type StoreResult<T> = Result<T, StoreError>;

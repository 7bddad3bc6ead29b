use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;

pub type PlayerId = i64;

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
	pub id: PlayerId,
	pub name: String,
	pub wins: u32,
	pub matches_played: u32,
}

impl Standing {
	pub fn new(id: PlayerId, name: &str) -> Self {
		Self {
			id,
			name: name.to_string(),
			wins: 0,
			matches_played: 0,
		}
	}

	pub fn losses(&self) -> u32 {
		self.matches_played - self.wins
	}
}

/// Two players scheduled to meet in the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
	pub id1: PlayerId,
	pub name1: String,
	pub id2: PlayerId,
	pub name2: String,
}

impl Pairing {
	pub fn new(first: &Standing, second: &Standing) -> Self {
		Self {
			id1: first.id,
			name1: first.name.clone(),
			id2: second.id,
			name2: second.name.clone(),
		}
	}
}

/// How a single player fared in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
	Won,
	Lost,
}

impl Outcome {
	pub fn as_str(self) -> &'static str {
		match self {
			Outcome::Won => "won",
			Outcome::Lost => "lost",
		}
	}
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ToSql for Outcome {
	fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
		Ok(ToSqlOutput::from(self.as_str()))
	}
}

impl FromSql for Outcome {
	fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
		match value.as_str()? {
			"won" => Ok(Outcome::Won),
			"lost" => Ok(Outcome::Lost),
			other => Err(FromSqlError::Other(
				format!("unknown match outcome {other:?}").into(),
			)),
		}
	}
}

/// A recorded outcome for one player, as stored in `all_match_results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
	pub match_id: i64,
	pub player_id: PlayerId,
	pub outcome: Outcome,
}

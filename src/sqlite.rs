use std::path::Path;

use log::{debug, info, warn};
use rusqlite::{params, Connection, Transaction, TransactionBehavior};

use crate::{
	data::{MatchResult, Outcome, PlayerId, Standing},
	db,
	error::{StoreError, StoreResult},
	store::StandingsStore,
};

/// Standings store backed by an SQLite database.
pub struct SqliteStore {
	conn: Connection,
}

impl SqliteStore {
	pub fn open(path: &Path) -> StoreResult<Self> {
		Ok(Self {
			conn: db::open(path)?,
		})
	}

	pub fn open_in_memory() -> StoreResult<Self> {
		Ok(Self {
			conn: db::open_in_memory()?,
		})
	}

	#[cfg(test)]
	pub(crate) fn connection(&self) -> &Connection {
		&self.conn
	}

	// IMMEDIATE takes the write lock up front so concurrent writers queue
	// behind the busy timeout instead of racing on the counters.
	fn write(&mut self) -> rusqlite::Result<Transaction<'_>> {
		self.conn
			.transaction_with_behavior(TransactionBehavior::Immediate)
	}
}

fn player_exists(tx: &Transaction, id: PlayerId) -> rusqlite::Result<bool> {
	tx.query_row(
		"SELECT EXISTS (SELECT 1 FROM players WHERE player_id = ?1);",
		[id],
		|row| row.get(0),
	)
}

fn record_result(
	tx: &Transaction,
	match_id: i64,
	player: PlayerId,
	outcome: Outcome,
) -> StoreResult<()> {
	tx.execute(
		"INSERT INTO all_match_results (player_id, match_id, outcome)
		 VALUES (?1, ?2, ?3);",
		params![player, match_id, outcome],
	)?;

	let wins = match outcome {
		Outcome::Won => 1,
		Outcome::Lost => 0,
	};
	let updated = tx.execute(
		"UPDATE player_standings
		 SET wins = wins + ?1,
			 matches_played = matches_played + 1
		 WHERE player_id = ?2;",
		params![wins, player],
	)?;

	if updated != 1 {
		return Err(StoreError::UnknownPlayer(player));
	}

	Ok(())
}

impl StandingsStore for SqliteStore {
	fn reset_matches(&mut self) -> StoreResult<()> {
		let tx = self.write()?;

		tx.execute("DELETE FROM all_match_results;", [])?;
		tx.execute("DELETE FROM matches;", [])?;
		tx.execute(
			"UPDATE player_standings SET wins = 0, matches_played = 0;",
			[],
		)?;

		tx.commit()?;
		info!("cleared all matches");

		Ok(())
	}

	fn reset_players(&mut self) -> StoreResult<()> {
		let tx = self.write()?;

		tx.execute("DELETE FROM all_match_results;", [])?;
		tx.execute("DELETE FROM matches;", [])?;
		tx.execute("DELETE FROM player_standings;", [])?;
		tx.execute("DELETE FROM players;", [])?;

		tx.commit()?;
		info!("cleared all players");

		Ok(())
	}

	fn count_players(&self) -> StoreResult<usize> {
		let count = self
			.conn
			.query_row("SELECT COUNT(*) FROM players;", [], |row| row.get(0))?;

		Ok(count)
	}

	fn register_player(&mut self, name: &str) -> StoreResult<PlayerId> {
		let tx = self.write()?;

		tx.execute("INSERT INTO players (player_name) VALUES (?1);", [name])?;
		let id = tx.last_insert_rowid();

		tx.execute(
			"INSERT INTO player_standings (player_id, player_name, wins, matches_played)
			 VALUES (?1, ?2, ?3, ?4);",
			params![id, name, 0, 0],
		)?;

		tx.commit()?;
		debug!("registered player {id} ({name})");

		Ok(id)
	}

	fn standings(&self) -> StoreResult<Vec<Standing>> {
		let mut stmt = self.conn.prepare(
			"SELECT player_id, player_name, wins, matches_played
			 FROM player_standings
			 ORDER BY wins DESC, player_id ASC;",
		)?;

		let standings = stmt
			.query_map([], |row| {
				Ok(Standing {
					id: row.get(0)?,
					name: row.get(1)?,
					wins: row.get(2)?,
					matches_played: row.get(3)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(standings)
	}

	fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> StoreResult<i64> {
		if winner == loser {
			warn!("rejected match of player {winner} against themselves");
			return Err(StoreError::SamePlayer(winner));
		}

		let tx = self.write()?;

		for id in [winner, loser] {
			if !player_exists(&tx, id)? {
				warn!("rejected match {winner} vs {loser}: player {id} does not exist");
				return Err(StoreError::UnknownPlayer(id));
			}
		}

		tx.execute("INSERT INTO matches DEFAULT VALUES;", [])?;
		let match_id = tx.last_insert_rowid();

		record_result(&tx, match_id, winner, Outcome::Won)?;
		record_result(&tx, match_id, loser, Outcome::Lost)?;

		tx.commit()?;
		debug!("recorded match {match_id}: {winner} beat {loser}");

		Ok(match_id)
	}

	fn player_results(&self, player: PlayerId) -> StoreResult<Vec<MatchResult>> {
		let mut stmt = self.conn.prepare(
			"SELECT match_id, player_id, outcome
			 FROM all_match_results
			 WHERE player_id = ?1
			 ORDER BY match_id;",
		)?;

		let results = stmt
			.query_map([player], |row| {
				Ok(MatchResult {
					match_id: row.get(0)?,
					player_id: row.get(1)?,
					outcome: row.get(2)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(results)
	}

	fn audit(&self) -> StoreResult<Vec<PlayerId>> {
		let mut stmt = self.conn.prepare(
			"SELECT p.player_id
			 FROM players p
			 LEFT JOIN player_standings s ON s.player_id = p.player_id
			 LEFT JOIN (
				SELECT player_id,
					   COUNT(*) AS played,
					   SUM(outcome = 'won') AS won
				FROM all_match_results
				GROUP BY player_id
			 ) r ON r.player_id = p.player_id
			 WHERE s.player_id IS NULL
				OR s.matches_played != COALESCE(r.played, 0)
				OR s.wins != COALESCE(r.won, 0)
			 ORDER BY p.player_id;",
		)?;

		let ids = stmt
			.query_map([], |row| row.get(0))?
			.collect::<rusqlite::Result<Vec<PlayerId>>>()?;

		Ok(ids)
	}
}

use std::{path::Path, time::Duration};

use log::info;
use rusqlite::{Connection, Result};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub fn open(path: &Path) -> Result<Connection> {
	let mut conn = Connection::open(path)?;
	configure(&conn)?;
	create_schema(&mut conn)?;
	info!("opened tournament database at {}", path.display());

	Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
	let mut conn = Connection::open_in_memory()?;
	configure(&conn)?;
	create_schema(&mut conn)?;

	Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
	conn.pragma_update(None, "foreign_keys", true)?;
	conn.busy_timeout(BUSY_TIMEOUT)
}

pub fn create_schema(conn: &mut Connection) -> Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			player_id   INTEGER PRIMARY KEY AUTOINCREMENT,
			player_name TEXT    NOT NULL
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS player_standings (
			player_id      INTEGER REFERENCES players (player_id)
								   NOT NULL
								   UNIQUE,
			player_name    TEXT    NOT NULL,
			wins           INTEGER NOT NULL
								   DEFAULT 0
								   CHECK (wins >= 0),
			matches_played INTEGER NOT NULL
								   DEFAULT 0,
			CHECK (wins <= matches_played)
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			match_id INTEGER PRIMARY KEY AUTOINCREMENT
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS all_match_results (
			result_id INTEGER PRIMARY KEY AUTOINCREMENT,
			player_id INTEGER REFERENCES players (player_id)
							  NOT NULL,
			match_id  INTEGER REFERENCES matches (match_id)
							  NOT NULL,
			outcome   TEXT    NOT NULL
							  CHECK (outcome IN ('won', 'lost')),
			UNIQUE (match_id, player_id)
		);",
		[],
	)?;

	tx.commit()?;
	info!("tournament schema ready");

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table_names(conn: &Connection) -> Vec<String> {
		let mut stmt = conn
			.prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name;")
			.unwrap();
		let names = stmt
			.query_map([], |row| row.get::<usize, String>(0))
			.unwrap()
			.collect::<Result<Vec<_>>>()
			.unwrap();
		names
	}

	#[test]
	fn schema_has_all_relations() {
		let conn = open_in_memory().unwrap();
		let names = table_names(&conn);

		for table in ["players", "player_standings", "matches", "all_match_results"] {
			assert!(names.iter().any(|n| n == table), "missing table {table}");
		}
	}

	#[test]
	fn schema_creation_is_idempotent() {
		let mut conn = open_in_memory().unwrap();
		create_schema(&mut conn).unwrap();
		create_schema(&mut conn).unwrap();
	}

	#[test]
	fn foreign_keys_are_enforced() {
		let conn = open_in_memory().unwrap();
		let result = conn.execute(
			"INSERT INTO player_standings (player_id, player_name) VALUES (?1, ?2);",
			rusqlite::params![42, "Nobody"],
		);
		assert!(result.is_err());
	}

	#[test]
	fn wins_cannot_exceed_matches_played() {
		let conn = open_in_memory().unwrap();
		conn.execute("INSERT INTO players (player_name) VALUES (?1);", ["Ann"])
			.unwrap();
		let id = conn.last_insert_rowid();
		let result = conn.execute(
			"INSERT INTO player_standings (player_id, player_name, wins, matches_played)
			 VALUES (?1, ?2, 1, 0);",
			rusqlite::params![id, "Ann"],
		);
		assert!(result.is_err());
	}
}

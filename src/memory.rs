use log::{debug, info, warn};

use crate::{
	data::{MatchResult, Outcome, PlayerId, Standing},
	error::{StoreError, StoreResult},
	store::{rank, StandingsStore},
};

/// In-memory standings store with the same contract as [`crate::SqliteStore`].
///
/// Ids keep counting up across resets, as they do for the SQLite tables.
#[derive(Debug)]
pub struct MemoryStore {
	players: Vec<Standing>,
	results: Vec<MatchResult>,
	last_player_id: PlayerId,
	last_match_id: i64,
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryStore {
	pub fn new() -> Self {
		Self {
			players: Vec::new(),
			results: Vec::new(),
			last_player_id: 0,
			last_match_id: 0,
		}
	}

	fn position(&self, id: PlayerId) -> StoreResult<usize> {
		self.players
			.iter()
			.position(|p| p.id == id)
			.ok_or(StoreError::UnknownPlayer(id))
	}
}

impl StandingsStore for MemoryStore {
	fn reset_matches(&mut self) -> StoreResult<()> {
		self.results.clear();
		for player in &mut self.players {
			player.wins = 0;
			player.matches_played = 0;
		}
		info!("cleared all matches");

		Ok(())
	}

	fn reset_players(&mut self) -> StoreResult<()> {
		self.results.clear();
		self.players.clear();
		info!("cleared all players");

		Ok(())
	}

	fn count_players(&self) -> StoreResult<usize> {
		Ok(self.players.len())
	}

	fn register_player(&mut self, name: &str) -> StoreResult<PlayerId> {
		self.last_player_id += 1;
		let id = self.last_player_id;
		self.players.push(Standing::new(id, name));
		debug!("registered player {id} ({name})");

		Ok(id)
	}

	fn standings(&self) -> StoreResult<Vec<Standing>> {
		let mut standings = self.players.clone();
		rank(&mut standings);

		Ok(standings)
	}

	fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> StoreResult<i64> {
		if winner == loser {
			warn!("rejected match of player {winner} against themselves");
			return Err(StoreError::SamePlayer(winner));
		}

		// Both lookups happen before any mutation.
		let w = self.position(winner)?;
		let l = self.position(loser)?;

		self.last_match_id += 1;
		let match_id = self.last_match_id;

		self.results.push(MatchResult {
			match_id,
			player_id: winner,
			outcome: Outcome::Won,
		});
		self.results.push(MatchResult {
			match_id,
			player_id: loser,
			outcome: Outcome::Lost,
		});

		self.players[w].wins += 1;
		self.players[w].matches_played += 1;
		self.players[l].matches_played += 1;
		debug!("recorded match {match_id}: {winner} beat {loser}");

		Ok(match_id)
	}

	fn player_results(&self, player: PlayerId) -> StoreResult<Vec<MatchResult>> {
		Ok(self
			.results
			.iter()
			.filter(|r| r.player_id == player)
			.copied()
			.collect())
	}

	fn audit(&self) -> StoreResult<Vec<PlayerId>> {
		let ids = self
			.players
			.iter()
			.filter(|p| {
				let played = self.results.iter().filter(|r| r.player_id == p.id);
				let wins = played.clone().filter(|r| r.outcome == Outcome::Won).count();
				p.matches_played as usize != played.count() || p.wins as usize != wins
			})
			.map(|p| p.id)
			.collect();

		Ok(ids)
	}
}

use crate::{
	data::{MatchResult, PlayerId, Standing},
	error::StoreResult,
};

/// Durable record of players and their cumulative results.
///
/// Every write is one unit of work: either all of its rows change or none do.
/// Standings are ordered by wins, most first, with ties broken by ascending
/// player id.
pub trait StandingsStore {
	/// Removes every match and match result and zeroes all counters.
	fn reset_matches(&mut self) -> StoreResult<()>;

	/// Removes every player along with their standings and match history.
	fn reset_players(&mut self) -> StoreResult<()>;

	fn count_players(&self) -> StoreResult<usize>;

	/// Adds a player with a fresh standing and returns the assigned id.
	/// Names need not be unique.
	fn register_player(&mut self, name: &str) -> StoreResult<PlayerId>;

	fn standings(&self) -> StoreResult<Vec<Standing>>;

	/// Records a single match and returns its id.
	fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> StoreResult<i64>;

	/// Outcomes recorded for one player, oldest match first.
	fn player_results(&self, player: PlayerId) -> StoreResult<Vec<MatchResult>>;

	/// Ids of players whose counters disagree with their recorded results.
	fn audit(&self) -> StoreResult<Vec<PlayerId>>;
}

pub(crate) fn rank(standings: &mut [Standing]) {
	standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
}

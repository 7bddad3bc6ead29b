use log::debug;

use crate::{
	data::{Pairing, Standing},
	error::{Error, PairingError},
	store::StandingsStore,
};

/// Pairs each player with their neighbour in the standings: positions
/// (0, 1), (2, 3) and so on. Earlier matches are not consulted, so rematches
/// can happen.
pub fn pair_standings(standings: &[Standing]) -> Result<Vec<Pairing>, PairingError> {
	if standings.len() % 2 != 0 {
		return Err(PairingError::OddPlayerCount(standings.len()));
	}

	Ok(standings
		.chunks_exact(2)
		.map(|pair| Pairing::new(&pair[0], &pair[1]))
		.collect())
}

/// Pairings for the next round from the store's current standings.
pub fn swiss_pairings<S>(store: &S) -> Result<Vec<Pairing>, Error>
where
	S: StandingsStore + ?Sized,
{
	let standings = store.standings()?;
	let pairings = pair_standings(&standings)?;
	debug!("paired {} players into {} matches", standings.len(), pairings.len());

	Ok(pairings)
}

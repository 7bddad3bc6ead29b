use proptest::prelude::*;
use swisspair::{
	swiss_pairings, Error, MemoryStore, Pairing, PairingError, SqliteStore, StandingsStore,
};

fn pairing(id1: i64, name1: &str, id2: i64, name2: &str) -> Pairing {
	Pairing {
		id1,
		name1: name1.to_string(),
		id2,
		name2: name2.to_string(),
	}
}

fn four_player_round(store: &mut dyn StandingsStore) {
	let a = store.register_player("A").unwrap();
	let b = store.register_player("B").unwrap();
	let c = store.register_player("C").unwrap();
	let d = store.register_player("D").unwrap();

	assert_eq!(
		swiss_pairings(&*store).unwrap(),
		vec![pairing(a, "A", b, "B"), pairing(c, "C", d, "D")]
	);

	store.report_match(a, b).unwrap();
	store.report_match(c, d).unwrap();

	let pairings = swiss_pairings(&*store).unwrap();
	assert_eq!(
		pairings,
		vec![pairing(a, "A", c, "C"), pairing(b, "B", d, "D")]
	);
}

#[test]
fn winners_meet_winners_in_sqlite() {
	let mut store = SqliteStore::open_in_memory().unwrap();
	four_player_round(&mut store);
}

#[test]
fn winners_meet_winners_in_memory() {
	let mut store = MemoryStore::new();
	four_player_round(&mut store);
}

#[test]
fn fresh_database_assigns_ids_from_one() {
	let mut store = SqliteStore::open_in_memory().unwrap();
	let ids: Vec<_> = ["A", "B", "C", "D"]
		.iter()
		.map(|name| store.register_player(name).unwrap())
		.collect();
	assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn odd_player_count_is_reported() {
	let mut store = SqliteStore::open_in_memory().unwrap();
	for name in ["A", "B", "C"] {
		store.register_player(name).unwrap();
	}

	let err = swiss_pairings(&store).unwrap_err();
	assert!(matches!(
		err,
		Error::Pairing(PairingError::OddPlayerCount(3))
	));
}

#[test]
fn three_rounds_of_eight_players() {
	let mut store = SqliteStore::open_in_memory().unwrap();
	for i in 0..8 {
		store.register_player(&format!("Player {i}")).unwrap();
	}

	for _ in 0..3 {
		let pairings = swiss_pairings(&store).unwrap();
		assert_eq!(pairings.len(), 4);
		for p in pairings {
			store.report_match(p.id1, p.id2).unwrap();
		}
	}

	let standings = store.standings().unwrap();
	assert!(standings.iter().all(|s| s.matches_played == 3));
	assert_eq!(standings[0].wins, 3);
	assert_eq!(standings[7].wins, 0);
	assert!(standings.windows(2).all(|w| w[0].wins >= w[1].wins));
	assert!(store.audit().unwrap().is_empty());
}

proptest! {
	#[test]
	fn counters_follow_reported_matches(
		players in 2usize..10,
		reports in prop::collection::vec((0usize..10, 0usize..10), 0..30),
	) {
		let mut store = SqliteStore::open_in_memory().unwrap();
		let ids: Vec<_> = (0..players)
			.map(|i| store.register_player(&format!("P{i}")).unwrap())
			.collect();

		let mut wins = vec![0u32; players];
		let mut played = vec![0u32; players];

		for (w, l) in reports {
			let (w, l) = (w % players, l % players);
			let result = store.report_match(ids[w], ids[l]);
			if w == l {
				prop_assert!(result.is_err());
				continue;
			}
			prop_assert!(result.is_ok());
			wins[w] += 1;
			played[w] += 1;
			played[l] += 1;
		}

		let standings = store.standings().unwrap();
		prop_assert!(standings.windows(2).all(|s| s[0].wins >= s[1].wins));
		for (i, id) in ids.iter().enumerate() {
			let standing = standings.iter().find(|s| s.id == *id).unwrap();
			prop_assert_eq!(standing.wins, wins[i]);
			prop_assert_eq!(standing.matches_played, played[i]);
			prop_assert!(standing.wins <= standing.matches_played);
		}
		prop_assert!(store.audit().unwrap().is_empty());

		store.reset_matches().unwrap();
		prop_assert_eq!(store.count_players().unwrap(), players);
		prop_assert!(store.standings().unwrap().iter().all(|s| s.wins == 0 && s.matches_played == 0));
	}
}

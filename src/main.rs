mod cli;

use std::{
	fs::File,
	io::{self, Write},
	path::Path,
};

use clap::Parser;
use cli::{Cli, Commands};
use env_logger::Env;
use log::info;
use serde::{Deserialize, Serialize};
use swisspair::{
	swiss_pairings, Error, Pairing, SqliteStore, Standing, StandingsStore, StoreError,
};

#[derive(Debug, Deserialize)]
struct LoadRow {
	winner: i64,
	loser: i64,
}

fn main() -> Result<(), Error> {
	let cli = Cli::parse();

	let level = match cli.verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	env_logger::Builder::from_env(Env::default().default_filter_or(level))
		.format_target(false)
		.init();

	let mut store = SqliteStore::open(&cli.database)?;

	let mut out = match cli.output.as_deref() {
		Some(path) => Box::new(File::create(path)?) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	match cli.command {
		Commands::Register { name } => {
			let id = store.register_player(&name)?;
			writeln!(out, "{id}")?;
		}
		Commands::Count => writeln!(out, "{}", store.count_players()?)?,
		Commands::Report { winner, loser } => {
			let match_id = store.report_match(winner, loser)?;
			info!("match {match_id} recorded");
		}
		Commands::Standings { csv } => {
			let standings = store.standings()?;
			if csv {
				write_csv(out, &standings)?;
			} else {
				out.write_all(standings_string(&standings).as_bytes())?;
			}
		}
		Commands::Pairings { csv } => {
			let pairings = swiss_pairings(&store)?;
			if csv {
				write_csv(out, &pairings)?;
			} else {
				out.write_all(pairings_string(&pairings).as_bytes())?;
			}
		}
		Commands::ResetMatches => store.reset_matches()?,
		Commands::ResetPlayers => store.reset_players()?,
		Commands::Load { matches } => {
			let count = load_matches(&mut store, &matches)?;
			writeln!(out, "loaded {count} matches")?;
		}
		Commands::Audit => {
			for id in store.audit()? {
				writeln!(out, "{id}")?;
			}
		}
	}

	Ok(())
}

fn load_matches(store: &mut impl StandingsStore, path: &Path) -> Result<usize, Error> {
	let mut reader = csv::Reader::from_path(path)?;
	let mut count = 0;

	for (i, row) in reader.deserialize::<LoadRow>().enumerate() {
		let row = row?;
		store
			.report_match(row.winner, row.loser)
			.map_err(|source: StoreError| Error::Load {
				path: path.display().to_string(),
				row: i + 1,
				source,
			})?;
		count += 1;
	}

	Ok(count)
}

fn write_csv<T: Serialize>(out: Box<dyn Write>, rows: &[T]) -> Result<(), Error> {
	let mut writer = csv::Writer::from_writer(out);
	for row in rows {
		writer.serialize(row)?;
	}
	writer.flush()?;

	Ok(())
}

fn standings_string(standings: &[Standing]) -> String {
	let mut string = String::from("# Standings\n```");

	for (i, standing) in standings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) {}-{}",
			i + 1,
			standing.name,
			standing.id,
			standing.wins,
			standing.losses()
		));
	}

	string.push_str("\n```\n");

	string
}

fn pairings_string(pairings: &[Pairing]) -> String {
	let mut string = String::from("# Pairings\n```");

	for (i, p) in pairings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) vs {} (#{})",
			i + 1,
			p.name1,
			p.id1,
			p.name2,
			p.id2
		));
	}

	string.push_str("\n```\n");

	string
}

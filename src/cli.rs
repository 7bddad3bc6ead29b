use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Swiss-system tournament bookkeeping", long_about = None)]
pub struct Cli {
	#[arg(long, value_name = "FILE", env = "SWISSPAIR_DB", default_value = "tournament.db")]
	pub database: PathBuf,

	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Raise log verbosity (-v info, -vv debug)
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Register a new player and print their id
	Register { name: String },
	/// Print the number of registered players
	Count,
	/// Record that WINNER beat LOSER
	Report { winner: i64, loser: i64 },
	Standings {
		#[arg(long)]
		csv: bool,
	},
	/// Print the pairings for the next round
	Pairings {
		#[arg(long)]
		csv: bool,
	},
	/// Delete every match and zero all standings
	ResetMatches,
	/// Delete every player, standing and match
	ResetPlayers,
	/// Report matches from a CSV file with `winner,loser` columns
	Load {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	/// List players whose standings disagree with their match results
	Audit,
}

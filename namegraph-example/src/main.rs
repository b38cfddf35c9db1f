mod meanings;

use std::env;
use std::fs;
use std::time::Duration;

use namegraph_core::model::batch::{BatchMode, generate_names};
use namegraph_core::model::chain_builder::build_chain;
use namegraph_core::model::diversity::evaluate;
use namegraph_core::model::pattern_graph::ChainOptions;
use namegraph_core::model::registry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// RUST_LOG=debug surfaces the walker's backtracking diagnostics
	env_logger::init();

	let time_limit = Duration::from_millis(250);

	// Sample every built-in language table
	for id in registry::ids() {
		// Cannot fail: the id comes from the registry itself
		let graph = registry::graph(id).unwrap();

		println!("--- {} ---", id);
		for name in generate_names(&graph, 5, time_limit, BatchMode::Strict) {
			print_with_gloss(&name);
		}
	}

	// Learn a chain from a corpus: pass a file with one name per line
	// as the first argument, or fall back to the inline demo corpus
	let args: Vec<String> = env::args().collect();
	let dump_chain = args.iter().any(|a| a == "--dump-chain");

	let corpus: Vec<String> = match args.iter().skip(1).find(|a| *a != "--dump-chain") {
		Some(path) => fs::read_to_string(path)?
			.lines()
			.map(str::to_owned)
			.collect(),
		None => ["anor", "belan", "thorin", "mira", "aldan", "nimue"]
			.iter()
			.map(|s| (*s).to_owned())
			.collect(),
	};

	// Generation bounds attached to the learned graph; learning itself
	// always uses every grouping of every example
	let options = ChainOptions {
		min_nodes: Some(2),
		max_nodes: Some(4),
		consecutive_single_letter_limit: Some(2),
		total_single_letter_limit: Some(3),
		duplicate_cluster_limit: Some(1),
		total_cluster_limit: Some(2),
	};

	let graph = build_chain(&corpus, options)?;

	// Console diagnostic dump of the learned adjacency
	if dump_chain {
		println!("{}", serde_json::to_string_pretty(graph.transitions())?);
	}

	println!("--- learned from {} examples ---", corpus.len());
	let names = generate_names(&graph, 10, time_limit, BatchMode::Strict);
	for name in &names {
		print_with_gloss(name);
	}

	// Offline quality signal for the batch
	let report = evaluate(&names);
	println!(
		"unique ratio: {:.2}, mean edit distance: {:.2}",
		report.unique_ratio, report.mean_distance
	);

	Ok(())
}

fn print_with_gloss(name: &str) {
	let gloss = meanings::gloss(name);
	if gloss.is_empty() {
		println!("{}", name);
	} else {
		println!("{} ({})", name, gloss);
	}
}

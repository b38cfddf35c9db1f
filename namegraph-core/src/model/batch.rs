use std::time::Duration;

use log::debug;

use super::pattern_graph::PatternGraph;
use super::walker::generate_name;

/// Retry budget multiplier: a batch of `count` names may spend up to
/// `count * RETRY_FACTOR` failed or duplicate attempts before giving up.
pub const RETRY_FACTOR: usize = 5;

/// Trailing marker appended to the partial text of a failed attempt in
/// `BatchMode::Padded`, so degraded entries are visible inline.
pub const DEGRADED_SENTINEL: char = '…';

/// How the batch generator degrades when attempts fail or repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
	/// Deduplicate, retry on failure or duplicate, and return a possibly
	/// partial batch once the retry budget is exhausted. Never returns
	/// duplicates.
	#[default]
	Strict,

	/// Legacy behavior: always return exactly `count` entries, one
	/// attempt per slot; a failed attempt contributes its partial text
	/// plus `DEGRADED_SENTINEL`. Duplicates are permitted.
	Padded,
}

/// Generates a batch of names from a pattern graph.
///
/// Repeatedly invokes the walker; every walker failure is treated as a
/// retry signal and consumed here, so this call never raises.
///
/// # Returns
/// At most `count` names in `Strict` mode (fewer if the retry budget ran
/// out, e.g. on a graph admitting fewer distinct names than requested);
/// exactly `count` entries in `Padded` mode.
pub fn generate_names(
	graph: &PatternGraph,
	count: usize,
	time_limit: Duration,
	mode: BatchMode,
) -> Vec<String> {
	match mode {
		BatchMode::Strict => generate_strict(graph, count, time_limit),
		BatchMode::Padded => generate_padded(graph, count, time_limit),
	}
}

fn generate_strict(graph: &PatternGraph, count: usize, time_limit: Duration) -> Vec<String> {
	let mut names: Vec<String> = Vec::with_capacity(count);
	let mut budget = count * RETRY_FACTOR;

	while names.len() < count && budget > 0 {
		match generate_name(graph, time_limit) {
			Ok(name) if !names.contains(&name) => names.push(name),
			Ok(duplicate) => {
				debug!("discarding duplicate '{}'", duplicate);
				budget -= 1;
			}
			Err(error) => {
				debug!("retrying after failure: {}", error);
				budget -= 1;
			}
		}
	}

	names
}

fn generate_padded(graph: &PatternGraph, count: usize, time_limit: Duration) -> Vec<String> {
	(0..count)
		.map(|_| match generate_name(graph, time_limit) {
			Ok(name) => name,
			Err(error) => format!("{}{}", error.partial(), DEGRADED_SENTINEL),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::model::pattern_graph::ChainOptions;

	const LIMIT: Duration = Duration::from_secs(1);

	fn three_name_graph() -> PatternGraph {
		PatternGraph::from_table(
			&[("^", &["ab", "cd", "ef"][..]), ("ab", &["$"][..]), ("cd", &["$"][..]), ("ef", &["$"][..])],
			ChainOptions::default(),
		)
		.unwrap()
	}

	#[test]
	fn never_returns_more_than_requested() {
		let graph = three_name_graph();
		assert!(generate_names(&graph, 2, LIMIT, BatchMode::Strict).len() <= 2);
		assert_eq!(generate_names(&graph, 0, LIMIT, BatchMode::Strict).len(), 0);
	}

	#[test]
	fn strict_mode_never_returns_duplicates() {
		let graph = three_name_graph();
		let names = generate_names(&graph, 3, LIMIT, BatchMode::Strict);
		let distinct: HashSet<&String> = names.iter().collect();
		assert_eq!(names.len(), distinct.len());
	}

	#[test]
	fn exhausted_budget_returns_the_whole_reachable_set() {
		// Only 3 distinct names exist; requesting 10 must terminate and
		// return exactly those 3.
		let graph = three_name_graph();
		let mut names = generate_names(&graph, 10, LIMIT, BatchMode::Strict);
		names.sort();
		assert_eq!(names, vec!["Ab".to_owned(), "Cd".to_owned(), "Ef".to_owned()]);
	}

	#[test]
	fn hopeless_graph_yields_an_empty_strict_batch() {
		let graph = PatternGraph::from_table(
			&[("^", &["ab"][..]), ("ab", &[][..])],
			ChainOptions::default(),
		)
		.unwrap();
		assert!(generate_names(&graph, 5, LIMIT, BatchMode::Strict).is_empty());
	}

	#[test]
	fn padded_mode_always_fills_the_batch() {
		let graph = PatternGraph::from_table(
			&[("^", &["ab"][..]), ("ab", &[][..])],
			ChainOptions::default(),
		)
		.unwrap();
		let names = generate_names(&graph, 4, LIMIT, BatchMode::Padded);
		assert_eq!(names.len(), 4);
		for name in &names {
			assert!(name.ends_with(DEGRADED_SENTINEL), "'{}' lacks the sentinel", name);
		}
	}

	#[test]
	fn padded_mode_keeps_successful_names_unmarked() {
		let graph = three_name_graph();
		let names = generate_names(&graph, 6, LIMIT, BatchMode::Padded);
		assert_eq!(names.len(), 6);
		for name in &names {
			assert!(!name.ends_with(DEGRADED_SENTINEL));
		}
	}
}

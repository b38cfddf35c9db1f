use std::collections::{HashMap, HashSet};

use log::debug;

use super::error::GenerateError;
use super::pattern_graph::{ChainOptions, END_TOKEN, PatternGraph, START_TOKEN};
use super::segmenter::deconstruct;

/// Learns a pattern graph from a corpus of example names.
///
/// # Parameters
/// - `examples`: corpus entries; each is trimmed and lower-cased, empty
///   entries are skipped.
/// - `base_options`: generation bounds attached to the produced graph.
///   They do not filter the learning pass.
///
/// # Behavior
/// - Every admissible grouping of every example is obtained from the
///   segmenter with no constraint filtering; the grouping exhaustiveness
///   itself is the input data.
/// - For each grouping: an edge from the start marker to its first token,
///   an edge between each adjacent token pair, and an edge from its last
///   token to the end marker.
/// - After all examples are processed, each node's outgoing edge list is
///   de-duplicated (order-preserving, first occurrence wins).
///
/// # Notes
/// - Corpus frequency is intentionally discarded: the graph samples
///   uniformly across distinct learned continuations. Building twice from
///   the same corpus yields identical adjacency sets per node.
///
/// # Errors
/// Returns `GenerateError::PatternNotFound` if the corpus contributes no
/// edge out of the start marker (e.g. every example was empty).
pub fn build_chain<S: AsRef<str>>(
	examples: &[S],
	base_options: ChainOptions,
) -> Result<PatternGraph, GenerateError> {
	let mut transitions: HashMap<String, Vec<String>> = HashMap::new();

	for example in examples {
		let word = example.as_ref().trim().to_lowercase();
		if word.is_empty() {
			continue;
		}

		let groupings = deconstruct(&word, &ChainOptions::default());
		debug!("learning '{}': {} groupings", word, groupings.len());

		for grouping in &groupings {
			let mut previous = START_TOKEN;
			for token in grouping {
				transitions
					.entry(previous.to_owned())
					.or_default()
					.push(token.clone());
				previous = token;
			}
			transitions
				.entry(previous.to_owned())
				.or_default()
				.push(END_TOKEN.to_owned());
		}
	}

	for successors in transitions.values_mut() {
		dedup_preserving_order(successors);
	}

	PatternGraph::new(transitions, base_options)
}

/// Removes duplicate entries, keeping the first occurrence of each.
fn dedup_preserving_order(tokens: &mut Vec<String>) {
	let mut seen = HashSet::new();
	tokens.retain(|token| seen.insert(token.clone()));
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	fn successor_set(graph: &PatternGraph, token: &str) -> HashSet<String> {
		graph
			.successors(token)
			.unwrap_or_default()
			.iter()
			.cloned()
			.collect()
	}

	#[test]
	fn learns_every_grouping_of_a_single_example() {
		let graph = build_chain(&["ab"], ChainOptions::default()).unwrap();

		// "ab" segments as [a, b] and [ab].
		let expected: HashSet<String> = ["a", "ab"].iter().map(|s| s.to_string()).collect();
		assert_eq!(successor_set(&graph, START_TOKEN), expected);
		assert_eq!(successor_set(&graph, "a"), HashSet::from(["b".to_owned()]));
		assert_eq!(successor_set(&graph, "b"), HashSet::from([END_TOKEN.to_owned()]));
		assert_eq!(successor_set(&graph, "ab"), HashSet::from([END_TOKEN.to_owned()]));
	}

	#[test]
	fn successor_lists_are_deduplicated() {
		// "aa" and "ab" both contribute ^ -> a.
		let graph = build_chain(&["aa", "ab"], ChainOptions::default()).unwrap();
		let starts = graph.successors(START_TOKEN).unwrap();
		let distinct: HashSet<&String> = starts.iter().collect();
		assert_eq!(starts.len(), distinct.len());
	}

	#[test]
	fn building_twice_yields_identical_adjacency_sets() {
		let corpus = ["thane", "thorin", "anor"];
		let first = build_chain(&corpus, ChainOptions::default()).unwrap();
		let second = build_chain(&corpus, ChainOptions::default()).unwrap();

		let first_keys: HashSet<&String> = first.transitions().keys().collect();
		let second_keys: HashSet<&String> = second.transitions().keys().collect();
		assert_eq!(first_keys, second_keys);

		for token in first.transitions().keys() {
			assert_eq!(
				successor_set(&first, token),
				successor_set(&second, token),
				"adjacency set mismatch at '{}'",
				token
			);
		}
	}

	#[test]
	fn examples_are_trimmed_and_lowercased() {
		let plain = build_chain(&["ab"], ChainOptions::default()).unwrap();
		let noisy = build_chain(&["  AB \n"], ChainOptions::default()).unwrap();
		assert_eq!(successor_set(&plain, START_TOKEN), successor_set(&noisy, START_TOKEN));
	}

	#[test]
	fn empty_corpus_fails_fast() {
		let err = build_chain(&["", "   "], ChainOptions::default());
		assert_eq!(err.unwrap_err(), GenerateError::PatternNotFound);

		let err = build_chain::<&str>(&[], ChainOptions::default());
		assert_eq!(err.unwrap_err(), GenerateError::PatternNotFound);
	}
}

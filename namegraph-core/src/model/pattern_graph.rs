use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::GenerateError;

/// Token marking the unique entry point of every walk.
pub const START_TOKEN: &str = "^";

/// Token marking a valid termination point of a walk.
pub const END_TOKEN: &str = "$";

/// Optional generation bounds attached to a pattern graph.
///
/// Each bound is independently optional; `None` means unconstrained.
/// The same record drives both the walker's incremental filters and the
/// segmenter's grouping filter.
///
/// # Fields
/// - `min_nodes` / `max_nodes`: token count per name, markers excluded.
/// - `consecutive_single_letter_limit`: longest allowed run of
///   single-character tokens.
/// - `total_single_letter_limit`: total single-character tokens per name.
/// - `duplicate_cluster_limit`: how many times one identical token of
///   length >= 3 may repeat within a name.
/// - `total_cluster_limit`: total tokens of length >= 3 per name.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainOptions {
	pub min_nodes: Option<usize>,
	pub max_nodes: Option<usize>,
	pub consecutive_single_letter_limit: Option<usize>,
	pub total_single_letter_limit: Option<usize>,
	pub duplicate_cluster_limit: Option<usize>,
	pub total_cluster_limit: Option<usize>,
}

/// A directed multigraph of phonetic tokens plus its generation bounds.
///
/// Maps each token (including the start and end markers) to an ordered
/// list of successor tokens. Successor lists are unweighted candidate
/// sets, not probability distributions; cycles are permitted and
/// expected.
///
/// # Invariants
/// - The start marker key exists with a non-empty successor list
///   (validated at construction).
/// - The graph is read-only once constructed; all generation takes
///   `&self`, so concurrent reads from simultaneous calls are safe.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PatternGraph {
	transitions: HashMap<String, Vec<String>>,
	options: ChainOptions,
}

impl PatternGraph {
	/// Creates a graph from an adjacency map and its generation bounds.
	///
	/// # Errors
	/// Returns `GenerateError::PatternNotFound` if the start marker is
	/// absent or has no successors. Failing fast here beats silently
	/// producing a graph every generation call would reject.
	pub fn new(
		transitions: HashMap<String, Vec<String>>,
		options: ChainOptions,
	) -> Result<Self, GenerateError> {
		match transitions.get(START_TOKEN) {
			Some(successors) if !successors.is_empty() => Ok(Self { transitions, options }),
			_ => Err(GenerateError::PatternNotFound),
		}
	}

	/// Creates a graph from a literal table, for hand-authored languages.
	///
	/// # Example
	/// ```
	/// use namegraph_core::model::pattern_graph::{ChainOptions, PatternGraph};
	///
	/// let graph = PatternGraph::from_table(
	/// 	&[("^", &["ab"][..]), ("ab", &["$"][..])],
	/// 	ChainOptions::default(),
	/// ).unwrap();
	/// assert_eq!(graph.successors("ab"), Some(&["$".to_owned()][..]));
	/// ```
	pub fn from_table(
		table: &[(&str, &[&str])],
		options: ChainOptions,
	) -> Result<Self, GenerateError> {
		let transitions = table
			.iter()
			.map(|(token, successors)| {
				(
					(*token).to_owned(),
					successors.iter().map(|s| (*s).to_owned()).collect(),
				)
			})
			.collect();
		Self::new(transitions, options)
	}

	/// Returns the successor list of a token, or `None` for unknown tokens.
	pub fn successors(&self, token: &str) -> Option<&[String]> {
		self.transitions.get(token).map(|v| v.as_slice())
	}

	/// The generation bounds attached to this graph.
	pub fn options(&self) -> &ChainOptions {
		&self.options
	}

	/// Read-only view of the whole adjacency map (diagnostic dumps).
	pub fn transitions(&self) -> &HashMap<String, Vec<String>> {
		&self.transitions
	}
}

/// A single-letter token is exactly one character long (UTF-8 aware).
/// The end marker is exempt: it never becomes part of the text.
pub(crate) fn is_single_letter(token: &str) -> bool {
	token != END_TOKEN && token.chars().count() == 1
}

/// A cluster token is three or more characters long (UTF-8 aware).
pub(crate) fn is_cluster(token: &str) -> bool {
	token != END_TOKEN && token.chars().count() >= 3
}

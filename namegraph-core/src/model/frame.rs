use std::collections::HashMap;

use super::pattern_graph::{is_cluster, is_single_letter};

/// One level of the backtracking stack.
///
/// A `Frame` is created when a token is accepted and destroyed when the
/// walk backtracks past it; it never outlives one `generate_name` call.
///
/// ## Responsibilities
/// - Own the not-yet-tried successor set for its node (shrinks
///   monotonically as choices are attempted, which is what makes
///   backtracking exhaustive and terminating on a finite graph)
/// - Carry the counters the constraint filters read
///
/// ## Invariants
/// - `untried` only ever shrinks
/// - Counters describe the accepted prefix up to and including `node`
#[derive(Debug, Clone)]
pub(crate) struct Frame {
	/// Text accumulated so far (markers excluded).
	pub text: String,
	/// The node this frame sits on.
	pub node: String,
	/// Successor tokens not yet attempted from this node.
	pub untried: Vec<String>,
	/// Accepted tokens so far (markers excluded).
	pub node_count: usize,
	/// Length of the current trailing run of single-letter tokens.
	pub single_run: usize,
	/// Total single-letter tokens accepted so far.
	pub single_total: usize,
	/// Per-token usage counts for cluster tokens (length >= 3),
	/// keyed by literal token text.
	pub cluster_uses: HashMap<String, usize>,
	/// Total cluster tokens accepted so far.
	pub cluster_total: usize,
}

impl Frame {
	/// The initial frame, sitting on the start marker with its full
	/// successor list untried.
	pub fn start(node: String, untried: Vec<String>) -> Self {
		Self {
			text: String::new(),
			node,
			untried,
			node_count: 0,
			single_run: 0,
			single_total: 0,
			cluster_uses: HashMap::new(),
			cluster_total: 0,
		}
	}

	/// The frame reached by accepting `token` from this one.
	pub fn advance(&self, token: &str, untried: Vec<String>) -> Self {
		let single = is_single_letter(token);
		let cluster = is_cluster(token);

		let mut cluster_uses = self.cluster_uses.clone();
		if cluster {
			*cluster_uses.entry(token.to_owned()).or_insert(0) += 1;
		}

		Self {
			text: format!("{}{}", self.text, token),
			node: token.to_owned(),
			untried,
			node_count: self.node_count + 1,
			single_run: if single { self.single_run + 1 } else { 0 },
			single_total: self.single_total + usize::from(single),
			cluster_uses,
			cluster_total: self.cluster_total + usize::from(cluster),
		}
	}

	/// How many times `token` has already been accepted on this branch.
	pub fn uses_of(&self, token: &str) -> usize {
		self.cluster_uses.get(token).copied().unwrap_or(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn advance_tracks_counters() {
		let start = Frame::start("^".to_owned(), vec!["a".to_owned()]);
		let one = start.advance("a", vec![]);
		assert_eq!(one.text, "a");
		assert_eq!(one.node_count, 1);
		assert_eq!(one.single_run, 1);
		assert_eq!(one.single_total, 1);

		let two = one.advance("tar", vec![]);
		assert_eq!(two.text, "atar");
		assert_eq!(two.single_run, 0, "cluster token resets the run");
		assert_eq!(two.single_total, 1);
		assert_eq!(two.cluster_total, 1);
		assert_eq!(two.uses_of("tar"), 1);

		let three = two.advance("tar", vec![]);
		assert_eq!(three.uses_of("tar"), 2);
		assert_eq!(three.cluster_total, 2);
	}
}

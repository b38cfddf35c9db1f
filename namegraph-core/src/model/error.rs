use thiserror::Error;

/// Error raised by graph construction and name generation.
///
/// One tagged-variant type covers every failure mode so that callers
/// needing only a retry signal can match on the type, while callers
/// wanting strict semantics can inspect the variant and its payload
/// (partial text, current node, iteration count).
///
/// All variants are recoverable at the batch level: the batch generator
/// treats each of them as "retry" and never propagates them outward.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
	/// The start marker has no successors; the graph can never produce
	/// a name. Fatal for that graph.
	#[error("start marker has no successors in the pattern graph")]
	PatternNotFound,

	/// Backtracking exhausted the whole stack without reaching the end
	/// marker under the current constraints.
	#[error("no valid continuations (partial '{partial}' at node '{node}', {iterations} iterations)")]
	NoValidContinuations {
		partial: String,
		node: String,
		iterations: usize,
	},

	/// The wall-clock budget was consumed. Advisory only: it is checked
	/// once per loop iteration, not preemptively.
	#[error("time limit exceeded (partial '{partial}' at node '{node}', {iterations} iterations)")]
	TimeLimitExceeded {
		partial: String,
		node: String,
		iterations: usize,
	},

	/// The fixed iteration cap was consumed. This is the primary guard,
	/// since a tight loop can exhaust a time budget between clock checks.
	#[error("iteration cap exceeded (partial '{partial}' at node '{node}', {iterations} iterations)")]
	IterationsExceeded {
		partial: String,
		node: String,
		iterations: usize,
	},
}

impl GenerateError {
	/// The text accumulated before the failure, if any.
	pub fn partial(&self) -> &str {
		match self {
			Self::PatternNotFound => "",
			Self::NoValidContinuations { partial, .. }
			| Self::TimeLimitExceeded { partial, .. }
			| Self::IterationsExceeded { partial, .. } => partial,
		}
	}

	/// The node the walk was at when the failure occurred, if any.
	pub fn node(&self) -> Option<&str> {
		match self {
			Self::PatternNotFound => None,
			Self::NoValidContinuations { node, .. }
			| Self::TimeLimitExceeded { node, .. }
			| Self::IterationsExceeded { node, .. } => Some(node),
		}
	}

	/// Number of loop iterations consumed before the failure.
	pub fn iterations(&self) -> usize {
		match self {
			Self::PatternNotFound => 0,
			Self::NoValidContinuations { iterations, .. }
			| Self::TimeLimitExceeded { iterations, .. }
			| Self::IterationsExceeded { iterations, .. } => *iterations,
		}
	}
}

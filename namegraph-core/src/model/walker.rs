use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::Rng;

use super::error::GenerateError;
use super::frame::Frame;
use super::pattern_graph::{ChainOptions, END_TOKEN, PatternGraph, START_TOKEN, is_cluster, is_single_letter};

/// Hard cap on loop iterations per `generate_name` call.
///
/// This is the primary safety net: a tight loop over a pathological graph
/// (cycles with no short path to the end marker) can exhaust a wall-clock
/// budget between clock checks, so the cap bounds the work regardless.
pub const MAX_ITERATIONS: usize = 10_000;

/// Samples one name from a pattern graph by a constrained backtracking walk.
///
/// # Parameters
/// - `graph`: the pattern graph, with its attached `ChainOptions` bounds.
/// - `time_limit`: advisory wall-clock budget, checked once per iteration.
///
/// # Behavior
/// - Starts with one frame on the start marker, its full successor list
///   untried. If both `min_nodes` and `max_nodes` are set, a
///   forced-cluster index is drawn once, uniformly in that range; at that
///   node position cluster tokens (length >= 3) are preferred whenever
///   any is available, guaranteeing some structural variety instead of
///   systematically short, flat names.
/// - Each iteration filters the top frame's untried successors through
///   the active bounds, then picks uniformly among the survivors. The
///   pick is permanently removed from the frame's untried set, which is
///   what makes backtracking eventually exhaustive on a finite graph.
/// - A frame with no admissible untried successors is popped (backtrack).
///   A chosen token with no successors in the graph is a pruned dead end:
///   it is discarded and the walk stays on the same frame.
/// - Accepting the end marker succeeds; the first character of the
///   accumulated text is upper-cased once, here at the boundary.
///
/// # Errors
/// - `PatternNotFound`: the start marker has no successors.
/// - `NoValidContinuations`: backtracking exhausted the stack.
/// - `TimeLimitExceeded` / `IterationsExceeded`: a resource guard tripped.
pub fn generate_name(graph: &PatternGraph, time_limit: Duration) -> Result<String, GenerateError> {
	let start_untried = match graph.successors(START_TOKEN) {
		Some(successors) if !successors.is_empty() => successors.to_vec(),
		_ => return Err(GenerateError::PatternNotFound),
	};

	let options = graph.options();
	let forced_cluster_at = match (options.min_nodes, options.max_nodes) {
		(Some(min), Some(max)) if min <= max => Some(rand::rng().random_range(min..=max)),
		_ => None,
	};

	let started = Instant::now();
	let mut iterations = 0usize;
	let mut stack = vec![Frame::start(START_TOKEN.to_owned(), start_untried)];

	loop {
		// The stack is never empty here: backtracking below returns as
		// soon as the last frame is popped.
		let top = stack.len() - 1;

		if iterations >= MAX_ITERATIONS {
			return Err(GenerateError::IterationsExceeded {
				partial: stack[top].text.clone(),
				node: stack[top].node.clone(),
				iterations,
			});
		}
		if started.elapsed() >= time_limit {
			return Err(GenerateError::TimeLimitExceeded {
				partial: stack[top].text.clone(),
				node: stack[top].node.clone(),
				iterations,
			});
		}
		iterations += 1;

		let mut valid: Vec<usize> = stack[top]
			.untried
			.iter()
			.enumerate()
			.filter(|(_, token)| admits(&stack[top], token, options))
			.map(|(index, _)| index)
			.collect();

		// Forced cluster: at the pre-chosen node position, restrict to
		// cluster tokens whenever any survives the other filters.
		if let Some(index) = forced_cluster_at {
			if stack[top].node_count + 1 == index {
				let clusters: Vec<usize> = valid
					.iter()
					.copied()
					.filter(|&i| is_cluster(&stack[top].untried[i]))
					.collect();
				if !clusters.is_empty() {
					valid = clusters;
				}
			}
		}

		if valid.is_empty() {
			// Abandon this branch. Cannot panic: the frame was just
			// inspected through `top`.
			let abandoned = stack.pop().unwrap();
			debug!("backtracking past '{}' ('{}')", abandoned.node, abandoned.text);
			if stack.is_empty() {
				return Err(GenerateError::NoValidContinuations {
					partial: abandoned.text,
					node: abandoned.node,
					iterations,
				});
			}
			continue;
		}

		let pick = valid[rand::rng().random_range(0..valid.len())];
		let token = stack[top].untried.swap_remove(pick);

		if token == END_TOKEN {
			trace!("accepted end marker after '{}'", stack[top].text);
			return Ok(capitalize(&stack[top].text));
		}

		match graph.successors(&token) {
			Some(successors) if !successors.is_empty() => {
				let next = stack[top].advance(&token, successors.to_vec());
				trace!("accepted '{}' -> '{}'", token, next.text);
				stack.push(next);
			}
			_ => {
				// Pruned dead end, distinct from backtracking: the token
				// leads nowhere, so discard it and stay on this frame
				// rather than pushing an unusable one.
				debug!("pruned dead end at '{}'", token);
			}
		}
	}
}

/// Checks one candidate token against every active bound of the graph.
/// Each filter is independent; a `None` bound never rejects.
fn admits(frame: &Frame, token: &str, options: &ChainOptions) -> bool {
	if let Some(min) = options.min_nodes {
		if frame.node_count < min && token == END_TOKEN {
			return false;
		}
	}
	if let Some(max) = options.max_nodes {
		if frame.node_count >= max && token != END_TOKEN {
			return false;
		}
	}
	if is_single_letter(token) {
		if let Some(limit) = options.consecutive_single_letter_limit {
			if frame.single_run >= limit {
				return false;
			}
		}
		if let Some(limit) = options.total_single_letter_limit {
			if frame.single_total >= limit {
				return false;
			}
		}
	}
	if is_cluster(token) {
		if let Some(limit) = options.duplicate_cluster_limit {
			if frame.uses_of(token) >= limit {
				return false;
			}
		}
		if let Some(limit) = options.total_cluster_limit {
			if frame.cluster_total >= limit {
				return false;
			}
		}
	}
	true
}

/// Upper-cases the first character; applied once, at the success boundary.
fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

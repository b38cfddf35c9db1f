use std::collections::HashMap;

use super::pattern_graph::{ChainOptions, is_cluster, is_single_letter};

/// Enumerates every admissible segmentation of `word` into contiguous,
/// non-empty tokens.
///
/// For a word of n characters there are 2^(n-1) ways to place cut points
/// between adjacent characters; each yields one grouping. The full
/// candidate set is then filtered, independently, by whichever bounds in
/// `options` are set.
///
/// # Returns
/// The surviving groupings. May be empty if no grouping satisfies all
/// active constraints. An empty word has no groupings.
///
/// # Notes
/// - Pure, no side effects: reused unmodified by both name-structure
///   analysis and corpus learning.
/// - UTF-8 safe: cut points fall between characters, not bytes.
pub fn deconstruct(word: &str, options: &ChainOptions) -> Vec<Vec<String>> {
	let chars: Vec<char> = word.chars().collect();
	if chars.is_empty() {
		return Vec::new();
	}

	let mut groupings = Vec::new();
	let mut current = Vec::new();
	enumerate(&chars, &mut current, options, &mut groupings);
	groupings
}

/// Recursively extends `current` with every possible first-token length,
/// collecting complete groupings that pass the constraint filter.
fn enumerate(
	rest: &[char],
	current: &mut Vec<String>,
	options: &ChainOptions,
	out: &mut Vec<Vec<String>>,
) {
	if rest.is_empty() {
		if grouping_satisfies(current, options) {
			out.push(current.clone());
		}
		return;
	}

	// Any extension adds at least one token, so a prefix already at
	// max_nodes can never complete into an admissible grouping.
	if let Some(max) = options.max_nodes {
		if current.len() >= max {
			return;
		}
	}

	for len in 1..=rest.len() {
		let token: String = rest[..len].iter().collect();
		current.push(token);
		enumerate(&rest[len..], current, options, out);
		current.pop();
	}
}

/// Checks one grouping against every active bound. Each filter is
/// independent; a `None` bound never rejects.
fn grouping_satisfies(tokens: &[String], options: &ChainOptions) -> bool {
	if let Some(min) = options.min_nodes {
		if tokens.len() < min {
			return false;
		}
	}
	if let Some(max) = options.max_nodes {
		if tokens.len() > max {
			return false;
		}
	}

	let mut run = 0usize;
	let mut longest_run = 0usize;
	let mut single_total = 0usize;
	let mut cluster_total = 0usize;
	let mut cluster_uses: HashMap<&str, usize> = HashMap::new();

	for token in tokens {
		if is_single_letter(token) {
			run += 1;
			longest_run = longest_run.max(run);
			single_total += 1;
		} else {
			run = 0;
		}
		if is_cluster(token) {
			cluster_total += 1;
			*cluster_uses.entry(token.as_str()).or_insert(0) += 1;
		}
	}

	if let Some(limit) = options.consecutive_single_letter_limit {
		if longest_run > limit {
			return false;
		}
	}
	if let Some(limit) = options.total_single_letter_limit {
		if single_total > limit {
			return false;
		}
	}
	if let Some(limit) = options.duplicate_cluster_limit {
		if cluster_uses.values().any(|&uses| uses > limit) {
			return false;
		}
	}
	if let Some(limit) = options.total_cluster_limit {
		if cluster_total > limit {
			return false;
		}
	}

	true
}

#[cfg(test)]
mod tests {
	use super::*;

	fn grouping(tokens: &[&str]) -> Vec<String> {
		tokens.iter().map(|t| (*t).to_owned()).collect()
	}

	#[test]
	fn unconstrained_cat_has_four_groupings() {
		let groupings = deconstruct("cat", &ChainOptions::default());
		assert_eq!(groupings.len(), 4);
		assert!(groupings.contains(&grouping(&["c", "a", "t"])));
		assert!(groupings.contains(&grouping(&["ca", "t"])));
		assert!(groupings.contains(&grouping(&["c", "at"])));
		assert!(groupings.contains(&grouping(&["cat"])));
	}

	#[test]
	fn empty_word_has_no_groupings() {
		assert!(deconstruct("", &ChainOptions::default()).is_empty());
	}

	#[test]
	fn token_count_bounds_filter_groupings() {
		let options = ChainOptions {
			min_nodes: Some(2),
			max_nodes: Some(2),
			..ChainOptions::default()
		};
		let groupings = deconstruct("cat", &options);
		assert_eq!(groupings.len(), 2);
		assert!(groupings.contains(&grouping(&["ca", "t"])));
		assert!(groupings.contains(&grouping(&["c", "at"])));
	}

	#[test]
	fn consecutive_single_letter_limit_filters_runs() {
		let options = ChainOptions {
			consecutive_single_letter_limit: Some(2),
			..ChainOptions::default()
		};
		let groupings = deconstruct("cat", &options);
		assert!(!groupings.contains(&grouping(&["c", "a", "t"])));
		assert_eq!(groupings.len(), 3);
	}

	#[test]
	fn total_single_letter_limit_is_independent_of_runs() {
		// "c, a, ta, t" has no run longer than 2 but three singles total.
		let options = ChainOptions {
			total_single_letter_limit: Some(2),
			..ChainOptions::default()
		};
		let groupings = deconstruct("catat", &options);
		assert!(!groupings.is_empty());
		assert!(groupings.len() < 16, "nothing was filtered");
		for g in &groupings {
			let singles = g.iter().filter(|t| t.chars().count() == 1).count();
			assert!(singles <= 2, "grouping {:?} has {} singles", g, singles);
		}
	}

	#[test]
	fn duplicate_cluster_limit_rejects_repeats() {
		let options = ChainOptions {
			duplicate_cluster_limit: Some(1),
			..ChainOptions::default()
		};
		let groupings = deconstruct("tartar", &options);
		assert!(!groupings.contains(&grouping(&["tar", "tar"])));
		// Unrelated clusters are still admissible.
		assert!(groupings.contains(&grouping(&["tart", "ar"])));
	}

	#[test]
	fn total_cluster_limit_caps_cluster_count() {
		let options = ChainOptions {
			total_cluster_limit: Some(1),
			..ChainOptions::default()
		};
		let groupings = deconstruct("tartar", &options);
		assert!(!groupings.is_empty());
		assert!(groupings.len() < 32, "nothing was filtered");
		for g in &groupings {
			let clusters = g.iter().filter(|t| t.chars().count() >= 3).count();
			assert!(clusters <= 1, "grouping {:?} has {} clusters", g, clusters);
		}
	}

	#[test]
	fn over_constrained_word_yields_nothing() {
		let options = ChainOptions {
			max_nodes: Some(1),
			total_cluster_limit: Some(0),
			..ChainOptions::default()
		};
		assert!(deconstruct("cat", &options).is_empty());
	}

	#[test]
	fn grouping_count_is_exponential_in_length() {
		// 2^(n-1) groupings when unconstrained.
		assert_eq!(deconstruct("ab", &ChainOptions::default()).len(), 2);
		assert_eq!(deconstruct("abcd", &ChainOptions::default()).len(), 8);
		assert_eq!(deconstruct("abcdef", &ChainOptions::default()).len(), 32);
	}
}

use std::collections::HashSet;

use serde::Serialize;

/// Offline quality signal for a generated batch.
///
/// No interaction with generation state; used to evaluate graph and
/// constraint quality after the fact.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DiversityReport {
	/// Distinct names divided by batch size (0.0 for an empty batch).
	pub unique_ratio: f32,
	/// Mean Levenshtein distance over all unordered pairs of names
	/// (0.0 when the batch holds fewer than two names).
	pub mean_distance: f32,
}

/// Scores a batch of generated names.
pub fn evaluate<S: AsRef<str>>(batch: &[S]) -> DiversityReport {
	if batch.is_empty() {
		return DiversityReport { unique_ratio: 0.0, mean_distance: 0.0 };
	}

	let distinct: HashSet<&str> = batch.iter().map(|name| name.as_ref()).collect();
	let unique_ratio = distinct.len() as f32 / batch.len() as f32;

	let mut total = 0usize;
	let mut pairs = 0usize;
	for (i, left) in batch.iter().enumerate() {
		for right in &batch[i + 1..] {
			total += levenshtein(left.as_ref(), right.as_ref());
			pairs += 1;
		}
	}
	let mean_distance = if pairs == 0 { 0.0 } else { total as f32 / pairs as f32 };

	DiversityReport { unique_ratio, mean_distance }
}

/// Levenshtein edit distance between two strings, over characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();
	if a.is_empty() {
		return b.len();
	}
	if b.is_empty() {
		return a.len();
	}

	// One rolling row of the edit matrix.
	let mut row: Vec<usize> = (0..=b.len()).collect();
	for (i, &ca) in a.iter().enumerate() {
		let mut previous_diagonal = row[0];
		row[0] = i + 1;
		for (j, &cb) in b.iter().enumerate() {
			let substitution = previous_diagonal + usize::from(ca != cb);
			previous_diagonal = row[j + 1];
			row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
		}
	}
	row[b.len()]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_edit_distances() {
		assert_eq!(levenshtein("kitten", "sitting"), 3);
		assert_eq!(levenshtein("flaw", "lawn"), 2);
		assert_eq!(levenshtein("", "abc"), 3);
		assert_eq!(levenshtein("abc", ""), 3);
		assert_eq!(levenshtein("same", "same"), 0);
	}

	#[test]
	fn empty_batch_scores_zero() {
		let report = evaluate::<&str>(&[]);
		assert_eq!(report.unique_ratio, 0.0);
		assert_eq!(report.mean_distance, 0.0);
	}

	#[test]
	fn single_name_has_no_pairs() {
		let report = evaluate(&["Anor"]);
		assert_eq!(report.unique_ratio, 1.0);
		assert_eq!(report.mean_distance, 0.0);
	}

	#[test]
	fn duplicate_batch_halves_the_ratio() {
		let report = evaluate(&["Anor", "Anor"]);
		assert_eq!(report.unique_ratio, 0.5);
		assert_eq!(report.mean_distance, 0.0);
	}

	#[test]
	fn mean_is_taken_over_unordered_pairs() {
		// Pairwise distances: ab-ac = 1, ab-ad = 1, ac-ad = 1.
		let report = evaluate(&["ab", "ac", "ad"]);
		assert_eq!(report.unique_ratio, 1.0);
		assert_eq!(report.mean_distance, 1.0);
	}
}

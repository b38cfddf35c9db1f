use super::pattern_graph::{ChainOptions, PatternGraph};

/// Builds one built-in language graph from its literal table.
type GraphBuilder = fn() -> PatternGraph;

/// Flat table of built-in languages. Graphs are plain data resolved
/// through a pure accessor, so there is nothing to load lazily and no
/// ordering concern between languages.
const LANGUAGES: &[(&str, GraphBuilder)] = &[("elvish", elvish), ("nordic", nordic)];

/// Identifiers of every built-in language.
pub fn ids() -> Vec<&'static str> {
	LANGUAGES.iter().map(|(id, _)| *id).collect()
}

/// Builds the graph registered under `id`, or `None` for unknown ids.
pub fn graph(id: &str) -> Option<PatternGraph> {
	LANGUAGES
		.iter()
		.find(|(known, _)| *known == id)
		.map(|(_, builder)| builder())
}

/// Soft, flowing names: liquid consonants, open vowels, long suffixes.
fn elvish() -> PatternGraph {
	// Cannot fail: the table carries the start marker.
	PatternGraph::from_table(
		&[
			("^", &["gal", "el", "ara", "thal", "a", "i", "lu"][..]),
			("gal", &["adri", "a", "iel", "$"][..]),
			("el", &["a", "wen", "rond", "$"][..]),
			("ara", &["wen", "gorn", "l", "$"][..]),
			("thal", &["ia", "iel", "$"][..]),
			("a", &["l", "ra", "iel", "nor", "$"][..]),
			("i", &["thil", "a", "l", "$"][..]),
			("lu", &["thien", "nor", "$"][..]),
			("adri", &["el", "$"][..]),
			("iel", &["$"][..]),
			("wen", &["$"][..]),
			("rond", &["el", "$"][..]),
			("gorn", &["$"][..]),
			("l", &["a", "iel", "wen", "$"][..]),
			("ia", &["$"][..]),
			("ra", &["gorn", "wen", "$"][..]),
			("nor", &["a", "$"][..]),
			("thil", &["$"][..]),
			("thien", &["$"][..]),
		],
		ChainOptions {
			min_nodes: Some(2),
			max_nodes: Some(4),
			consecutive_single_letter_limit: Some(2),
			total_single_letter_limit: Some(3),
			duplicate_cluster_limit: Some(1),
			total_cluster_limit: Some(3),
		},
	)
	.unwrap()
}

/// Harder northern sound: heavy onsets, clipped endings.
fn nordic() -> PatternGraph {
	// Cannot fail: the table carries the start marker.
	PatternGraph::from_table(
		&[
			("^", &["thor", "sig", "ast", "bj", "ra", "gun", "ei"][..]),
			("thor", &["a", "vald", "$"][..]),
			("sig", &["rid", "urd", "ny", "$"][..]),
			("ast", &["rid", "a", "$"][..]),
			("bj", &["orn", "$"][..]),
			("ra", &["gn", "gnar", "$"][..]),
			("gun", &["nar", "hild", "$"][..]),
			("ei", &["rik", "nar", "$"][..]),
			("a", &["ld", "ri", "$"][..]),
			("vald", &["$"][..]),
			("rid", &["$"][..]),
			("urd", &["$"][..]),
			("ny", &["$"][..]),
			("orn", &["$"][..]),
			("gn", &["ar", "$"][..]),
			("gnar", &["$"][..]),
			("nar", &["$"][..]),
			("hild", &["ur", "$"][..]),
			("rik", &["$"][..]),
			("ld", &["$"][..]),
			("ri", &["k", "$"][..]),
			("ar", &["$"][..]),
			("ur", &["$"][..]),
			("k", &["$"][..]),
		],
		ChainOptions {
			min_nodes: Some(2),
			max_nodes: Some(3),
			consecutive_single_letter_limit: Some(1),
			total_single_letter_limit: Some(2),
			duplicate_cluster_limit: Some(1),
			total_cluster_limit: Some(2),
		},
	)
	.unwrap()
}

/// Static fragment-to-meaning dictionary for glossing generated names.
///
/// Consumes only finished name strings; no coupling back into
/// generation.
static MEANINGS: &[(&str, &str)] = &[
	("adri", "steadfast"),
	("ara", "noble"),
	("ar", "warrior"),
	("ast", "beloved"),
	("bjorn", "bear"),
	("ei", "ever"),
	("el", "star"),
	("gal", "light"),
	("gorn", "dread"),
	("gun", "war"),
	("hild", "battle"),
	("ia", "deep"),
	("iel", "daughter"),
	("lu", "shadow"),
	("nar", "keen"),
	("nor", "land"),
	("ny", "new"),
	("rid", "rider"),
	("rik", "ruler"),
	("rond", "hall"),
	("sig", "victory"),
	("thal", "vale"),
	("thien", "twilight"),
	("thil", "crown"),
	("thor", "thunder"),
	("ur", "ancient"),
	("urd", "fate"),
	("vald", "power"),
	("wen", "maiden"),
];

/// Produces a human-readable gloss for a finished name.
///
/// At each position the longest known fragment is matched greedily;
/// characters no fragment covers are skipped. The matched meanings are
/// joined with spaces. Returns an empty string if nothing matched.
pub fn gloss(name: &str) -> String {
	let lower = name.to_lowercase();
	let mut meanings: Vec<&str> = Vec::new();

	let mut rest = lower.as_str();
	while !rest.is_empty() {
		let best = MEANINGS
			.iter()
			.filter(|(fragment, _)| rest.starts_with(fragment))
			.max_by_key(|(fragment, _)| fragment.len());

		match best {
			Some(&(fragment, meaning)) => {
				meanings.push(meaning);
				rest = &rest[fragment.len()..];
			}
			None => {
				// Skip one character and try the next position.
				let mut chars = rest.chars();
				chars.next();
				rest = chars.as_str();
			}
		}
	}

	meanings.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn glosses_adjacent_fragments() {
		assert_eq!(gloss("Galadriel"), "light steadfast star");
		assert_eq!(gloss("Thorin"), "thunder");
	}

	#[test]
	fn longest_fragment_wins_at_each_position() {
		// "urd" must beat "ur".
		assert_eq!(gloss("Sigurd"), "victory fate");
	}

	#[test]
	fn unknown_characters_are_skipped() {
		assert_eq!(gloss("Xel"), "star");
		assert_eq!(gloss("zzz"), "");
	}

	#[test]
	fn empty_name_glosses_empty() {
		assert_eq!(gloss(""), "");
	}
}

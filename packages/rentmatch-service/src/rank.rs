use std::{cmp::Reverse, collections::HashSet};

use rentmatch_config::{DEFAULT_BROWSE_LIMIT, DEFAULT_RANK_LIMIT, Matching};
use rentmatch_domain::{Listing, text};

/// Token-overlap ranker over each listing's searchable text.
#[derive(Debug, Clone, Copy)]
pub struct TextRanker {
	browse_limit: usize,
	rank_limit: usize,
}
impl TextRanker {
	pub fn new(browse_limit: usize, rank_limit: usize) -> Self {
		Self { browse_limit, rank_limit }
	}

	pub fn from_config(cfg: &Matching) -> Self {
		Self::new(cfg.browse_limit as usize, cfg.rank_limit as usize)
	}

	/// Ranks listings by the number of distinct query terms their searchable text contains.
	///
	/// A blank query browses: the first `browse_limit` listings in catalog order. Otherwise only
	/// listings matching at least one term survive, best first, ties in catalog order.
	pub fn rank(&self, catalog: &[Listing], raw_query: &str) -> Vec<Listing> {
		let terms = query_terms(raw_query);

		if terms.is_empty() {
			return catalog.iter().take(self.browse_limit).cloned().collect();
		}

		let mut scored: Vec<(usize, &Listing)> = catalog
			.iter()
			.filter_map(|listing| {
				let haystack = listing.searchable_text();
				let hits = terms.iter().filter(|term| haystack.contains(term.as_str())).count();

				(hits > 0).then_some((hits, listing))
			})
			.collect();

		scored.sort_by_key(|(hits, _)| Reverse(*hits));

		tracing::debug!(
			term_count = terms.len(),
			candidate_count = catalog.len(),
			hit_count = scored.len(),
			"Text ranking finished."
		);

		scored.into_iter().take(self.rank_limit).map(|(_, listing)| listing.clone()).collect()
	}
}
impl Default for TextRanker {
	fn default() -> Self {
		Self::new(DEFAULT_BROWSE_LIMIT as usize, DEFAULT_RANK_LIMIT as usize)
	}
}

/// Lower-case whitespace tokens of the query, first occurrence order, duplicates removed.
pub fn query_terms(raw_query: &str) -> Vec<String> {
	let normalized = text::normalize_query(raw_query);
	let mut seen = HashSet::new();
	let mut terms = Vec::new();

	for token in normalized.split_whitespace() {
		if seen.insert(token) {
			terms.push(token.to_string());
		}
	}

	terms
}

//! Extract, filter, rank, fall back.
//!
//! The cascade moves forward only. Each stage either answers with a non-empty sequence or hands
//! over to the next one, and the last stage answers with a catalog prefix, so a non-empty catalog
//! always produces a non-empty result.

use serde::Serialize;

use crate::{Error, Result, catalog::ListingProvider, filter::FilterEngine, rank::TextRanker};
use rentmatch_config::{Config, Matching};
use rentmatch_domain::{Criteria, Extractor, Listing, ParsedCriteria};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
	/// Structured criteria matched at least one listing.
	Filtered,
	/// Criteria matched nothing; free-text overlap did.
	Ranked,
	/// Nothing matched; the catalog prefix was returned.
	Fallback,
}
impl MatchStage {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Filtered => "filtered",
			Self::Ranked => "ranked",
			Self::Fallback => "fallback",
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
	pub listings: Vec<Listing>,
	/// The criteria in effect, reported even when a later stage ignored them.
	pub criteria: Criteria,
	pub stage: MatchStage,
}

#[derive(Debug, Clone)]
pub struct Matcher {
	extractor: Extractor,
	filter: FilterEngine,
	ranker: TextRanker,
	fallback_limit: usize,
	max_results: usize,
}
impl Matcher {
	/// `matching` is expected to have passed [`rentmatch_config::validate_matching`]. Zero limits
	/// are lifted to one so the fallback stage can still answer.
	pub fn new(extractor: Extractor, matching: &Matching) -> Self {
		Self {
			extractor,
			filter: FilterEngine::default(),
			ranker: TextRanker::from_config(matching),
			fallback_limit: (matching.fallback_limit as usize).max(1),
			max_results: (matching.max_results as usize).max(1),
		}
	}

	pub fn from_config(cfg: &Config) -> Self {
		Self::new(Extractor::from_config(&cfg.extraction), &cfg.matching)
	}

	pub fn with_filter(mut self, filter: FilterEngine) -> Self {
		self.filter = filter;

		self
	}

	pub fn extractor(&self) -> &Extractor {
		&self.extractor
	}

	/// Interprets `query` and matches it against the provider's current snapshot.
	pub fn run(&self, provider: &dyn ListingProvider, query: &str) -> Result<MatchResult> {
		let catalog = provider.all_listings().ok_or(Error::CatalogUnavailable)?;

		Ok(self.match_catalog(&catalog, query))
	}

	/// Same cascade, with criteria produced elsewhere instead of by the extractor.
	pub fn run_with_criteria(
		&self,
		provider: &dyn ListingProvider,
		query: &str,
		criteria: Criteria,
	) -> Result<MatchResult> {
		let catalog = provider.all_listings().ok_or(Error::CatalogUnavailable)?;

		Ok(self.match_catalog_with(&catalog, query, criteria))
	}

	pub fn match_catalog(&self, catalog: &[Listing], query: &str) -> MatchResult {
		let criteria = self.extractor.extract(query);

		self.match_catalog_with(catalog, query, criteria)
	}

	pub fn match_catalog_with(
		&self,
		catalog: &[Listing],
		query: &str,
		criteria: Criteria,
	) -> MatchResult {
		let ParsedCriteria { criteria, warnings } = criteria.sanitize();

		for warning in &warnings {
			tracing::warn!(field = warning.field, reason = %warning.reason, "Criteria field dropped.");
		}

		tracing::debug!(
			?criteria,
			catalog_size = catalog.len(),
			sort_by = criteria.sort_key().as_str(),
			"Criteria resolved."
		);

		let filtered = self.filter.filter(catalog, &criteria);

		if !filtered.is_empty() {
			return self.finish(MatchStage::Filtered, filtered, criteria);
		}

		let ranked = self.ranker.rank(catalog, query);

		if !ranked.is_empty() {
			return self.finish(MatchStage::Ranked, ranked, criteria);
		}

		let fallback = catalog.iter().take(self.fallback_limit).cloned().collect();

		self.finish(MatchStage::Fallback, fallback, criteria)
	}

	fn finish(
		&self,
		stage: MatchStage,
		mut listings: Vec<Listing>,
		criteria: Criteria,
	) -> MatchResult {
		listings.truncate(self.max_results);

		tracing::info!(stage = stage.as_str(), count = listings.len(), "Match cascade answered.");

		MatchResult { listings, criteria, stage }
	}
}
impl Default for Matcher {
	fn default() -> Self {
		Self::new(Extractor::default(), &Matching::default())
	}
}

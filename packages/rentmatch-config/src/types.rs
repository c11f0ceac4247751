use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_BROWSE_LIMIT: u32 = 20;
pub const DEFAULT_RANK_LIMIT: u32 = 50;
pub const DEFAULT_FALLBACK_LIMIT: u32 = 10;
pub const DEFAULT_MAX_RESULTS: u32 = 50;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
	#[serde(default)]
	pub matching: Matching,
	#[serde(default)]
	pub extraction: Extraction,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
	/// JSON array of listing records, already normalized by the ingestion side.
	pub path: PathBuf,
}

/// Result-size policy for each stage of the match cascade.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct Matching {
	/// Listings returned by the ranker for a blank query.
	#[serde(default = "default_browse_limit")]
	pub browse_limit: u32,
	/// Upper bound on ranked listings.
	#[serde(default = "default_rank_limit")]
	pub rank_limit: u32,
	/// Catalog prefix returned when neither filtering nor ranking matched.
	#[serde(default = "default_fallback_limit")]
	pub fallback_limit: u32,
	/// Hard cap applied to every result the orchestrator returns.
	#[serde(default = "default_max_results")]
	pub max_results: u32,
}
impl Default for Matching {
	fn default() -> Self {
		Self {
			browse_limit: DEFAULT_BROWSE_LIMIT,
			rank_limit: DEFAULT_RANK_LIMIT,
			fallback_limit: DEFAULT_FALLBACK_LIMIT,
			max_results: DEFAULT_MAX_RESULTS,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Extraction {
	/// Optional. Ordered locality gazetteer; the first entry found in a query wins.
	pub localities: Option<Vec<String>>,
}

fn default_browse_limit() -> u32 {
	DEFAULT_BROWSE_LIMIT
}

fn default_rank_limit() -> u32 {
	DEFAULT_RANK_LIMIT
}

fn default_fallback_limit() -> u32 {
	DEFAULT_FALLBACK_LIMIT
}

fn default_max_results() -> u32 {
	DEFAULT_MAX_RESULTS
}

pub mod catalog;
pub mod facets;
pub mod filter;
pub mod matcher;
pub mod rank;

mod error;

pub use catalog::{InMemoryCatalog, ListingProvider};
pub use error::{Error, Result};
pub use facets::{Facets, NumericField, TextField, ValueRange};
pub use filter::FilterEngine;
pub use matcher::{MatchResult, MatchStage, Matcher};
pub use rank::TextRanker;

use rentmatch_domain::{Criteria, ParsedCriteria};

/// Parses criteria JSON handed over by a collaborator.
///
/// Malformed JSON is an error; well-formed JSON with malformed fields is not, those fields are
/// dropped and listed in the returned warnings.
pub fn criteria_from_json(raw: &str) -> Result<ParsedCriteria> {
	let value: serde_json::Value = serde_json::from_str(raw)?;

	Ok(Criteria::from_value(&value))
}

pub mod criteria;
pub mod extract;
pub mod listing;
pub mod synonyms;
pub mod text;

pub use criteria::{
	BhkCriterion, Criteria, CriteriaWarning, LocalityCriterion, ParsedCriteria, SortKey,
};
pub use extract::Extractor;
pub use listing::Listing;
pub use synonyms::{SynonymFamily, SynonymTable};

//! Rule-based interpretation of free-text rental queries.
//!
//! Each rule family is an ordered table evaluated top to bottom; the first entry found in the
//! query wins. Rules run independently, so one query can fill several fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
	criteria::{BhkCriterion, Criteria, LocalityCriterion},
	text,
};

/// Keyword families mapped onto one canonical value.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
	pub keywords: &'static [&'static str],
	pub canonical: &'static str,
}
impl KeywordRule {
	fn matches(&self, normalized: &str) -> bool {
		self.keywords.iter().any(|keyword| normalized.contains(keyword))
	}
}

pub const DEFAULT_LOCALITIES: &[&str] = &[
	"adyar",
	"anna nagar",
	"t. nagar",
	"t nagar",
	"velachery",
	"porur",
	"mylapore",
	"besant nagar",
	"kilpauk",
	"nungambakkam",
	"alwarpet",
	"royapettah",
	"perambur",
	"chrompet",
	"tambaram",
	"pallavaram",
	"madipakkam",
	"medavakkam",
	"sholinganallur",
	"siruseri",
	"kelambakkam",
	"thoraipakkam",
	"omr",
	"ecr",
	"gst",
	"chennai",
];

pub const PROPERTY_TYPE_RULES: &[KeywordRule] = &[
	KeywordRule { keywords: &["apartment", "flat"], canonical: "Apartment" },
	KeywordRule { keywords: &["house", "independent"], canonical: "Independent House" },
	KeywordRule { keywords: &["studio"], canonical: "Studio Apartment" },
	KeywordRule { keywords: &["villa"], canonical: "Villa" },
	KeywordRule { keywords: &["penthouse"], canonical: "Penthouse" },
];

pub const FURNISHING_RULES: &[KeywordRule] = &[
	KeywordRule { keywords: &["fully furnished", "fully-furnished"], canonical: "Fully Furnished" },
	KeywordRule { keywords: &["semi furnished", "semi-furnished"], canonical: "Semi Furnished" },
	KeywordRule { keywords: &["unfurnished"], canonical: "Unfurnished" },
];

pub const PET_KEYWORDS: &[&str] =
	&["pet friendly", "pet-friendly", "pets allowed", "allow pets", "pet", "dog", "cat"];

/// Unseparated budgets below this are read as thousands ("under 25" means 25,000).
pub const THOUSANDS_SHORTHAND_BELOW: u64 = 1_000;

static BHK_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(\d)\s*bhk").expect("bhk regex is valid"));

static BUDGET_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?:under|less than|below|maximum|max)\s+(\d+)(?:,(\d+))?")
		.expect("budget regex is valid")
});

/// Turns a raw query into [`Criteria`]. Never fails; unrecognized text leaves fields unset.
#[derive(Debug, Clone)]
pub struct Extractor {
	localities: Vec<String>,
}
impl Extractor {
	/// `localities` is the gazetteer in priority order, lower-case.
	pub fn new(localities: Vec<String>) -> Self {
		Self { localities }
	}

	pub fn from_config(cfg: &rentmatch_config::Extraction) -> Self {
		match cfg.localities.as_ref() {
			Some(localities) => Self::new(localities.clone()),
			None => Self::default(),
		}
	}

	pub fn localities(&self) -> &[String] {
		&self.localities
	}

	pub fn extract(&self, query: &str) -> Criteria {
		let normalized = text::normalize_query(query);

		Criteria {
			locality: self.extract_locality(&normalized),
			property_type: first_rule_match(PROPERTY_TYPE_RULES, &normalized)
				.map(str::to_string),
			bhk: extract_bhk(&normalized).map(BhkCriterion::Exact),
			max_rent: extract_budget(&normalized),
			furnishing_status: first_rule_match(FURNISHING_RULES, &normalized)
				.map(str::to_string),
			pets_allowed: extract_pets(&normalized),
			..Default::default()
		}
	}

	fn extract_locality(&self, normalized: &str) -> Option<LocalityCriterion> {
		self.localities
			.iter()
			.find(|locality| normalized.contains(locality.as_str()))
			.map(|locality| LocalityCriterion::One(text::title_case(locality)))
	}
}
impl Default for Extractor {
	fn default() -> Self {
		Self::new(DEFAULT_LOCALITIES.iter().map(|locality| locality.to_string()).collect())
	}
}

pub fn first_rule_match(rules: &[KeywordRule], normalized: &str) -> Option<&'static str> {
	rules.iter().find(|rule| rule.matches(normalized)).map(|rule| rule.canonical)
}

pub fn extract_bhk(normalized: &str) -> Option<u32> {
	BHK_RE.captures(normalized)?.get(1)?.as_str().parse().ok()
}

/// Reads a rent ceiling such as "under 25,000", "max 30000", or "below 25".
///
/// A comma-separated amount is the concatenation of its first two digit groups. An unseparated
/// amount below [`THOUSANDS_SHORTHAND_BELOW`] is multiplied by 1000.
pub fn extract_budget(normalized: &str) -> Option<f64> {
	let captures = BUDGET_RE.captures(normalized)?;
	let head = captures.get(1)?.as_str();
	let budget = match captures.get(2) {
		Some(tail) => format!("{head}{}", tail.as_str()).parse::<u64>().ok()?,
		None => {
			let value = head.parse::<u64>().ok()?;

			if value < THOUSANDS_SHORTHAND_BELOW { value.checked_mul(1_000)? } else { value }
		},
	};

	if budget == 0 {
		return None;
	}

	Some(budget as f64)
}

/// Only ever sets `Some(true)`; the text has no way to ask for pet-free homes.
pub fn extract_pets(normalized: &str) -> Option<bool> {
	PET_KEYWORDS.iter().any(|keyword| normalized.contains(keyword)).then_some(true)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unseparated_small_budget_means_thousands() {
		assert_eq!(extract_budget("under 25"), Some(25_000.0));
		assert_eq!(extract_budget("below 999"), Some(999_000.0));
	}

	#[test]
	fn unseparated_large_budget_is_literal() {
		assert_eq!(extract_budget("under 25000"), Some(25_000.0));
		assert_eq!(extract_budget("max 1000"), Some(1_000.0));
	}

	#[test]
	fn separated_budget_concatenates_first_two_groups() {
		assert_eq!(extract_budget("less than 25,000"), Some(25_000.0));
		assert_eq!(extract_budget("maximum 1,00,000"), Some(100.0));
	}

	#[test]
	fn zero_budget_is_ignored() {
		assert_eq!(extract_budget("under 0"), None);
	}

	#[test]
	fn budget_needs_a_trigger_phrase() {
		assert_eq!(extract_budget("around 25000"), None);
	}

	#[test]
	fn bhk_reads_single_digit_before_marker() {
		assert_eq!(extract_bhk("3bhk"), Some(3));
		assert_eq!(extract_bhk("2 bhk flat"), Some(2));
		assert_eq!(extract_bhk("bhk"), None);
	}

	#[test]
	fn first_property_type_family_wins() {
		assert_eq!(first_rule_match(PROPERTY_TYPE_RULES, "studio apartment"), Some("Apartment"));
		assert_eq!(first_rule_match(PROPERTY_TYPE_RULES, "a villa"), Some("Villa"));
		assert_eq!(first_rule_match(PROPERTY_TYPE_RULES, "a room"), None);
	}
}

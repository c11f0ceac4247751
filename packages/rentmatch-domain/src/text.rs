use time::{
	Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
	macros::format_description,
};
use unicode_normalization::UnicodeNormalization;

/// NFKC-folds and lower-cases raw user text so keyword tables see a single spelling.
pub fn normalize_query(input: &str) -> String {
	let folded: String = input.nfkc().collect();

	folded.to_lowercase()
}

/// Upper-cases the first letter of every space-separated word.
pub fn title_case(input: &str) -> String {
	input
		.split(' ')
		.map(|word| {
			let mut chars = word.chars();

			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Non-finite values coming out of ingestion compare as zero.
pub fn finite_or_zero(value: f64) -> f64 {
	if value.is_finite() { value } else { 0.0 }
}

/// Parses the free-form `last_updated` stamp carried on listings.
pub fn parse_listing_date(raw: &str) -> Option<OffsetDateTime> {
	let trimmed = raw.trim();

	if trimmed.is_empty() {
		return None;
	}
	if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
		return Some(parsed);
	}

	let date_time = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

	if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, &date_time) {
		return Some(parsed.assume_utc());
	}

	let iso_date_time = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

	if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, &iso_date_time) {
		return Some(parsed.assume_utc());
	}

	let date = format_description!("[year]-[month]-[day]");

	Date::parse(trimmed, &date).ok().map(|parsed| parsed.midnight().assume_utc())
}

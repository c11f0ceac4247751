use std::{
	cmp::{Ordering, Reverse},
	collections::HashMap,
};

use rentmatch_domain::{
	Criteria, Listing, SortKey, SynonymTable,
	synonyms::{AMENITIES, NEARBY},
	text,
};

const MAX_LOGGED_DROP_REASONS: usize = 5;

/// Conjunctive multi-field filter over a catalog snapshot.
///
/// Constraints combine with AND across fields and ANY within a multi-valued field. Text fields
/// match on case-insensitive substring containment.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine {
	amenities: SynonymTable,
	nearby: SynonymTable,
}
impl FilterEngine {
	pub fn with_synonyms(amenities: SynonymTable, nearby: SynonymTable) -> Self {
		Self { amenities, nearby }
	}

	/// Returns the surviving listings ordered by `criteria.sort_by`, rent ascending when unset.
	pub fn filter(&self, catalog: &[Listing], criteria: &Criteria) -> Vec<Listing> {
		let mut kept = Vec::new();
		let mut dropped: HashMap<&'static str, usize> = HashMap::new();

		for listing in catalog {
			match self.first_failed_constraint(listing, criteria) {
				None => kept.push(listing.clone()),
				Some(reason) => *dropped.entry(reason).or_insert(0) += 1,
			}
		}

		if !dropped.is_empty() {
			let mut top_drop_reasons: Vec<_> = dropped.into_iter().collect();

			top_drop_reasons.sort_by(|a, b| match b.1.cmp(&a.1) {
				Ordering::Equal => a.0.cmp(b.0),
				other => other,
			});
			top_drop_reasons.truncate(MAX_LOGGED_DROP_REASONS);

			tracing::debug!(
				candidate_count_pre = catalog.len(),
				candidate_count_post = kept.len(),
				?top_drop_reasons,
				"Filter pass finished."
			);
		}

		sort_listings(&mut kept, criteria.sort_key());

		kept
	}

	pub fn matches(&self, listing: &Listing, criteria: &Criteria) -> bool {
		self.first_failed_constraint(listing, criteria).is_none()
	}

	/// Name of the first constraint the listing violates, in evaluation order.
	///
	/// Fields that cannot constrain anything are skipped: an empty bedroom set, a locality without
	/// non-blank tokens, blank amenity tags, and a blank nearby tag. Requested synonym tags are
	/// trimmed before their family is looked up, so `" pool "` resolves like `"pool"`.
	fn first_failed_constraint(
		&self,
		listing: &Listing,
		criteria: &Criteria,
	) -> Option<&'static str> {
		if let Some(locality) = criteria.locality.as_ref() {
			let mut tokens = locality
				.tokens()
				.iter()
				.map(|token| token.trim())
				.filter(|token| !token.is_empty())
				.peekable();

			if tokens.peek().is_some()
				&& !tokens.any(|token| {
					text::contains_ignore_case(&listing.locality, token)
						|| text::contains_ignore_case(&listing.address, token)
				}) {
				return Some("locality");
			}
		}
		if let Some(bhk) = criteria.bhk.as_ref()
			&& !bhk.values().is_empty()
			&& !bhk.accepts(listing.bhk)
		{
			return Some("bhk");
		}
		if let Some(min_rent) = criteria.min_rent
			&& min_rent.is_finite()
			&& listing.rent_value() < min_rent
		{
			return Some("min_rent");
		}
		if let Some(max_rent) = criteria.max_rent
			&& max_rent.is_finite()
			&& listing.rent_value() > max_rent
		{
			return Some("max_rent");
		}
		if let Some(property_type) = criteria.property_type.as_deref()
			&& !text::contains_ignore_case(&listing.property_type, property_type)
		{
			return Some("property_type");
		}
		if let Some(furnishing_status) = criteria.furnishing_status.as_deref()
			&& !text::contains_ignore_case(&listing.furnishing_status, furnishing_status)
		{
			return Some("furnishing_status");
		}
		if let Some(building_name) = criteria.building_name.as_deref()
			&& !text::contains_ignore_case(&listing.building_name, building_name)
		{
			return Some("building_name");
		}
		if let Some(pets_allowed) = criteria.pets_allowed
			&& listing.pets_allowed != pets_allowed
		{
			return Some("pets_allowed");
		}
		if let Some(amenities) = criteria.amenities.as_ref()
			&& !amenities
				.iter()
				.filter(|amenity| !amenity.trim().is_empty())
				.all(|amenity| self.amenities.satisfied_by(amenity, &listing.amenities))
		{
			return Some("amenities");
		}
		if let Some(nearby) = criteria.nearby_requirement.as_deref()
			&& !nearby.trim().is_empty()
			&& !self.nearby.satisfied_by(nearby, &listing.nearby_places)
		{
			return Some("nearby_requirement");
		}

		None
	}
}
impl Default for FilterEngine {
	fn default() -> Self {
		Self::with_synonyms(AMENITIES, NEARBY)
	}
}

/// Stable sort. Rent and bedrooms ascend, area descends, last-updated puts the most recent first
/// with unparsable stamps last.
pub fn sort_listings(listings: &mut [Listing], key: SortKey) {
	match key {
		SortKey::Rent => listings.sort_by(|a, b| a.rent_value().total_cmp(&b.rent_value())),
		SortKey::Area => listings.sort_by(|a, b| b.area_value().total_cmp(&a.area_value())),
		SortKey::Bhk => listings.sort_by_key(|listing| listing.bhk),
		SortKey::LastUpdated =>
			listings.sort_by_cached_key(|listing| Reverse(listing.last_updated_at())),
	}
}

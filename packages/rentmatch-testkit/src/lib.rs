//! Listing builders and a small Chennai catalog for tests.

use rentmatch_domain::Listing;

/// Twelve listings spread over property types, localities, amenities, and update stamps.
/// `CHN-008` carries an unparsable `last_updated`.
pub const SAMPLE_CATALOG_JSON: &str = include_str!("../fixtures/chennai_listings.json");

pub fn sample_catalog() -> serde_json::Result<Vec<Listing>> {
	serde_json::from_str(SAMPLE_CATALOG_JSON)
}

/// `count` plain listings with ids `L-0000`, `L-0001`, ... and rents that are not in id order.
pub fn numbered_catalog(count: usize) -> Vec<Listing> {
	(0..count)
		.map(|index| {
			ListingBuilder::new(&format!("L-{index:04}"))
				.property_type("Apartment")
				.bhk(1 + (index % 4) as u32)
				.area(500.0 + (index % 9) as f64 * 150.0)
				.rent(10_000.0 + ((index * 7) % 13) as f64 * 2_500.0)
				.locality("Chennai")
				.build()
		})
		.collect()
}

#[derive(Debug, Clone, Default)]
pub struct ListingBuilder {
	listing: Listing,
}
impl ListingBuilder {
	pub fn new(property_id: &str) -> Self {
		Self { listing: Listing { property_id: property_id.to_string(), ..Default::default() } }
	}

	pub fn property_type(mut self, value: &str) -> Self {
		self.listing.property_type = value.to_string();

		self
	}

	pub fn bhk(mut self, value: u32) -> Self {
		self.listing.bhk = value;

		self
	}

	pub fn area(mut self, value: f64) -> Self {
		self.listing.area = value;

		self
	}

	pub fn rent(mut self, value: f64) -> Self {
		self.listing.rent = value;

		self
	}

	pub fn locality(mut self, value: &str) -> Self {
		self.listing.locality = value.to_string();

		self
	}

	pub fn address(mut self, value: &str) -> Self {
		self.listing.address = value.to_string();

		self
	}

	pub fn building_name(mut self, value: &str) -> Self {
		self.listing.building_name = value.to_string();

		self
	}

	pub fn description(mut self, value: &str) -> Self {
		self.listing.description = value.to_string();

		self
	}

	pub fn furnishing_status(mut self, value: &str) -> Self {
		self.listing.furnishing_status = value.to_string();

		self
	}

	pub fn pets_allowed(mut self, value: bool) -> Self {
		self.listing.pets_allowed = value;

		self
	}

	pub fn amenities(mut self, values: &[&str]) -> Self {
		self.listing.amenities = values.iter().map(|value| value.to_string()).collect();

		self
	}

	pub fn nearby_places(mut self, values: &[&str]) -> Self {
		self.listing.nearby_places = values.iter().map(|value| value.to_string()).collect();

		self
	}

	pub fn last_updated(mut self, value: &str) -> Self {
		self.listing.last_updated = value.to_string();

		self
	}

	pub fn build(self) -> Listing {
		self.listing
	}
}

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::text;

/// A rental listing as handed over by the ingestion side.
///
/// Every field defaults to its empty or zero value when absent from the source record, so the
/// matching code never sees a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
	pub property_id: String,
	pub property_type: String,
	pub bhk: u32,
	pub area: f64,
	pub rent: f64,
	pub locality: String,
	pub building_name: String,
	pub address: String,
	pub description: String,
	pub furnishing_status: String,
	pub maintenance_charges: f64,
	pub deposit: f64,
	pub property_age: u32,
	pub pets_allowed: bool,
	pub amenities: Vec<String>,
	pub nearby_places: Vec<String>,
	pub latitude: f64,
	pub longitude: f64,
	pub available_from: String,
	pub last_updated: String,
	pub owner_name: String,
	pub owner_contact: String,
}
impl Listing {
	pub fn bhk_label(&self) -> String {
		format!("{} BHK", self.bhk)
	}

	pub fn rent_value(&self) -> f64 {
		text::finite_or_zero(self.rent)
	}

	pub fn area_value(&self) -> f64 {
		text::finite_or_zero(self.area)
	}

	/// `None` when the stamp is empty or in a shape we do not recognize.
	pub fn last_updated_at(&self) -> Option<OffsetDateTime> {
		text::parse_listing_date(&self.last_updated)
	}

	/// Lower-cased concatenation of every free-text field a query token may hit.
	pub fn searchable_text(&self) -> String {
		let bhk_label = self.bhk_label();
		let mut parts: Vec<&str> = vec![
			self.building_name.as_str(),
			self.locality.as_str(),
			self.address.as_str(),
			self.description.as_str(),
			self.property_type.as_str(),
			bhk_label.as_str(),
		];

		parts.extend(self.amenities.iter().map(String::as_str));
		parts.extend(self.nearby_places.iter().map(String::as_str));

		parts.join(" ").to_lowercase()
	}
}

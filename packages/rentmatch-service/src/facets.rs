use std::collections::BTreeSet;

use serde::Serialize;

use rentmatch_domain::Listing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
	Locality,
	PropertyType,
	FurnishingStatus,
	BuildingName,
}
impl TextField {
	fn get(self, listing: &Listing) -> &str {
		match self {
			Self::Locality => &listing.locality,
			Self::PropertyType => &listing.property_type,
			Self::FurnishingStatus => &listing.furnishing_status,
			Self::BuildingName => &listing.building_name,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
	Rent,
	Area,
	Bhk,
	Deposit,
	MaintenanceCharges,
	PropertyAge,
}
impl NumericField {
	fn get(self, listing: &Listing) -> f64 {
		match self {
			Self::Rent => listing.rent,
			Self::Area => listing.area,
			Self::Bhk => f64::from(listing.bhk),
			Self::Deposit => listing.deposit,
			Self::MaintenanceCharges => listing.maintenance_charges,
			Self::PropertyAge => f64::from(listing.property_age),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
	pub min: f64,
	pub max: f64,
}

/// Catalog summary offered to callers building search forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facets {
	pub localities: Vec<String>,
	pub property_types: Vec<String>,
	pub furnishing_statuses: Vec<String>,
	pub rent: Option<ValueRange>,
	pub area: Option<ValueRange>,
}
impl Facets {
	pub fn from_listings(listings: &[Listing]) -> Self {
		Self {
			localities: unique_values(listings, TextField::Locality),
			property_types: unique_values(listings, TextField::PropertyType),
			furnishing_statuses: unique_values(listings, TextField::FurnishingStatus),
			rent: value_range(listings, NumericField::Rent),
			area: value_range(listings, NumericField::Area),
		}
	}
}

/// Distinct non-blank values, trimmed and sorted.
pub fn unique_values(listings: &[Listing], field: TextField) -> Vec<String> {
	listings
		.iter()
		.map(|listing| field.get(listing).trim())
		.filter(|value| !value.is_empty())
		.collect::<BTreeSet<_>>()
		.into_iter()
		.map(str::to_string)
		.collect()
}

/// Bounds over finite values only; `None` when there are none.
pub fn value_range(listings: &[Listing], field: NumericField) -> Option<ValueRange> {
	listings.iter().map(|listing| field.get(listing)).filter(|value| value.is_finite()).fold(
		None,
		|range, value| match range {
			None => Some(ValueRange { min: value, max: value }),
			Some(ValueRange { min, max }) =>
				Some(ValueRange { min: min.min(value), max: max.max(value) }),
		},
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn listing(locality: &str, rent: f64) -> Listing {
		Listing { locality: locality.to_string(), rent, ..Default::default() }
	}

	#[test]
	fn unique_values_skip_blanks_and_duplicates() {
		let listings = vec![
			listing("Velachery", 0.0),
			listing(" ", 0.0),
			listing("Adyar", 0.0),
			listing("Adyar ", 0.0),
		];

		assert_eq!(unique_values(&listings, TextField::Locality), vec!["Adyar", "Velachery"]);
	}

	#[test]
	fn value_range_ignores_non_finite() {
		let listings = vec![listing("", 18_000.0), listing("", f64::NAN), listing("", 9_500.0)];

		assert_eq!(
			value_range(&listings, NumericField::Rent),
			Some(ValueRange { min: 9_500.0, max: 18_000.0 })
		);
	}

	#[test]
	fn every_field_reads_its_own_column() {
		let listings = vec![
			Listing {
				building_name: "Kapali Enclave".to_string(),
				bhk: 3,
				deposit: 162_000.0,
				maintenance_charges: 2_160.0,
				property_age: 12,
				..Default::default()
			},
			Listing {
				building_name: "Green Acres".to_string(),
				bhk: 1,
				deposit: 72_000.0,
				maintenance_charges: 960.0,
				property_age: 2,
				..Default::default()
			},
		];
		let range = |field| value_range(&listings, field);

		assert_eq!(
			unique_values(&listings, TextField::BuildingName),
			vec!["Green Acres", "Kapali Enclave"]
		);
		assert_eq!(range(NumericField::Bhk), Some(ValueRange { min: 1.0, max: 3.0 }));
		assert_eq!(
			range(NumericField::Deposit),
			Some(ValueRange { min: 72_000.0, max: 162_000.0 })
		);
		assert_eq!(
			range(NumericField::MaintenanceCharges),
			Some(ValueRange { min: 960.0, max: 2_160.0 })
		);
		assert_eq!(range(NumericField::PropertyAge), Some(ValueRange { min: 2.0, max: 12.0 }));
	}

	#[test]
	fn empty_input_has_no_range() {
		assert_eq!(value_range(&[], NumericField::Area), None);
		assert!(Facets::from_listings(&[]).localities.is_empty());
	}
}

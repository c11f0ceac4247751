use serde_json::json;

use rentmatch_domain::{BhkCriterion, Criteria, LocalityCriterion, SortKey};

#[test]
fn collaborator_criteria_accept_camel_case_keys() {
	let parsed = Criteria::from_value(&json!({
		"locality": ["Adyar", "Besant Nagar"],
		"bhk": [2, 3],
		"minRent": 10000,
		"maxRent": "30,000",
		"propertyType": "Apartment",
		"petsAllowed": false,
		"amenities": ["pool", "gym"],
		"nearbyRequirement": "metro station",
		"sortBy": "area"
	}));

	assert!(parsed.warnings.is_empty(), "Unexpected warnings: {:?}", parsed.warnings);

	let criteria = parsed.criteria;

	assert_eq!(
		criteria.locality,
		Some(LocalityCriterion::Many(vec!["Adyar".to_string(), "Besant Nagar".to_string()]))
	);
	assert_eq!(criteria.bhk, Some(BhkCriterion::AnyOf(vec![2, 3])));
	assert_eq!(criteria.min_rent, Some(10_000.0));
	assert_eq!(criteria.max_rent, Some(30_000.0));
	assert_eq!(criteria.pets_allowed, Some(false));
	assert_eq!(criteria.amenities, Some(vec!["pool".to_string(), "gym".to_string()]));
	assert_eq!(criteria.nearby_requirement.as_deref(), Some("metro station"));
	assert_eq!(criteria.sort_by, Some(SortKey::Area));
}

#[test]
fn malformed_fields_are_dropped_not_fatal() {
	let parsed = Criteria::from_value(&json!({
		"bhk": "two",
		"max_rent": -5,
		"pets_allowed": "maybe",
		"sort_by": "price",
		"property_type": "Villa"
	}));
	let fields: Vec<&str> = parsed.warnings.iter().map(|warning| warning.field).collect();

	assert_eq!(parsed.criteria.property_type.as_deref(), Some("Villa"));
	assert!(parsed.criteria.bhk.is_none());
	assert!(parsed.criteria.max_rent.is_none());
	assert!(parsed.criteria.pets_allowed.is_none());
	assert!(parsed.criteria.sort_by.is_none());
	assert_eq!(fields, vec!["bhk", "max_rent", "pets_allowed", "sort_by"]);
}

#[test]
fn bhk_set_with_only_bad_entries_becomes_unset() {
	let parsed = Criteria::from_value(&json!({ "bhk": ["x", -1] }));

	assert!(parsed.criteria.bhk.is_none());
	assert!(parsed.warnings.iter().any(|warning| warning.reason.contains("empty")));
}

#[test]
fn null_fields_stay_unset_without_warnings() {
	let parsed = Criteria::from_value(&json!({ "locality": null, "pets_allowed": null }));

	assert_eq!(parsed.criteria, Criteria::default());
	assert!(parsed.warnings.is_empty());
}

#[test]
fn non_object_input_is_reported() {
	let parsed = Criteria::from_value(&json!("2bhk in adyar"));

	assert_eq!(parsed.criteria, Criteria::default());
	assert_eq!(parsed.warnings.len(), 1);
	assert_eq!(parsed.warnings[0].field, "$");
}

#[test]
fn criteria_serialize_without_unset_fields() {
	let criteria = Criteria {
		bhk: Some(BhkCriterion::Exact(2)),
		sort_by: Some(SortKey::LastUpdated),
		..Default::default()
	};
	let value = serde_json::to_value(&criteria).expect("serializes");

	assert_eq!(value, json!({ "bhk": 2, "sort_by": "lastUpdated" }));
}

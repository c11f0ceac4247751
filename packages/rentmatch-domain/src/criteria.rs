use std::{
	fmt::{Display, Formatter},
	slice,
	str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured search intent. Every unset field is `None` and imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub locality: Option<LocalityCriterion>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bhk: Option<BhkCriterion>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_rent: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_rent: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub property_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub furnishing_status: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub building_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pets_allowed: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amenities: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nearby_requirement: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sort_by: Option<SortKey>,
}
impl Criteria {
	pub fn is_unconstrained(&self) -> bool {
		self.locality.is_none()
			&& self.bhk.is_none()
			&& self.min_rent.is_none()
			&& self.max_rent.is_none()
			&& self.property_type.is_none()
			&& self.furnishing_status.is_none()
			&& self.building_name.is_none()
			&& self.pets_allowed.is_none()
			&& self.amenities.is_none()
			&& self.nearby_requirement.is_none()
	}

	pub fn sort_key(&self) -> SortKey {
		self.sort_by.unwrap_or_default()
	}

	/// Drops fields whose values cannot constrain anything (empty sets, blank text, non-finite
	/// bounds) and reports each one.
	pub fn sanitize(self) -> ParsedCriteria {
		let mut warnings = Vec::new();
		let mut criteria = self;

		criteria.locality = criteria.locality.and_then(|locality| {
			let tokens: Vec<String> = locality
				.tokens()
				.iter()
				.map(|token| token.trim().to_string())
				.filter(|token| !token.is_empty())
				.collect();

			match tokens.len() {
				0 => {
					warnings.push(CriteriaWarning::new("locality", "no non-blank locality tokens."));

					None
				},
				1 if matches!(locality, LocalityCriterion::One(_)) =>
					tokens.into_iter().next().map(LocalityCriterion::One),
				_ => Some(LocalityCriterion::Many(tokens)),
			}
		});
		criteria.bhk = criteria.bhk.and_then(|bhk| {
			if bhk.values().is_empty() {
				warnings.push(CriteriaWarning::new("bhk", "empty bedroom-count set."));

				None
			} else {
				Some(bhk)
			}
		});
		criteria.min_rent = sanitize_bound(criteria.min_rent, "min_rent", &mut warnings);
		criteria.max_rent = sanitize_bound(criteria.max_rent, "max_rent", &mut warnings);
		criteria.property_type =
			sanitize_text(criteria.property_type, "property_type", &mut warnings);
		criteria.furnishing_status =
			sanitize_text(criteria.furnishing_status, "furnishing_status", &mut warnings);
		criteria.building_name =
			sanitize_text(criteria.building_name, "building_name", &mut warnings);
		criteria.nearby_requirement =
			sanitize_text(criteria.nearby_requirement, "nearby_requirement", &mut warnings);
		criteria.amenities = criteria.amenities.and_then(|amenities| {
			let tags: Vec<String> = amenities
				.into_iter()
				.map(|tag| tag.trim().to_string())
				.filter(|tag| !tag.is_empty())
				.collect();

			if tags.is_empty() {
				warnings.push(CriteriaWarning::new("amenities", "no non-blank amenity tags."));

				None
			} else {
				Some(tags)
			}
		});

		ParsedCriteria { criteria, warnings }
	}

	/// Reads criteria produced by an outside collaborator, keeping every well-formed field.
	///
	/// Keys are accepted in snake_case or camelCase. A field with the wrong shape is dropped and
	/// reported instead of failing the whole value.
	pub fn from_value(value: &Value) -> ParsedCriteria {
		let Some(obj) = value.as_object() else {
			return ParsedCriteria {
				criteria: Self::default(),
				warnings: vec![CriteriaWarning::new("$", "criteria must be an object.")],
			};
		};
		let mut warnings = Vec::new();
		let mut criteria = Self::default();

		if let Some(raw) = lookup(obj, "locality", "locality") {
			criteria.locality = parse_locality(raw, &mut warnings);
		}
		if let Some(raw) = lookup(obj, "bhk", "bhk") {
			criteria.bhk = parse_bhk(raw, &mut warnings);
		}
		if let Some(raw) = lookup(obj, "min_rent", "minRent") {
			criteria.min_rent = parse_amount(raw, "min_rent", &mut warnings);
		}
		if let Some(raw) = lookup(obj, "max_rent", "maxRent") {
			criteria.max_rent = parse_amount(raw, "max_rent", &mut warnings);
		}
		if let Some(raw) = lookup(obj, "property_type", "propertyType") {
			criteria.property_type = parse_string(raw, "property_type", &mut warnings);
		}
		if let Some(raw) = lookup(obj, "furnishing_status", "furnishingStatus") {
			criteria.furnishing_status = parse_string(raw, "furnishing_status", &mut warnings);
		}
		if let Some(raw) = lookup(obj, "building_name", "buildingName") {
			criteria.building_name = parse_string(raw, "building_name", &mut warnings);
		}
		if let Some(raw) = lookup(obj, "pets_allowed", "petsAllowed") {
			criteria.pets_allowed = parse_flag(raw, &mut warnings);
		}
		if let Some(raw) = lookup(obj, "amenities", "amenities") {
			criteria.amenities = parse_tags(raw, &mut warnings);
		}
		if let Some(raw) = lookup(obj, "nearby_requirement", "nearbyRequirement") {
			criteria.nearby_requirement = parse_string(raw, "nearby_requirement", &mut warnings);
		}
		if let Some(raw) = lookup(obj, "sort_by", "sortBy") {
			criteria.sort_by = match raw.as_str().map(SortKey::from_str) {
				Some(Ok(key)) => Some(key),
				_ => {
					warnings.push(CriteriaWarning::new(
						"sort_by",
						"expected one of rent, area, bhk, lastUpdated.",
					));

					None
				},
			};
		}

		let mut parsed = criteria.sanitize();

		warnings.append(&mut parsed.warnings);
		parsed.warnings = warnings;

		parsed
	}
}

/// Criteria plus the reasons any malformed fields were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCriteria {
	pub criteria: Criteria,
	pub warnings: Vec<CriteriaWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaWarning {
	pub field: &'static str,
	pub reason: String,
}
impl CriteriaWarning {
	pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
		Self { field, reason: reason.into() }
	}
}
impl Display for CriteriaWarning {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.field, self.reason)
	}
}

/// One or more locality tokens; a listing matches when any token hits its locality or address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalityCriterion {
	One(String),
	Many(Vec<String>),
}
impl LocalityCriterion {
	pub fn tokens(&self) -> &[String] {
		match self {
			Self::One(token) => slice::from_ref(token),
			Self::Many(tokens) => tokens.as_slice(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BhkCriterion {
	Exact(u32),
	AnyOf(Vec<u32>),
}
impl BhkCriterion {
	pub fn values(&self) -> &[u32] {
		match self {
			Self::Exact(value) => slice::from_ref(value),
			Self::AnyOf(values) => values.as_slice(),
		}
	}

	pub fn accepts(&self, bhk: u32) -> bool {
		self.values().contains(&bhk)
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
	/// Ascending.
	#[default]
	#[serde(rename = "rent")]
	Rent,
	/// Descending: larger homes first.
	#[serde(rename = "area")]
	Area,
	/// Ascending.
	#[serde(rename = "bhk")]
	Bhk,
	/// Most recent first; unparsable stamps sort last.
	#[serde(rename = "lastUpdated", alias = "last_updated")]
	LastUpdated,
}
impl SortKey {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Rent => "rent",
			Self::Area => "area",
			Self::Bhk => "bhk",
			Self::LastUpdated => "lastUpdated",
		}
	}
}
impl FromStr for SortKey {
	type Err = String;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"rent" => Ok(Self::Rent),
			"area" => Ok(Self::Area),
			"bhk" => Ok(Self::Bhk),
			"lastupdated" | "last_updated" => Ok(Self::LastUpdated),
			other => Err(format!("unsupported sort key '{other}'.")),
		}
	}
}

fn lookup<'a>(obj: &'a Map<String, Value>, snake: &str, camel: &str) -> Option<&'a Value> {
	obj.get(snake).or_else(|| obj.get(camel)).filter(|value| !value.is_null())
}

fn sanitize_bound(
	bound: Option<f64>,
	field: &'static str,
	warnings: &mut Vec<CriteriaWarning>,
) -> Option<f64> {
	match bound {
		Some(value) if !value.is_finite() => {
			warnings.push(CriteriaWarning::new(field, "bound must be a finite number."));

			None
		},
		other => other,
	}
}

fn sanitize_text(
	value: Option<String>,
	field: &'static str,
	warnings: &mut Vec<CriteriaWarning>,
) -> Option<String> {
	let value = value?;
	let trimmed = value.trim();

	if trimmed.is_empty() {
		warnings.push(CriteriaWarning::new(field, "must not be blank."));

		return None;
	}

	Some(trimmed.to_string())
}

fn parse_locality(raw: &Value, warnings: &mut Vec<CriteriaWarning>) -> Option<LocalityCriterion> {
	match raw {
		Value::String(token) => Some(LocalityCriterion::One(token.clone())),
		Value::Array(items) => {
			let tokens: Vec<String> =
				items.iter().filter_map(|item| item.as_str().map(str::to_string)).collect();

			if tokens.len() != items.len() {
				warnings.push(CriteriaWarning::new("locality", "ignored non-string tokens."));
			}

			Some(LocalityCriterion::Many(tokens))
		},
		_ => {
			warnings
				.push(CriteriaWarning::new("locality", "expected a string or array of strings."));

			None
		},
	}
}

fn parse_bhk(raw: &Value, warnings: &mut Vec<CriteriaWarning>) -> Option<BhkCriterion> {
	match raw {
		Value::Array(items) => {
			let mut values = Vec::with_capacity(items.len());

			for item in items {
				match parse_count(item) {
					Some(value) if !values.contains(&value) => values.push(value),
					Some(_) => {},
					None => {
						warnings.push(CriteriaWarning::new(
							"bhk",
							format!("ignored malformed entry {item}."),
						));
					},
				}
			}

			Some(BhkCriterion::AnyOf(values))
		},
		other => match parse_count(other) {
			Some(value) => Some(BhkCriterion::Exact(value)),
			None => {
				warnings.push(CriteriaWarning::new(
					"bhk",
					format!("expected a non-negative integer, got {other}."),
				));

				None
			},
		},
	}
}

fn parse_count(raw: &Value) -> Option<u32> {
	match raw {
		Value::Number(number) => number.as_u64().and_then(|value| u32::try_from(value).ok()),
		Value::String(text) => text.trim().parse::<u32>().ok(),
		_ => None,
	}
}

fn parse_amount(
	raw: &Value,
	field: &'static str,
	warnings: &mut Vec<CriteriaWarning>,
) -> Option<f64> {
	let value = match raw {
		Value::Number(number) => number.as_f64(),
		Value::String(text) => text.trim().replace(',', "").parse::<f64>().ok(),
		_ => None,
	};

	match value {
		Some(value) if value.is_finite() && value >= 0.0 => Some(value),
		_ => {
			warnings.push(CriteriaWarning::new(field, format!("expected an amount, got {raw}.")));

			None
		},
	}
}

fn parse_string(
	raw: &Value,
	field: &'static str,
	warnings: &mut Vec<CriteriaWarning>,
) -> Option<String> {
	match raw.as_str() {
		Some(value) => Some(value.to_string()),
		None => {
			warnings.push(CriteriaWarning::new(field, "expected a string."));

			None
		},
	}
}

fn parse_flag(raw: &Value, warnings: &mut Vec<CriteriaWarning>) -> Option<bool> {
	match raw {
		Value::Bool(flag) => Some(*flag),
		Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
			"true" | "yes" => Some(true),
			"false" | "no" => Some(false),
			_ => {
				warnings.push(CriteriaWarning::new("pets_allowed", "expected a boolean."));

				None
			},
		},
		_ => {
			warnings.push(CriteriaWarning::new("pets_allowed", "expected a boolean."));

			None
		},
	}
}

fn parse_tags(raw: &Value, warnings: &mut Vec<CriteriaWarning>) -> Option<Vec<String>> {
	match raw {
		Value::String(tag) => Some(vec![tag.clone()]),
		Value::Array(items) => {
			let tags: Vec<String> =
				items.iter().filter_map(|item| item.as_str().map(str::to_string)).collect();

			if tags.len() != items.len() {
				warnings.push(CriteriaWarning::new("amenities", "ignored non-string tags."));
			}

			Some(tags)
		},
		_ => {
			warnings
				.push(CriteriaWarning::new("amenities", "expected a string or array of strings."));

			None
		},
	}
}

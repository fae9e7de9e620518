use serde_json::Value;

use crate::{Principal, ResourceView, Visibility};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterField {
	FamilyId,
	OwnerId,
	Visibility,
}
impl FilterField {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::FamilyId => "family_id",
			Self::OwnerId => "owner_id",
			Self::Visibility => "visibility",
		}
	}

	fn lookup<'a>(&self, resource: ResourceView<'a>) -> &'a str {
		match self {
			Self::FamilyId => resource.family_id,
			Self::OwnerId => resource.owner_id,
			Self::Visibility => resource.visibility,
		}
	}
}

/// Declarative filter over the predicate's three fields. Evaluable in memory
/// via [`FilterExpr::matches`] and renderable for pushdown into any query
/// backend via [`FilterExpr::to_value`].
#[derive(Clone, Debug)]
pub enum FilterExpr {
	And(Vec<FilterExpr>),
	Or(Vec<FilterExpr>),
	Eq { field: FilterField, value: String },
}
impl FilterExpr {
	pub fn eq(field: FilterField, value: impl Into<String>) -> Self {
		Self::Eq { field, value: value.into() }
	}

	pub fn matches(&self, resource: ResourceView<'_>) -> bool {
		match self {
			Self::And(nodes) => nodes.iter().all(|node| node.matches(resource)),
			Self::Or(nodes) => nodes.iter().any(|node| node.matches(resource)),
			Self::Eq { field, value } => field.lookup(resource) == value,
		}
	}

	pub fn to_value(&self) -> Value {
		match self {
			Self::And(nodes) => {
				serde_json::json!({ "op": "and", "args": Value::Array(nodes.iter().map(Self::to_value).collect()) })
			},
			Self::Or(nodes) => {
				serde_json::json!({ "op": "or", "args": Value::Array(nodes.iter().map(Self::to_value).collect()) })
			},
			Self::Eq { field, value } => {
				serde_json::json!({ "op": "eq", "field": field.as_str(), "value": value })
			},
		}
	}
}

/// The read filter for a fixed principal, equivalent to evaluating
/// [`crate::can_view`] over every well-formed resource: family match
/// intersected with the tier disjunction. The adults-only arm is present only
/// when the role permits it.
pub fn visibility_filter(principal: &Principal) -> FilterExpr {
	let mut tiers = vec![
		FilterExpr::eq(FilterField::Visibility, Visibility::Family.as_str()),
		FilterExpr::And(vec![
			FilterExpr::eq(FilterField::Visibility, Visibility::Private.as_str()),
			FilterExpr::eq(FilterField::OwnerId, principal.member_id.clone()),
		]),
	];

	if principal.role.is_adult() {
		tiers.push(FilterExpr::eq(FilterField::Visibility, Visibility::Adult.as_str()));
	}

	FilterExpr::And(vec![
		FilterExpr::eq(FilterField::FamilyId, principal.family_id.clone()),
		FilterExpr::Or(tiers),
	])
}

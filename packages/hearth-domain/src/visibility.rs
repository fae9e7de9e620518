use serde::{Deserialize, Serialize};

use crate::{Error, Principal, Result};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
	Private,
	Family,
	Adult,
}
impl Visibility {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Private => "PRIVATE",
			Self::Family => "FAMILY",
			Self::Adult => "ADULT",
		}
	}

	pub fn parse(value: &str) -> Result<Self> {
		match value {
			"PRIVATE" => Ok(Self::Private),
			"FAMILY" => Ok(Self::Family),
			"ADULT" => Ok(Self::Adult),
			_ => Err(Error::InvalidVisibility { value: value.to_string() }),
		}
	}
}

/// The three stored fields the predicate evaluates. `visibility` is the raw
/// stored text; anything outside the three tiers is a data-integrity error.
#[derive(Clone, Copy, Debug)]
pub struct ResourceView<'a> {
	pub family_id: &'a str,
	pub owner_id: &'a str,
	pub visibility: &'a str,
}
impl ResourceView<'_> {
	/// Validates the stored fields the predicate reads. Every read operation
	/// must route through this so corrupt records fail identically instead of
	/// being silently dropped by one endpoint and rejected by another.
	pub fn validate(&self) -> Result<Visibility> {
		if self.family_id.trim().is_empty() {
			return Err(Error::EmptyIdentifier { field: "resource.family_id" });
		}

		Visibility::parse(self.visibility)
	}
}

/// Whether `principal` may read `resource`.
///
/// Family membership is checked first and unconditionally: ownership and role
/// never reach across families. Invalid visibility text fails instead of
/// defaulting to hidden or visible.
pub fn can_view(principal: &Principal, resource: ResourceView<'_>) -> Result<bool> {
	let visibility = resource.validate()?;

	if resource.family_id != principal.family_id {
		return Ok(false);
	}

	Ok(match visibility {
		Visibility::Family => true,
		Visibility::Private => resource.owner_id == principal.member_id,
		Visibility::Adult => principal.role.is_adult(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Role;

	fn principal(member_id: &str, family_id: &str, role: Role) -> Principal {
		Principal::new(member_id.to_string(), family_id.to_string(), role)
			.expect("valid principal")
	}

	fn resource<'a>(family_id: &'a str, owner_id: &'a str, visibility: &'a str) -> ResourceView<'a> {
		ResourceView { family_id, owner_id, visibility }
	}

	#[test]
	fn parse_accepts_known_tiers_only() {
		assert_eq!(Visibility::parse("PRIVATE").expect("known tier"), Visibility::Private);
		assert_eq!(Visibility::parse("FAMILY").expect("known tier"), Visibility::Family);
		assert_eq!(Visibility::parse("ADULT").expect("known tier"), Visibility::Adult);
		assert!(matches!(
			Visibility::parse("private"),
			Err(Error::InvalidVisibility { .. })
		));
		assert!(matches!(Visibility::parse("PUBLIC"), Err(Error::InvalidVisibility { .. })));
	}

	#[test]
	fn family_tier_is_visible_to_every_member() {
		let p = principal("U1", "F1", Role::Child);

		assert!(can_view(&p, resource("F1", "U2", "FAMILY")).expect("valid input"));
	}

	#[test]
	fn private_tier_requires_ownership() {
		let owner = principal("U1", "F1", Role::Child);
		let other = principal("U2", "F1", Role::Adult);

		assert!(can_view(&owner, resource("F1", "U1", "PRIVATE")).expect("valid input"));
		assert!(!can_view(&other, resource("F1", "U1", "PRIVATE")).expect("valid input"));
	}

	#[test]
	fn child_never_sees_adult_tier_even_as_owner() {
		let p = principal("U1", "F1", Role::Child);

		assert!(!can_view(&p, resource("F1", "U1", "ADULT")).expect("valid input"));
	}

	#[test]
	fn family_mismatch_wins_over_ownership() {
		let p = principal("U1", "F1", Role::Admin);

		assert!(!can_view(&p, resource("F2", "U1", "PRIVATE")).expect("valid input"));
		assert!(!can_view(&p, resource("F2", "U1", "FAMILY")).expect("valid input"));
	}

	#[test]
	fn invalid_visibility_fails_even_on_family_mismatch() {
		let p = principal("U1", "F1", Role::Adult);

		assert!(matches!(
			can_view(&p, resource("F2", "U1", "SECRET")),
			Err(Error::InvalidVisibility { .. })
		));
	}

	#[test]
	fn empty_resource_family_id_fails() {
		let p = principal("U1", "F1", Role::Adult);

		assert!(matches!(
			can_view(&p, resource("", "U1", "FAMILY")),
			Err(Error::EmptyIdentifier { field: "resource.family_id" })
		));
	}
}

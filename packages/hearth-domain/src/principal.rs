use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
	Child,
	Adult,
	Admin,
}
impl Role {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Child => "CHILD",
			Self::Adult => "ADULT",
			Self::Admin => "ADMIN",
		}
	}

	pub fn parse(value: &str) -> Result<Self> {
		match value {
			"CHILD" => Ok(Self::Child),
			"ADULT" => Ok(Self::Adult),
			"ADMIN" => Ok(Self::Admin),
			_ => Err(Error::InvalidRole { value: value.to_string() }),
		}
	}

	/// Whether this role may read adults-only resources.
	pub fn is_adult(&self) -> bool {
		matches!(self, Self::Adult | Self::Admin)
	}
}

/// The caller's identity for one request. Built once at the service boundary
/// and passed explicitly; never reconstructed mid-operation.
///
/// [`Principal::new`] is the only way to construct one, so a principal in
/// hand always carries non-empty identifiers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Principal {
	pub(crate) member_id: String,
	pub(crate) family_id: String,
	pub(crate) role: Role,
}
impl Principal {
	pub fn new(member_id: String, family_id: String, role: Role) -> Result<Self> {
		if member_id.trim().is_empty() {
			return Err(Error::EmptyIdentifier { field: "principal.member_id" });
		}
		if family_id.trim().is_empty() {
			return Err(Error::EmptyIdentifier { field: "principal.family_id" });
		}

		Ok(Self { member_id, family_id, role })
	}

	pub fn member_id(&self) -> &str {
		&self.member_id
	}

	pub fn family_id(&self) -> &str {
		&self.family_id
	}

	pub fn role(&self) -> Role {
		self.role
	}
}

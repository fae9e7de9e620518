use tracing::debug;

use crate::{HearthService, ResourceRecord, Result};
use hearth_domain::visibility_filter;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListRequest {
	pub caller: crate::Caller,
	pub resources: Vec<ResourceRecord>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListResponse {
	pub items: Vec<ResourceRecord>,
}

impl HearthService {
	/// Restricts the supplied resources to those the caller may read.
	///
	/// Every candidate's stored fields are validated first; a corrupt record
	/// fails the whole request rather than being dropped silently, the same
	/// way `search` fails it.
	pub fn list(&self, req: ListRequest) -> Result<ListResponse> {
		let principal = req.caller.into_principal()?;
		let filter = visibility_filter(&principal);
		let total = req.resources.len();
		let mut items = Vec::with_capacity(total);

		for resource in req.resources {
			resource.view().validate()?;

			if filter.matches(resource.view()) {
				items.push(resource);
			}
		}

		debug!(
			family_id = %principal.family_id(),
			total,
			visible = items.len(),
			"Listed resources for principal."
		);

		Ok(ListResponse { items })
	}
}

pub mod list;
pub mod search;

mod error;

pub use error::{Error, Result};
pub use list::{ListRequest, ListResponse};
pub use search::{
	SearchItem, SearchRequest, SearchResponse,
	ranking::{Ranked, Searchable, rank, score},
};

use hearth_config::Config;
use hearth_domain::{Principal, ResourceView, Role};

/// Caller identity as handed over by the authentication layer. Parsed into a
/// [`Principal`] exactly once per request; operations pass the parsed value
/// down explicitly instead of re-reading session state.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Caller {
	pub member_id: String,
	pub family_id: String,
	pub role: String,
}
impl Caller {
	pub(crate) fn into_principal(self) -> Result<Principal> {
		let role = Role::parse(&self.role)?;

		Ok(Principal::new(self.member_id, self.family_id, role)?)
	}
}

/// A candidate record as fetched by the caller's storage layer: the three
/// fields the visibility predicate reads plus the text fields used for
/// scoring.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ResourceRecord {
	pub id: String,
	pub family_id: String,
	pub owner_id: String,
	pub visibility: String,
	pub name: String,
	pub description: Option<String>,
}
impl ResourceRecord {
	pub(crate) fn view(&self) -> ResourceView<'_> {
		ResourceView {
			family_id: &self.family_id,
			owner_id: &self.owner_id,
			visibility: &self.visibility,
		}
	}
}

pub struct HearthService {
	pub cfg: Config,
}
impl HearthService {
	pub fn new(cfg: Config) -> Self {
		Self { cfg }
	}
}

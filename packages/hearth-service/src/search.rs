pub mod ranking;

use tracing::debug;

use crate::{HearthService, ResourceRecord, Result};
use hearth_domain::can_view;
use self::ranking::rank;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub caller: crate::Caller,
	pub query: String,
	pub resources: Vec<ResourceRecord>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchItem {
	pub id: String,
	pub name: String,
	pub owner_id: String,
	pub visibility: String,
	pub score: u32,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub items: Vec<SearchItem>,
}

impl HearthService {
	/// Validates the query, restricts the candidates to what the caller may
	/// read, then scores and orders the survivors.
	pub fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let query = ranking::validate_query(&self.cfg, &req.query)?;
		let principal = req.caller.into_principal()?;
		let candidates = req.resources.len();
		let mut visible = Vec::with_capacity(candidates);

		for resource in req.resources {
			if can_view(&principal, resource.view())? {
				visible.push(resource);
			}
		}

		let ranked = rank(&self.cfg, query, visible)?;
		let mut items: Vec<SearchItem> = ranked
			.into_iter()
			.map(|entry| SearchItem {
				id: entry.record.id,
				name: entry.record.name,
				owner_id: entry.record.owner_id,
				visibility: entry.record.visibility,
				score: entry.score,
			})
			.collect();

		items.truncate(self.cfg.search.max_results as usize);

		debug!(
			family_id = %principal.family_id(),
			query_chars = query.chars().count(),
			candidates,
			results = items.len(),
			"Ranked search results for principal."
		);

		Ok(SearchResponse { items })
	}
}

impl ranking::Searchable for ResourceRecord {
	fn title(&self) -> &str {
		&self.name
	}

	fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}
}

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
	pub search: Search,
	pub relevance: Relevance,
}

impl Default for Config {
	fn default() -> Self {
		Self { search: Search::default(), relevance: Relevance::default() }
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// Queries shorter than this (after trimming) are rejected before scoring.
	pub min_query_chars: u32,
	pub max_results: u32,
}

impl Default for Search {
	fn default() -> Self {
		Self { min_query_chars: 2, max_results: 50 }
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Relevance {
	pub exact_title: u32,
	pub title_prefix: u32,
	pub title_substring: u32,
	pub description_hit: u32,
	pub short_title: u32,
	pub short_title_max_chars: u32,
}

impl Default for Relevance {
	fn default() -> Self {
		Self {
			exact_title: 100,
			title_prefix: 80,
			title_substring: 60,
			description_hit: 20,
			short_title: 10,
			short_title_max_chars: 50,
		}
	}
}

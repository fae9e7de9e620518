use hearth_config::{Config, Relevance};

use crate::{Error, Result};

/// Text fields a record exposes for scoring. Records are never mutated.
pub trait Searchable {
	fn title(&self) -> &str;
	fn description(&self) -> Option<&str>;
}

#[derive(Debug, Clone)]
pub struct Ranked<T> {
	pub record: T,
	pub score: u32,
}

pub(crate) fn validate_query<'a>(cfg: &Config, query: &'a str) -> Result<&'a str> {
	let query = query.trim();

	if (query.chars().count() as u32) < cfg.search.min_query_chars {
		return Err(Error::QueryTooShort { min_chars: cfg.search.min_query_chars });
	}

	Ok(query)
}

/// Relevance score for one record against a validated query.
///
/// Comparison is over lowercased copies; the original casing is untouched.
/// The title tiers are mutually exclusive and checked in priority order:
/// exact, then prefix, then substring. The brevity bonus is earned by exact
/// title matches only; prefix and substring matches never stack with it.
pub fn score(weights: &Relevance, query: &str, title: &str, description: Option<&str>) -> u32 {
	let query = query.to_lowercase();
	let title_normalized = title.to_lowercase();
	let mut total = 0;

	if title_normalized == query {
		total += weights.exact_title;

		if title.chars().count() as u32 <= weights.short_title_max_chars {
			total += weights.short_title;
		}
	} else if title_normalized.starts_with(&query) {
		total += weights.title_prefix;
	} else if title_normalized.contains(&query) {
		total += weights.title_substring;
	}
	if let Some(description) = description
		&& description.to_lowercase().contains(&query)
	{
		total += weights.description_hit;
	}

	total
}

/// Scores every record and orders by score descending. Queries shorter than
/// the configured minimum are rejected before any scoring happens. The sort
/// is explicitly stable: equal scores keep their input order.
pub fn rank<T>(cfg: &Config, query: &str, records: Vec<T>) -> Result<Vec<Ranked<T>>>
where
	T: Searchable,
{
	let query = validate_query(cfg, query)?;
	let mut ranked: Vec<Ranked<T>> = records
		.into_iter()
		.map(|record| {
			let score = score(&cfg.relevance, query, record.title(), record.description());

			Ranked { record, score }
		})
		.collect();

	ranked.sort_by(|a, b| b.score.cmp(&a.score));

	Ok(ranked)
}

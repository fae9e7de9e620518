mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Relevance, Search};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.search.min_query_chars == 0 {
		return Err(Error::constraint("search.min_query_chars", "must be greater than zero"));
	}
	if cfg.search.max_results == 0 {
		return Err(Error::constraint("search.max_results", "must be greater than zero"));
	}
	if cfg.relevance.exact_title <= cfg.relevance.title_prefix {
		return Err(Error::constraint(
			"relevance.exact_title",
			"must be greater than relevance.title_prefix",
		));
	}
	if cfg.relevance.title_prefix <= cfg.relevance.title_substring {
		return Err(Error::constraint(
			"relevance.title_prefix",
			"must be greater than relevance.title_substring",
		));
	}
	if cfg.relevance.title_substring == 0 {
		return Err(Error::constraint("relevance.title_substring", "must be greater than zero"));
	}
	if cfg.relevance.short_title_max_chars == 0 {
		return Err(Error::constraint(
			"relevance.short_title_max_chars",
			"must be greater than zero",
		));
	}

	Ok(())
}

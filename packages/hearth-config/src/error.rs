use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read relevance config at {path:?}.")]
	Read { path: PathBuf, source: io::Error },
	#[error("Failed to parse relevance config at {path:?}.")]
	Parse { path: PathBuf, source: toml::de::Error },
	#[error("Config field {field} {constraint}.")]
	Constraint { field: &'static str, constraint: &'static str },
}
impl Error {
	pub(crate) fn constraint(field: &'static str, constraint: &'static str) -> Self {
		Self::Constraint { field, constraint }
	}
}

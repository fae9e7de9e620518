pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Unknown visibility value '{value}'.")]
	InvalidVisibility { value: String },
	#[error("Unknown role value '{value}'.")]
	InvalidRole { value: String },
	#[error("{field} must be a non-empty identifier.")]
	EmptyIdentifier { field: &'static str },
}

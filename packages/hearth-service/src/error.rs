pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Query must be at least {min_chars} characters.")]
	QueryTooShort { min_chars: u32 },
	#[error("Stored record carries unknown visibility value '{value}'.")]
	InvalidVisibility { value: String },
}
impl From<hearth_domain::Error> for Error {
	fn from(err: hearth_domain::Error) -> Self {
		match err {
			hearth_domain::Error::InvalidVisibility { value } => Self::InvalidVisibility { value },
			hearth_domain::Error::InvalidRole { value } => Self::InvalidRequest {
				message: format!("Unknown role value '{value}'."),
			},
			hearth_domain::Error::EmptyIdentifier { field } => Self::InvalidRequest {
				message: format!("{field} must be a non-empty identifier."),
			},
		}
	}
}

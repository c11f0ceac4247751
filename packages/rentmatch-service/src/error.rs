pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Nothing to search yet, as opposed to a search that matched nothing.
	#[error("Listing catalog is not loaded.")]
	CatalogUnavailable,
	#[error("Invalid criteria: {message}")]
	InvalidCriteria { message: String },
}
impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::InvalidCriteria { message: err.to_string() }
	}
}

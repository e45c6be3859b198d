//! Client-level error types shared across every API operation.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Operations perform no error translation or recovery: transport failures and
/// non-success statuses surface here unchanged, in the shape the underlying
/// transport reported them.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (endpoint URL, request body).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Underlying transport reported a failure (DNS, TCP, TLS, timeout).
	#[error("Transport error occurred while calling the DeviceHub API.")]
	Transport {
		/// Transport-specific failure.
		#[source]
		source: BoxError,
	},
	/// Server answered with a non-success status.
	#[error("DeviceHub API returned status {status}: {message}.")]
	Api {
		/// HTTP status code.
		status: u16,
		/// Body preview summarizing the failure.
		message: String,
	},
	/// Response body could not be decoded into the expected shape.
	#[error("DeviceHub API returned a response that could not be decoded.")]
	Decode {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the undecodable response.
		status: u16,
	},
	/// Synchronous credentials fetch received a non-200 status.
	///
	/// The blocking path carries no detail payload; only the status survives.
	#[error("Device credentials endpoint returned status {status}.")]
	Credentials {
		/// HTTP status code.
		status: u16,
	},
}
impl Error {
	/// Wraps a transport-specific failure.
	pub fn transport(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Transport { source: Box::new(src) }
	}
}

/// Configuration and validation failures raised while building requests.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Operation path cannot be joined onto the base URL.
	#[error("Endpoint path `{path}` is invalid.")]
	InvalidEndpoint {
		/// Offending path + query string.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request body failed to serialize.
	#[error("Request body could not be serialized.")]
	RequestBody(#[from] serde_json::Error),
}

//! Transport primitives shared by every API operation.
//!
//! The module exposes [`HttpTransport`] alongside [`ApiRequest`] and [`ApiResponse`]
//! so downstream crates can plug in custom HTTP clients. The client builds each
//! request (URL, headers, optional JSON body) and hands it to the transport
//! unchanged; the transport owns connection pooling, TLS, and timeouts.

// std
use std::{ops::Deref, time::Duration};
// self
use crate::_prelude::*;

/// HTTP methods used by the DeviceHub API surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
	/// `DELETE`.
	Delete,
}
impl Method {
	/// Canonical uppercase method name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Delete => "DELETE",
		}
	}
}

/// A fully built outbound request, ready for a transport to execute.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL, query string included.
	pub url: Url,
	/// Header name/value pairs in insertion order.
	pub headers: Vec<(String, String)>,
	/// Serialized request body, if the operation carries one.
	pub body: Option<Vec<u8>>,
	/// Per-request timeout hint; transports may honor or ignore it.
	pub timeout: Option<Duration>,
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Whether the status falls in the 2xx range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Optional request-shaping configuration accepted by every operation.
///
/// The recognized options belong to the transport layer, not to individual
/// operations: operations thread the configuration through untouched.
#[derive(Clone, Debug, Default)]
pub struct RequestConfig {
	/// Skip the non-success status check and return the raw outcome.
	pub ignore_errors: bool,
	/// Per-request timeout forwarded to the transport.
	pub timeout: Option<Duration>,
	/// Extra headers appended after the client's own.
	pub headers: Vec<(String, String)>,
}
impl RequestConfig {
	/// Configuration that suppresses non-success status mapping.
	pub fn ignoring_errors() -> Self {
		Self { ignore_errors: true, ..Self::default() }
	}

	/// Configuration carrying a per-request timeout.
	pub fn with_timeout(timeout: Duration) -> Self {
		Self { timeout: Some(timeout), ..Self::default() }
	}
}

/// Abstraction over HTTP stacks capable of executing single-shot API requests.
///
/// The trait is the client's only dependency on an HTTP implementation. Callers
/// provide one (typically behind `Arc<T>` where `T: HttpTransport`), and every
/// asynchronous operation funnels through [`execute`](HttpTransport::execute).
/// Implementations must be `Send + Sync + 'static` so a single client can be
/// shared across tasks, and the returned future must be `Send` so operation
/// futures stay spawnable.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying stack.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes one request and resolves with the raw response.
	///
	/// Transports must not retry, redirect-follow into other origins, or
	/// translate non-success statuses into errors; status handling belongs to
	/// the client.
	fn execute(
		&self,
		request: ApiRequest,
	) -> impl Future<Output = Result<ApiResponse, Self::TransportError>> + Send;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	type TransportError = ReqwestError;

	fn execute(
		&self,
		request: ApiRequest,
	) -> impl Future<Output = Result<ApiResponse, Self::TransportError>> + Send {
		let client = self.0.clone();

		async move {
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
				Method::Delete => reqwest::Method::DELETE,
			};
			let mut builder = client.request(method, request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name, value);
			}
			if let Some(timeout) = request.timeout {
				builder = builder.timeout(timeout);
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, body })
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn method_names_are_canonical() {
		assert_eq!(Method::Get.as_str(), "GET");
		assert_eq!(Method::Post.as_str(), "POST");
		assert_eq!(Method::Delete.as_str(), "DELETE");
	}

	#[test]
	fn success_covers_the_2xx_range_only() {
		let ok = ApiResponse { status: 204, body: Vec::new() };
		let redirect = ApiResponse { status: 302, body: Vec::new() };
		let client_error = ApiResponse { status: 404, body: Vec::new() };

		assert!(ok.is_success());
		assert!(!redirect.is_success());
		assert!(!client_error.is_success());
	}
}

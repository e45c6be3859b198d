//! DeviceHub API client and its pass-through operations.
//!
//! Every operation has the same shape: construct a path (optionally
//! interpolating identifiers and a query-object's own serialization), optionally
//! attach a JSON body, hand the request to the shared [`HttpTransport`], and
//! propagate its outcome untouched. No retries, no caching, no shared mutable
//! state beyond the auth-token slot.

mod assignment;
mod bulk;
mod credentials;
mod devices;
mod rpc;

// self
use crate::{
	_prelude::*,
	auth::{AUTH_HEADER, JwtTokenSlot},
	error::ConfigError,
	http::{ApiRequest, ApiResponse, HttpTransport, Method, RequestConfig},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestDeviceClient = DeviceClient<ReqwestTransport>;

/// Asynchronous client for the DeviceHub device REST API.
///
/// The client owns the base URL, the injected HTTP transport, and the shared
/// auth-token slot; individual operation implementations live in submodules and
/// focus on path construction only. Cloning is cheap and clones share the
/// transport and token slot.
#[derive(Clone)]
pub struct DeviceClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Transport used for every asynchronous outbound request.
	pub http: Arc<C>,
	/// API origin the `/api/…` paths are joined onto.
	pub base_url: Url,
	/// Auth-token slot consulted when stamping `X-Authorization`.
	pub token: JwtTokenSlot,
}
impl<C> DeviceClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Builds a client over the given transport with an empty token slot.
	pub fn new(base_url: Url, http: Arc<C>) -> Self {
		Self { http, base_url, token: JwtTokenSlot::default() }
	}

	/// Replaces the token slot, e.g. with one shared with the auth subsystem.
	pub fn with_token_slot(mut self, token: JwtTokenSlot) -> Self {
		self.token = token;

		self
	}

	/// Builds an [`ApiRequest`] for `path_and_query` relative to the base URL.
	pub(crate) fn build_request(
		&self,
		method: Method,
		path_and_query: &str,
		body: Option<Vec<u8>>,
		config: Option<&RequestConfig>,
	) -> Result<ApiRequest> {
		let url = self.base_url.join(path_and_query).map_err(|source| {
			ConfigError::InvalidEndpoint { path: path_and_query.into(), source }
		})?;
		let mut headers =
			vec![("Accept".into(), "application/json, text/plain, */*".to_string())];

		if body.is_some() {
			headers.push(("Content-Type".into(), "application/json".into()));
		}
		if let Some(bearer) = self.token.bearer() {
			headers.push((AUTH_HEADER.into(), bearer));
		}
		if let Some(config) = config {
			headers.extend(config.headers.iter().cloned());
		}

		Ok(ApiRequest {
			method,
			url,
			headers,
			body,
			timeout: config.and_then(|config| config.timeout),
		})
	}

	/// Executes a request without interpreting the response status.
	pub(crate) async fn execute_raw(&self, request: ApiRequest) -> Result<ApiResponse> {
		tracing::debug!(
			method = request.method.as_str(),
			url = %request.url,
			"Dispatching DeviceHub API request."
		);

		self.http.execute(request).await.map_err(Error::transport)
	}

	/// Executes a request and maps non-success statuses to [`Error::Api`],
	/// unless the configuration asks to ignore them.
	pub(crate) async fn execute(
		&self,
		request: ApiRequest,
		config: Option<&RequestConfig>,
	) -> Result<ApiResponse> {
		let response = self.execute_raw(request).await?;
		let ignore_errors = config.is_some_and(|config| config.ignore_errors);

		if !ignore_errors && !response.is_success() {
			return Err(Error::Api {
				status: response.status,
				message: body_preview(&response.body),
			});
		}

		Ok(response)
	}

	pub(crate) async fn get_json<T>(
		&self,
		path_and_query: &str,
		config: Option<&RequestConfig>,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let request = self.build_request(Method::Get, path_and_query, None, config)?;
		let response = self.execute(request, config).await?;

		decode_json(&response)
	}

	pub(crate) async fn post_json<B, T>(
		&self,
		path_and_query: &str,
		body: &B,
		config: Option<&RequestConfig>,
	) -> Result<T>
	where
		B: ?Sized + Serialize,
		T: DeserializeOwned,
	{
		let body = serde_json::to_vec(body).map_err(ConfigError::RequestBody)?;
		let request = self.build_request(Method::Post, path_and_query, Some(body), config)?;
		let response = self.execute(request, config).await?;

		decode_json(&response)
	}

	pub(crate) async fn post_empty<T>(
		&self,
		path_and_query: &str,
		config: Option<&RequestConfig>,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let request = self.build_request(Method::Post, path_and_query, None, config)?;
		let response = self.execute(request, config).await?;

		decode_json(&response)
	}

	pub(crate) async fn delete(
		&self,
		path_and_query: &str,
		config: Option<&RequestConfig>,
	) -> Result<()> {
		let request = self.build_request(Method::Delete, path_and_query, None, config)?;

		self.execute(request, config).await?;

		Ok(())
	}
}
#[cfg(feature = "reqwest")]
impl ReqwestDeviceClient {
	/// Builds a client over the crate's default reqwest transport.
	pub fn reqwest(base_url: &str) -> Result<Self> {
		let base_url =
			Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(Self::new(base_url, Arc::new(ReqwestTransport::default())))
	}
}

/// Decodes a JSON response body, attaching the offending path on failure.
pub(crate) fn decode_json<T>(response: &ApiResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { source, status: response.status })
}

/// Short lossy-UTF-8 preview of an error body for diagnostics.
fn body_preview(body: &[u8]) -> String {
	const PREVIEW_LEN: usize = 256;

	let text = String::from_utf8_lossy(body);
	let text = text.trim();

	if text.chars().count() > PREVIEW_LEN {
		text.chars().take(PREVIEW_LEN).collect()
	} else {
		text.into()
	}
}

//! Device credentials operations, including the blocking escape hatch.

// self
use crate::{
	_prelude::*,
	client::DeviceClient,
	http::{HttpTransport, RequestConfig},
	model::DeviceCredentials,
};
#[cfg(feature = "reqwest")]
use crate::{
	auth::AUTH_HEADER,
	client::decode_json,
	error::ConfigError,
	http::ApiResponse,
};

impl<C> DeviceClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Fetches a device's connectivity credentials.
	pub async fn device_credentials(
		&self,
		device_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<DeviceCredentials> {
		self.get_json(&format!("/api/device/{device_id}/credentials"), config).await
	}

	/// Fetches a device's credentials with a blocking round-trip on the calling
	/// thread.
	///
	/// This is a narrow escape hatch for callers that need an immediately
	/// available value rather than a deferred one. It bypasses the injected
	/// transport and issues the request through a one-shot blocking reqwest
	/// client, reading the same token slot the asynchronous path uses. A
	/// non-200 status yields [`Error::Credentials`] with no detail payload.
	///
	/// Must not be called from within an async runtime; the blocking client
	/// panics there. Prefer [`device_credentials`](Self::device_credentials)
	/// everywhere a deferred value is acceptable.
	#[cfg(feature = "reqwest")]
	pub fn device_credentials_sync(&self, device_id: &str) -> Result<DeviceCredentials> {
		let path = format!("/api/device/{device_id}/credentials");
		let url = self
			.base_url
			.join(&path)
			.map_err(|source| ConfigError::InvalidEndpoint { path, source })?;
		let client = reqwest::blocking::Client::new();
		let mut request =
			client.get(url).header("Accept", "application/json, text/plain, */*");

		if let Some(bearer) = self.token.bearer() {
			request = request.header(AUTH_HEADER, bearer);
		}

		let response = request.send().map_err(Error::transport)?;
		let status = response.status().as_u16();

		if status != 200 {
			return Err(Error::Credentials { status });
		}

		let body = response.bytes().map_err(Error::transport)?.to_vec();

		decode_json(&ApiResponse { status, body })
	}

	/// Creates or updates a device's credentials.
	pub async fn save_device_credentials(
		&self,
		credentials: &DeviceCredentials,
		config: Option<&RequestConfig>,
	) -> Result<DeviceCredentials> {
		self.post_json("/api/device/credentials", credentials, config).await
	}
}

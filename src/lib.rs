//! Typed async REST client for the DeviceHub device-management API: devices,
//! credentials, RPC, claiming, and edge assignment over a pluggable HTTP
//! transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod model;
pub mod page;
#[cfg(feature = "reqwest")]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; available whenever the
	//! default reqwest transport is enabled.

	pub use crate::_prelude::*;

	// self
	use crate::{client::DeviceClient, http::ReqwestTransport};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = DeviceClient<ReqwestTransport>;

	/// Builds a client over the default reqwest transport, pointed at a mock
	/// server's base URL.
	pub fn build_reqwest_test_client(base_url: &str) -> ReqwestTestClient {
		DeviceClient::reqwest(base_url).expect("Failed to build reqwest client for tests.")
	}
}

mod _prelude {
	pub use std::{error::Error as StdError, future::Future, sync::Arc};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};

//! One-way/two-way command dispatch and persisted RPC records.

// self
use crate::{
	_prelude::*,
	client::DeviceClient,
	http::{HttpTransport, RequestConfig},
	model::{PersistentRpc, RpcRequest, RpcStatus},
	page::{PageData, PageLink},
};

impl<C> DeviceClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Sends a fire-and-forget command to a device.
	///
	/// The reply body is opaque to the platform and surfaces as raw JSON.
	pub async fn send_one_way_rpc(
		&self,
		device_id: &str,
		body: &RpcRequest,
		config: Option<&RequestConfig>,
	) -> Result<JsonValue> {
		self.post_json(&format!("/api/rpc/oneway/{device_id}"), body, config).await
	}

	/// Sends a command and awaits the device's reply.
	pub async fn send_two_way_rpc(
		&self,
		device_id: &str,
		body: &RpcRequest,
		config: Option<&RequestConfig>,
	) -> Result<JsonValue> {
		self.post_json(&format!("/api/rpc/twoway/{device_id}"), body, config).await
	}

	/// Fetches one persisted RPC record.
	pub async fn persisted_rpc(
		&self,
		rpc_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<PersistentRpc> {
		self.get_json(&format!("/api/rpc/persistent/{rpc_id}"), config).await
	}

	/// Deletes one persisted RPC record.
	pub async fn delete_persisted_rpc(
		&self,
		rpc_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<()> {
		self.delete(&format!("/api/rpc/persistent/{rpc_id}"), config).await
	}

	/// Lists a device's persisted RPC records, optionally filtered by status.
	///
	/// Unlike the listing type filters, `rpcStatus` is appended only when a
	/// status is supplied.
	pub async fn persisted_rpc_requests(
		&self,
		device_id: &str,
		page_link: &PageLink,
		rpc_status: Option<RpcStatus>,
		config: Option<&RequestConfig>,
	) -> Result<PageData<PersistentRpc>> {
		let mut path =
			format!("/api/rpc/persistent/device/{device_id}{}", page_link.to_query());

		if let Some(rpc_status) = rpc_status {
			path.push_str(&format!("&rpcStatus={}", rpc_status.as_str()));
		}

		self.get_json(&path, config).await
	}
}

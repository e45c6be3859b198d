//! Customer assignment, claiming, and edge-node assignment operations.

// self
use crate::{
	_prelude::*,
	client::DeviceClient,
	http::{HttpTransport, RequestConfig},
	model::{ClaimRequest, ClaimResult, Device, DeviceInfo},
	page::{PageData, PageLink},
};

impl<C> DeviceClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Assigns a device to the tenant's public customer.
	pub async fn make_device_public(
		&self,
		device_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<Device> {
		self.post_empty(&format!("/api/customer/public/device/{device_id}"), config).await
	}

	/// Assigns a device to a customer.
	pub async fn assign_device_to_customer(
		&self,
		customer_id: &str,
		device_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<Device> {
		self.post_empty(&format!("/api/customer/{customer_id}/device/{device_id}"), config)
			.await
	}

	/// Unassigns a device from its customer.
	pub async fn unassign_device_from_customer(
		&self,
		device_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<()> {
		self.delete(&format!("/api/customer/device/{device_id}"), config).await
	}

	/// Claims a device by name using its shared secret.
	pub async fn claim_device(
		&self,
		device_name: &str,
		claim_request: &ClaimRequest,
		config: Option<&RequestConfig>,
	) -> Result<ClaimResult> {
		self.post_json(&format!("/api/customer/device/{device_name}/claim"), claim_request, config)
			.await
	}

	/// Returns a claimed device to the unclaimed pool.
	pub async fn unclaim_device(
		&self,
		device_name: &str,
		config: Option<&RequestConfig>,
	) -> Result<()> {
		self.delete(&format!("/api/customer/device/{device_name}/claim"), config).await
	}

	/// Assigns a device to an edge node.
	pub async fn assign_device_to_edge(
		&self,
		edge_id: &str,
		device_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<Device> {
		self.post_empty(&format!("/api/edge/{edge_id}/device/{device_id}"), config).await
	}

	/// Unassigns a device from an edge node.
	pub async fn unassign_device_from_edge(
		&self,
		edge_id: &str,
		device_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<()> {
		self.delete(&format!("/api/edge/{edge_id}/device/{device_id}"), config).await
	}

	/// Lists an edge node's device summaries, optionally filtered by type.
	pub async fn edge_devices(
		&self,
		edge_id: &str,
		page_link: &PageLink,
		device_type: Option<&str>,
		config: Option<&RequestConfig>,
	) -> Result<PageData<DeviceInfo>> {
		let path = format!(
			"/api/edge/{edge_id}/devices{}&type={}",
			page_link.to_query(),
			device_type.unwrap_or_default(),
		);

		self.get_json(&path, config).await
	}
}

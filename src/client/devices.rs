//! Device listing, lookup, and lifecycle operations.

// self
use crate::{
	_prelude::*,
	client::DeviceClient,
	http::{HttpTransport, RequestConfig},
	model::{Device, DeviceInfo, DeviceSearchQuery, EntitySubtype},
	page::{DeviceInfoQuery, PageData, PageLink, encode_query_value},
};

impl<C> DeviceClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Lists device summaries matching a self-serializing [`DeviceInfoQuery`].
	///
	/// The query owns its full path relative to `/api`, so tenant- and
	/// customer-scoped listings both funnel through this one operation.
	pub async fn device_infos_by_query(
		&self,
		query: &DeviceInfoQuery,
		config: Option<&RequestConfig>,
	) -> Result<PageData<DeviceInfo>> {
		self.get_json(&format!("/api{}", query.to_query()), config).await
	}

	/// Lists the tenant's device summaries, optionally filtered by device type.
	///
	/// An omitted type serializes as an empty trailing `&type=` parameter, never
	/// an absent one; the server treats both as "no filter".
	pub async fn tenant_device_infos(
		&self,
		page_link: &PageLink,
		device_type: Option<&str>,
		config: Option<&RequestConfig>,
	) -> Result<PageData<DeviceInfo>> {
		let path = format!(
			"/api/tenant/deviceInfos{}&type={}",
			page_link.to_query(),
			device_type.unwrap_or_default(),
		);

		self.get_json(&path, config).await
	}

	/// Lists the tenant's device summaries filtered by device profile.
	pub async fn tenant_device_infos_by_profile(
		&self,
		page_link: &PageLink,
		device_profile_id: Option<&str>,
		config: Option<&RequestConfig>,
	) -> Result<PageData<DeviceInfo>> {
		let path = format!(
			"/api/tenant/deviceInfos{}&deviceProfileId={}",
			page_link.to_query(),
			device_profile_id.unwrap_or_default(),
		);

		self.get_json(&path, config).await
	}

	/// Lists a customer's device summaries, optionally filtered by device type.
	pub async fn customer_device_infos(
		&self,
		customer_id: &str,
		page_link: &PageLink,
		device_type: Option<&str>,
		config: Option<&RequestConfig>,
	) -> Result<PageData<DeviceInfo>> {
		let path = format!(
			"/api/customer/{customer_id}/deviceInfos{}&type={}",
			page_link.to_query(),
			device_type.unwrap_or_default(),
		);

		self.get_json(&path, config).await
	}

	/// Lists a customer's device summaries filtered by device profile.
	pub async fn customer_device_infos_by_profile(
		&self,
		customer_id: &str,
		page_link: &PageLink,
		device_profile_id: Option<&str>,
		config: Option<&RequestConfig>,
	) -> Result<PageData<DeviceInfo>> {
		let path = format!(
			"/api/customer/{customer_id}/deviceInfos{}&deviceProfileId={}",
			page_link.to_query(),
			device_profile_id.unwrap_or_default(),
		);

		self.get_json(&path, config).await
	}

	/// Fetches one device by identifier.
	pub async fn device(
		&self,
		device_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<Device> {
		self.get_json(&format!("/api/device/{device_id}"), config).await
	}

	/// Fetches devices by identifier list, comma-joined into one query.
	pub async fn devices(
		&self,
		device_ids: &[&str],
		config: Option<&RequestConfig>,
	) -> Result<Vec<Device>> {
		self.get_json(&format!("/api/devices?deviceIds={}", device_ids.join(",")), config).await
	}

	/// Fetches one device summary by identifier.
	pub async fn device_info(
		&self,
		device_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<DeviceInfo> {
		self.get_json(&format!("/api/device/info/{device_id}"), config).await
	}

	/// Creates or updates a device; the server decides based on the record's id.
	pub async fn save_device(
		&self,
		device: &Device,
		config: Option<&RequestConfig>,
	) -> Result<Device> {
		self.post_json("/api/device", device, config).await
	}

	/// Deletes a device.
	pub async fn delete_device(
		&self,
		device_id: &str,
		config: Option<&RequestConfig>,
	) -> Result<()> {
		self.delete(&format!("/api/device/{device_id}"), config).await
	}

	/// Lists the device type tags registered in the tenant.
	pub async fn device_types(
		&self,
		config: Option<&RequestConfig>,
	) -> Result<Vec<EntitySubtype>> {
		self.get_json("/api/device/types", config).await
	}

	/// Searches devices by relation walk.
	pub async fn find_by_query(
		&self,
		query: &DeviceSearchQuery,
		config: Option<&RequestConfig>,
	) -> Result<Vec<Device>> {
		self.post_json("/api/devices", query, config).await
	}

	/// Finds the tenant's device with the given name.
	pub async fn find_by_name(
		&self,
		device_name: &str,
		config: Option<&RequestConfig>,
	) -> Result<Device> {
		let path = format!("/api/tenant/devices?deviceName={}", encode_query_value(device_name));

		self.get_json(&path, config).await
	}
}

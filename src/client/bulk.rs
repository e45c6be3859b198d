//! Bulk import and CSV export operations.

// std
use std::path::Path;
// self
use crate::{
	_prelude::*,
	client::DeviceClient,
	http::{HttpTransport, Method, RequestConfig},
	model::{BulkImportRequest, BulkImportResult},
};

impl<C> DeviceClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Imports devices in bulk from a CSV payload.
	pub async fn bulk_import_devices(
		&self,
		request: &BulkImportRequest,
		config: Option<&RequestConfig>,
	) -> Result<BulkImportResult> {
		self.post_json("/api/device/bulk_import", request, config).await
	}

	/// Downloads a device's CSV export into `dest`.
	///
	/// The file is written only when the response status is 200 and a body is
	/// present. Failures (transport, status, or filesystem) are logged and
	/// swallowed; the caller cannot observe them programmatically.
	pub async fn download_csv(
		&self,
		device_id: &str,
		dest: &Path,
		config: Option<&RequestConfig>,
	) {
		let path = format!("/api/device/{device_id}/csv/download");
		let result = match self.build_request(Method::Get, &path, None, config) {
			Ok(request) => self.execute_raw(request).await,
			Err(e) => Err(e),
		};

		match result {
			Ok(response) if response.status == 200 && !response.body.is_empty() => {
				if let Err(e) = std::fs::write(dest, &response.body) {
					tracing::error!(
						device_id,
						dest = %dest.display(),
						error = %e,
						"Failed to write CSV export."
					);
				}
			},
			Ok(response) =>
				tracing::error!(device_id, status = response.status, "Failed to download CSV export."),
			Err(e) => tracing::error!(device_id, error = %e, "Failed to download CSV export."),
		}
	}
}

//! Page links and query-object serialization.
//!
//! The server paginates every listing endpoint. A [`PageLink`] renders itself as
//! the canonical query string (`?pageSize=&page=…`) that listing paths embed, and
//! [`PageData`] is the envelope every paginated response arrives in. The shapes
//! are owned by the server API; this module only serializes them faithfully.

// self
use crate::_prelude::*;

/// Sort direction accepted by paginated endpoints.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
	/// Ascending.
	Asc,
	/// Descending.
	Desc,
}
impl Direction {
	/// Wire spelling used in query strings.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}
}

/// Sort order applied to a page of results.
#[derive(Clone, Debug)]
pub struct SortOrder {
	/// Entity property to sort by.
	pub property: String,
	/// Sort direction.
	pub direction: Direction,
}
impl SortOrder {
	/// Sort order over `property` in the given direction.
	pub fn new(property: impl Into<String>, direction: Direction) -> Self {
		Self { property: property.into(), direction }
	}
}

/// Window into a paginated listing: page size, page index, optional text search
/// and sort order.
#[derive(Clone, Debug)]
pub struct PageLink {
	/// Maximum number of records per page.
	pub page_size: u32,
	/// Zero-based page index.
	pub page: u32,
	/// Case-insensitive text filter.
	pub text_search: Option<String>,
	/// Sort order for the page.
	pub sort_order: Option<SortOrder>,
}
impl PageLink {
	/// Page link over the first `page_size` records of page `page`.
	pub fn new(page_size: u32, page: u32) -> Self {
		Self { page_size, page, text_search: None, sort_order: None }
	}

	/// Adds a text-search filter.
	pub fn with_text_search(mut self, text_search: impl Into<String>) -> Self {
		self.text_search = Some(text_search.into());

		self
	}

	/// Adds a sort order.
	pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
		self.sort_order = Some(sort_order);

		self
	}

	/// Renders the link as the query string listing paths embed.
	///
	/// Always starts with `?pageSize=&page=`; text search and sort parameters
	/// are appended only when present.
	pub fn to_query(&self) -> String {
		let mut query = format!("?pageSize={}&page={}", self.page_size, self.page);

		if let Some(text_search) = &self.text_search {
			query.push_str(&format!("&textSearch={}", encode_query_value(text_search)));
		}
		if let Some(sort_order) = &self.sort_order {
			query.push_str(&format!(
				"&sortProperty={}&sortOrder={}",
				encode_query_value(&sort_order.property),
				sort_order.direction.as_str(),
			));
		}

		query
	}
}

/// One page of a paginated listing.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
	/// Records on this page.
	pub data: Vec<T>,
	/// Total number of pages available.
	pub total_pages: u32,
	/// Total number of records across all pages.
	pub total_elements: u64,
	/// Whether another page follows this one.
	pub has_next: bool,
}

/// Filter half of a [`DeviceInfoQuery`].
#[derive(Clone, Debug, Default)]
pub struct DeviceInfoFilter {
	/// Restrict to devices assigned to this customer.
	pub customer_id: Option<String>,
	/// Restrict to devices of this type.
	pub device_type: Option<String>,
	/// Restrict to devices built from this profile.
	pub device_profile_id: Option<String>,
	/// Restrict to active (or inactive) devices.
	pub active: Option<bool>,
}

/// Self-serializing device listing query.
///
/// Unlike a bare [`PageLink`], the query owns its full path: the customer filter
/// selects between the tenant-scoped and customer-scoped listing endpoints.
#[derive(Clone, Debug)]
pub struct DeviceInfoQuery {
	/// Pagination window.
	pub page_link: PageLink,
	/// Device filter.
	pub filter: DeviceInfoFilter,
}
impl DeviceInfoQuery {
	/// Query over `page_link` with the given filter.
	pub fn new(page_link: PageLink, filter: DeviceInfoFilter) -> Self {
		Self { page_link, filter }
	}

	/// Renders the path + query string relative to the `/api` root.
	pub fn to_query(&self) -> String {
		let mut query = match &self.filter.customer_id {
			Some(customer_id) => format!("/customer/{customer_id}/deviceInfos"),
			None => "/tenant/deviceInfos".into(),
		};

		query.push_str(&self.page_link.to_query());

		if let Some(device_type) = &self.filter.device_type {
			query.push_str(&format!("&type={}", encode_query_value(device_type)));
		}
		if let Some(device_profile_id) = &self.filter.device_profile_id {
			query.push_str(&format!("&deviceProfileId={device_profile_id}"));
		}
		if let Some(active) = self.filter.active {
			query.push_str(&format!("&active={active}"));
		}

		query
	}
}

/// Percent-encodes a single query parameter value.
pub(crate) fn encode_query_value(value: &str) -> String {
	url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn page_link_renders_minimal_query() {
		assert_eq!(PageLink::new(10, 0).to_query(), "?pageSize=10&page=0");
	}

	#[test]
	fn page_link_appends_text_search_and_sort() {
		let link = PageLink::new(25, 3)
			.with_text_search("sensor")
			.with_sort_order(SortOrder::new("createdTime", Direction::Desc));

		assert_eq!(
			link.to_query(),
			"?pageSize=25&page=3&textSearch=sensor&sortProperty=createdTime&sortOrder=DESC",
		);
	}

	#[test]
	fn page_link_encodes_text_search() {
		let link = PageLink::new(10, 0).with_text_search("room a&b");

		assert_eq!(link.to_query(), "?pageSize=10&page=0&textSearch=room+a%26b");
	}

	#[test]
	fn device_info_query_defaults_to_tenant_scope() {
		let query = DeviceInfoQuery::new(PageLink::new(10, 0), DeviceInfoFilter::default());

		assert_eq!(query.to_query(), "/tenant/deviceInfos?pageSize=10&page=0");
	}

	#[test]
	fn device_info_query_switches_to_customer_scope() {
		let filter = DeviceInfoFilter {
			customer_id: Some("cust-7".into()),
			device_type: Some("thermostat".into()),
			..DeviceInfoFilter::default()
		};
		let query = DeviceInfoQuery::new(PageLink::new(10, 1), filter);

		assert_eq!(
			query.to_query(),
			"/customer/cust-7/deviceInfos?pageSize=10&page=1&type=thermostat",
		);
	}

	#[test]
	fn device_info_query_appends_profile_and_active_filters() {
		let filter = DeviceInfoFilter {
			device_profile_id: Some("profile-1".into()),
			active: Some(true),
			..DeviceInfoFilter::default()
		};
		let query = DeviceInfoQuery::new(PageLink::new(10, 0), filter);

		assert_eq!(
			query.to_query(),
			"/tenant/deviceInfos?pageSize=10&page=0&deviceProfileId=profile-1&active=true",
		);
	}

	#[test]
	fn page_data_decodes_envelope() {
		let raw = r#"{"data":["a","b"],"totalPages":4,"totalElements":38,"hasNext":true}"#;
		let page: PageData<String> =
			serde_json::from_str(raw).expect("Page envelope should decode.");

		assert_eq!(page.data, ["a", "b"]);
		assert_eq!(page.total_pages, 4);
		assert_eq!(page.total_elements, 38);
		assert!(page.has_next);
	}
}

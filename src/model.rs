//! Data-transfer shapes owned by the server API.
//!
//! The client moves these opaquely between caller and wire: no validation or
//! normalization happens here beyond serde (de)serialization. Field names follow
//! the server's camelCase JSON; timestamps are epoch milliseconds as the server
//! reports them.

// self
use crate::_prelude::*;

/// Typed entity reference (`entityType` + UUID string).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityId {
	/// Entity type tag, e.g. `DEVICE` or `CUSTOMER`.
	pub entity_type: String,
	/// Entity UUID.
	pub id: String,
}
impl EntityId {
	/// Reference to an entity of the given type.
	pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
		Self { entity_type: entity_type.into(), id: id.into() }
	}
}

/// A managed device record.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
	/// Server-assigned identifier; absent on creation.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<EntityId>,
	/// Creation timestamp in epoch milliseconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_time: Option<u64>,
	/// Owning tenant.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tenant_id: Option<EntityId>,
	/// Assigned customer, if any.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub customer_id: Option<EntityId>,
	/// Unique device name within the tenant.
	pub name: String,
	/// Device type tag.
	#[serde(rename = "type")]
	pub device_type: String,
	/// Display label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Profile the device was built from.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub device_profile_id: Option<EntityId>,
	/// Free-form server-side metadata.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<JsonValue>,
}

/// Device summary enriched with customer and activity context.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
	/// Underlying device record.
	#[serde(flatten)]
	pub device: Device,
	/// Title of the assigned customer.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub customer_title: Option<String>,
	/// Whether the assigned customer is the public one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub customer_is_public: Option<bool>,
	/// Name of the device profile.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub device_profile_name: Option<String>,
	/// Whether the device has recently reported activity.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub active: Option<bool>,
}

/// Registered device type tag within a tenant.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySubtype {
	/// Owning tenant.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tenant_id: Option<EntityId>,
	/// Entity type the tag belongs to.
	pub entity_type: String,
	/// The tag itself.
	#[serde(rename = "type")]
	pub subtype: String,
}

/// Credential scheme attached to a device.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceCredentialsType {
	/// Single opaque access token.
	AccessToken,
	/// X.509 certificate chain.
	X509Certificate,
	/// MQTT username/password pair.
	MqttBasic,
	/// LwM2M security credentials.
	#[serde(rename = "LWM2M_CREDENTIALS")]
	Lwm2mCredentials,
}

/// Connectivity credentials for one device.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCredentials {
	/// Server-assigned identifier; absent on creation.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<EntityId>,
	/// Creation timestamp in epoch milliseconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_time: Option<u64>,
	/// Device the credentials belong to.
	pub device_id: EntityId,
	/// Credential scheme.
	pub credentials_type: DeviceCredentialsType,
	/// Public credential identifier (token, certificate CN, client id).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub credentials_id: Option<String>,
	/// Secret credential material, if the scheme carries any.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub credentials_value: Option<String>,
}

/// Direction of a relation walk in a [`DeviceSearchQuery`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntitySearchDirection {
	/// Walk relations originating from the root entity.
	From,
	/// Walk relations pointing at the root entity.
	To,
}

/// Relation-walk parameters for a device search.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationsSearchParameters {
	/// Entity the walk starts from.
	pub root_id: String,
	/// Type of the root entity.
	pub root_type: String,
	/// Walk direction.
	pub direction: EntitySearchDirection,
	/// Maximum relation depth to traverse.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_level: Option<u32>,
}

/// Relation-based device search request.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSearchQuery {
	/// Relation-walk parameters.
	pub parameters: RelationsSearchParameters,
	/// Relation type to follow, e.g. `Contains`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub relation_type: Option<String>,
	/// Restrict results to these device types.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub device_types: Vec<String>,
}

/// Claim request carrying the device's shared secret.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
	/// Secret provisioned on the device.
	pub secret_key: String,
}
impl ClaimRequest {
	/// Claim request for the given secret.
	pub fn new(secret_key: impl Into<String>) -> Self {
		Self { secret_key: secret_key.into() }
	}
}

/// Server verdict on a claim attempt.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimResponse {
	/// Device ownership was transferred.
	Success,
	/// Device is already claimed.
	Claimed,
	/// Claim was rejected.
	Failure,
}

/// Outcome of a claim workflow.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResult {
	/// Claimed device record.
	pub device: Device,
	/// Server verdict.
	pub response: ClaimResponse,
}

/// Lifecycle state of a persisted RPC record.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcStatus {
	/// Accepted, waiting for dispatch.
	Queued,
	/// Dispatched to the transport layer.
	Sent,
	/// Acknowledged by the device.
	Delivered,
	/// Completed with a reply.
	Successful,
	/// Timed out waiting for the device.
	Timeout,
	/// Expired before dispatch.
	Expired,
	/// Completed with a failure.
	Failed,
	/// Deleted before completion.
	Deleted,
}
impl RpcStatus {
	/// Wire spelling used in query strings.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Queued => "QUEUED",
			Self::Sent => "SENT",
			Self::Delivered => "DELIVERED",
			Self::Successful => "SUCCESSFUL",
			Self::Timeout => "TIMEOUT",
			Self::Expired => "EXPIRED",
			Self::Failed => "FAILED",
			Self::Deleted => "DELETED",
		}
	}
}

/// Command payload for one-way and two-way device RPC.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcRequest {
	/// Method name the device dispatches on.
	pub method: String,
	/// Method parameters, opaque to the platform.
	pub params: JsonValue,
	/// Reply timeout in milliseconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub timeout: Option<u64>,
	/// Persist the command for later status queries.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub persistent: Option<bool>,
}
impl RpcRequest {
	/// Command invoking `method` with the given parameters.
	pub fn new(method: impl Into<String>, params: JsonValue) -> Self {
		Self { method: method.into(), params, timeout: None, persistent: None }
	}
}

/// A logged command sent to a device.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentRpc {
	/// Server-assigned identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<EntityId>,
	/// Creation timestamp in epoch milliseconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_time: Option<u64>,
	/// Expiration timestamp in epoch milliseconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expiration_time: Option<u64>,
	/// Target device.
	pub device_id: EntityId,
	/// Lifecycle state.
	pub status: RpcStatus,
	/// Original command payload.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub request: Option<JsonValue>,
	/// Device reply, once one arrives.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub response: Option<JsonValue>,
	/// Free-form server-side metadata.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<JsonValue>,
}

/// Bulk device import request: CSV content plus a column mapping.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportRequest {
	/// CSV file content.
	pub file: String,
	/// Column-to-field mapping, owned by the import subsystem.
	pub mapping: JsonValue,
}

/// Per-row outcome counts of a bulk import.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportResult {
	/// Number of devices created.
	pub created: u64,
	/// Number of devices updated.
	pub updated: u64,
	/// Number of rows that failed.
	pub errors: u64,
	/// Row-level error messages.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub errors_list: Vec<String>,
}

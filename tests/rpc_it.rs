// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use devicehub_client::{
	_preludet::*,
	http::RequestConfig,
	model::{RpcRequest, RpcStatus},
	page::PageLink,
};

const PERSISTENT_RPC_BODY: &str = r#"{
	"id": {"entityType": "RPC", "id": "rpc-1"},
	"deviceId": {"entityType": "DEVICE", "id": "dev-1"},
	"status": "QUEUED",
	"request": {"method": "reboot", "params": {}}
}"#;

#[tokio::test]
async fn one_way_rpc_posts_to_the_oneway_path() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/rpc/oneway/dev-1")
				.json_body(json!({"method": "reboot", "params": {}}));
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;

	client
		.send_one_way_rpc("dev-1", &RpcRequest::new("reboot", json!({})), None)
		.await
		.expect("One-way command should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn two_way_rpc_returns_the_device_reply() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/rpc/twoway/dev-1")
				.json_body(json!({"method": "getTemperature", "params": {"unit": "C"}}));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"temperature": 21.5}"#);
		})
		.await;
	let reply = client
		.send_two_way_rpc(
			"dev-1",
			&RpcRequest::new("getTemperature", json!({"unit": "C"})),
			None,
		)
		.await
		.expect("Two-way command should succeed.");

	assert_eq!(reply["temperature"], 21.5);

	mock.assert_async().await;
}

#[tokio::test]
async fn persisted_rpc_fetch_decodes_the_record() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/rpc/persistent/rpc-1");
			then.status(200)
				.header("content-type", "application/json")
				.body(PERSISTENT_RPC_BODY);
		})
		.await;
	let rpc = client.persisted_rpc("rpc-1", None).await.expect("RPC fetch should succeed.");

	assert_eq!(rpc.status, RpcStatus::Queued);
	assert_eq!(rpc.device_id.id, "dev-1");

	mock.assert_async().await;
}

#[tokio::test]
async fn persisted_rpc_delete_issues_a_delete() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/rpc/persistent/rpc-1");
			then.status(200);
		})
		.await;

	client.delete_persisted_rpc("rpc-1", None).await.expect("RPC delete should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn persisted_rpc_listing_omits_the_status_filter_by_default() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/rpc/persistent/device/dev-1")
				.query_param("pageSize", "10")
				.query_param("page", "0");
			then.status(200).header("content-type", "application/json").body(format!(
				r#"{{"data":[{PERSISTENT_RPC_BODY}],"totalPages":1,"totalElements":1,"hasNext":false}}"#,
			));
		})
		.await;
	let page = client
		.persisted_rpc_requests("dev-1", &PageLink::new(10, 0), None, None)
		.await
		.expect("RPC listing should succeed.");

	assert_eq!(page.data.len(), 1);

	mock.assert_async().await;
}

#[tokio::test]
async fn persisted_rpc_listing_appends_the_status_filter_when_supplied() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/rpc/persistent/device/dev-1")
				.query_param("rpcStatus", "QUEUED");
			then.status(200).header("content-type", "application/json").body(
				r#"{"data":[],"totalPages":0,"totalElements":0,"hasNext":false}"#,
			);
		})
		.await;

	client
		.persisted_rpc_requests("dev-1", &PageLink::new(10, 0), Some(RpcStatus::Queued), None)
		.await
		.expect("Filtered RPC listing should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn ignore_errors_returns_the_raw_body_on_failure_statuses() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/rpc/twoway/dev-1");
			then.status(504)
				.header("content-type", "application/json")
				.body(r#"{"error": "device timeout"}"#);
		})
		.await;
	let config = RequestConfig::ignoring_errors();
	let reply = client
		.send_two_way_rpc("dev-1", &RpcRequest::new("ping", json!({})), Some(&config))
		.await
		.expect("Ignored errors should hand back the raw outcome.");

	assert_eq!(reply["error"], "device timeout");
}

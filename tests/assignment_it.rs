// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use devicehub_client::{
	_preludet::*,
	model::{ClaimRequest, ClaimResponse},
	page::PageLink,
};

const DEVICE_BODY: &str =
	r#"{"id":{"entityType":"DEVICE","id":"dev-1"},"name":"thermostat-a","type":"thermostat"}"#;
const PAGE_BODY: &str = r#"{
	"data": [{"name": "thermostat-a", "type": "thermostat"}],
	"totalPages": 1,
	"totalElements": 1,
	"hasNext": false
}"#;

#[tokio::test]
async fn make_device_public_posts_without_a_body() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/customer/public/device/dev-1");
			then.status(200).header("content-type", "application/json").body(DEVICE_BODY);
		})
		.await;
	let device =
		client.make_device_public("dev-1", None).await.expect("Publish should succeed.");

	assert_eq!(device.name, "thermostat-a");

	mock.assert_async().await;
}

#[tokio::test]
async fn customer_assignment_interpolates_both_identifiers() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/customer/cust-1/device/dev-1");
			then.status(200).header("content-type", "application/json").body(DEVICE_BODY);
		})
		.await;

	client
		.assign_device_to_customer("cust-1", "dev-1", None)
		.await
		.expect("Assignment should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn customer_unassignment_omits_the_customer_identifier() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/customer/device/dev-1");
			then.status(200);
		})
		.await;

	client
		.unassign_device_from_customer("dev-1", None)
		.await
		.expect("Unassignment should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn claim_posts_the_secret_to_the_claim_path() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/customer/device/thermostat-a/claim")
				.json_body(json!({"secretKey": "s3cr3t"}));
			then.status(200).header("content-type", "application/json").body(format!(
				r#"{{"device":{DEVICE_BODY},"response":"SUCCESS"}}"#,
			));
		})
		.await;
	let result = client
		.claim_device("thermostat-a", &ClaimRequest::new("s3cr3t"), None)
		.await
		.expect("Claim should succeed.");

	assert_eq!(result.response, ClaimResponse::Success);
	assert_eq!(result.device.name, "thermostat-a");

	mock.assert_async().await;
}

#[tokio::test]
async fn unclaim_deletes_the_claim_path() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/customer/device/thermostat-a/claim");
			then.status(200);
		})
		.await;

	client.unclaim_device("thermostat-a", None).await.expect("Unclaim should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn edge_assignment_round_trip_uses_the_edge_scope() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let assign = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/edge/edge-1/device/dev-1");
			then.status(200).header("content-type", "application/json").body(DEVICE_BODY);
		})
		.await;
	let unassign = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/edge/edge-1/device/dev-1");
			then.status(200);
		})
		.await;

	client
		.assign_device_to_edge("edge-1", "dev-1", None)
		.await
		.expect("Edge assignment should succeed.");
	client
		.unassign_device_from_edge("edge-1", "dev-1", None)
		.await
		.expect("Edge unassignment should succeed.");

	assign.assert_async().await;
	unassign.assert_async().await;
}

#[tokio::test]
async fn edge_device_listing_sends_an_empty_type_filter_when_omitted() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/edge/edge-1/devices")
				.query_param("pageSize", "10")
				.query_param("page", "0")
				.query_param("type", "");
			then.status(200).header("content-type", "application/json").body(PAGE_BODY);
		})
		.await;
	let page = client
		.edge_devices("edge-1", &PageLink::new(10, 0), None, None)
		.await
		.expect("Edge listing should succeed.");

	assert_eq!(page.data.len(), 1);

	mock.assert_async().await;
}

//! Tests for the API client against a local mock server.

use std::thread;

use tiny_http::{Header, Response, Server};

use super::{ApiClient, ApiError};

/// Start a one-shot server answering the next request with the given
/// status and body, and return a client pointed at it.
fn serve_once(status: u16, body: &'static str) -> ApiClient {
    let server = Server::http("127.0.0.1:0").expect("bind mock server");
    let addr = server.server_addr().to_ip().expect("tcp listen address");

    thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let header =
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(header);
            let _ = request.respond(response);
        }
    });

    ApiClient::with_url(format!("http://{}", addr))
}

const CAMPAIGNS_BODY: &str = r#"{
    "campaigns": [
        {
            "id": "c1",
            "name": "Spring Sale",
            "brand_id": "b1",
            "status": "active",
            "budget": 1000.0,
            "daily_budget": 50.0,
            "platforms": ["google", "meta"],
            "created_at": "2024-03-01T00:00:00Z"
        },
        {
            "id": "c2",
            "name": "Summer Push",
            "brand_id": "b2",
            "status": "paused",
            "budget": 500.0,
            "daily_budget": 25.0,
            "platforms": [],
            "created_at": "2024-05-10T00:00:00Z"
        }
    ],
    "total": 2
}"#;

#[test]
fn list_campaigns_decodes_the_envelope() {
    let client = serve_once(200, CAMPAIGNS_BODY);
    let list = client.list_campaigns().unwrap();

    assert_eq!(list.total, 2);
    assert_eq!(list.campaigns.len(), 2);
    assert_eq!(list.campaigns[0].id, "c1");
    assert_eq!(list.campaigns[1].name, "Summer Push");
}

#[test]
fn list_campaigns_maps_error_statuses() {
    let client = serve_once(500, "");
    match client.list_campaigns() {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.starts_with("HTTP 500"), "message was {message:?}");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn get_campaign_unwraps_the_envelope() {
    let client = serve_once(
        200,
        r#"{"campaign": {
            "id": "c1",
            "name": "Spring Sale",
            "brand_id": "b1",
            "status": "completed",
            "budget": 1000.0,
            "daily_budget": 50.0,
            "platforms": ["google"],
            "created_at": "2024-03-01T00:00:00Z"
        }}"#,
    );
    let campaign = client.get_campaign("c1").unwrap();
    assert_eq!(campaign.id, "c1");
}

#[test]
fn get_campaign_prefers_the_error_body_message() {
    let client = serve_once(404, r#"{"message": "Campaign not found"}"#);
    match client.get_campaign("missing") {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Campaign not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn get_campaign_falls_back_to_a_generic_message() {
    let client = serve_once(404, "<html>not json</html>");
    match client.get_campaign("missing") {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "HTTP 404: failed to fetch campaign");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn get_all_insights_decodes_the_flat_body() {
    let client = serve_once(
        200,
        r#"{
            "total_impressions": 500.0,
            "total_clicks": 50.0,
            "total_conversions": 5.0,
            "total_spend": 1000.0,
            "average_ctr": 10.0,
            "average_cpc": 20.0,
            "roi": 30.0
        }"#,
    );
    let insights = client.get_all_insights().unwrap();
    assert_eq!(insights.total_impressions, 500.0);
    assert_eq!(insights.roi, 30.0);
}

#[test]
fn insights_without_total_impressions_are_a_body_error() {
    let client = serve_once(200, r#"{"total_clicks": 50.0}"#);
    match client.get_all_insights() {
        Err(ApiError::Body(_)) => {}
        other => panic!("expected body error, got {other:?}"),
    }
}

#[test]
fn get_campaign_insights_unwraps_the_envelope() {
    let client = serve_once(
        200,
        r#"{"insights": {
            "campaign_id": "c1",
            "impressions": 100.0,
            "clicks": 0,
            "conversions": 0,
            "spend": 0,
            "ctr": 0,
            "cpc": 0,
            "conversion_rate": 0
        }}"#,
    );
    let insights = client.get_campaign_insights("c1").unwrap();
    assert_eq!(insights.impressions, Some(100.0));
    assert!(insights.has_data());
}

#[test]
fn connection_failures_are_network_errors() {
    // Nothing listens here; the connect fails at the transport level.
    let client = ApiClient::with_url("http://127.0.0.1:9");
    match client.list_campaigns() {
        Err(ApiError::Network(_)) => {}
        other => panic!("expected network error, got {other:?}"),
    }
}

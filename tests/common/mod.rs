//! Shared test helpers: canned-response HTTP servers standing in for
//! the campaign API.

use std::thread;

use tiny_http::{Header, Response, Server};

/// One canned route: exact URL path, status and JSON body.
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

/// Serve `request_count` requests against the route table, then shut
/// down. Unknown paths get a 404 with an empty JSON object.
pub fn start_mock_api(routes: Vec<Route>, request_count: usize) -> String {
    let server = Server::http("127.0.0.1:0").expect("bind mock server");
    let addr = server.server_addr().to_ip().expect("tcp listen address");

    thread::spawn(move || {
        for _ in 0..request_count {
            let Ok(request) = server.recv() else { break };
            let (status, body) = routes
                .iter()
                .find(|route| route.path == request.url())
                .map(|route| (route.status, route.body.clone()))
                .unwrap_or((404, "{}".to_string()));
            let _ = request.respond(json_response(status, body));
        }
    });

    format!("http://{}", addr)
}

/// Serve the given responses in order, one per request, regardless of
/// path. Lets a test script "fail once, then succeed" sequences.
pub fn start_scripted_api(responses: Vec<(u16, String)>) -> String {
    let server = Server::http("127.0.0.1:0").expect("bind mock server");
    let addr = server.server_addr().to_ip().expect("tcp listen address");

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok(request) = server.recv() else { break };
            let _ = request.respond(json_response(status, body));
        }
    });

    format!("http://{}", addr)
}

fn json_response(status: u16, body: String) -> Response<std::io::Cursor<Vec<u8>>> {
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
    Response::from_string(body)
        .with_status_code(status)
        .with_header(header)
}

use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

pub const TEST_CRON_SECRET: &str = "test-cron-secret";

/// Fresh state over a uniquely-named temp database, using the production schema.
pub fn make_state() -> AppState {
    let path = std::env::temp_dir().join(format!(
        "camboconnect_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("failed to initialize test db");

    AppState {
        db,
        config: Config {
            port: 0,
            db_path: String::new(),
            cron_secret: TEST_CRON_SECRET.to_string(),
        },
    }
}

pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn request_with_bearer(method: Method, uri: &str, secret: &str) -> Request {
    let mut req = request(method, uri);
    req.headers_mut()
        .insert("Authorization", format!("Bearer {secret}").parse().unwrap());
    req
}

pub fn body_json(resp: &mut Response) -> serde_json::Value {
    let mut buf = Vec::new();
    resp.body_mut().reader().read_to_end(&mut buf).unwrap();
    serde_json::from_slice(&buf).expect("response body was not valid JSON")
}

use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;
use tracing::error;

/// Convert a ServerError into the JSON error response the API promises.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => json_error_response(404, json!({ "error": "Not found" })),
        ServerError::BadRequest(msg) => json_error_response(400, json!({ "error": msg })),
        // The response body stays fixed; the reason only goes to the log.
        ServerError::Unauthorized(reason) => {
            error!("unauthorized request: {reason}");
            json_error_response(401, json!({ "error": "Unauthorized" }))
        }
        ServerError::DbError(msg) => {
            error!("request failed: {msg}");
            json_error_response(
                500,
                json!({ "error": "Internal server error", "details": msg }),
            )
        }
        ServerError::InternalError => json_error_response(
            500,
            json!({ "error": "Internal server error", "details": "unexpected failure" }),
        ),
    }
}

fn json_error_response(status: u16, body: serde_json::Value) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap()
}

//! Body rendering shared by success and error responses.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::error;

const JSON_INDENT: &[u8] = b"    ";

/// Serializes with a 4-space indent.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(512);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Wraps `json` as `callback(json);` when a non-empty callback is given.
pub fn wrap_callback(json: Vec<u8>, callback: Option<&str>) -> Vec<u8> {
    match callback.filter(|cb| !cb.is_empty()) {
        Some(cb) => {
            let mut wrapped = Vec::with_capacity(cb.len() + json.len() + 3);
            wrapped.extend_from_slice(cb.as_bytes());
            wrapped.push(b'(');
            wrapped.extend_from_slice(&json);
            wrapped.extend_from_slice(b");");
            wrapped
        }
        None => json,
    }
}

/// Builds a response with the JSON content type and the open CORS header.
pub fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    let mut response = (status, Body::from(body)).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// Pretty JSON, optionally wrapped for JSONP, with status 200.
pub fn render<T: Serialize>(value: &T, callback: Option<&str>) -> Response {
    match to_pretty_json(value) {
        Ok(json) => json_response(StatusCode::OK, wrap_callback(json, callback)),
        Err(e) => {
            error!(error = %e, "Failed to serialize response");
            json_response(StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
        }
    }
}

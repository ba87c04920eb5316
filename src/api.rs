#[cfg(feature = "ssr")]
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
#[cfg(feature = "ssr")]
use crate::db::Database;
#[cfg(feature = "ssr")]
use crate::error::ApiError;
#[cfg(feature = "ssr")]
use leptos::logging::log;
#[cfg(feature = "ssr")]
use serde_json::Value;

#[cfg(feature = "ssr")]
pub const LIVENESS_MESSAGE: &str = "Storefront API is running";

/// Mount the facade routes. The caller registers the [`Database`] as app data.
#[cfg(feature = "ssr")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(liveness)).service(
        web::scope("/api")
            .route("/test", web::post().to(create_test_record)) // POST /api/test
            .route("/test", web::get().to(list_test_records)), // GET /api/test
    );
}

#[cfg(feature = "ssr")]
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

#[cfg(feature = "ssr")]
pub async fn create_test_record(
    db: web::Data<Database>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let message = if is_json(&req) {
        message_from_body(&body)?
    } else {
        None
    };
    log!("[API] Creating test record (message supplied: {})", message.is_some());

    let record = db.create_record(message.as_deref()).await?;
    log!("[API] Created test record {}", record.id);
    Ok(HttpResponse::Created().json(record))
}

#[cfg(feature = "ssr")]
pub async fn list_test_records(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let records = db.list_records().await?;
    log!("[API] Returning {} test records", records.len());
    Ok(HttpResponse::Ok().json(records))
}

// Bodies sent with any other content type are ignored, as if absent
#[cfg(feature = "ssr")]
fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}

/// Pull `message` out of a JSON body.
///
/// Falsy values (`null`, `false`, `0`, `""`) and a missing field all yield
/// `None`, which the store replaces with the placeholder message. Truthy
/// values that are not strings are rejected, as are top-level JSON values
/// other than objects and arrays.
#[cfg(feature = "ssr")]
pub fn message_from_body(body: &[u8]) -> Result<Option<String>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        log!("[API] Rejecting malformed payload: {}", e);
        ApiError::MalformedPayload
    })?;

    // Strict JSON bodies: only objects and arrays are accepted at the top level
    if !(payload.is_object() || payload.is_array()) {
        log!("[API] Rejecting non-object payload");
        return Err(ApiError::MalformedPayload);
    }

    match payload.get("message") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ApiError::InvalidMessage),
    }
}

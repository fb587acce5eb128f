//! `tiny_http` server adapter
//!
//! Handles routing, form parsing, and response conversion for `tiny_http`.
//! Pages are served as HTML; the same routes under `/api` answer with the
//! JSON envelope instead.

use std::io::{Cursor, Read};
use std::sync::Arc;
use std::thread;

use log::{debug, info, warn};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{
    self, ApiError, ApiResponse, ChoiceForm, Context, QuestionForm, RedirectData, Reply, VoteForm,
};
use crate::render;
use crate::routes::Route;

/// Prefix selecting JSON responses
pub const API_PREFIX: &str = "/api";

/// Largest request body accepted, in bytes
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// How a reply is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// HTML pages and real redirects
    Html,
    /// JSON envelope; redirects are reported in the body
    Json,
}

/// Framework-independent response produced by [`dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Value of the `Content-Type` header
    pub content_type: &'static str,
    /// Value of the `Location` header, for redirects
    pub location: Option<String>,
    /// Response body
    pub body: String,
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve the poll pages on `address` until the process exits
///
/// `workers` threads pull requests from the same listener; each request is
/// handled independently.
pub fn serve(ctx: Context, address: &str, workers: usize) -> anyhow::Result<()> {
    let server = Server::http(address)
        .map_err(|e| anyhow::anyhow!("Failed to start server on {address}: {e}"))?;
    let server = Arc::new(server);
    let workers = workers.max(1);

    info!("Serving polls on http://{address}/ with {workers} worker(s)");

    let mut handles = Vec::with_capacity(workers);
    for n in 0..workers {
        let server = Arc::clone(&server);
        let ctx = ctx.clone();
        let handle = thread::Builder::new()
            .name(format!("polls-worker-{n}"))
            .spawn(move || worker_loop(&server, &ctx))?;
        handles.push(handle);
    }

    for handle in handles {
        if handle.join().is_err() {
            warn!("A worker thread panicked");
        }
    }

    Ok(())
}

fn worker_loop(server: &Server, ctx: &Context) {
    for mut request in server.incoming_requests() {
        let response = handle_request(ctx, &mut request);
        if let Err(e) = request.respond(to_tiny_response(response)) {
            warn!("Failed to send response: {e}");
        }
    }
}

fn handle_request(ctx: &Context, request: &mut Request) -> HttpResponse {
    let body = match read_body(request.as_reader()) {
        Ok(body) => body,
        Err(error) => {
            warn!("{} {}: {}", request.method(), request.url(), error.message);
            return error_response(Format::Html, &error);
        },
    };

    let method = request.method().clone();
    let url = request.url().to_string();
    dispatch(ctx, &method, &url, &body)
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Route a request to its handler and encode the reply
///
/// This is the main routing function that maps URL paths to handlers.
/// `url` may carry a query string, which is ignored.
pub fn dispatch(ctx: &Context, method: &Method, url: &str, body: &str) -> HttpResponse {
    let path = url.split('?').next().unwrap_or(url);

    let (format, page_path) = match path.strip_prefix(API_PREFIX) {
        Some("") => (Format::Json, "/"),
        Some(rest) if rest.starts_with('/') => (Format::Json, rest),
        _ => (Format::Html, path),
    };

    let Some(route) = Route::parse(page_path) else {
        let error = ApiError::not_found(format!("Page not found: {path}"));
        debug!("{method} {path} -> 404");
        return error_response(format, &error);
    };

    let result = match (route, method) {
        (Route::Index, Method::Get) => api::list_questions(ctx),
        (Route::Detail(id), Method::Get) => api::question_detail(ctx, id),
        (Route::Results(id), Method::Get) => api::question_results(ctx, id),
        (Route::Vote(id), Method::Post) => {
            read_form::<VoteForm>(body).and_then(|form| api::vote(ctx, id, &form))
        },
        (Route::Create, Method::Get) => api::create_question(ctx, None),
        (Route::Create, Method::Post) => read_form::<QuestionForm>(body)
            .and_then(|form| api::create_question(ctx, Some(&form))),
        (Route::CreateAnswer(id), Method::Get) => api::create_choice(ctx, id, None),
        (Route::CreateAnswer(id), Method::Post) => read_form::<ChoiceForm>(body)
            .and_then(|form| api::create_choice(ctx, id, Some(&form))),
        _ => Err(ApiError::method_not_allowed(format!("{method} is not allowed on {path}"))),
    };

    let response = match result {
        Ok(reply) => reply_response(format, reply),
        Err(e) => {
            if e.status_code() >= 500 {
                warn!("{method} {path} failed: {e}");
            }
            error_response(format, &e)
        },
    };

    debug!("{method} {path} -> {}", response.status);
    response
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read a request body of at most [`MAX_BODY_BYTES`]
fn read_body(reader: &mut dyn Read) -> Result<String, ApiError> {
    let limit = u64::try_from(MAX_BODY_BYTES).unwrap_or(u64::MAX);
    let mut body = String::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    if body.len() > MAX_BODY_BYTES {
        return Err(ApiError::bad_request(format!(
            "Request body exceeds {MAX_BODY_BYTES} bytes"
        )));
    }
    Ok(body)
}

/// Parse a url-encoded form body
///
/// A field sent more than once takes its last value.
fn read_form<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body).map_err(invalid_form)?;

    let mut fields: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match fields.iter_mut().find(|(name, _)| *name == key) {
            Some(field) => field.1 = value,
            None => fields.push((key, value)),
        }
    }

    let normalized = serde_urlencoded::to_string(&fields).map_err(invalid_form)?;
    serde_urlencoded::from_str(&normalized).map_err(invalid_form)
}

fn invalid_form(e: impl std::fmt::Display) -> ApiError {
    ApiError::bad_request(format!("Invalid form body: {e}"))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn reply_response(format: Format, reply: Reply) -> HttpResponse {
    match (format, reply) {
        (Format::Html, Reply::Render(view)) => html_response(render::html(&view), 200),
        (Format::Html, Reply::Redirect(location) | Reply::Created { location, .. }) => HttpResponse {
            status: 302,
            content_type: "text/html; charset=utf-8",
            location: Some(location),
            body: String::new(),
        },
        (Format::Json, Reply::Render(view)) => json_response(&ApiResponse::success(view), 200),
        (Format::Json, Reply::Redirect(redirect)) => json_response(
            &ApiResponse::success(RedirectData {
                redirect,
                created: None,
            }),
            200,
        ),
        (Format::Json, Reply::Created { location, id }) => json_response(
            &ApiResponse::success(RedirectData {
                redirect: location,
                created: Some(id),
            }),
            200,
        ),
    }
}

fn error_response(format: Format, error: &ApiError) -> HttpResponse {
    match format {
        Format::Html => html_response(render::error_page(error), error.status_code()),
        Format::Json => {
            let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
            json_response(&response, error.status_code())
        },
    }
}

fn html_response(body: String, status: u16) -> HttpResponse {
    HttpResponse {
        status,
        content_type: "text/html; charset=utf-8",
        location: None,
        body,
    }
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> HttpResponse {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    HttpResponse {
        status,
        content_type: "application/json",
        location: None,
        body: json,
    }
}

fn to_tiny_response(response: HttpResponse) -> Response<Cursor<Vec<u8>>> {
    let mut tiny = Response::from_data(response.body.into_bytes())
        .with_status_code(StatusCode(response.status));

    if let Ok(header) = Header::from_bytes("Content-Type", response.content_type) {
        tiny.add_header(header);
    }
    if let Some(location) = response.location
        && let Ok(header) = Header::from_bytes("Location", location.as_str())
    {
        tiny.add_header(header);
    }

    tiny
}

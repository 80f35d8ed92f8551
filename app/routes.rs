use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use kaloriku::WizardState;

use crate::handlers;
use crate::state::AppContext;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"text/html; charset=utf-8").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn redirect(location: &str) -> Response<Cursor<Vec<u8>>> {
    Response::new(
        StatusCode(303),
        vec![
            Header::from_bytes(b"Location", location.as_bytes()).unwrap(),
            Header::from_bytes(b"Content-Length", b"0").unwrap(),
        ],
        Cursor::new(Vec::new()),
        Some(0),
        None,
    )
}

pub fn bytes_response(content_type: &str, bytes: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", content_type.as_bytes()).unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![Header::from_bytes(b"Content-Type", b"text/plain").unwrap()],
        Cursor::new(body),
        Some(len),
        None,
    )
}

/// The page belonging to a wizard state. Handlers redirect here whenever the
/// browser asks for a page that doesn't match the session's actual state, so
/// the URL can never desynchronize the wizard.
pub fn state_path(state: WizardState) -> &'static str {
    match state {
        WizardState::Upload => "/upload",
        WizardState::Preview => "/preview",
        WizardState::Loading => "/loading",
        WizardState::Result => "/result",
    }
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler.
///
/// Handlers receive a `&mut Request` where they need the body (the upload
/// form); the dispatcher retains ownership and responds at the end.
pub fn dispatch(mut request: Request, ctx: AppContext) {
    let method = request.method().clone();
    let url = request.url().to_owned();
    let path = url.split('?').next().unwrap_or("").to_owned();

    let response = match (method, path.as_str()) {
        // ── Root: land on whatever step the session is in ────────────────
        (Method::Get, "/") => {
            let st = ctx.state.lock().unwrap();
            redirect(state_path(st.session.state()))
        }

        // ── Upload ───────────────────────────────────────────────────────
        (Method::Get, "/upload") => handlers::upload::handle_get(&ctx),
        (Method::Post, "/upload") => handlers::upload::handle_post(&mut request, &ctx),

        // ── Preview ──────────────────────────────────────────────────────
        (Method::Get, "/preview") => handlers::preview::handle_get(&ctx),
        (Method::Post, "/confirm") => handlers::preview::handle_confirm(&ctx),
        (Method::Get, "/photo") => handlers::preview::handle_photo(&ctx),

        // ── Loading ──────────────────────────────────────────────────────
        (Method::Get, "/loading") => handlers::loading::handle_get(&ctx),
        (Method::Get, "/loading/done") => handlers::loading::handle_done(&ctx),

        // ── Result ───────────────────────────────────────────────────────
        (Method::Get, "/result") => handlers::result::handle_get(&ctx),
        (Method::Post, "/reset") => handlers::result::handle_reset(&ctx),

        // ── 404 ──────────────────────────────────────────────────────────
        _ => not_found(),
    };

    let _ = request.respond(response);
}

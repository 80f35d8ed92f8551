use std::io::Cursor;
use tiny_http::Response;

use kaloriku::vision::content_type_of;
use kaloriku::WizardState;

use crate::handlers::upload::{html_escape, render_flash_html};
use crate::render::render_page;
use crate::routes::{bytes_response, html_response, not_found, redirect, state_path};
use crate::state::{AppContext, FlashMessage};

// ---------------------------------------------------------------------------
// GET /preview
// ---------------------------------------------------------------------------

pub fn handle_get(ctx: &AppContext) -> Response<Cursor<Vec<u8>>> {
    let mut st = ctx.state.lock().unwrap();
    if st.session.state() != WizardState::Preview {
        return redirect(state_path(st.session.state()));
    }
    let flash = st.take_flash();
    let (filename, size) = match st.session.upload() {
        Some(u) => (u.filename.clone(), u.size_kb_display()),
        None => (String::new(), String::new()),
    };
    drop(st);

    html_response(build_preview_page(&filename, &size, flash.as_ref()))
}

// ---------------------------------------------------------------------------
// POST /confirm — the "Prediksi" action
// ---------------------------------------------------------------------------

pub fn handle_confirm(ctx: &AppContext) -> Response<Cursor<Vec<u8>>> {
    let mut st = ctx.state.lock().unwrap();
    match st.session.confirm() {
        Ok(()) => redirect("/loading"),
        Err(_) => redirect(state_path(st.session.state())),
    }
}

// ---------------------------------------------------------------------------
// GET /photo — the uploaded bytes, for the preview and result <img> tags
// ---------------------------------------------------------------------------

pub fn handle_photo(ctx: &AppContext) -> Response<Cursor<Vec<u8>>> {
    let st = ctx.state.lock().unwrap();
    match st.session.upload() {
        Some(u) => bytes_response(content_type_of(u), u.bytes.clone()),
        None => not_found(),
    }
}

// ---------------------------------------------------------------------------
// Page builder
// ---------------------------------------------------------------------------

const PREVIEW_PANEL: &str = r#"{{FLASH_PREVIEW}}
<div class="preview-image"><img src="/photo" alt="{{FILE_NAME}}"></div>
<div class="file-bar">
  <div class="file-meta">
    <div class="file-name">{{FILE_NAME}}</div>
    <div class="file-size">{{FILE_SIZE}}</div>
  </div>
  <form method="POST" action="/confirm" class="file-action">
    <button type="submit" class="btn btn-primary">Prediksi</button>
  </form>
</div>"#;

fn build_preview_page(filename: &str, size: &str, flash: Option<&FlashMessage>) -> String {
    let content = PREVIEW_PANEL
        .replace("{{FLASH_PREVIEW}}", &render_flash_html(flash))
        .replace("{{FILE_NAME}}", &html_escape(filename))
        .replace("{{FILE_SIZE}}", &html_escape(size));

    render_page(WizardState::Preview, "", &content)
}

use std::io::Cursor;
use tiny_http::Response;

use kaloriku::{Error, WizardState};

use crate::render::render_page;
use crate::routes::{html_response, redirect, state_path};
use crate::state::{AppContext, FlashMessage};

// ---------------------------------------------------------------------------
// GET /loading
// ---------------------------------------------------------------------------

const LOADING_PANEL: &str = r#"<div class="loading-wrap">
  <div class="spinner"></div>
  <p class="loading-text">Menganalisis gambar makanan...</p>
</div>"#;

/// The page itself immediately navigates to `/loading/done`; the spinner
/// stays on screen while that request sits in the server-side pause.
pub fn handle_get(ctx: &AppContext) -> Response<Cursor<Vec<u8>>> {
    let st = ctx.state.lock().unwrap();
    if st.session.state() != WizardState::Loading {
        return redirect(state_path(st.session.state()));
    }
    drop(st);

    let head = r#"<meta http-equiv="refresh" content="0;url=/loading/done">"#;
    html_response(render_page(WizardState::Loading, head, LOADING_PANEL))
}

// ---------------------------------------------------------------------------
// GET /loading/done — pause, analyze, advance
// ---------------------------------------------------------------------------

pub fn handle_done(ctx: &AppContext) -> Response<Cursor<Vec<u8>>> {
    // Take what analysis needs, then release the lock for the pause and the
    // forward pass so `/photo` stays responsive meanwhile.
    let (photo, pause) = {
        let st = ctx.state.lock().unwrap();
        if st.session.state() != WizardState::Loading {
            return redirect(state_path(st.session.state()));
        }
        (st.session.photo().cloned(), st.session.remaining_pause())
    };

    if !pause.is_zero() {
        std::thread::sleep(pause);
    }

    let outcome = photo
        .ok_or_else(|| Error::DataIntegrity("session is in Loading without a photo".to_owned()))
        .and_then(|p| ctx.estimator.analyze(&p));

    let mut st = ctx.state.lock().unwrap();
    match outcome {
        Ok(estimate) => {
            if st.session.complete(estimate).is_err() {
                return redirect(state_path(st.session.state()));
            }
            redirect("/result")
        }
        // UnknownLabel (or any other request-time failure) must never show a
        // partial result: generic message, clean slate, back to Upload.
        Err(_) => {
            st.session.abort();
            st.flash = Some(FlashMessage::error(
                "Terjadi kesalahan saat menganalisis gambar. Silakan coba lagi.",
            ));
            redirect("/upload")
        }
    }
}

use std::io::Cursor;
use tiny_http::Response;

use kaloriku::{Estimate, WizardState};

use crate::handlers::upload::html_escape;
use crate::render::render_page;
use crate::routes::{html_response, redirect, state_path};
use crate::state::AppContext;

// ---------------------------------------------------------------------------
// GET /result
// ---------------------------------------------------------------------------

pub fn handle_get(ctx: &AppContext) -> Response<Cursor<Vec<u8>>> {
    let st = ctx.state.lock().unwrap();
    if st.session.state() != WizardState::Result {
        return redirect(state_path(st.session.state()));
    }
    // Computed once on entry into Result; refreshes re-render the cache.
    let estimate = st.session.estimate().cloned();
    drop(st);

    match estimate {
        Some(estimate) => html_response(build_result_page(&estimate)),
        None => redirect("/"),
    }
}

// ---------------------------------------------------------------------------
// POST /reset — "Bersihkan & Analisis Lagi"
// ---------------------------------------------------------------------------

pub fn handle_reset(ctx: &AppContext) -> Response<Cursor<Vec<u8>>> {
    let mut st = ctx.state.lock().unwrap();
    match st.session.reset() {
        Ok(()) => redirect("/upload"),
        Err(_) => redirect(state_path(st.session.state())),
    }
}

// ---------------------------------------------------------------------------
// Page builder
// ---------------------------------------------------------------------------

const RESULT_PANEL: &str = r#"<div class="result-grid">
  <div class="result-photo"><img src="/photo" alt="{{HERO}}"></div>
  <div class="result-body">
    <h3>Hasil Analisis</h3>
    <div class="prediction-hero">{{HERO}}</div>
    <p class="kcal-line">Estimasi Kalori: <strong>{{KCAL_MIN}} &ndash; {{KCAL_MAX}} kkal / 100g</strong></p>
    <p class="conf-line">Confidence: {{CONF_PCT}}%</p>
    <div class="bar-wrap"><div class="bar-fill" style="width:{{BAR_PCT}}%"></div></div>
    <form method="POST" action="/reset" class="mt">
      <button type="submit" class="btn btn-primary">Bersihkan &amp; Analisis Lagi</button>
    </form>
  </div>
</div>"#;

fn build_result_page(estimate: &Estimate) -> String {
    let pct = (estimate.confidence * 100.0).clamp(0.0, 100.0);
    let content = RESULT_PANEL
        .replace("{{HERO}}", &html_escape(&estimate.display_name))
        .replace("{{KCAL_MIN}}", &estimate.min_kcal.to_string())
        .replace("{{KCAL_MAX}}", &estimate.max_kcal.to_string())
        .replace("{{CONF_PCT}}", &format!("{:.2}", pct))
        .replace("{{BAR_PCT}}", &format!("{:.0}", pct));

    render_page(WizardState::Result, "", &content)
}

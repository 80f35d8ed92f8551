use kaloriku::WizardState;

/// The app uses a single HTML template with placeholder tokens like
/// `{{TOKEN}}`. Handlers build the HTML fragment for the active wizard step;
/// this module fills in the step indicator, any extra head markup (the
/// Loading page's refresh tag), and the fragment itself, then blanks
/// whatever tokens remain so a missed token never leaks raw `{{TOKEN}}` text
/// to the browser.
const TEMPLATE: &str = include_str!("assets/app.html");

/// Renders the full page for one wizard step.
///
/// # Arguments
/// - `step`       — which wizard step is active (drives the step indicator)
/// - `head_extra` — markup injected into `<head>`; empty for most pages
/// - `content`    — the step panel fragment built by the handler
pub fn render_page(step: WizardState, head_extra: &str, content: &str) -> String {
    let mut html = TEMPLATE.to_owned();

    let active = step_index(step);
    for (i, token) in ["{{STEP1_CLASS}}", "{{STEP2_CLASS}}", "{{STEP3_CLASS}}", "{{STEP4_CLASS}}"]
        .iter()
        .enumerate()
    {
        let class = if i < active {
            "done"
        } else if i == active {
            "active"
        } else {
            ""
        };
        html = html.replace(token, class);
    }

    html = html.replace("{{HEAD_EXTRA}}", head_extra);
    html = html.replace("{{CONTENT}}", content);

    blank_remaining(html)
}

fn step_index(step: WizardState) -> usize {
    match step {
        WizardState::Upload => 0,
        WizardState::Preview => 1,
        WizardState::Loading => 2,
        WizardState::Result => 3,
    }
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't substituted with an empty
/// string.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}

use std::io::{Cursor, Read};
use tiny_http::{Request, Response};

use kaloriku::{decode_upload, UploadedImage, WizardState};

use crate::render::render_page;
use crate::routes::{html_response, redirect, state_path};
use crate::state::{AppContext, FlashKind, FlashMessage};
use crate::util::multipart::{extract_boundary, extract_file};

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10 MB

// ---------------------------------------------------------------------------
// GET /upload
// ---------------------------------------------------------------------------

pub fn handle_get(ctx: &AppContext) -> Response<Cursor<Vec<u8>>> {
    let mut st = ctx.state.lock().unwrap();
    if st.session.state() != WizardState::Upload {
        return redirect(state_path(st.session.state()));
    }
    let flash = st.take_flash();
    drop(st);

    html_response(build_upload_page(flash.as_ref(), None))
}

// ---------------------------------------------------------------------------
// POST /upload
// ---------------------------------------------------------------------------

pub fn handle_post(request: &mut Request, ctx: &AppContext) -> Response<Cursor<Vec<u8>>> {
    {
        let st = ctx.state.lock().unwrap();
        if st.session.state() != WizardState::Upload {
            return redirect(state_path(st.session.state()));
        }
    }

    let content_type = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    let Some(boundary) = extract_boundary(&content_type) else {
        return show_error("Permintaan upload tidak valid. Silakan coba lagi.");
    };

    let mut body: Vec<u8> = Vec::new();
    let _ = request.as_reader().read_to_end(&mut body);

    if body.len() > MAX_UPLOAD_BYTES {
        return show_error("Ukuran file melebihi batas 10 MB.");
    }

    let Some((filename, bytes)) = extract_file(&body, &boundary) else {
        return show_error("Tidak ada file yang diupload.");
    };

    let upload = UploadedImage::new(filename, bytes);
    let photo = match decode_upload(&upload) {
        Ok(photo) => photo,
        Err(_) => {
            return show_error(
                "File tidak dapat diproses sebagai gambar. \
                 Pastikan file berformat JPG atau PNG dan tidak rusak.",
            )
        }
    };

    let mut st = ctx.state.lock().unwrap();
    if st.session.accept_upload(upload, photo).is_err() {
        return redirect(state_path(st.session.state()));
    }
    st.flash = Some(FlashMessage::success("Foto berhasil divalidasi."));
    drop(st);

    redirect("/preview")
}

// ---------------------------------------------------------------------------
// Page builder
// ---------------------------------------------------------------------------

const UPLOAD_PANEL: &str = r#"{{FLASH_UPLOAD}}
<form method="POST" action="/upload" enctype="multipart/form-data">
  <label class="dropzone" for="photo_file">
    <strong>Silahkan Upload Gambar Kamu Di Sini!</strong>
    <span class="hint">Format yang didukung: JPG, JPEG, PNG</span>
    <input type="file" id="photo_file" name="photo_file" accept="image/png,image/jpeg">
  </label>
  <button type="submit" class="btn btn-primary">Upload</button>
</form>
{{UPLOAD_ERROR}}
<script>
document.getElementById('photo_file').addEventListener('change', function() {
  if (this.files.length > 0) { this.form.submit(); }
});
</script>"#;

fn show_error(msg: &str) -> Response<Cursor<Vec<u8>>> {
    html_response(build_upload_page(None, Some(msg)))
}

fn build_upload_page(flash: Option<&FlashMessage>, error: Option<&str>) -> String {
    let flash_html = render_flash_html(flash);
    let error_html = error
        .map(|e| format!(r#"<div class="flash flash-error">{}</div>"#, html_escape(e)))
        .unwrap_or_default();

    let content = UPLOAD_PANEL
        .replace("{{FLASH_UPLOAD}}", &flash_html)
        .replace("{{UPLOAD_ERROR}}", &error_html);

    render_page(WizardState::Upload, "", &content)
}

// ---------------------------------------------------------------------------
// Shared helpers (also used by other handlers)
// ---------------------------------------------------------------------------

pub fn render_flash_html(flash: Option<&FlashMessage>) -> String {
    match flash {
        None => String::new(),
        Some(f) => {
            let cls = match f.kind {
                FlashKind::Success => "flash-success",
                FlashKind::Error => "flash-error",
            };
            format!(r#"<div class="flash {}">{}</div>"#, cls, html_escape(&f.text))
        }
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

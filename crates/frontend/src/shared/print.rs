//! Printable documents: an HTML page opened in a new window and handed to the
//! browser's print dialog, where it can be saved as PDF with any script the
//! browser can render.

use crate::shared::error::AppError;
use gloo_timers::callback::Timeout;

/// Delay before `print()` so the new window has laid out its content
const PRINT_DELAY_MS: u32 = 250;

/// Escape text for use in element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Complete UTF-8 HTML page. `title` becomes the default "Save as PDF" name.
pub fn html_page(title: &str, css: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>{}</body></html>",
        escape_html(title),
        css,
        body
    )
}

/// Open `html` in a new window and start printing it
pub fn open_print_window(html: &str) -> Result<(), AppError> {
    let fail = |what: &str, e: wasm_bindgen::JsValue| AppError::Render(format!("{}: {:?}", what, e));

    let window = web_sys::window().ok_or_else(|| AppError::Render("No window object".into()))?;
    let print_window = window
        .open_with_url_and_target("about:blank", "_blank")
        .map_err(|e| fail("Failed to open print window", e))?
        .ok_or_else(|| AppError::Render("Print window was blocked".into()))?;
    let root = print_window
        .document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| AppError::Render("Print window has no document".into()))?;

    root.set_inner_html(html);
    let _ = print_window.focus();

    Timeout::new(PRINT_DELAY_MS, move || {
        if let Err(e) = print_window.print() {
            log::error!("Print failed: {:?}", e);
        }
    })
    .forget();
    Ok(())
}

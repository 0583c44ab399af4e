use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard isn't available here")]
    Unavailable,
    #[error("clipboard write was rejected")]
    Rejected,
    #[error("clipboard write failed: {0}")]
    Host(String),
}

/// Writes text to the shared system clipboard. Last write wins.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies through a throwaway `<textarea>` and `document.execCommand("copy")`.
///
/// Synchronous, so success or failure is known before the click handler returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomClipboard;

#[cfg(feature = "hydrate")]
impl ClipboardWriter for DomClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        use leptos::prelude::document;
        use wasm_bindgen::JsCast;
        use web_sys::{HtmlDocument, HtmlTextAreaElement};

        let host = |e: wasm_bindgen::JsValue| ClipboardError::Host(format!("{e:?}"));

        let document = document()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| ClipboardError::Unavailable)?;
        let body = document.body().ok_or(ClipboardError::Unavailable)?;
        let area = document
            .create_element("textarea")
            .map_err(host)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ClipboardError::Unavailable)?;
        area.set_value(text);
        area.set_read_only(true);
        let style = area.style();
        style.set_property("position", "fixed").map_err(host)?;
        style.set_property("left", "-9999px").map_err(host)?;

        body.append_child(&area).map_err(host)?;
        area.select();
        let copied = document.exec_command("copy");
        // the textarea goes away whether or not the copy worked
        if let Err(e) = body.remove_child(&area) {
            log::warn!("Couldn't remove copy buffer: {e:?}");
        }

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::Rejected),
            Err(e) => Err(host(e)),
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl ClipboardWriter for DomClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

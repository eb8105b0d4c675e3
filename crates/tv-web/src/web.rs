//! Browser implementation of [`PageContext`] and the page entrypoint.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, prelude::*};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Headers, Request, RequestInit, Response};

use crate::{
    config::ViewerConfig, context::{HttpReply, PageContext, waits_for_dom}, error::{LoadError, PageError}, logging, render::{RenderOp, TICKET_CLASS, TicketBlock}, storage::{BrowserStorage, StorageType}, viewer::TicketViewer
};

/// The live page: `window.sessionStorage`, `window.location`, `fetch` and
/// `document`.
pub struct BrowserPage {
    session: BrowserStorage,
}

impl BrowserPage {
    pub fn new() -> Self {
        Self {
            session: BrowserStorage::new(StorageType::Session),
        }
    }
}

impl Default for BrowserPage {
    fn default() -> Self {
        Self::new()
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}

fn network(value: JsValue) -> LoadError {
    LoadError::Network(js_message(&value))
}

fn dom(value: JsValue) -> PageError {
    PageError::Dom(js_message(&value))
}

fn document() -> Result<Document, PageError> {
    web_sys::window().and_then(|w| w.document()).ok_or(PageError::NoWindow)
}

fn text_paragraph(document: &Document, label: Option<&str>, text: &str) -> Result<Element, PageError> {
    let p = document.create_element("p").map_err(dom)?;
    if let Some(label) = label {
        let strong = document.create_element("strong").map_err(dom)?;
        strong.set_text_content(Some(label));
        p.append_child(&strong).map_err(dom)?;
        let value = document.create_text_node(&format!(" {}", text));
        p.append_child(&value).map_err(dom)?;
    } else {
        p.set_text_content(Some(text));
    }
    Ok(p)
}

fn ticket_element(document: &Document, block: &TicketBlock) -> Result<Element, PageError> {
    let div = document.create_element("div").map_err(dom)?;
    div.class_list().add_1(TICKET_CLASS).map_err(dom)?;
    for field in &block.fields {
        let line = text_paragraph(document, Some(&field.label), &field.value)?;
        div.append_child(&line).map_err(dom)?;
    }
    Ok(div)
}

#[async_trait(?Send)]
impl PageContext for BrowserPage {
    fn session_value(&self, key: &str) -> Option<String> {
        self.session.get(key)
    }

    fn redirect(&self, target: &str) -> Result<(), PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        window.location().set_href(target).map_err(|e| PageError::Navigation {
            target: target.to_string(),
            message: js_message(&e),
        })
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, LoadError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;

        let headers = Headers::new().map_err(network)?;
        headers.set("Content-Type", "application/json").map_err(network)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &init).map_err(network)?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?
            .dyn_into()
            .map_err(network)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(network)?).await.map_err(network)?;

        Ok(HttpReply {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }

    fn apply(&self, container_id: &str, ops: &[RenderOp]) -> Result<(), PageError> {
        let document = document()?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| PageError::MissingContainer(container_id.to_string()))?;

        for op in ops {
            match op {
                RenderOp::Clear => container.set_text_content(None),
                RenderOp::AppendMessage(text) => {
                    let message = text_paragraph(&document, None, text)?;
                    container.append_child(&message).map_err(dom)?;
                }
                RenderOp::AppendTicket(block) => {
                    let ticket = ticket_element(&document, block)?;
                    container.append_child(&ticket).map_err(dom)?;
                }
            }
        }
        Ok(())
    }
}

/// Run the viewer with the default configuration once the DOM is ready.
pub fn start() {
    start_with(ViewerConfig::default());
}

/// Run the viewer once the DOM is ready.
///
/// If the document has already been parsed the viewer starts immediately.
pub fn start_with(config: ViewerConfig) {
    tracing::debug!(log_level = %logging::get_log_level(), "ticket viewer starting");

    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            tracing::error!(error = %e, "ticket viewer cannot start");
            return;
        }
    };

    if !waits_for_dom(&document.ready_state()) {
        spawn_viewer(config);
        return;
    }

    let on_ready = Closure::once_into_js(move || spawn_viewer(config));
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        tracing::error!(error = %js_message(&e), "could not register DOMContentLoaded listener");
    }
}

fn spawn_viewer(config: ViewerConfig) {
    wasm_bindgen_futures::spawn_local(async move {
        let page = BrowserPage::new();
        TicketViewer::new(config).run(&page).await;
    });
}

/// Change the console log level from devtools, e.g.
/// `setTicketViewerLogLevel("debug")`. Returns false for unknown levels.
#[wasm_bindgen(js_name = setTicketViewerLogLevel)]
pub fn set_ticket_viewer_log_level(level: &str) -> bool {
    match logging::parse_level(level) {
        Some(level) => {
            logging::set_log_level(level);
            true
        }
        None => false,
    }
}

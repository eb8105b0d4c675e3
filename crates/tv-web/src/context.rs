//! Page capabilities used by the viewer.
//!
//! The viewer never touches `window` directly; everything it needs from the
//! hosting page (session storage, navigation, the network and the DOM sink)
//! comes through [`PageContext`]. The browser implementation lives in
//! [`crate::web`]; tests provide their own.

use async_trait::async_trait;

use crate::{
    error::{LoadError, PageError}, render::RenderOp
};

/// Raw HTTP response as seen by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Whether a document in `ready_state` still has to fire
/// `DOMContentLoaded` before the viewer may run.
///
/// `interactive` and `complete` documents are already parsed.
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Everything the viewer needs from the hosting page.
///
/// Futures are not `Send`: browser handles live on the single page thread.
#[async_trait(?Send)]
pub trait PageContext {
    /// Read a value from session-scoped storage.
    fn session_value(&self, key: &str) -> Option<String>;

    /// Navigate the page to `target`.
    fn redirect(&self, target: &str) -> Result<(), PageError>;

    /// POST a JSON body and wait for the full response.
    ///
    /// Only transport failures are errors; any HTTP status is a reply.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, LoadError>;

    /// Apply render operations, in order, to the element with `container_id`.
    fn apply(&self, container_id: &str, ops: &[RenderOp]) -> Result<(), PageError>;
}

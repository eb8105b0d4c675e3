//! Test utilities for tv-web tests.
//!
//! [`FakePage`] records every interaction the viewer has with the page and
//! keeps the container as an HTML string.

use std::{cell::RefCell, collections::HashMap};

use async_trait::async_trait;
use tv_web::{
    HttpReply, LoadError, PageContext, PageError, RenderOp, render::apply_to_html
};

pub const LOADING_HTML: &str = "<p>Ładowanie mandatów...</p>";

/// Canned network behavior for [`FakePage`].
#[derive(Clone)]
pub enum Network {
    Reply(HttpReply),
    Fail(String),
}

pub struct FakePage {
    pub session: HashMap<String, String>,
    pub network: Network,
    /// `None` when the page has no container element.
    pub container: RefCell<Option<String>>,
    pub redirects: RefCell<Vec<String>>,
    pub requests: RefCell<Vec<(String, serde_json::Value)>>,
    /// Container HTML after each `apply` call.
    pub snapshots: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn new(network: Network) -> Self {
        Self {
            session: HashMap::new(),
            network,
            container: RefCell::new(Some(LOADING_HTML.to_string())),
            redirects: RefCell::new(Vec::new()),
            requests: RefCell::new(Vec::new()),
            snapshots: RefCell::new(Vec::new()),
        }
    }

    /// Page with `pesel` stored and `body` returned with status 200.
    pub fn with_pesel(pesel: &str, body: impl Into<String>) -> Self {
        let mut page = Self::new(Network::Reply(HttpReply::ok(body)));
        page.session.insert("pesel".to_string(), pesel.to_string());
        page
    }

    pub fn without_container(mut self) -> Self {
        self.container = RefCell::new(None);
        self
    }

    pub fn html(&self) -> String {
        self.container.borrow().clone().unwrap_or_default()
    }

    pub fn ticket_blocks(&self) -> usize {
        self.html().matches("<div class=\"ticket\">").count()
    }
}

#[async_trait(?Send)]
impl PageContext for FakePage {
    fn session_value(&self, key: &str) -> Option<String> {
        self.session.get(key).cloned()
    }

    fn redirect(&self, target: &str) -> Result<(), PageError> {
        self.redirects.borrow_mut().push(target.to_string());
        Ok(())
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, LoadError> {
        let json: serde_json::Value = serde_json::from_str(&body).map_err(|e| LoadError::Network(e.to_string()))?;
        self.requests.borrow_mut().push((url.to_string(), json));
        match &self.network {
            Network::Reply(reply) => Ok(reply.clone()),
            Network::Fail(message) => Err(LoadError::Network(message.clone())),
        }
    }

    fn apply(&self, container_id: &str, ops: &[RenderOp]) -> Result<(), PageError> {
        let mut container = self.container.borrow_mut();
        let html = container
            .as_mut()
            .ok_or_else(|| PageError::MissingContainer(container_id.to_string()))?;
        apply_to_html(html, ops);
        self.snapshots.borrow_mut().push(html.clone());
        Ok(())
    }
}

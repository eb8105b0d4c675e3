//! Citizen ticket page.
//!
//! Reads the citizen identifier from session storage, asks `/api` for the
//! tickets issued to it and renders them into `#tickets-container`. Browser
//! access sits behind [`context::PageContext`]; the `web` feature provides
//! the real implementation and the WASM entrypoint.

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod render;
pub mod storage;
pub mod viewer;

#[cfg(feature = "web")]
pub mod web;

pub use config::{Labels, ViewerConfig};
pub use context::{HttpReply, PageContext};
pub use error::{FailureKind, LoadError, PageError};
pub use render::{LoadOutcome, RenderOp};
pub use viewer::{TicketViewer, ViewOutcome};

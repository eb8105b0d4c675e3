//! Shared type definitions for the ticket viewer
//!
//! Lightweight payload types exchanged with the `/api` endpoint. Nothing in
//! here touches the browser, so the crate builds for both native and WASM
//! targets.

pub mod api;
pub mod ticket;

pub use api::{ApiAction, TicketsRequest};
pub use ticket::{FineAmount, ParseError, Ticket, parse_tickets};

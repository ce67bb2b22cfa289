//! UI components and the in-process host they render into.
//!
//! # Structure
//!
//! - [`markup`]: Typed markup tree and HTML serialization
//! - [`form`]: Form data snapshots and submit events
//! - [`host`]: Mounted document that dispatches events
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Chat form and its fetcher capability

pub mod chat;
pub mod components;
pub mod form;
pub mod host;
pub mod markup;

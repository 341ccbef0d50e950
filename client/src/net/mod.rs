//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the server's REST endpoints; it is the browser's Auth Query
//! Service.

pub mod api;

//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence so route handlers can stay focused on
//! request translation and access enforcement.

pub mod directory;
pub mod session;

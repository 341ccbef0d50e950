//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces shared by several pages and read the session
//! signal passed in by the page.

pub mod profile_card;
pub mod user_table;

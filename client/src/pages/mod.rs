//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route guard and reads the session signal from context.
//! Public pages (`home`, `login`) install no guard.

pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod organizer;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Path-to-page mapping is declared in `app`.

pub mod editor;
pub mod error;
pub mod home;
pub mod login;
pub mod signup;
pub mod yjstest;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. Access control is applied around pages by `RouteGate`.

pub mod forgot_password;
pub mod home;
pub mod login;
pub mod register;
pub mod section;
pub mod settings;
pub mod user_profile;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns identity and is mutated only through its named operations;
//! `ui` holds presentation flags; `storage` is the durable slot both persist to.

pub mod session;
pub mod storage;
pub mod ui;

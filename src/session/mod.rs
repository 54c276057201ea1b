//! Session-oriented page controller.

pub mod page_session;

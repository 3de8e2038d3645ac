//! State objects behind the page's interactive widgets.
//!
//! Each type owns the state of one widget and exposes the events the page
//! forwards to it. Drawing is left to the caller.

pub mod counter;
pub mod faq;
pub mod navigation;
pub mod reveal;
pub mod scroll;

//! HTTP surface for the recruitment form service: the upload relay, the
//! application submission endpoint, the form and confirmation views, and
//! all process wiring.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;

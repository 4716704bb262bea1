//! Database layer for the recruitment form service.
//!
//! One repository, one table: applications are inserted as a single atomic
//! row and never updated by this service.

pub mod db;

pub use db::application::ApplicationRepository;

pub mod application;
pub mod health;
pub mod pages;
pub mod upload;

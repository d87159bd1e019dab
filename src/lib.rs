pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod practice;
pub mod provider;
pub mod router;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::GuitarApp;

//! HTTP API handlers

pub mod estimate;
pub mod health;
pub mod mix;
pub mod regions;
pub mod ui;

pub use estimate::estimate;
pub use health::{health_check, health_routes};
pub use mix::generation_mix;
pub use regions::list_regions;
pub use ui::{serve_app_js, serve_index};

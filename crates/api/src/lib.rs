//! `stitchkart-api` — HTTP surface for the checkout pipeline.

pub mod app;

pub use app::build_app;

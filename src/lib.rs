pub mod api;
pub mod config;
pub mod error;
pub mod frequency;
pub mod key;
pub mod language;
pub mod optimizer;
pub mod scorer;
// cmd and reports are binary modules (declared in main.rs).

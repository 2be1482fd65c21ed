//! Random.org generator nodes.
//!
//! ## Structure
//!
//! - `description` - Node descriptions and parameter keys
//! - `use_cases/` - Per-item pipelines for the range and single-value nodes
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod description;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use description::NodeKind;

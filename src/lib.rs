//! Folio - a portfolio project gallery built around a paged card carousel.
//!
//! ## Modules
//!
//! - `carousel` - Carousel state machine, drag tracking, spring, gpui view
//! - `config` - Carousel configuration and persisted gallery settings
//! - `gallery` - The projects section view hosting the carousel
//! - `projects` - Project records and the mock project list
//! - `render` - Controls and card rendering helpers
//! - `perf` - Profiling instrumentation
//! - `constants` - Shared layout and timing values

pub mod carousel;
pub mod config;
pub mod constants;
pub mod gallery;
pub mod perf;
pub mod projects;
pub mod render;

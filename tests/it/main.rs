//! Single test binary entry point.
//!
//! Structure:
//! - helpers: Builders and drag simulation shared by the tests
//! - integration: Multi-step carousel workflows (resize, reload, auto-play)
//! - unit: Single-component tests

mod helpers;

//! Rendering helpers shared by the carousel and the gallery.
//!
//! - `controls` - Arrow buttons and pagination dots
//! - `project_card` - The card view shown in each carousel slot
//! - `section_header` - Centered title and description

pub mod controls;
mod project_card;
mod section_header;

pub use project_card::ProjectCard;
pub use section_header::render_section_header;

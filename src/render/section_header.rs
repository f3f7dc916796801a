//! Centered section heading: a bold title over a muted description.

use gpui::*;
use gpui_component::{v_flex, ActiveTheme as _};

/// Widest the description runs before wrapping
const DESCRIPTION_MAX_WIDTH: f32 = 672.0;

pub fn render_section_header(
    title: Option<SharedString>,
    description: Option<SharedString>,
    cx: &App,
) -> Div {
    let muted = cx.theme().muted_foreground;

    v_flex()
        .items_center()
        .gap_2()
        .mb_8()
        .children(title.map(|title| {
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .child(title)
        }))
        .children(description.map(|description| {
            div()
                .max_w(px(DESCRIPTION_MAX_WIDTH))
                .text_center()
                .text_color(muted)
                .child(description)
        }))
}

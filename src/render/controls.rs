//! Carousel controls - previous/next arrows and pagination dots.
//!
//! The helpers only build the elements; the carousel attaches click
//! handlers, and only to controls that are enabled.

use crate::constants::{ACTIVE_DOT_WIDTH, ARROW_BUTTON_SIZE, BORDER_RADIUS_FULL, DOT_SIZE};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, Icon, IconName};

/// Which arrow to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKind {
    Previous,
    Next,
}

impl ArrowKind {
    fn id(self) -> &'static str {
        match self {
            ArrowKind::Previous => "carousel-prev",
            ArrowKind::Next => "carousel-next",
        }
    }

    fn icon(self) -> IconName {
        match self {
            ArrowKind::Previous => IconName::ChevronLeft,
            ArrowKind::Next => IconName::ChevronRight,
        }
    }
}

/// Render a round arrow button overlaid on one edge of the strip.
///
/// Disabled buttons are dimmed and show the not-allowed cursor.
pub fn render_arrow_button(kind: ArrowKind, enabled: bool, cx: &App) -> Stateful<Div> {
    let bg = cx.theme().background.opacity(0.8);
    let hover_bg = cx.theme().muted;
    let fg = cx.theme().foreground;
    let border = cx.theme().border;

    div()
        .id(kind.id())
        // Presses must not fall through to the draggable strip underneath
        .occlude()
        .absolute()
        .top_0()
        .bottom_0()
        .my_auto()
        .when(kind == ArrowKind::Previous, |d| d.left(px(8.0)))
        .when(kind == ArrowKind::Next, |d| d.right(px(8.0)))
        .size(px(ARROW_BUTTON_SIZE))
        .rounded(px(BORDER_RADIUS_FULL))
        .bg(bg)
        .border_1()
        .border_color(border)
        .shadow_md()
        .flex()
        .items_center()
        .justify_center()
        .child(Icon::new(kind.icon()).size(px(24.0)).text_color(fg))
        .when(enabled, |d| d.cursor_pointer().hover(|s| s.bg(hover_bg)))
        .when(!enabled, |d| d.opacity(0.4).cursor_not_allowed())
}

/// Render one pagination dot. The active dot is wider and uses the
/// primary colour.
pub fn render_dot(index: usize, active: bool, cx: &App) -> Stateful<Div> {
    let active_bg = cx.theme().primary;
    let idle_bg = cx.theme().muted;
    let hover_bg = cx.theme().muted_foreground;

    div()
        .id(("carousel-dot", index))
        .h(px(DOT_SIZE))
        .w(px(if active { ACTIVE_DOT_WIDTH } else { DOT_SIZE }))
        .rounded(px(BORDER_RADIUS_FULL))
        .cursor_pointer()
        .when(active, |d| d.bg(active_bg))
        .when(!active, |d| d.bg(idle_bg).hover(|s| s.bg(hover_bg)))
}

//! Project card - the view placed in each carousel slot.

use crate::constants::{BORDER_RADIUS_FULL, BORDER_RADIUS_MD, CARD_HEIGHT, GAP_MD, GAP_SM, PADDING_LG, PADDING_SM};
use crate::projects::Project;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

pub struct ProjectCard {
    project: Project,
}

impl ProjectCard {
    pub fn new(project: Project) -> Self {
        Self { project }
    }
}

impl Render for ProjectCard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let bg = cx.theme().secondary;
        let border = cx.theme().border;
        let fg = cx.theme().foreground;
        let muted_fg = cx.theme().muted_foreground;
        let chip_bg = cx.theme().muted;
        let link = cx.theme().primary;

        let tags = self.project.tags.iter().map(|tag| {
            div()
                .px(px(PADDING_SM))
                .py(px(2.0))
                .rounded(px(BORDER_RADIUS_FULL))
                .bg(chip_bg)
                .text_xs()
                .text_color(fg)
                .child(tag.clone())
        });

        v_flex()
            .w_full()
            .h(px(CARD_HEIGHT))
            .p(px(PADDING_LG))
            .gap(px(GAP_MD))
            .rounded(px(BORDER_RADIUS_MD))
            .bg(bg)
            .border_1()
            .border_color(border)
            .shadow_sm()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(fg)
                    .child(self.project.title.clone()),
            )
            .child(
                div()
                    .flex_1()
                    .text_sm()
                    .text_color(muted_fg)
                    .child(self.project.description.clone()),
            )
            .child(h_flex().flex_wrap().gap(px(GAP_SM)).children(tags))
            .when_some(self.project.demo_url.clone(), |card, url| {
                card.child(
                    div()
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(link)
                        .child(format!("Live demo: {}", url)),
                )
            })
    }
}

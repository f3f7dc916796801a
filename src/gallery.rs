//! Projects gallery - the page section hosting the carousel.
//!
//! Owns the project list load, builds one card view per project and keeps
//! the carousel's card size in step with the viewport breakpoint.

use crate::carousel::Carousel;
use crate::config::GallerySettings;
use crate::constants::MOCK_LOAD_DELAY;
use crate::projects::{Project, ProjectsLoad, mock_projects};
use crate::render::{ProjectCard, render_section_header};
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};
use tracing::{debug, info};

const SECTION_TITLE: &str = "PROJECTS";
const SECTION_DESCRIPTION: &str = "Here you will find some of the personal and client projects \
    that I created with each project containing its own case study";

/// Height of the box holding the loading or error line
const STATUS_HEIGHT: f32 = 256.0;

pub struct ProjectsGallery {
    settings: GallerySettings,
    load: ProjectsLoad,
    carousel: Entity<Carousel>,
    _load_task: Task<()>,
    _bounds_subscription: Subscription,
}

impl ProjectsGallery {
    pub fn new(settings: GallerySettings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let viewport_width = f32::from(window.viewport_size().width);
        let config = settings.config_for_viewport(viewport_width);

        let carousel = cx.new(|cx| {
            let mut carousel = Carousel::new(config, Vec::new(), window, cx);
            carousel.set_header(
                Some(SECTION_TITLE.into()),
                Some(SECTION_DESCRIPTION.into()),
                cx,
            );
            carousel
        });

        let bounds_subscription = cx.observe_window_bounds(window, |this, window, cx| {
            this.apply_breakpoint(f32::from(window.viewport_size().width), cx);
        });

        // No backend yet: resolve to the mock list after a simulated fetch
        let load_task = cx.spawn(async move |this, cx| {
            cx.background_executor().timer(MOCK_LOAD_DELAY).await;
            this.update(cx, |this, cx| {
                this.finish_loading(Ok::<_, String>(mock_projects()), cx);
            })
            .ok();
        });

        Self {
            settings,
            load: ProjectsLoad::Loading,
            carousel,
            _load_task: load_task,
            _bounds_subscription: bounds_subscription,
        }
    }

    /// Settle the project fetch and hand the cards to the carousel.
    pub fn finish_loading<E: std::fmt::Display>(
        &mut self,
        result: Result<Vec<Project>, E>,
        cx: &mut Context<Self>,
    ) {
        self.load = ProjectsLoad::from_result(result);

        let slots: Vec<AnyView> = self
            .load
            .projects()
            .iter()
            .cloned()
            .map(|project| AnyView::from(cx.new(|_| ProjectCard::new(project))))
            .collect();
        info!(count = slots.len(), "Projects loaded");

        self.carousel.update(cx, |carousel, cx| carousel.set_slots(slots, cx));
        cx.notify();
    }

    fn apply_breakpoint(&mut self, viewport_width: f32, cx: &mut Context<Self>) {
        let config = self.settings.config_for_viewport(viewport_width);
        debug!(viewport_width, slot_width = config.slot_width, "Applying breakpoint");
        self.carousel.update(cx, |carousel, cx| carousel.set_config(config, cx));
    }
}

impl Render for ProjectsGallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let bg = cx.theme().background;
        let fg = cx.theme().foreground;
        let muted_fg = cx.theme().muted_foreground;
        let danger = cx.theme().danger;

        let status = match self.load.error() {
            Some(message) => div().text_sm().text_color(danger).child(message.to_string()),
            None => div().text_sm().text_color(muted_fg).child("Loading projects…"),
        };

        let section = if self.load.shows_slider() {
            self.carousel.clone().into_any_element()
        } else {
            v_flex()
                .w_full()
                .child(render_section_header(
                    Some(SECTION_TITLE.into()),
                    Some(SECTION_DESCRIPTION.into()),
                    cx,
                ))
                .child(
                    h_flex()
                        .w_full()
                        .h(px(STATUS_HEIGHT))
                        .justify_center()
                        .items_center()
                        .child(status),
                )
                .into_any_element()
        };

        v_flex()
            .id("projects-gallery")
            .size_full()
            .items_center()
            .justify_center()
            .px(px(16.0))
            .py(px(80.0))
            .bg(bg)
            .text_color(fg)
            .child(section)
    }
}

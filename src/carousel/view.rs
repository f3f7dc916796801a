//! gpui view for the carousel.
//!
//! Wires window events to [`CarouselState`]:
//! - window bounds changes mark the measurement stale
//! - an invisible canvas reports the container width after each frame
//! - pointer down on the strip starts a drag; while it lasts, pointer
//!   moves are tracked across the whole window
//! - losing window focus abandons a drag
//! - arrow and dot clicks navigate
//! - a timer task advances automatically when enabled
//!
//! Every long-lived resource is an owned handle (`Subscription`, `Task`)
//! so dropping the entity releases all of them.

use super::auto_advance::AutoAdvance;
use super::measure::MeasureGate;
use super::spring::SpringMotion;
use super::state::CarouselState;
use crate::config::CarouselConfig;
use crate::constants::{SETTLE_DELAY, STRIP_PADDING_Y};
use crate::profile_scope;
use crate::render::controls::{render_arrow_button, render_dot, ArrowKind};
use crate::render::render_section_header;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, v_flex};
use std::time::Instant;

pub struct Carousel {
    state: CarouselState,
    slots: Vec<AnyView>,
    title: Option<SharedString>,
    description: Option<SharedString>,
    motion: SpringMotion,
    auto_advance: AutoAdvance<Task<()>>,
    measure_gate: MeasureGate,
    _settle_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl Carousel {
    pub fn new(
        config: CarouselConfig,
        slots: Vec<AnyView>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let state = CarouselState::new(config, slots.len());
        let motion = SpringMotion::at_rest(state.strip_offset(), Instant::now());

        let subscriptions = vec![
            cx.observe_window_bounds(window, |this, _window, cx| {
                this.measure_gate.invalidate();
                cx.notify();
            }),
            cx.observe_window_activation(window, |this, window, cx| {
                if !window.is_window_active() {
                    this.cancel_drag(cx);
                }
            }),
        ];

        // Layout width is unreliable right after insertion; wait before
        // trusting the first measurement.
        let settle_task = cx.spawn(async move |this, cx| {
            cx.background_executor().timer(SETTLE_DELAY).await;
            this.update(cx, |this, cx| {
                this.measure_gate.settle();
                cx.notify();
            })
            .ok();
        });

        let mut carousel = Self {
            state,
            slots,
            title: None,
            description: None,
            motion,
            auto_advance: AutoAdvance::new(),
            measure_gate: MeasureGate::new(),
            _settle_task: Some(settle_task),
            _subscriptions: subscriptions,
        };
        carousel.sync_auto_advance(cx);
        carousel
    }

    /// Set the optional heading drawn above the strip.
    pub fn set_header(
        &mut self,
        title: Option<SharedString>,
        description: Option<SharedString>,
        cx: &mut Context<Self>,
    ) {
        self.title = title;
        self.description = description;
        cx.notify();
    }

    /// Replace all slots. The position is kept, re-clamped if it no longer fits.
    pub fn set_slots(&mut self, slots: Vec<AnyView>, cx: &mut Context<Self>) {
        self.state.set_slot_count(slots.len());
        self.slots = slots;
        self.measure_gate.invalidate();
        self.after_change(cx);
    }

    /// Replace the configuration (e.g. on a breakpoint change).
    pub fn set_config(&mut self, config: CarouselConfig, cx: &mut Context<Self>) {
        if *self.state.config() == config.sanitized() {
            return;
        }
        self.state.set_config(config);
        self.measure_gate.invalidate();
        self.after_change(cx);
    }

    pub fn go_previous(&mut self, cx: &mut Context<Self>) {
        if self.state.go_previous() {
            self.after_change(cx);
        }
    }

    pub fn go_next(&mut self, cx: &mut Context<Self>) {
        if self.state.go_next() {
            self.after_change(cx);
        }
    }

    pub fn go_to_index(&mut self, index: usize, cx: &mut Context<Self>) {
        let index = isize::try_from(index).unwrap_or(isize::MAX);
        if self.state.go_to_index(index) {
            self.after_change(cx);
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Animate toward the resting offset, re-arm the timer, redraw.
    fn after_change(&mut self, cx: &mut Context<Self>) {
        if !self.state.is_dragging() {
            self.motion.animate_to(self.state.strip_offset(), Instant::now());
        }
        self.sync_auto_advance(cx);
        cx.notify();
    }

    fn sync_auto_advance(&mut self, cx: &mut Context<Self>) {
        let key = self.state.auto_advance_key();
        self.auto_advance.sync(key, |interval| {
            cx.spawn(async move |this, cx| {
                loop {
                    cx.background_executor().timer(interval).await;
                    if this.update(cx, |this, cx| this.on_auto_advance(cx)).is_err() {
                        break;
                    }
                }
            })
        });
    }

    fn on_auto_advance(&mut self, cx: &mut Context<Self>) {
        if self.state.auto_advance_tick() {
            self.after_change(cx);
        }
    }

    /// Called after each frame with the container's laid-out width.
    fn report_width(&mut self, width: f32, cx: &mut Context<Self>) {
        if !self.measure_gate.accept(width, self.state.container_width()) {
            return;
        }

        let before = (self.state.current_index(), self.state.visible_slots());
        self.state.measure(width);
        let after = (self.state.current_index(), self.state.visible_slots());

        if before != after || self.motion.target() != self.state.strip_offset() {
            self.after_change(cx);
        }
    }

    fn handle_mouse_down(&mut self, event: &MouseDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let now = Instant::now();
        // Grab the strip where it is drawn, mid-animation or not
        let origin = self.motion.offset(now);
        self.state.begin_drag(f32::from(event.position.x), now, origin);
        self.sync_auto_advance(cx);
        cx.notify();
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        // Button released somewhere we never saw the up event
        if event.pressed_button != Some(MouseButton::Left) {
            self.finish_drag(cx);
            return;
        }
        if self.state.drag_to(f32::from(event.position.x), Instant::now()) {
            cx.notify();
        }
    }

    fn handle_mouse_up(&mut self, _event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.finish_drag(cx);
    }

    fn finish_drag(&mut self, cx: &mut Context<Self>) {
        let now = Instant::now();
        let from = self.state.display_offset();
        let Some(outcome) = self.state.end_drag(now) else {
            return;
        };
        self.motion
            .launch(from, self.state.strip_offset(), outcome.release.velocity, now);
        self.sync_auto_advance(cx);
        cx.notify();
    }

    /// Drop an in-progress drag without paging and ease back to rest.
    fn cancel_drag(&mut self, cx: &mut Context<Self>) {
        if !self.state.is_dragging() {
            return;
        }
        let from = self.state.display_offset();
        self.state.cancel_drag();
        self.motion
            .launch(from, self.state.strip_offset(), 0.0, Instant::now());
        self.sync_auto_advance(cx);
        cx.notify();
    }

    fn render_header(&self, cx: &Context<Self>) -> Option<Div> {
        if self.title.is_none() && self.description.is_none() {
            return None;
        }
        Some(render_section_header(
            self.title.clone(),
            self.description.clone(),
            cx,
        ))
    }
}

impl Render for Carousel {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("carousel_render", crate::perf::TARGET_FRAME_MS);

        let now = Instant::now();
        let offset = if self.state.is_dragging() {
            self.state.display_offset()
        } else {
            self.motion.offset(now)
        };
        if !self.state.is_dragging() && !self.motion.is_settled(now) {
            window.request_animation_frame();
        }

        let config = *self.state.config();
        let layout = self.state.layout();
        let strip_width = layout.pitch * self.slots.len() as f32;
        let entity = cx.entity();
        let dragging = self.state.is_dragging();

        let slots = self.slots.iter().cloned().map(|slot| {
            div()
                .w(px(config.slot_width))
                .flex_shrink_0()
                .child(slot)
        });

        let viewport = div()
            .id("carousel-viewport")
            .relative()
            .w_full()
            .overflow_hidden()
            .py(px(STRIP_PADDING_Y))
            .cursor(if dragging {
                CursorStyle::ClosedHand
            } else {
                CursorStyle::OpenHand
            })
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_mouse_up_out(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .child(
                canvas(
                    {
                        let entity = entity.clone();
                        move |bounds, window, cx| {
                            let width = f32::from(bounds.size.width);
                            // Apply after the frame so a width change can re-render
                            window.defer(cx, move |_window, cx| {
                                entity.update(cx, |this, cx| this.report_width(width, cx));
                            });
                        }
                    },
                    move |_, _, window, _| {
                        if !dragging {
                            return;
                        }
                        // Follow the pointer even after it leaves the strip
                        window.on_mouse_event(move |event: &MouseMoveEvent, phase, window, cx| {
                            if phase == DispatchPhase::Bubble {
                                entity.update(cx, |this, cx| this.handle_mouse_move(event, window, cx));
                            }
                        });
                    },
                )
                .absolute()
                .top_0()
                .left_0()
                .size_full(),
            )
            .child(
                h_flex()
                    .relative()
                    .left(px(offset))
                    .w(px(strip_width))
                    .gap(px(config.gap))
                    .children(slots),
            );

        let mut strip = div().relative().w_full().child(viewport);
        if config.show_arrows {
            // Disabled arrows get no click handler at all
            let (can_prev, can_next) = (self.state.can_go_previous(), self.state.can_go_next());
            strip = strip
                .child(
                    render_arrow_button(ArrowKind::Previous, can_prev, cx).when(can_prev, |b| {
                        b.on_click(cx.listener(|this, _, _, cx| this.go_previous(cx)))
                    }),
                )
                .child(
                    render_arrow_button(ArrowKind::Next, can_next, cx).when(can_next, |b| {
                        b.on_click(cx.listener(|this, _, _, cx| this.go_next(cx)))
                    }),
                );
        }

        let dots = self.state.shows_dots().then(|| {
            h_flex()
                .justify_center()
                .mt_6()
                .gap_2()
                .children((0..self.state.dot_count()).map(|index| {
                    render_dot(index, self.state.is_dot_active(index), cx)
                        .on_click(cx.listener(move |this, _, _, cx| this.go_to_index(index, cx)))
                }))
        });

        v_flex()
            .w_full()
            .children(self.render_header(cx))
            .child(strip)
            .children(dots)
    }
}

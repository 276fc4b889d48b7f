//! Studio host: palette, placement surface, and the tracker behind them.
//!
//! ARCHITECTURE
//! ============
//! The `scene::tracker::Tracker` owns all placement state. This component
//! turns DOM events into tracker calls, applies the returned actions (drag
//! data, animation frames, theme attribute), and republishes a
//! [`StudioState`] snapshot for rendering. A missing surface element turns
//! every operation into a no-op.

#[cfg(test)]
#[path = "studio_test.rs"]
mod studio_test;

use leptos::prelude::*;

use scene::catalog::DecorationTemplate;
use scene::consts::GHOST_OPACITY;
use scene::doc::DecorationId;
use scene::surface::Point;
use scene::theme::{ScenePalette, Theme};
use scene::tracker::{Action, Tracker, TrackerConfig};

use crate::components::decoration_panel::{DecorationPanel, PaletteEvent};
use crate::components::haunted_house::HauntedHouse;
use crate::components::sky::Sky;
use crate::state::studio::StudioState;
use crate::util::body_style::lock_body_scroll;
use crate::util::frame::request_frame;
use crate::util::theme::{apply as apply_theme, night_class};

#[cfg(feature = "csr")]
use scene::consts::DRAG_DATA_KEY;
#[cfg(feature = "csr")]
use scene::tracker::{Gesture, PaletteInput};

#[cfg(feature = "csr")]
use crate::util::dom_input::{current_target_rect, drag_point, element_rect, first_touch_point, pointer_point};

type TrackerCell = StoredValue<Tracker, LocalStorage>;

/// Inline style centering a marker on surface-local `at`.
#[must_use]
pub fn marker_style(at: Point) -> String {
    format!("left: {:.2}px; top: {:.2}px;", at.x, at.y)
}

/// Inline style for the translucent reposition ghost at `at`.
#[must_use]
pub fn ghost_style(at: Point) -> String {
    format!("{} opacity: {GHOST_OPACITY};", marker_style(at))
}

#[cfg(feature = "csr")]
fn now_ms() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let now = js_sys::Date::now() as u64;
    now
}

fn publish(tracker: TrackerCell, studio: RwSignal<StudioState>) {
    if let Some(state) = tracker.try_with_value(StudioState::from_tracker) {
        studio.set(state);
    }
}

fn process_actions(actions: Vec<Action>, tracker: TrackerCell, studio: RwSignal<StudioState>) {
    let mut changed = false;
    for action in actions {
        match action {
            Action::FrameRequested => schedule_frame(tracker, studio),
            Action::ThemeChanged(theme) => {
                apply_theme(theme);
                changed = true;
            }
            Action::SetDragData { key, .. } => {
                log::debug!("drag data for {key} is written by the dragstart handler");
            }
            Action::Placed(_)
            | Action::PreviewMoved { .. }
            | Action::Moved { .. }
            | Action::Cleared { .. }
            | Action::RenderNeeded => changed = true,
        }
    }
    if changed {
        publish(tracker, studio);
    }
}

/// Apply the pending move at the next paint, or right away if no frame can
/// be requested.
fn schedule_frame(tracker: TrackerCell, studio: RwSignal<StudioState>) {
    let on_frame = move || {
        let actions = tracker.try_update_value(Tracker::on_frame).unwrap_or_default();
        process_actions(actions, tracker, studio);
    };
    if !request_frame(on_frame) {
        on_frame();
    }
}

/// The full studio: palette on the left, scene surface filling the rest.
#[component]
pub fn Studio() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();
    let tracker: TrackerCell = StoredValue::new_local(Tracker::with_config(TrackerConfig::default()));
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    // Page scroll stays locked for as long as the studio is mounted.
    let scroll_lock = StoredValue::new_local(lock_body_scroll());
    on_cleanup(move || {
        scroll_lock.update_value(|lock| drop(lock.take()));
    });
    apply_theme(Theme::Day);

    let night = Signal::derive(move || studio.with(StudioState::is_night));
    let theme = Signal::derive(move || studio.with(|s| s.theme));

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let on_drag_start = Callback::new(move |(event, template): (PaletteEvent, &'static DecorationTemplate)| {
        #[cfg(feature = "csr")]
        {
            match event {
                PaletteEvent::Drag(ev) => {
                    let actions = tracker
                        .try_update_value(|t| t.begin_palette_drag(template, PaletteInput::Pointer, now_ms()))
                        .unwrap_or_default();
                    for action in &actions {
                        if let Action::SetDragData { key, data } = action {
                            match ev.data_transfer() {
                                Some(dt) => {
                                    if let Err(e) = dt.set_data(key, data) {
                                        log::debug!("drag data not set: {e:?}");
                                    }
                                }
                                None => log::debug!("dragstart without a data transfer"),
                            }
                        }
                    }
                    process_actions(actions, tracker, studio);
                }
                PaletteEvent::Touch(ev) => {
                    ev.prevent_default();
                    let Some(surface) = surface_ref.get_untracked() else {
                        return;
                    };
                    let Some(client) = first_touch_point(&ev) else {
                        return;
                    };
                    let input = PaletteInput::Touch { client, surface: element_rect(&surface) };
                    let actions = tracker
                        .try_update_value(|t| t.begin_palette_drag(template, input, now_ms()))
                        .unwrap_or_default();
                    process_actions(actions, tracker, studio);
                }
            }
        }
    });

    let on_drag_end = Callback::new(move |()| {
        tracker.update_value(Tracker::end_palette_gesture);
    });

    let on_reset = Callback::new(move |()| {
        if let Some(action) = tracker.try_update_value(Tracker::reset) {
            process_actions(vec![action], tracker, studio);
        }
    });

    let on_toggle_night_mode = Callback::new(move |()| {
        if let Some(action) = tracker.try_update_value(Tracker::toggle_theme) {
            process_actions(vec![action], tracker, studio);
        }
    });

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "csr")]
        ev.prevent_default();
    };

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let on_drop = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "csr")]
        {
            ev.prevent_default();
            let Some(surface) = surface_ref.get_untracked() else {
                return;
            };
            let data = match ev.data_transfer().map(|dt| dt.get_data(DRAG_DATA_KEY)) {
                Some(Ok(data)) => data,
                Some(Err(e)) => {
                    log::debug!("drag data not readable: {e:?}");
                    String::new()
                }
                None => String::new(),
            };
            let client = drag_point(&ev);
            let rect = element_rect(&surface);
            let actions = tracker
                .try_update_value(|t| t.drop_on_canvas(&data, client, rect, now_ms()))
                .unwrap_or_default();
            process_actions(actions, tracker, studio);
        }
    };

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let begin_reposition = move |id: &DecorationId, ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        {
            ev.stop_propagation();
            ev.prevent_default();
            let Some(surface) = surface_ref.get_untracked() else {
                return;
            };
            let Some(element) = current_target_rect(&ev) else {
                return;
            };
            if let Err(e) = surface.set_pointer_capture(ev.pointer_id()) {
                log::debug!("pointer capture failed: {e:?}");
            }
            let client = pointer_point(&ev);
            let rect = element_rect(&surface);
            let actions = tracker
                .try_update_value(|t| t.begin_reposition(id, client, element, rect))
                .unwrap_or_default();
            process_actions(actions, tracker, studio);
        }
    };

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        {
            let repositioning = tracker
                .try_with_value(|t| matches!(t.gesture(), Gesture::Repositioning { .. }))
                .unwrap_or(false);
            if !repositioning {
                return;
            }
            let Some(surface) = surface_ref.get_untracked() else {
                return;
            };
            ev.prevent_default();
            let client = pointer_point(&ev);
            let rect = element_rect(&surface);
            let actions = tracker
                .try_update_value(|t| t.on_move(client, rect))
                .unwrap_or_default();
            process_actions(actions, tracker, studio);
        }
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        let actions = tracker.try_update_value(Tracker::on_release).unwrap_or_default();
        process_actions(actions, tracker, studio);
    };

    let on_pointer_cancel = move |_ev: leptos::ev::PointerEvent| {
        let actions = tracker.try_update_value(Tracker::cancel_reposition).unwrap_or_default();
        process_actions(actions, tracker, studio);
    };

    let surface_style = move || {
        let palette = ScenePalette::for_theme(theme.get());
        format!("background-color: {};", palette.surface)
    };
    let counter_style = move || {
        let palette = ScenePalette::for_theme(theme.get());
        format!("background-color: {}; color: {};", palette.counter_bg, palette.counter_fg)
    };

    let markers = move || {
        let marker_class = night_class(theme.get(), "marker");
        studio
            .with(|s| s.decorations.clone())
            .into_iter()
            .map(|decoration| {
                let id = decoration.id.clone();
                let style = marker_style(decoration.position());
                view! {
                    <div
                        class=marker_class.clone()
                        style=style
                        title=decoration.name
                        data-id=decoration.id.to_string()
                        on:pointerdown=move |ev| begin_reposition(&id, ev)
                    >
                        {decoration.emoji}
                    </div>
                }
            })
            .collect_view()
    };

    let ghost = move || {
        studio.with(|s| s.ghost.clone()).map(|ghost| {
            view! {
                <div class="marker marker--ghost" style=ghost_style(ghost.at)>
                    {ghost.emoji}
                </div>
            }
        })
    };

    view! {
        <div class="studio">
            <DecorationPanel
                night_mode=night
                on_drag_start=on_drag_start
                on_drag_end=on_drag_end
                on_reset=on_reset
                on_toggle_night_mode=on_toggle_night_mode
            />
            <div
                class="surface"
                node_ref=surface_ref
                style=surface_style
                on:dragover=on_drag_over
                on:drop=on_drop
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            >
                <Sky night=night/>
                <HauntedHouse theme=theme/>
                <div class="counter" style=counter_style>
                    {move || studio.with(StudioState::count)}
                </div>
                {markers}
                {ghost}
            </div>
        </div>
    }
}

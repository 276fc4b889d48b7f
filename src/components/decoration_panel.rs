//! Palette of draggable decoration templates plus the theme and reset buttons.

use leptos::prelude::*;

use scene::catalog::{DecorationTemplate, templates};

/// Input that started a palette gesture.
#[derive(Clone)]
pub enum PaletteEvent {
    /// Native drag-and-drop start (mouse / pen).
    Drag(leptos::ev::DragEvent),
    /// Touch start on a palette item.
    Touch(leptos::ev::TouchEvent),
}

/// Vertical palette listing every catalog template.
///
/// Items can be dragged with a pointer or touched. The two buttons below the
/// items flip the theme and clear the scene.
#[component]
pub fn DecorationPanel(
    #[prop(into)] night_mode: Signal<bool>,
    on_drag_start: Callback<(PaletteEvent, &'static DecorationTemplate)>,
    on_drag_end: Callback<()>,
    on_reset: Callback<()>,
    on_toggle_night_mode: Callback<()>,
) -> impl IntoView {
    let items = templates()
        .iter()
        .map(|template| {
            view! {
                <div
                    class="palette__item"
                    draggable="true"
                    title=template.name.to_string()
                    on:dragstart=move |ev| on_drag_start.run((PaletteEvent::Drag(ev), template))
                    on:dragend=move |_| on_drag_end.run(())
                    on:touchstart=move |ev| on_drag_start.run((PaletteEvent::Touch(ev), template))
                    on:touchend=move |_| on_drag_end.run(())
                >
                    {template.emoji.to_string()}
                </div>
            }
        })
        .collect_view();

    let toggle_title = move || {
        if night_mode.get() { "Switch to day mode" } else { "Switch to night mode" }
    };
    let toggle_icon = move || if night_mode.get() { "\u{2600}\u{FE0F}" } else { "\u{1F319}" };

    view! {
        <div class="palette">
            {items}
            <div class="palette__controls">
                <button
                    class="palette__btn palette__btn--theme"
                    title=toggle_title
                    on:click=move |_| on_toggle_night_mode.run(())
                >
                    {toggle_icon}
                </button>
                <button
                    class="palette__btn palette__btn--reset"
                    title="Clear all decorations"
                    on:click=move |_| on_reset.run(())
                >
                    "\u{274C}"
                </button>
            </div>
        </div>
    }
}

//! The haunted house illustration, repainted per theme.

use leptos::prelude::*;

use scene::theme::{ScenePalette, Theme};

const PANE_STROKE: &str = "#4a2911";
const SMOKE_FRAMES: &str = "M510,60 Q525,40 540,60 Q525,80 510,60;\
                            M510,60 Q525,30 540,60 Q525,90 510,60;\
                            M510,60 Q525,40 540,60 Q525,80 510,60";

/// One lit window at `x`. Night windows glow and flicker; day windows are
/// framed.
fn window_pane(x: &'static str, palette: ScenePalette, flicker: &'static str) -> AnyView {
    match palette.window_frame {
        Some(frame) => view! {
            <rect
                x=x
                y="250"
                width="80"
                height="100"
                fill=palette.window
                stroke=frame
                stroke-width="10"
            ></rect>
        }
        .into_any(),
        None => view! {
            <rect x=x y="250" width="80" height="100" fill=palette.window opacity="0.7">
                <animate attributeName="opacity" values=flicker dur="4s" repeatCount="indefinite"></animate>
            </rect>
        }
        .into_any(),
    }
}

/// SVG house scaled to fill the placement surface (viewBox 800x600).
#[component]
pub fn HauntedHouse(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let palette = move || ScenePalette::for_theme(theme.get());

    view! {
        <svg class="house" viewBox="0 0 800 600" preserveAspectRatio="xMidYMid meet">
            <rect x="0" y="500" width="800" height="100" fill=move || palette().ground></rect>
            <path class="house__fade" d="M200,200 L600,200 L600,500 L200,500 Z" fill=move || palette().wall></path>
            <path class="house__fade" d="M150,200 L400,50 L650,200 Z" fill=move || palette().roof></path>
            {move || {
                let p = palette();
                view! {
                    {window_pane("250", p, "0.8;0.6;0.8")}
                    {window_pane("470", p, "0.6;0.8;0.6")}
                }
            }}
            <path d="M350,500 L450,500 L450,350 L350,350 Z" fill=move || palette().door></path>
            <circle cx="430" cy="425" r="10" fill=move || palette().doorknob></circle>
            <path d="M500,100 L550,100 L550,180 L500,180 Z" fill=move || palette().chimney></path>
            <path d="M510,60 Q525,40 540,60 Q525,80 510,60" fill="#666666" opacity="0.3">
                <animate attributeName="d" values=SMOKE_FRAMES dur="4s" repeatCount="indefinite"></animate>
            </path>
            <line x1="290" y1="250" x2="290" y2="350" stroke=PANE_STROKE stroke-width="5"></line>
            <line x1="250" y1="300" x2="330" y2="300" stroke=PANE_STROKE stroke-width="5"></line>
            <line x1="510" y1="250" x2="510" y2="350" stroke=PANE_STROKE stroke-width="5"></line>
            <line x1="470" y1="300" x2="550" y2="300" stroke=PANE_STROKE stroke-width="5"></line>
        </svg>
    }
}

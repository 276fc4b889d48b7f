//! Sun by day; moon and twinkling stars by night.

use leptos::prelude::*;

use scene::consts::STAR_COUNT;

use crate::util::star_field::star_field;

fn sky_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = js_sys::Date::now() as u64;
        seed
    }
    #[cfg(not(feature = "csr"))]
    {
        0x5EED
    }
}

/// Sky layer behind the house. Stars are scattered once per mount.
#[component]
pub fn Sky(#[prop(into)] night: Signal<bool>) -> impl IntoView {
    let stars = star_field(sky_seed(), STAR_COUNT);

    view! {
        <div class="sky">
            {move || {
                if night.get() {
                    let stars = stars
                        .iter()
                        .map(|star| view! { <div class="sky__star" style=star.style()></div> })
                        .collect_view();
                    view! {
                        {stars}
                        <div class="sky__body sky__body--moon">"\u{1F315}"</div>
                    }
                        .into_any()
                } else {
                    view! { <div class="sky__body sky__body--sun">"\u{2600}\u{FE0F}"</div> }.into_any()
                }
            }}
        </div>
    }
}

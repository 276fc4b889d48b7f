//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::studio::Studio;
use crate::state::studio::StudioState;

/// Root application component.
///
/// Provides the published studio state to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let studio = RwSignal::new(StudioState::default());
    provide_context(studio);

    view! {
        <Stylesheet id="studio" href="/style/studio.css"/>
        <Title text="Spooky Studio"/>
        <Studio/>
    }
}

//! Sticky page header with the identity toggle.

use leptos::prelude::*;

use crate::state::ui::{Identity, UiState};

/// Header showing the app title and the two-way identity selector.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="explorer-header">
            <div class="explorer-header__brand">
                <span class="explorer-header__badge">"∫"</span>
                <h1 class="explorer-header__title">"Sophomore's Dream Explorer"</h1>
            </div>

            <div class="explorer-header__toggle">
                <button
                    class="explorer-header__toggle-btn"
                    class:explorer-header__toggle-btn--active=move || ui.get().identity == Identity::First
                    on:click=move |_| ui.update(|u| u.select(Identity::First))
                >
                    "Identity I (x⁻ˣ)"
                </button>
                <button
                    class="explorer-header__toggle-btn"
                    class:explorer-header__toggle-btn--active=move || ui.get().identity == Identity::Second
                    on:click=move |_| ui.update(|u| u.select(Identity::Second))
                >
                    "Identity II (xˣ)"
                </button>
            </div>
        </header>
    }
}

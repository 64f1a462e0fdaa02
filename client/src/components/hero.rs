//! Hero section: the active identity's formula and its key characteristic.

use leptos::prelude::*;

use crate::state::ui::{Identity, UiState};

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let is_first = move || ui.get().identity == Identity::First;

    view! {
        <section class="hero">
            <div class="hero__panel">
                <h2 class="hero__heading">
                    {move || if is_first() { "The First Dream" } else { "The Second Dream" }}
                </h2>
                <div class="hero__formula" class:hero__formula--second=move || !is_first()>
                    {move || {
                        if is_first() {
                            "∫₀¹ x⁻ˣ dx = ∑ n⁻ⁿ"
                        } else {
                            "∫₀¹ xˣ dx = ∑ (−1)ⁿ⁺¹ n⁻ⁿ"
                        }
                    }}
                </div>
                <p class="hero__blurb">
                    "Discovered by Johann Bernoulli in 1697. It is called \"Sophomore's Dream\" \
                     because it seems too good to be true — as if a sophomore simply assumed \
                     that ∫ x⁻ˣ dx equals ∑ n⁻ⁿ without rigorous proof, yet miraculously, \
                     the result holds."
                </p>
            </div>

            <div class="hero__card">
                <h3 class="hero__card-title">"Key Characteristic"</h3>
                <p class="hero__card-text">
                    {move || {
                        if is_first() {
                            "The function x⁻ˣ reaches a maximum at x = 1/e. The series converges very rapidly."
                        } else {
                            "The function xˣ reaches a minimum at x = 1/e. The series is alternating and converges slightly slower."
                        }
                    }}
                </p>
            </div>
        </section>
    }
}

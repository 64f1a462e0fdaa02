//! Explorer page — the single-page layout.
//!
//! Composes header, hero, curve visualizer, series panel, and tutor panel
//! in a two-column grid. The only page-level behavior is resetting the
//! tutor conversation when the active identity changes.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::series_panel::SeriesPanel;
use crate::components::tutor_panel::TutorPanel;
use crate::components::visualizer::Visualizer;
use crate::state::tutor::TutorState;
use crate::state::ui::UiState;
use crate::util::time::now_ms;

#[component]
pub fn ExplorerPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tutor = expect_context::<RwSignal<TutorState>>();

    // Fresh conversation whenever the topic changes (runs on mount too, so
    // the identity-specific greeting is the opening message).
    Effect::new(move || {
        let identity = ui.get().identity;
        tutor.update(|t| t.reset_for(identity, now_ms()));
    });

    view! {
        <div class="explorer">
            <Header/>

            <main class="explorer__main">
                <Hero/>

                <div class="explorer__grid">
                    <div class="explorer__left">
                        <section>
                            <Visualizer/>
                        </section>
                        <section>
                            <SeriesPanel/>
                        </section>
                    </div>
                    <div class="explorer__right">
                        <TutorPanel/>
                    </div>
                </div>
            </main>

            <footer class="explorer__footer">
                <p>"Explore the elegance of mathematical constants."</p>
            </footer>
        </div>
    }
}

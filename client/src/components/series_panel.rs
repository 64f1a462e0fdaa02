//! Numerical verification panel: series controls, stat cards, term table.

use leptos::prelude::*;

use crate::math::{exact_value, partial_sums};
use crate::state::series::SeriesState;
use crate::state::ui::UiState;

#[component]
pub fn SeriesPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let series = expect_context::<RwSignal<SeriesState>>();

    let history = Memo::new(move |_| partial_sums(ui.get().identity, series.get().terms));
    let target = move || exact_value(ui.get().identity);
    let last_sum = move || history.get().last().map_or(0.0, |t| t.partial_sum);
    let error = move || (target() - last_sum()).abs();

    view! {
        <div class="series-panel">
            <div class="series-panel__head">
                <h3 class="series-panel__title">"Numerical Verification"</h3>
                <div class="series-panel__controls">
                    <button
                        class="btn btn--ghost"
                        title="Reset"
                        on:click=move |_| series.update(SeriesState::reset)
                    >
                        "Reset"
                    </button>
                    <button class="btn" on:click=move |_| series.update(|s| s.add(1))>
                        "+1 Term"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| series.update(|s| s.add(5))>
                        "+5 Terms"
                    </button>
                </div>
            </div>

            <div class="series-panel__cards">
                <div class="series-panel__card">
                    <div class="series-panel__card-label">"Integral Exact Value"</div>
                    <div class="series-panel__card-value">
                        {move || format!("{:.9}...", target())}
                    </div>
                </div>
                <div class="series-panel__card series-panel__card--accent">
                    <div class="series-panel__card-label">
                        {move || format!("Series Sum (N={})", series.get().terms)}
                    </div>
                    <div class="series-panel__card-value series-panel__card-value--sum">
                        {move || format!("{:.9}", last_sum())}
                    </div>
                    <div class="series-panel__card-diff">
                        {move || format!("Diff: {:.4e}", error())}
                    </div>
                </div>
            </div>

            <div class="series-panel__table-wrap">
                <table class="series-panel__table">
                    <thead>
                        <tr>
                            <th>"n"</th>
                            <th>"Term Value (n⁻ⁿ)"</th>
                            <th class="series-panel__col--right">"Partial Sum"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            history
                                .get()
                                .iter()
                                .map(|entry| {
                                    let n = entry.n;
                                    let term = format!("{:.5e}", entry.term);
                                    let sum = format!("{:.8}", entry.partial_sum);
                                    view! {
                                        <tr>
                                            <td class="series-panel__cell--n">{n}</td>
                                            <td>{term}</td>
                                            <td class="series-panel__col--right series-panel__cell--sum">{sum}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

//! SVG curve chart for the active identity over [0, 1].

use leptos::prelude::*;

use crate::math::{DEFAULT_RESOLUTION, sample_curve};
use crate::state::ui::{Identity, UiState};
use crate::util::chart;

/// Curve visualizer: area fill + stroke, axis ticks at 0 and 1, and a
/// dashed reference line at x = 1/e where the curve peaks (or dips).
#[component]
pub fn Visualizer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let samples = Memo::new(move |_| sample_curve(ui.get().identity, DEFAULT_RESOLUTION));

    // Vertical domain leaves headroom above each curve's extremum.
    let y_max = move || match ui.get().identity {
        Identity::First => 1.6,
        Identity::Second => 1.1,
    };

    let stroke = move || match ui.get().identity {
        Identity::First => "#4ade80",
        Identity::Second => "#818cf8",
    };

    let line_d = move || chart::line_path(&samples.get(), y_max());
    let area_d = move || chart::area_path(&samples.get(), y_max());

    let e_inv = 1.0 / std::f64::consts::E;
    let ref_x = chart::x_to_screen(e_inv);
    let plot_top = chart::PAD_TOP;
    let plot_bottom = chart::VIEW_HEIGHT - chart::PAD_BOTTOM;

    view! {
        <div class="visualizer">
            <div class="visualizer__head">
                <h3 class="visualizer__title">
                    {move || {
                        if ui.get().identity == Identity::First {
                            "Function Plot: y = x⁻ˣ"
                        } else {
                            "Function Plot: y = xˣ"
                        }
                    }}
                </h3>
                <span class="visualizer__domain">"Domain: [0, 1]"</span>
            </div>

            <svg
                class="visualizer__svg"
                viewBox={format!("0 0 {} {}", chart::VIEW_WIDTH, chart::VIEW_HEIGHT)}
                preserveAspectRatio="xMidYMid meet"
            >
                <defs>
                    <linearGradient id="curve-fill" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color=stroke stop-opacity="0.3"/>
                        <stop offset="95%" stop-color=stroke stop-opacity="0"/>
                    </linearGradient>
                </defs>

                // Plot frame.
                <line
                    class="visualizer__axis"
                    x1=chart::PAD_LEFT y1=plot_bottom
                    x2={chart::VIEW_WIDTH - chart::PAD_RIGHT} y2=plot_bottom
                />
                <line
                    class="visualizer__axis"
                    x1=chart::PAD_LEFT y1=plot_top
                    x2=chart::PAD_LEFT y2=plot_bottom
                />

                // Axis ticks: the original labels only the endpoints.
                <text class="visualizer__tick" x=chart::PAD_LEFT y={plot_bottom + 18.0}>"0"</text>
                <text class="visualizer__tick" x={chart::VIEW_WIDTH - chart::PAD_RIGHT} y={plot_bottom + 18.0}>"1"</text>
                <text class="visualizer__tick visualizer__tick--y" x={chart::PAD_LEFT - 8.0} y=plot_bottom>"0"</text>
                <text class="visualizer__tick visualizer__tick--y" x={chart::PAD_LEFT - 8.0} y={plot_top + 4.0}>
                    {move || format!("{:.1}", y_max())}
                </text>

                <path class="visualizer__area" d=area_d fill="url(#curve-fill)"/>
                <path class="visualizer__line" d=line_d stroke=stroke/>

                // Reference line at the extremum x = 1/e ≈ 0.368.
                <line
                    class="visualizer__reference"
                    x1=ref_x y1=plot_top
                    x2=ref_x y2=plot_bottom
                />
                <text class="visualizer__reference-label" x=ref_x y={plot_top - 4.0}>"1/e"</text>
            </svg>
        </div>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::explorer::ExplorerPage;
use crate::state::{series::SeriesState, tutor::TutorState, ui::UiState};

/// Handle for sending frames to the server. A no-op until the hydrate-side
/// frame client connects; on the server it is always a no-op.
#[derive(Clone, Default)]
pub struct FrameSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl FrameSender {
    /// Send a frame to the server. Returns `false` when no connection exists.
    pub fn send(&self, frame: &frames::Frame) -> bool {
        #[cfg(feature = "hydrate")]
        if let Some(tx) = &self.tx {
            return crate::net::frame_client::send_frame(tx, frame);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = frame;
        false
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let ui = RwSignal::new(UiState::default());
    let series = RwSignal::new(SeriesState::default());
    let tutor = RwSignal::new(TutorState::default());

    provide_context(ui);
    provide_context(series);
    provide_context(tutor);

    // Connect the frame client in the browser; SSR gets an inert sender.
    #[cfg(feature = "hydrate")]
    let sender = FrameSender { tx: Some(crate::net::frame_client::spawn_frame_client(tutor)) };
    #[cfg(not(feature = "hydrate"))]
    let sender = FrameSender::default();
    provide_context(RwSignal::new(sender));

    view! {
        <Stylesheet id="leptos" href="/pkg/explorer.css"/>
        <Title text="Sophomore's Dream Explorer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ExplorerPage/>
            </Routes>
        </Router>
    }
}

//! Tutor chat panel: streamed answers from the server-side LLM pass-through.
//!
//! SYSTEM CONTEXT
//! ==============
//! Encodes questions as `tutor:ask` frames and renders the streamed answer
//! history from shared tutor state. Model messages are markdown-rendered;
//! raw HTML from the model is dropped before insertion.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::app::FrameSender;
use crate::net::types::{Data, FRAME_IDENTITY, FRAME_QUESTION, Frame};
use crate::state::tutor::{ROLE_USER, TutorState};
use crate::state::ui::UiState;
use crate::util::time::now_ms;

/// Canned questions shown as one-tap chips under the message list.
const SUGGESTIONS: [&str; 3] = [
    "Explain the proof simply",
    "Why is it called Sophomore's Dream?",
    "What is the limit of x^x at 0?",
];

/// Tutor panel showing conversation history and a question input.
#[component]
pub fn TutorPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tutor = expect_context::<RwSignal<TutorState>>();
    let sender = expect_context::<RwSignal<FrameSender>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Pin the message list to the bottom as chunks stream in.
    Effect::new(move || {
        let state = tutor.get();
        let _ = state.messages.len();
        let _ = state.streaming;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move |text: String| {
        let question = text.trim().to_owned();
        if question.is_empty() || tutor.get().streaming {
            return;
        }

        let frame = Frame::request("tutor:ask", Data::new())
            .with_data(FRAME_IDENTITY, ui.get().identity.as_str())
            .with_data(FRAME_QUESTION, question.clone());

        if sender.get().send(&frame) {
            tutor.update(|t| {
                t.push_user(question, now_ms());
                t.begin_reply(now_ms());
            });
            input.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send(input.get());
        }
    };

    view! {
        <div class="tutor-panel">
            <div class="tutor-panel__head">
                <span class="tutor-panel__spark">"✦"</span>
                <div>
                    <h3 class="tutor-panel__title">"AI Math Tutor"</h3>
                    <p class="tutor-panel__subtitle">"Streaming answers about the active identity"</p>
                </div>
            </div>

            <div class="tutor-panel__messages" node_ref=messages_ref>
                {move || {
                    tutor
                        .get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let is_user = msg.role == ROLE_USER;
                            let text = msg.text.clone();
                            view! {
                                <div
                                    class="tutor-panel__message"
                                    class:tutor-panel__message--user=is_user
                                    class:tutor-panel__message--model={!is_user}
                                >
                                    {if is_user {
                                        view! { <div class="tutor-panel__bubble">{text}</div> }.into_any()
                                    } else {
                                        let rendered = render_markdown_html(&text);
                                        view! {
                                            <div class="tutor-panel__bubble tutor-panel__markdown" inner_html=rendered></div>
                                        }
                                        .into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    let state = tutor.get();
                    let pending = state.streaming
                        && state.messages.last().is_some_and(|m| m.text.is_empty());
                    pending.then(|| view! { <div class="tutor-panel__thinking">"Thinking..."</div> })
                }}
            </div>

            <div class="tutor-panel__suggestions">
                {SUGGESTIONS
                    .iter()
                    .map(|s| {
                        view! {
                            <button
                                class="tutor-panel__chip"
                                disabled=move || tutor.get().streaming
                                on:click=move |_| do_send((*s).to_owned())
                            >
                                {*s}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="tutor-panel__input-row">
                <input
                    class="tutor-panel__input"
                    type="text"
                    placeholder="Ask about the math..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    prop:disabled=move || tutor.get().streaming
                />
                <button
                    class="btn btn--primary"
                    disabled=move || tutor.get().streaming || input.get().trim().is_empty()
                    on:click=move |_| do_send(input.get())
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

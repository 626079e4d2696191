//! Floating crisis-support chatbot.
//!
//! The widget is presentation only: the transcript, typing flag, and widget
//! offers all live in the portal, which hands them down as signals and takes
//! user intent back through callbacks.

use std::time::Duration;

use leptos::*;
use mindspace_core::{widget_display_name, ChatRole, ChatTranscript, Mood};

#[component]
pub fn CrisisChatbot(
    #[prop(into)] transcript: Signal<ChatTranscript>,
    #[prop(into)] is_typing: Signal<bool>,
    /// Widget the assistant has offered but the user has not accepted yet.
    #[prop(into)] pending_widget: Signal<Option<String>>,
    /// Widget the user accepted; rendered inline until the flow moves on.
    #[prop(into)] active_widget: Signal<Option<String>>,
    #[prop(into)] on_send: Callback<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_decline: Callback<()>,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (input, set_input) = create_signal(String::new());
    let bottom_ref = create_node_ref::<html::Div>();

    // Keep the newest message in view. The DOM settles a tick after the
    // signal update, hence the short delay.
    create_effect(move |_| {
        let _ = transcript.with(|t| t.len());
        let _ = is_typing.get();
        let _ = pending_widget.get();
        let _ = active_widget.get();
        if !open.get() {
            return;
        }
        set_timeout(
            move || {
                if let Some(el) = bottom_ref.get_untracked() {
                    el.scroll_into_view();
                }
            },
            Duration::from_millis(50),
        );
    });

    let input_locked = move || is_typing.get() || pending_widget.get().is_some();

    let send = move || {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() || input_locked() {
            return;
        }
        set_input.set(String::new());
        on_send.call(text);
    };

    view! {
        <Show
            when=move || open.get()
            fallback=move || {
                view! {
                    <button class="chatbot-launcher" on:click=move |_| set_open.set(true)>
                        "💬"
                    </button>
                }
            }
        >
            <div class="chatbot-panel">
                <div class="chatbot-header">
                    <div>
                        <h3>"Crisis Support"</h3>
                        <p>"I'm here to listen"</p>
                    </div>
                    <button class="dialog-close" on:click=move |_| set_open.set(false)>
                        "×"
                    </button>
                </div>
                <div class="chatbot-messages">
                    <Show when=move || transcript.with(|t| t.is_empty())>
                        <div class="chat-bubble assistant">
                            "Hi, I'm here to support you. How are you feeling today?"
                        </div>
                    </Show>
                    <For
                        each=move || {
                            transcript.with(|t| {
                                t.messages().iter().cloned().enumerate().collect::<Vec<_>>()
                            })
                        }
                        key=|(i, _)| *i
                        let:entry
                    >
                        <div class=match entry.1.role {
                            ChatRole::User => "chat-bubble user",
                            ChatRole::Assistant => "chat-bubble assistant",
                        }>
                            {entry.1.content.clone()}
                        </div>
                    </For>
                    <Show when=move || is_typing.get()>
                        <div class="chat-bubble assistant typing">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </Show>
                    <Show when=move || pending_widget.get().is_some()>
                        <div class="chat-bubble assistant widget-offer">
                            <p>
                                {move || {
                                    let name = pending_widget
                                        .get()
                                        .map(|w| widget_display_name(&w))
                                        .unwrap_or_default();
                                    format!("Would you like to start the {name}?")
                                }}
                            </p>
                            <div class="widget-offer-actions">
                                <button class="primary" on:click=move |_| on_confirm.call(())>
                                    "Yes, let's do it"
                                </button>
                                <button on:click=move |_| on_decline.call(())>"No, thanks"</button>
                            </div>
                        </div>
                    </Show>
                    <Show when=move || active_widget.get().as_deref() == Some("mood_tracker")>
                        <div class="chat-bubble assistant mood-widget">
                            <p>"How are you feeling right now?"</p>
                            <div class="mood-widget-options">
                                {Mood::ALL
                                    .iter()
                                    .rev()
                                    .map(|mood| {
                                        let emoji = mood.emoji();
                                        view! {
                                            <button
                                                title=mood.label()
                                                on:click=move |_| {
                                                    on_send.call(format!("I am feeling {emoji}"))
                                                }
                                            >
                                                {emoji}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>
                    <div node_ref=bottom_ref></div>
                </div>
                <div class="chatbot-input">
                    <input
                        type="text"
                        prop:value=input
                        placeholder=move || {
                            if pending_widget.get().is_some() {
                                "Please select an option above..."
                            } else {
                                "Type a message..."
                            }
                        }
                        disabled=input_locked
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <button
                        class="primary"
                        disabled=input_locked
                        on:click=move |_| send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}

//! Daily mood check-in.

use leptos::*;
use mindspace_core::{Mood, MoodDraft, MoodInsights};

use crate::components::Toasts;
use crate::network::ApiClient;
use crate::pages::portal::require_user;
use crate::pages::PortalUi;
use crate::state::SessionState;

#[component]
pub fn MoodTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<PortalUi>();
    let toasts = expect_context::<Toasts>();
    let api = store_value(expect_context::<ApiClient>());

    let draft = create_rw_signal(MoodDraft::default());
    let (busy, set_busy) = create_signal(false);

    let save = move |_| {
        let Some(email) = require_user(session, ui, toasts) else {
            return;
        };
        let current = draft.get_untracked();
        let Some(mood) = current.mood else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let api = api.get_value();
            let result = api.save_mood(&email, mood, &current.note).await;
            match result {
                Ok(()) => {
                    toasts.success("Your mood has been saved!");
                    draft.update(|d| d.reset());
                    match api.mood_history(&email).await {
                        Ok(entries) => session.update(|s| s.mood_history = entries),
                        Err(err) => {
                            tracing::warn!(error = %err, "mood history refresh failed")
                        }
                    }
                }
                Err(err) => toasts.error(err.to_string()),
            }
            set_busy.set(false);
        });
    };

    let insights =
        move || session.with(|s| MoodInsights::from_entries(&s.mood_history));

    view! {
        <div class="mood-tab">
            <div class="card">
                <h3>"How are you feeling today?"</h3>
                <div class="mood-picker">
                    {Mood::ALL
                        .iter()
                        .map(|&mood| {
                            view! {
                                <button
                                    class="mood-option"
                                    class:selected=move || {
                                        draft.with(|d| d.mood == Some(mood))
                                    }
                                    on:click=move |_| draft.update(|d| d.mood = Some(mood))
                                >
                                    <span class="mood-emoji">{mood.emoji()}</span>
                                    <span>{mood.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || draft.with(|d| d.mood.is_some())>
                    <textarea
                        class="mood-note"
                        placeholder="What's on your mind? (optional)"
                        prop:value=move || draft.with(|d| d.note.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.note = event_target_value(&ev))
                        }
                    ></textarea>
                    <button
                        class="primary"
                        disabled=move || busy.get() || draft.with(|d| !d.can_save())
                        on:click=save
                    >
                        {move || if busy.get() { "Saving..." } else { "Save Mood Entry" }}
                    </button>
                </Show>
            </div>

            <div class="card">
                <h3>"Your Insights"</h3>
                <div class="insight-row">
                    <span>"Average mood"</span>
                    <div class="bar-container">
                        <div
                            class="bar-fill"
                            style=move || {
                                format!("width: {}%", insights().average_score.round())
                            }
                        ></div>
                    </div>
                    <span>{move || format!("{}%", insights().average_score.round())}</span>
                </div>
                <div class="insight-row">
                    <span>"Days tracked"</span>
                    <span class="insight-value">{move || insights().days_tracked}</span>
                </div>
                <div class="insight-row">
                    <span>"Current streak"</span>
                    <span class="insight-value">"3 days"</span>
                </div>
            </div>
        </div>
    }
}

//! Self-assessments and guided wellbeing activities.

use leptos::*;
use mindspace_core::{AssessmentFlow, AssessmentKind, ScorePoint, ANSWER_SCALE};

use crate::components::Toasts;
use crate::network::ApiClient;
use crate::pages::portal::require_user;
use crate::pages::PortalUi;
use crate::state::SessionState;

struct Activity {
    name: &'static str,
    blurb: &'static str,
    audio: &'static str,
}

const ACTIVITIES: [Activity; 3] = [
    Activity {
        name: "Guided Breathing",
        blurb: "3 min \u{2022} Deep breathing exercise",
        audio: "/sounds/breathing.mp3",
    },
    Activity {
        name: "Yoga Stretch",
        blurb: "5 min \u{2022} Simple yoga poses",
        audio: "/sounds/yoga.mp3",
    },
    Activity {
        name: "Mindful Walking",
        blurb: "10 min \u{2022} Focused walking activity",
        audio: "/sounds/walking.mp3",
    },
];

#[component]
pub fn AssessmentTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<PortalUi>();
    let toasts = expect_context::<Toasts>();
    let api = store_value(expect_context::<ApiClient>());

    let flow = create_rw_signal(AssessmentFlow::default());

    let start = move |kind: AssessmentKind| {
        if require_user(session, ui, toasts).is_none() {
            return;
        }
        flow.set(AssessmentFlow::open(kind));
        spawn_local(async move {
            // A failed or empty fetch only toasts; the flow stays in its
            // loading view and the dialog's close button remains the way out.
            match api.get_value().assessment_questions(kind).await {
                Ok(questions) if !questions.is_empty() => {
                    flow.update(|f| f.questions_loaded(questions))
                }
                Ok(_) => toasts.error("No questions available for this assessment."),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    let answer = move |value: u8| {
        let fire = flow.try_update(|f| f.answer(value)).unwrap_or(false);
        if !fire {
            return;
        }
        let Some(email) = session.with_untracked(|s| s.email().map(str::to_string)) else {
            return;
        };
        let (kind, answers) = match flow.get_untracked() {
            AssessmentFlow::Submitting { kind, answers, .. } => (kind, answers),
            _ => return,
        };
        spawn_local(async move {
            match api
                .get_value()
                .submit_assessment(kind, &email, &answers)
                .await
            {
                Ok(outcome) => {
                    let result = outcome
                        .result
                        .clone()
                        .unwrap_or_else(|| "Assessment completed.".to_string());
                    let point = outcome.score.map(|score| ScorePoint {
                        date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
                        score,
                    });
                    session.update(|s| {
                        s.record_outcome(kind, outcome.result.clone(), point)
                    });
                    flow.update(|f| f.submitted(result, outcome.score));
                }
                Err(err) => {
                    toasts.error(err.to_string());
                    flow.update(|f| f.submit_failed());
                }
            }
        });
    };

    let progress = move || session.with(|s| s.assessment_progress);

    view! {
        <div class="assessment-tab">
            <Show when={move || progress() > 0}>
                <div class="card progress-card">
                    <h3>"Today's Progress"</h3>
                    <div class="bar-container">
                        <div
                            class="bar-fill"
                            style=move || format!("width: {}%", progress())
                        ></div>
                    </div>
                </div>
            </Show>

            <div class="card-grid">
                {AssessmentKind::ALL
                    .iter()
                    .map(|&kind| {
                        view! {
                            <div class="card assessment-card">
                                <h3>{kind.title()}</h3>
                                <p>{kind.duration_hint()}</p>
                                <button class="primary" on:click=move |_| start(kind)>
                                    "Start Assessment"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <AssessmentModal flow=flow on_answer=answer/>

            <h3 class="section-heading">"Wellbeing Activities"</h3>
            <WellbeingActivities/>
        </div>
    }
}

/// Modal walking through the open assessment; one question at a time, no
/// backtracking.
#[component]
fn AssessmentModal(
    flow: RwSignal<AssessmentFlow>,
    #[prop(into)] on_answer: Callback<u8>,
) -> impl IntoView {
    view! {
        <Show when=move || flow.with(|f| f.is_open())>
            <div class="dialog-backdrop">
                <div class="dialog assessment-dialog">
                    <div class="dialog-header">
                        <h2>
                            {move || {
                                flow.with(|f| f.kind().map(|k| k.title()).unwrap_or_default())
                            }}
                        </h2>
                        <button class="dialog-close" on:click=move |_| flow.update(|f| f.close())>
                            "×"
                        </button>
                    </div>
                    {move || match flow.get() {
                        AssessmentFlow::Closed => ().into_view(),
                        AssessmentFlow::Loading { .. } => {
                            view! { <p class="dialog-status">"Loading questions..."</p> }
                                .into_view()
                        }
                        AssessmentFlow::InProgress {
                            questions, current, ..
                        } => {
                            let total = questions.len();
                            let question = questions[current].clone();
                            view! {
                                <div class="question-card">
                                    <p class="question-counter">
                                        {format!("Question {} of {total}", current + 1)}
                                    </p>
                                    <p class="question-text">{question}</p>
                                    <div class="answer-options">
                                        {ANSWER_SCALE
                                            .iter()
                                            .map(|option| {
                                                let value = option.value;
                                                view! {
                                                    <button on:click=move |_| on_answer.call(value)>
                                                        {option.label}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                            .into_view()
                        }
                        AssessmentFlow::Submitting { .. } => {
                            view! { <p class="dialog-status">"Submitting your answers..."</p> }
                                .into_view()
                        }
                        AssessmentFlow::Complete { result, .. } => {
                            view! {
                                <div class="assessment-complete">
                                    <h3>"Assessment Complete!"</h3>
                                    <p>{result}</p>
                                    <button
                                        class="primary"
                                        on:click=move |_| flow.update(|f| f.close())
                                    >
                                        "Done"
                                    </button>
                                </div>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

/// Audio-guided activities; completion is reported to the backend as a
/// logged activity.
#[component]
fn WellbeingActivities() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<PortalUi>();
    let toasts = expect_context::<Toasts>();
    let api = store_value(expect_context::<ApiClient>());

    let (active, set_active) = create_signal(None::<usize>);
    let (playing, set_playing) = create_signal(false);
    let audio_ref = create_node_ref::<html::Audio>();

    let open = move |index: usize| {
        if require_user(session, ui, toasts).is_none() {
            return;
        }
        set_playing.set(false);
        set_active.set(Some(index));
    };

    let close = move || {
        if let Some(audio) = audio_ref.get_untracked() {
            audio.pause().ok();
        }
        set_playing.set(false);
        set_active.set(None);
    };

    let toggle_playback = move |_| {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        if playing.get_untracked() {
            audio.pause().ok();
            set_playing.set(false);
        } else {
            let _ = audio.play();
            set_playing.set(true);
        }
    };

    let complete = move |_| {
        let Some(index) = active.get_untracked() else {
            return;
        };
        let Some(email) = session.with_untracked(|s| s.email().map(str::to_string)) else {
            return;
        };
        let name = ACTIVITIES[index].name;
        close();
        spawn_local(async move {
            match api.get_value().log_activity(&email, name).await {
                Ok(()) => toasts.success(format!("{name} activity logged!")),
                Err(_) => toasts.error("Failed to log activity."),
            }
        });
    };

    view! {
        <div class="card-grid">
            {ACTIVITIES
                .iter()
                .enumerate()
                .map(|(index, activity)| {
                    view! {
                        <div class="card activity-card">
                            <h3>{activity.name}</h3>
                            <p>{activity.blurb}</p>
                            <button on:click=move |_| open(index)>"Begin"</button>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <Show when=move || active.get().is_some()>
            <div class="dialog-backdrop">
                <div class="dialog activity-dialog">
                    <div class="dialog-header">
                        <h2>
                            {move || active.get().map(|i| ACTIVITIES[i].name).unwrap_or_default()}
                        </h2>
                        <button class="dialog-close" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>
                    <p>
                        {move || active.get().map(|i| ACTIVITIES[i].blurb).unwrap_or_default()}
                    </p>
                    <audio
                        node_ref=audio_ref
                        loop=true
                        src=move || {
                            active.get().map(|i| ACTIVITIES[i].audio).unwrap_or_default()
                        }
                    ></audio>
                    <div class="activity-actions">
                        <button on:click=toggle_playback>
                            {move || if playing.get() { "Pause" } else { "Play" }}
                        </button>
                        <button class="primary" on:click=complete>
                            "Mark as Complete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

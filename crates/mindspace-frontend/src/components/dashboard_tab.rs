//! Portal dashboard: mood timeline, recent check-ins, assessment trends.

use leptos::*;
use mindspace_core::AssessmentKind;

use crate::components::LineChart;
use crate::pages::portal::PortalTab;
use crate::pages::PortalUi;
use crate::state::SessionState;

#[component]
pub fn DashboardTab() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<PortalUi>();

    // Last seven check-ins, oldest first, scored 0..=100.
    let timeline = Signal::derive(move || {
        session.with(|s| {
            let entries = &s.mood_history;
            let start = entries.len().saturating_sub(7);
            entries[start..]
                .iter()
                .map(|e| {
                    (
                        e.timestamp.format("%m/%d").to_string(),
                        e.mood.score() as f64,
                    )
                })
                .collect::<Vec<_>>()
        })
    });

    let recent = move || {
        session.with(|s| {
            s.mood_history
                .iter()
                .rev()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="dashboard-tab">
            <div class="card">
                <h3>"Mood Timeline"</h3>
                <Show
                    when=move || !timeline.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No mood data yet."</p> }
                >
                    <LineChart points=timeline max=100.0/>
                </Show>
            </div>

            <div class="dashboard-row">
                <div class="card">
                    <h3>"Recent Check-ins"</h3>
                    <Show
                        when=move || !recent().is_empty()
                        fallback=|| view! { <p class="empty-state">"No check-ins recorded yet."</p> }
                    >
                        <ul class="recent-entries">
                            {move || {
                                recent()
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <li>
                                                <span class="entry-emoji">{entry.mood.emoji()}</span>
                                                <span class="entry-mood">{entry.mood.label()}</span>
                                                <span class="entry-date">
                                                    {entry.timestamp.format("%b %d, %Y").to_string()}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>

                <div class="card">
                    <h3>"Quick Actions"</h3>
                    <div class="quick-actions">
                        <button on:click=move |_| ui.active_tab.set(PortalTab::Mood)>
                            "📝 Log Your Mood"
                        </button>
                        <button on:click=move |_| ui.active_tab.set(PortalTab::Assessment)>
                            "🧠 Take an Assessment"
                        </button>
                        <button on:click=move |_| ui.active_tab.set(PortalTab::Resources)>
                            "📚 Browse Resources"
                        </button>
                    </div>
                </div>

                <div class="card">
                    <h3>"Wellness Goals"</h3>
                    <ul class="goal-list">
                        <li>"Check in with your mood daily"</li>
                        <li>"Complete one self-assessment this week"</li>
                        <li>"Try a guided breathing exercise"</li>
                    </ul>
                </div>
            </div>

            <div class="dashboard-row">
                <ScoreCard kind=AssessmentKind::Anxiety color="#f59e42"/>
                <ScoreCard kind=AssessmentKind::Depression color="#3b82f6"/>
                <ScoreCard kind=AssessmentKind::Stress color="#ec4899"/>
            </div>
        </div>
    }
}

/// Score trend for one assessment kind, plotted against its own ceiling.
#[component]
fn ScoreCard(kind: AssessmentKind, color: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let points = Signal::derive(move || {
        session.with(|s| {
            s.score_history
                .series(kind)
                .iter()
                .map(|p| (p.date.clone(), p.score as f64))
                .collect::<Vec<_>>()
        })
    });
    let latest = move || session.with(|s| s.latest_results.get(kind).map(str::to_string));

    view! {
        <div class="card score-card">
            <h3>{kind.title()}</h3>
            <Show
                when=move || !points.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No assessments completed yet."</p> }
            >
                <LineChart points=points max=kind.score_ceiling() as f64 color=color/>
            </Show>
            <Show when=move || latest().is_some()>
                <p class="latest-result">{latest}</p>
            </Show>
        </div>
    }
}

//! The client-facing portal page.
//!
//! Owns the session, the chatbot transcript, and the auth dialogs; the tab
//! components pull what they need from context. Every tab body stays mounted
//! and is merely hidden when inactive so in-flight flows survive tab
//! switches.

use leptos::*;
use mindspace_core::{is_conversational_widget, ChatTranscript, User};

use crate::components::{
    AssessmentTab, CommunityTab, CrisisChatbot, DashboardTab, LoginDialog, MoodTab,
    RegisterDialog, ResourcesTab, Toasts,
};
use crate::config::AppConfig;
use crate::network::ApiClient;
use crate::state::SessionState;
use crate::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalTab {
    Dashboard,
    Mood,
    Assessment,
    Resources,
    Community,
}

impl PortalTab {
    pub const ALL: [PortalTab; 5] = [
        PortalTab::Dashboard,
        PortalTab::Mood,
        PortalTab::Assessment,
        PortalTab::Resources,
        PortalTab::Community,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PortalTab::Dashboard => "Dashboard",
            PortalTab::Mood => "Mood Check",
            PortalTab::Assessment => "Self-Assessment",
            PortalTab::Resources => "Resources",
            PortalTab::Community => "Community",
        }
    }
}

/// Portal-wide UI handles, shared with the tab components through context.
#[derive(Clone, Copy)]
pub struct PortalUi {
    pub active_tab: RwSignal<PortalTab>,
    pub login_open: RwSignal<bool>,
    pub register_open: RwSignal<bool>,
}

impl PortalUi {
    fn new() -> Self {
        Self {
            active_tab: create_rw_signal(PortalTab::Mood),
            login_open: create_rw_signal(false),
            register_open: create_rw_signal(false),
        }
    }
}

/// Gate for actions that need an account: hands back the signed-in email, or
/// nudges the visitor towards the login dialog.
pub fn require_user(
    session: RwSignal<SessionState>,
    ui: PortalUi,
    toasts: Toasts,
) -> Option<String> {
    match session.with_untracked(|s| s.email().map(str::to_string)) {
        Some(email) => Some(email),
        None => {
            toasts.error("Please log in to use this feature.");
            ui.login_open.set(true);
            None
        }
    }
}

/// Pulls both backend-held histories into the session.
fn refresh_histories(api: ApiClient, session: RwSignal<SessionState>, email: String) {
    spawn_local(async move {
        match api.mood_history(&email).await {
            Ok(entries) => session.update(|s| s.mood_history = entries),
            Err(err) => tracing::warn!(error = %err, "mood history fetch failed"),
        }
        match api.assessment_history(&email).await {
            Ok(history) => session.update(|s| s.score_history = history),
            Err(err) => tracing::warn!(error = %err, "assessment history fetch failed"),
        }
    });
}

#[component]
pub fn Portal() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<Toasts>();
    let api = store_value(expect_context::<ApiClient>());

    let session = create_rw_signal(SessionState::default());
    let ui = PortalUi::new();
    provide_context(session);
    provide_context(ui);

    let storage_key = store_value(config.user_storage_key.clone());

    // Restore the remembered user once on mount.
    if let Some(user) = storage::load_user(&config.user_storage_key) {
        let email = user.email.clone();
        session.update(|s| s.sign_in(user));
        ui.active_tab.set(PortalTab::Dashboard);
        refresh_histories(api.get_value(), session, email);
    }

    let on_authed = Callback::new(move |user: User| {
        if let Err(err) = storage::save_user(&storage_key.get_value(), &user) {
            tracing::warn!(error = %err, "failed to persist user record");
        }
        let email = user.email.clone();
        session.update(|s| s.sign_in(user));
        ui.active_tab.set(PortalTab::Dashboard);
        refresh_histories(api.get_value(), session, email);
    });

    let sign_out = move |_| {
        storage::clear_user(&storage_key.get_value());
        session.update(|s| s.sign_out());
        ui.active_tab.set(PortalTab::Mood);
        toasts.success("You have been signed out.");
    };

    // Chatbot state; the widget itself is purely presentational.
    let transcript = create_rw_signal(ChatTranscript::default());
    let (is_typing, set_is_typing) = create_signal(false);
    let (pending_widget, set_pending_widget) = create_signal(None::<String>);
    let (active_widget, set_active_widget) = create_signal(None::<String>);

    let on_send = Callback::new(move |text: String| {
        let Some(email) = require_user(session, ui, toasts) else {
            return;
        };
        set_active_widget.set(None);
        transcript.update(|t| t.push_user(text));
        set_is_typing.set(true);
        let messages = transcript.with_untracked(|t| t.messages().to_vec());
        spawn_local(async move {
            let result = api.get_value().chat(&email, &messages).await;
            set_is_typing.set(false);
            match result {
                Ok(reply) => {
                    transcript.update(|t| t.push_assistant(reply.text()));
                    if let Some(widget) = reply.widget_type {
                        if !is_conversational_widget(&widget) {
                            set_pending_widget.set(Some(widget));
                        }
                    }
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_confirm = Callback::new(move |_| {
        let Some(widget) = pending_widget.get_untracked() else {
            return;
        };
        set_pending_widget.set(None);
        set_active_widget.set(Some(widget.clone()));
        let Some(email) = session.with_untracked(|s| s.email().map(str::to_string)) else {
            return;
        };
        spawn_local(async move {
            if api.get_value().log_activity(&email, &widget).await.is_err() {
                toasts.error("Failed to log activity.");
            }
        });
    });

    let on_decline = Callback::new(move |_| {
        set_pending_widget.set(None);
        transcript.update(|t| {
            t.push_assistant("No problem. I'm here whenever you want to talk.")
        });
    });

    let user_name = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()));

    view! {
        <div class="portal">
            <header class="portal-header">
                <div class="brand">
                    <h1>"MindSpace"</h1>
                    <p>"Your mental wellness companion"</p>
                </div>
                <div class="auth-area">
                    <Show
                        when=move || session.with(|s| s.user.is_some())
                        fallback=move || {
                            view! {
                                <button on:click=move |_| ui.login_open.set(true)>
                                    "Sign In"
                                </button>
                                <button
                                    class="primary"
                                    on:click=move |_| ui.register_open.set(true)
                                >
                                    "Get Started"
                                </button>
                            }
                        }
                    >
                        <span class="signed-in-as">{user_name}</span>
                        <button on:click=sign_out>"Sign Out"</button>
                    </Show>
                </div>
            </header>

            <section class="welcome">
                <Show
                    when=move || session.with(|s| s.user.is_some())
                    fallback=|| {
                        view! {
                            <h2>"Welcome to Your Safe Space"</h2>
                            <p>
                                "Track your mood, check in with yourself, and find \
                                 support whenever you need it."
                            </p>
                        }
                    }
                >
                    <h2>{move || format!("Welcome back, {}", user_name().unwrap_or_default())}</h2>
                </Show>
            </section>

            <nav class="tab-nav">
                {PortalTab::ALL
                    .iter()
                    .map(|&tab| {
                        view! {
                            <button
                                class:active=move || ui.active_tab.get() == tab
                                on:click=move |_| ui.active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <main class="tab-body">
                <div class:hidden=move || ui.active_tab.get() != PortalTab::Dashboard>
                    <DashboardTab/>
                </div>
                <div class:hidden=move || ui.active_tab.get() != PortalTab::Mood>
                    <MoodTab/>
                </div>
                <div class:hidden=move || ui.active_tab.get() != PortalTab::Assessment>
                    <AssessmentTab/>
                </div>
                <div class:hidden=move || ui.active_tab.get() != PortalTab::Resources>
                    <ResourcesTab/>
                </div>
                <div class:hidden=move || ui.active_tab.get() != PortalTab::Community>
                    <CommunityTab/>
                </div>
            </main>

            <footer class="portal-footer">
                <div class="footer-badges">
                    <span>"🔒 100% Anonymous"</span>
                    <span>"💚 Stigma-Free"</span>
                    <span>"🤝 Community Support"</span>
                </div>
                <p>"Your data stays private. We never share it with anyone."</p>
                <div class="footer-links">
                    <a href="https://988lifeline.org" target="_blank" rel="noopener">
                        "988 Lifeline"
                    </a>
                    <a href="https://www.crisistextline.org" target="_blank" rel="noopener">
                        "Crisis Text Line"
                    </a>
                </div>
            </footer>

            <LoginDialog open=ui.login_open on_authed=on_authed/>
            <RegisterDialog open=ui.register_open on_authed=on_authed/>

            <CrisisChatbot
                transcript=transcript
                is_typing=is_typing
                pending_widget=pending_widget
                active_widget=active_widget
                on_send=on_send
                on_confirm=on_confirm
                on_decline=on_decline
            />
        </div>
    }
}

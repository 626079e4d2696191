//! Login and registration dialogs.

use leptos::*;
use mindspace_core::User;

use crate::components::Toasts;
use crate::network::ApiClient;

/// Email/password login dialog. Stays mounted; `open` toggles visibility so
/// field contents survive while the portal re-renders around it.
#[component]
pub fn LoginDialog(open: RwSignal<bool>, #[prop(into)] on_authed: Callback<User>) -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());
    let toasts = expect_context::<Toasts>();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = api
                .get_value()
                .login(&email.get_untracked(), &password.get_untracked())
                .await;
            set_busy.set(false);
            match result {
                Ok(user) => {
                    toasts.success(format!("Welcome back, {}!", user.name));
                    set_email.set(String::new());
                    set_password.set(String::new());
                    open.set(false);
                    on_authed.call(user);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" class:hidden=move || !open.get()>
            <div class="dialog">
                <div class="dialog-header">
                    <h2>"Welcome Back"</h2>
                    <button class="dialog-close" on:click=move |_| open.set(false)>
                        "×"
                    </button>
                </div>
                <form on:submit=submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="primary" disabled=busy>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Account creation dialog; on success the new user is signed in directly.
#[component]
pub fn RegisterDialog(
    open: RwSignal<bool>,
    #[prop(into)] on_authed: Callback<User>,
) -> impl IntoView {
    let api = store_value(expect_context::<ApiClient>());
    let toasts = expect_context::<Toasts>();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = api
                .get_value()
                .register(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                )
                .await;
            set_busy.set(false);
            match result {
                Ok(user) => {
                    toasts.success(format!(
                        "Welcome, {}! Your account has been created.",
                        user.name
                    ));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    open.set(false);
                    on_authed.call(user);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" class:hidden=move || !open.get()>
            <div class="dialog">
                <div class="dialog-header">
                    <h2>"Create Your Account"</h2>
                    <button class="dialog-close" on:click=move |_| open.set(false)>
                        "×"
                    </button>
                </div>
                <form on:submit=submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            required
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="primary" disabled=busy>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

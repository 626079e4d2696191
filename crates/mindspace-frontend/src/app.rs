//! Application shell and routing.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{Toaster, Toasts};
use crate::config::AppConfig;
use crate::network::ApiClient;
use crate::pages::{AdminDashboard, Portal};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    provide_context(ApiClient::new(config.api_base.clone()));
    provide_context(config);
    provide_context(Toasts::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/mindspace-frontend.css"/>
        <Title text="MindSpace"/>

        <Router>
            <Routes>
                <Route path="/" view=Portal/>
                <Route path="/admin" view=AdminDashboard/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>

        <Toaster/>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to MindSpace"</a>
        </div>
    }
}

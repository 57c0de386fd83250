//! Connection page: who is operating the admin and which backend it talks to.

use contracts::shared::config::{AppConfig, BackendConfig};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::config;
use crate::system::auth::context::{do_login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let current = config::load_config();
    let (operator, set_operator) = signal(String::new());
    let (url, set_url) = signal(current.backend.url.clone());
    let (anon_key, set_anon_key) = signal(current.backend.anon_key.clone());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let session = use_session();
    let navigate = use_navigate();

    let forget_connection = move |_| {
        config::clear_config();
        let fallback = config::load_config();
        set_url.set(fallback.backend.url);
        set_anon_key.set(fallback.backend.anon_key);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let backend = AppConfig {
            backend: BackendConfig::new(&url.get_untracked(), &anon_key.get_untracked()),
        };
        match do_login(session, &operator.get_untracked(), &backend) {
            Ok(()) => navigate("/", Default::default()),
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Headless CMS"</h1>
                <h2>"Connect to your backend"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="operator">"Your name"</label>
                        <input
                            type="text"
                            id="operator"
                            placeholder="Jane Smith"
                            prop:value=move || operator.get()
                            on:input=move |ev| set_operator.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="backend-url">"Backend URL"</label>
                        <input
                            type="url"
                            id="backend-url"
                            placeholder="https://project.supabase.co"
                            prop:value=move || url.get()
                            on:input=move |ev| set_url.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="anon-key">"Anon key"</label>
                        <input
                            type="password"
                            id="anon-key"
                            placeholder="eyJhbGciOi..."
                            prop:value=move || anon_key.get()
                            on:input=move |ev| set_anon_key.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary">"Connect"</button>
                </form>

                <div class="login-info">
                    <p>"The connection is kept in this browser only."</p>
                    <button type="button" class="btn-link" on:click=forget_connection>
                        "Forget saved connection"
                    </button>
                </div>
            </div>
        </div>
    }
}

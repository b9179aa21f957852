use leptos::prelude::*;

use crate::domain::a001_order::context::use_orders;

#[component]
pub fn LoginPage() -> impl IntoView {
    let orders = use_orders();
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);

    let is_loading = move || orders.state.with(|s| s.is_authenticating());
    let error_message = move || orders.state.with(|s| s.login_error().map(|e| e.message()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        orders.login(password.get_untracked());
    };

    let toggle_visibility = move || set_show_password.update(|shown| *shown = !*shown);

    view! {
        <div class="login-container" id="login-section">
            <div class="login-box">
                <h1>"অ্যাডমিন লগইন"</h1>

                <form on:submit=on_submit>
                    <div class="form-group password-group">
                        <label for="password">"পাসওয়ার্ড"</label>
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=is_loading
                        />
                        <span
                            class="toggle-password"
                            id="toggle-password"
                            role="button"
                            tabindex="0"
                            on:click=move |_| toggle_visibility()
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" || ev.key() == " " {
                                    ev.prevent_default();
                                    toggle_visibility();
                                }
                            }
                        >
                            {move || if show_password.get() { "🙈" } else { "👁️" }}
                        </span>
                    </div>

                    <button type="submit" class="btn-primary" id="login-btn" disabled=is_loading>
                        "লগইন"
                    </button>
                </form>

                <Show when=move || error_message().is_some()>
                    <div class="error-message" id="login-error">
                        {move || error_message().unwrap_or_default()}
                    </div>
                </Show>
            </div>
        </div>
    }
}

use crate::domain::a001_order::context::OrdersContext;
use crate::domain::a001_order::ui::list::OrderList;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::theme::ThemeProvider;
use crate::system::pages::LoginPage;
use leptos::prelude::*;

fn set_document_lang() {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.set_attribute("lang", "bn");
    }
}

#[component]
pub fn App() -> impl IntoView {
    set_document_lang();

    let config = AppConfig::load();
    let orders = OrdersContext::provide(config);

    view! {
        <ThemeProvider>
            <Show when=move || orders.is_busy()>
                <div class="loading-spinner" id="loading-spinner"></div>
            </Show>
            <Show
                when=move || orders.is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                <Shell>
                    <OrderList />
                </Shell>
            </Show>
        </ThemeProvider>
    }
}

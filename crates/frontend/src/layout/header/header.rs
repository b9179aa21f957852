use crate::domain::a001_order::context::use_orders;
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, DarkModeToggle};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let orders = use_orders();
    let theme = use_theme();

    let logout = move |_| {
        orders.logout();
        theme.reset();
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                {icon("orders")}
                <span class="header__title">"অর্ডার ম্যানেজমেন্ট"</span>
                <span class="header__total" id="total-orders">
                    {move || format!("মোট অর্ডার: {}", orders.state.with(|s| s.total_matching()))}
                </span>
            </div>
            <div class="header__actions">
                <DarkModeToggle />
                <button class="button button--ghost" id="logout-btn" on:click=logout>
                    {icon("logout")}
                    " লগআউট"
                </button>
            </div>
        </header>
    }
}

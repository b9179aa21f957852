pub mod header;

use header::Header;
use leptos::prelude::*;

/// Admin panel frame: header bar above the page content
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" id="admin-panel">
            <Header />
            <main class="app-content">{children()}</main>
        </div>
    }
}

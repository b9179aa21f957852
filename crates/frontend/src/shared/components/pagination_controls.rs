use leptos::prelude::*;

/// Numbered page buttons, 1-based. Renders nothing for a single page.
#[component]
pub fn PaginationControls(
    /// Текущая страница (с 1)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Всего страниц
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback при смене страницы
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls" id="pagination">
            {move || {
                let total = total_pages.get();
                if total <= 1 {
                    return Vec::new();
                }
                let current = current_page.get();
                (1..=total)
                    .map(|page| {
                        let class = if page == current { "page-btn active" } else { "page-btn" };
                        view! {
                            <button class=class on:click=move |_| on_page_change.run(page)>
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

pub mod gate;
pub mod projection;
pub mod row;
pub mod state;

use self::row::OrderRow;
use crate::domain::a001_order::context::use_orders;
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::{filter_date_value, parse_filter_date};
use crate::shared::modal::ConfirmModal;
use contracts::domain::a001_order::OrderStatus;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let ctx = use_orders();
    let state = ctx.state;

    let page = Memo::new(move |_| state.with(|s| s.current_page()));
    // Строки пересоздаются при каждом увеличении revision в контроллере
    let rows = Memo::new(move |_| {
        let revision = state.with(|s| s.revision());
        page.get()
            .orders
            .into_iter()
            .map(|order| ((revision, order.row_ref), order))
            .collect::<Vec<_>>()
    });

    let status_filter = Memo::new(move |_| state.with(|s| s.criteria().status));
    let prompt = Memo::new(move |_| state.with(|s| s.pending_update().map(|u| u.prompt())));

    view! {
        <div class="order-list">
            <div class="filter-bar">
                <input
                    type="search"
                    id="search-input"
                    placeholder="নাম, ফোন বা অর্ডার ID দিয়ে খুঁজুন"
                    prop:value=move || state.with(|s| s.criteria().query.clone())
                    on:input=move |ev| ctx.set_query(event_target_value(&ev))
                />
                <select
                    id="status-filter"
                    on:change=move |ev| {
                        ctx.set_status_filter(OrderStatus::from_code(&event_target_value(&ev)))
                    }
                >
                    <option value="" selected=move || status_filter.get().is_none()>
                        "সব স্ট্যাটাস"
                    </option>
                    {OrderStatus::all()
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option
                                    value=status.code()
                                    selected=move || status_filter.get() == Some(status)
                                >
                                    {status.code()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    type="date"
                    id="date-filter"
                    prop:value=move || state.with(|s| filter_date_value(s.criteria().date))
                    on:change=move |ev| ctx.set_date_filter(parse_filter_date(&event_target_value(&ev)))
                />
            </div>

            <div class="table-container">
                <table class="orders-table">
                    <thead>
                        <tr>
                            <th>"তারিখ ও সময়"</th>
                            <th>"নাম"</th>
                            <th>"ঠিকানা"</th>
                            <th>"ফোন"</th>
                            <th>"ডিটেইলস"</th>
                            <th>"অর্ডার ID"</th>
                            <th>"স্ট্যাটাস"</th>
                            <th>"একশন"</th>
                        </tr>
                    </thead>
                    <tbody id="orders-table-body">
                        <For
                            each=move || rows.get()
                            key=|(key, _)| *key
                            children=move |(_, order)| view! { <OrderRow order=order /> }
                        />
                    </tbody>
                </table>
            </div>

            {move || {
                state.with(|s| s.banner()).map(|text| view! {
                    <div class="no-orders-message" id="no-orders-message">{text}</div>
                })
            }}

            <PaginationControls
                current_page=Signal::derive(move || page.get().page)
                total_pages=Signal::derive(move || page.get().page_count)
                on_page_change=Callback::new(move |p| ctx.set_page(p))
            />

            {move || {
                prompt.get().map(|message| view! {
                    <ConfirmModal
                        message=message
                        on_confirm=Callback::new(move |_| ctx.confirm())
                        on_cancel=Callback::new(move |_| ctx.cancel_pending())
                    />
                })
            }}
        </div>
    }
}

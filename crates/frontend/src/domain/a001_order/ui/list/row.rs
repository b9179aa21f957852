use contracts::domain::a001_order::{Order, OrderStatus};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use crate::domain::a001_order::context::use_orders;
use crate::shared::date_utils::{format_order_timestamp, BrowserZone};

/// One table row. The selector value is local until the operator presses
/// "Update"; the next reload rebuilds the row from server data.
#[component]
#[allow(non_snake_case)]
pub fn OrderRow(order: Order) -> impl IntoView {
    let ctx = use_orders();
    let row_ref = order.row_ref;
    let selected = RwSignal::new(initial_status(&order));
    let placed_at = format_order_timestamp(&order.timestamp, &BrowserZone);

    view! {
        <tr>
            <td data-label="তারিখ ও সময়">{placed_at}</td>
            <td data-label="নাম">{order.customer_name}</td>
            <td data-label="ঠিকানা">{order.address}</td>
            <td data-label="ফোন">{order.phone_number}</td>
            <td data-label="ডিটেইলস"><div class="details">{order.details}</div></td>
            <td data-label="অর্ডার ID">{order.order_id}</td>
            <td data-label="স্ট্যাটাস">
                <select
                    class=move || format!("status-select {}", selected.get().css_class())
                    id=format!("status-{}", row_ref.as_string())
                    prop:value=move || selected.get().code()
                    on:change=move |ev| {
                        if let Some(status) = OrderStatus::from_code(&event_target_value(&ev)) {
                            selected.set(status);
                        }
                    }
                >
                    // `selected` на каждом option: prop:value на select
                    // выставляется раньше, чем появляются дочерние option
                    {OrderStatus::all()
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option
                                    value=status.code()
                                    selected=move || is_chosen(selected.get(), status)
                                >
                                    {status.code()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td data-label="একশন">
                <button
                    class="update-btn"
                    on:click=move |_| ctx.request_status_change(row_ref, selected.get_untracked())
                >
                    "Update"
                </button>
            </td>
        </tr>
    }
}

/// Status the row selector starts on; rows without one read as pending
pub fn initial_status(order: &Order) -> OrderStatus {
    order.status.unwrap_or(OrderStatus::Pending)
}

fn is_chosen(current: OrderStatus, option: OrderStatus) -> bool {
    current == option
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::RowRef;

    fn order(status: Option<OrderStatus>) -> Order {
        Order {
            order_id: "A1".into(),
            customer_name: "Rahim".into(),
            address: "Dhaka".into(),
            phone_number: "017".into(),
            details: String::new(),
            timestamp: "2024-05-01T10:00:00Z".into(),
            status,
            row_ref: RowRef(2),
        }
    }

    fn chosen(current: OrderStatus) -> Vec<OrderStatus> {
        OrderStatus::all()
            .into_iter()
            .filter(|option| is_chosen(current, *option))
            .collect()
    }

    #[test]
    fn test_selector_starts_on_server_status() {
        let status = initial_status(&order(Some(OrderStatus::Shipped)));
        assert_eq!(status, OrderStatus::Shipped);
        assert_eq!(chosen(status), vec![OrderStatus::Shipped]);
    }

    #[test]
    fn test_selector_defaults_to_pending() {
        let status = initial_status(&order(None));
        assert_eq!(status, OrderStatus::Pending);
        assert_eq!(chosen(status), vec![OrderStatus::Pending]);
    }

    #[test]
    fn test_exactly_one_option_is_marked() {
        for current in OrderStatus::all() {
            assert_eq!(chosen(current), vec![current]);
        }
    }
}

//! Filter and page projection of the order list.

use chrono::NaiveDate;
use contracts::domain::a001_order::{Order, OrderStatus};

use crate::shared::date_utils::LocalZone;
use crate::shared::list_utils::{page_count, page_slice};

/// Заказов на странице
pub const PAGE_SIZE: usize = 8;

/// Критерии поиска, статуса и даты; непустые объединяются через AND
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub status: Option<OrderStatus>,
    pub date: Option<NaiveDate>,
}

impl FilterCriteria {
    fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    fn matches_with(&self, order: &Order, query_lower: &str, zone: &impl LocalZone) -> bool {
        if !order.matches_query(query_lower) {
            return false;
        }
        if let Some(status) = self.status {
            if order.status != Some(status) {
                return false;
            }
        }
        if let Some(date) = self.date {
            let on_date = order
                .timestamp_utc()
                .map(|ts| zone.local_date(&ts) == date)
                .unwrap_or(false);
            if !on_date {
                return false;
            }
        }
        true
    }
}

/// Позиции (в `orders`) подходящих заказов в порядке загрузки
pub fn filter_positions(
    orders: &[Order],
    criteria: &FilterCriteria,
    zone: &impl LocalZone,
) -> Vec<usize> {
    let query_lower = criteria.normalized_query();
    orders
        .iter()
        .enumerate()
        .filter(|(_, order)| criteria.matches_with(order, &query_lower, zone))
        .map(|(pos, _)| pos)
        .collect()
}

/// Одна страница отфильтрованного списка
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    /// Нумерация с 1
    pub page: usize,
    /// Подходящих заказов на всех страницах
    pub total: usize,
    pub page_count: usize,
}

impl OrderPage {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// A single page (or none) needs no controls
    pub fn shows_pagination(&self) -> bool {
        self.page_count > 1
    }
}

/// Вырезать страницу `page` из уже отфильтрованных позиций
pub fn page_of(orders: &[Order], filtered: &[usize], page: usize) -> OrderPage {
    OrderPage {
        orders: page_slice(filtered, page, PAGE_SIZE)
            .iter()
            .filter_map(|pos| orders.get(*pos).cloned())
            .collect(),
        page,
        total: filtered.len(),
        page_count: page_count(filtered.len(), PAGE_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use contracts::domain::a001_order::RowRef;

    fn project(
        orders: &[Order],
        criteria: &FilterCriteria,
        page: usize,
        zone: &impl LocalZone,
    ) -> OrderPage {
        page_of(orders, &filter_positions(orders, criteria, zone), page)
    }

    fn zone() -> FixedOffset {
        FixedOffset::east_opt(6 * 3600).unwrap()
    }

    fn order(row: u64, id: &str, name: &str, phone: &str, status: OrderStatus, ts: &str) -> Order {
        Order {
            order_id: id.to_string(),
            customer_name: name.to_string(),
            address: String::new(),
            phone_number: phone.to_string(),
            details: String::new(),
            timestamp: ts.to_string(),
            status: Some(status),
            row_ref: RowRef(row),
        }
    }

    fn sample(n: u64) -> Vec<Order> {
        (0..n)
            .map(|i| {
                let status = OrderStatus::all()[(i % 4) as usize];
                order(
                    i + 2,
                    &format!("ORD-{}", i),
                    if i % 3 == 0 { "Rahim Ahmed" } else { "Salma Begum" },
                    &format!("0171{:04}", i),
                    status,
                    &format!("2024-03-{:02}T04:00:00Z", 1 + (i % 5)),
                )
            })
            .collect()
    }

    fn ids(page: &OrderPage) -> Vec<&str> {
        page.orders.iter().map(|o| o.order_id.as_str()).collect()
    }

    #[test]
    fn test_status_filter_scenario() {
        let orders = vec![
            order(2, "A1", "", "", OrderStatus::Pending, ""),
            order(3, "A2", "", "", OrderStatus::Shipped, ""),
        ];
        let criteria = FilterCriteria {
            status: Some(OrderStatus::Shipped),
            ..Default::default()
        };
        let page = project(&orders, &criteria, 1, &zone());
        assert_eq!(ids(&page), vec!["A2"]);
        assert_eq!(page.total, 1);
        assert!(!page.shows_pagination());
    }

    #[test]
    fn test_text_query_sound_and_complete() {
        let orders = sample(30);
        for query in ["rahim", "SALMA", "ord-1", "01710", "  begum ", "zzz"] {
            let criteria = FilterCriteria {
                query: query.to_string(),
                ..Default::default()
            };
            let needle = query.trim().to_lowercase();
            let kept = filter_positions(&orders, &criteria, &zone());
            for (pos, o) in orders.iter().enumerate() {
                let hit = [&o.customer_name, &o.phone_number, &o.order_id]
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle));
                assert_eq!(kept.contains(&pos), hit, "query {:?} order {}", query, o.order_id);
            }
        }
    }

    #[test]
    fn test_single_dimension_never_grows() {
        let orders = sample(25);
        let single = [
            FilterCriteria {
                query: "a".into(),
                ..Default::default()
            },
            FilterCriteria {
                status: Some(OrderStatus::Delivered),
                ..Default::default()
            },
            FilterCriteria {
                date: NaiveDate::from_ymd_opt(2024, 3, 2),
                ..Default::default()
            },
        ];
        for criteria in single {
            assert!(filter_positions(&orders, &criteria, &zone()).len() <= orders.len());
        }
    }

    #[test]
    fn test_date_filter_uses_local_calendar_day() {
        let orders = vec![
            order(2, "late", "", "", OrderStatus::Pending, "2024-03-05T20:00:00Z"),
            order(3, "early", "", "", OrderStatus::Pending, "2024-03-05T02:00:00Z"),
            order(4, "broken", "", "", OrderStatus::Pending, "yesterday"),
        ];
        let criteria = FilterCriteria {
            date: NaiveDate::from_ymd_opt(2024, 3, 6),
            ..Default::default()
        };
        // 20:00 UTC is already the 6th at UTC+6
        assert_eq!(ids(&project(&orders, &criteria, 1, &zone())), vec!["late"]);

        let utc = FixedOffset::east_opt(0).unwrap();
        assert!(project(&orders, &criteria, 1, &utc).is_empty());
    }

    #[test]
    fn test_criteria_are_anded() {
        let orders = sample(40);
        let criteria = FilterCriteria {
            query: "rahim".into(),
            status: Some(OrderStatus::Pending),
            date: None,
        };
        let page = project(&orders, &criteria, 1, &zone());
        assert!(page
            .orders
            .iter()
            .all(|o| o.customer_name == "Rahim Ahmed" && o.status == Some(OrderStatus::Pending)));
        assert!(!page.is_empty());
    }

    #[test]
    fn test_pages_concatenate_to_filtered_set() {
        for n in [0u64, 1, 7, 8, 9, 16, 17, 45] {
            let orders = sample(n);
            let criteria = FilterCriteria::default();
            let filtered = filter_positions(&orders, &criteria, &zone());
            let count = page_of(&orders, &filtered, 1).page_count;
            assert_eq!(count, (n as usize).div_ceil(PAGE_SIZE));

            let mut joined = Vec::new();
            for p in 1..=count {
                let page = page_of(&orders, &filtered, p);
                assert!(page.orders.len() <= PAGE_SIZE);
                joined.extend(page.orders);
            }
            assert_eq!(joined, orders);
            assert_eq!(page_of(&orders, &filtered, 1).shows_pagination(), n as usize > PAGE_SIZE);
        }
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let orders = sample(10);
        let page = project(&orders, &FilterCriteria::default(), 3, &zone());
        assert!(page.is_empty());
        assert_eq!(page.total, 10);
        assert_eq!(page.page_count, 2);
    }
}

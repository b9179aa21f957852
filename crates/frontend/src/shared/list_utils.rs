//! Арифметика страниц (нумерация с 1) для табличных представлений.

/// Сколько страниц нужно для `total` элементов
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Элементы страницы `page` (с 1); пусто, если страница за концом списка
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 8), 0);
        assert_eq!(page_count(8, 8), 1);
        assert_eq!(page_count(9, 8), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_page_slice_bounds() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(page_slice(&items, 1, 4), &[1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 3, 4), &[9, 10]);
        assert!(page_slice(&items, 4, 4).is_empty());
        assert_eq!(page_slice(&items, 0, 4), &[1, 2, 3, 4]);
    }
}

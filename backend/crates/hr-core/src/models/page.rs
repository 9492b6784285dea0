use serde::Serialize;

/// One page of results plus the totals needed to navigate the rest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> i64 {
        total_pages(self.total_elements, self.size)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

pub(crate) fn total_pages(total_elements: i64, size: i64) -> i64 {
    if size <= 0 || total_elements <= 0 {
        return 0;
    }
    (total_elements + size - 1) / size
}

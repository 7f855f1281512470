/// List helpers shared by the tables: text search and column sorting
use std::cmp::Ordering;

/// Case-insensitive substring match; a blank term matches everything
pub fn matches_term(text: &str, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || text.to_lowercase().contains(&term)
}

/// Rows that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort in place by the given column
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Compare optional numbers; missing values sort first
pub fn cmp_opt_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare optional text case-insensitively; missing values sort first
pub fn cmp_opt_str(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Current sort column and direction of a table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<String>,
    pub ascending: bool,
}

impl SortState {
    /// Clicking the active column flips direction, another column starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.ascending = !self.ascending;
        } else {
            self.field = Some(field.to_string());
            self.ascending = true;
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        get_sort_indicator(self.field.as_deref().unwrap_or(""), field, self.ascending)
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

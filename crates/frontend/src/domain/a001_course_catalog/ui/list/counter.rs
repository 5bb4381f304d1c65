//! Подсчёт курсов по категориям (для счётчиков на кнопках фильтров)

use crate::shared::text::normalize;
use contracts::domain::a001_course::aggregate::{Course, ALL_FILTER_ID};
use std::collections::HashMap;

/// Количество курсов по id категории плюс итог под ключом `"all"`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: HashMap<String, usize>,
}

impl CategoryCounts {
    /// Количество для id фильтра; 0, если такой категории нет
    pub fn get(&self, id: &str) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.get(ALL_FILTER_ID)
    }

    /// Пары (категория, количество) без итогового `"all"`
    #[cfg(test)]
    pub fn categories(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .filter(|(id, _)| id.as_str() != ALL_FILTER_ID)
            .map(|(id, count)| (id.as_str(), *count))
    }
}

pub fn count_by_category<'a>(courses: impl IntoIterator<Item = &'a Course>) -> CategoryCounts {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0;

    for course in courses {
        total += 1;
        *counts.entry(course.category.clone()).or_insert(0) += 1;
    }

    counts.insert(ALL_FILTER_ID.to_string(), total);
    CategoryCounts { counts }
}

/// Подсчёт только по курсам, чьё название содержит запрос
///
/// Пустой (после нормализации) запрос равносилен [`count_by_category`].
pub fn count_by_category_for_query(courses: &[Course], query: &str) -> CategoryCounts {
    let query = normalize(query);
    if query.is_empty() {
        return count_by_category(courses);
    }

    count_by_category(
        courses
            .iter()
            .filter(|course| normalize(&course.title).contains(&query)),
    )
}

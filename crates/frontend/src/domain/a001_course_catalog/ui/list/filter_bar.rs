use super::counter::CategoryCounts;
use contracts::domain::a001_course::aggregate::FilterDefinition;
use leptos::prelude::*;

pub const BUTTON_CLASS: &str = "filter__item";
pub const ACTIVE_CLASS: &str = "filter__item_active";

/// Кнопка фильтра в панели категорий
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterButton {
    pub id: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

impl FilterButton {
    pub fn class(&self) -> String {
        if self.active {
            format!("{} {}", BUTTON_CLASS, ACTIVE_CLASS)
        } else {
            BUTTON_CLASS.to_string()
        }
    }
}

/// Полный список кнопок для панели: по одной на фильтр, активна ровно та,
/// чей id равен `active_id`
pub fn render_filter_bar(
    filters: &[FilterDefinition],
    counts: &CategoryCounts,
    active_id: &str,
) -> Vec<FilterButton> {
    filters
        .iter()
        .map(|filter| FilterButton {
            id: filter.id.clone(),
            label: filter.label.clone(),
            count: counts.get(&filter.id),
            active: filter.id == active_id,
        })
        .collect()
}

/// Панель фильтров; при каждом изменении `buttons` содержимое заменяется целиком
#[component]
pub fn FilterBar(#[prop(into)] buttons: Signal<Vec<FilterButton>>) -> impl IntoView {
    move || {
        buttons
            .get()
            .into_iter()
            .map(|button| {
                let class = button.class();
                view! {
                    <button type="button" class=class data-filter=button.id>
                        {format!("{} ", button.label)}
                        <span class="filter__item-count">{button.count}</span>
                    </button>
                }
            })
            .collect_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_course_catalog::ui::list::counter::{
        count_by_category, count_by_category_for_query,
    };
    use crate::domain::a001_course_catalog::ui::list::fixtures::{sample_courses, sample_filters};

    #[test]
    fn test_one_button_per_filter_with_exactly_one_active() {
        let filters = sample_filters();
        let counts = count_by_category(&sample_courses());
        let buttons = render_filter_bar(&filters, &counts, "design");

        assert_eq!(buttons.len(), filters.len());
        let active: Vec<&str> = buttons.iter().filter(|b| b.active).map(|b| b.id.as_str()).collect();
        assert_eq!(active, vec!["design"]);
        assert_eq!(buttons[0].count, 12);
        assert_eq!(buttons[0].class(), "filter__item");
    }

    #[test]
    fn test_missing_count_defaults_to_zero() {
        let filters = vec![
            FilterDefinition {
                id: "all".to_string(),
                label: "All".to_string(),
            },
            FilterDefinition {
                id: "podcasts".to_string(),
                label: "Podcasts".to_string(),
            },
        ];
        let counts = count_by_category(&sample_courses());
        let buttons = render_filter_bar(&filters, &counts, "all");

        assert_eq!(buttons[1].count, 0);
        assert_eq!(buttons[0].class(), "filter__item filter__item_active");
    }

    #[test]
    fn test_same_inputs_give_same_buttons() {
        let filters = sample_filters();
        let counts = count_by_category_for_query(&sample_courses(), "react");
        assert_eq!(
            render_filter_bar(&filters, &counts, "frontend"),
            render_filter_bar(&filters, &counts, "frontend")
        );
    }
}

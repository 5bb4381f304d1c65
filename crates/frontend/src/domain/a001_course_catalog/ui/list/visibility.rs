//! Вычисление видимых карточек по текущему состоянию просмотра
//!
//! Каждый вызов [`apply_visibility`] пересчитывает всё с нуля: результат
//! зависит только от карточек и [`ViewState`], но не от того, что было
//! видно до вызова.

use super::state::ViewState;
use crate::shared::text::normalize;
use contracts::domain::a001_course::aggregate::{Course, ALL_FILTER_ID};

/// Снимок метаданных карточки, сделанный при рендере
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardMeta {
    pub category: String,
    pub title: String,
}

impl CardMeta {
    pub fn from_course(course: &Course) -> Self {
        Self {
            category: course.category.clone(),
            title: course.title.clone(),
        }
    }
}

/// Элемент, который можно показать или спрятать
pub trait Toggle {
    fn set_visible(&self, visible: bool);
}

/// Отрендеренная карточка курса
pub trait CardElement: Toggle {
    fn meta(&self) -> &CardMeta;
}

/// Итог пересчёта видимости
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityReport {
    /// Сколько карточек прошло фильтр и поиск
    pub filtered: usize,
    /// Сколько из них показано
    pub shown: usize,
    /// Нужна ли кнопка "Показать ещё"
    pub has_more: bool,
}

fn matches(meta: &CardMeta, current_filter: &str, normalized_query: &str) -> bool {
    let matches_filter = current_filter == ALL_FILTER_ID || meta.category == current_filter;
    matches_filter && normalize(&meta.title).contains(normalized_query)
}

/// Карточки, подходящие под фильтр и запрос, в исходном порядке
pub fn compute_filtered<'a, C: CardElement>(cards: &'a [C], state: &ViewState) -> Vec<&'a C> {
    let query = normalize(&state.query);
    cards
        .iter()
        .filter(|card| matches(card.meta(), &state.current_filter, &query))
        .collect()
}

/// Прячет все карточки и показывает первые `visible_count` из отфильтрованных
pub fn apply_visibility<C, L>(cards: &[C], state: &ViewState, load_more: Option<&L>) -> VisibilityReport
where
    C: CardElement,
    L: Toggle,
{
    for card in cards {
        card.set_visible(false);
    }

    let filtered = compute_filtered(cards, state);
    let shown = filtered.len().min(state.visible_count);
    for card in &filtered[..shown] {
        card.set_visible(true);
    }

    let has_more = filtered.len() > state.visible_count;
    if let Some(button) = load_more {
        button.set_visible(has_more);
    }

    VisibilityReport {
        filtered: filtered.len(),
        shown,
        has_more,
    }
}

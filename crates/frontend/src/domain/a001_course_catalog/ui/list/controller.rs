use super::counter::{count_by_category, count_by_category_for_query, CategoryCounts};
use super::filter_bar::{render_filter_bar, FilterButton};
use super::state::ViewState;
use super::visibility::{apply_visibility, CardElement, Toggle, VisibilityReport};
use contracts::domain::a001_course::aggregate::{Course, FilterDefinition};
use contracts::shared::view_settings::ViewSettings;

/// Единственный владелец [`ViewState`]
///
/// Выполняет три перехода (категория, поиск, "Показать ещё") и после
/// каждого пересчитывает видимость карточек.
pub struct CatalogController<C, L> {
    courses: Vec<Course>,
    filters: Vec<FilterDefinition>,
    cards: Vec<C>,
    load_more: Option<L>,
    state: ViewState,
    counts: CategoryCounts,
}

impl<C, L> CatalogController<C, L>
where
    C: CardElement,
    L: Toggle,
{
    pub fn new(
        courses: Vec<Course>,
        filters: Vec<FilterDefinition>,
        settings: &ViewSettings,
        cards: Vec<C>,
        load_more: Option<L>,
    ) -> Self {
        let counts = count_by_category(&courses);
        Self {
            courses,
            filters,
            cards,
            load_more,
            state: ViewState::new(settings),
            counts,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    /// Кнопки панели фильтров для текущих счётчиков и активного фильтра
    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        render_filter_bar(&self.filters, &self.counts, &self.state.current_filter)
    }

    /// Пересчитывает видимость карточек и кнопки "Показать ещё"
    pub fn refresh(&self) -> VisibilityReport {
        let report = apply_visibility(&self.cards, &self.state, self.load_more.as_ref());
        log::debug!(
            "catalog: filter={} query={:?} shown {}/{} (more: {})",
            self.state.current_filter,
            self.state.query,
            report.shown,
            report.filtered,
            report.has_more
        );
        report
    }

    /// Клик по категории. `None`, если фильтр уже активен.
    pub fn select_category(&mut self, filter_id: &str) -> Option<VisibilityReport> {
        if filter_id == self.state.current_filter {
            return None;
        }

        self.state.current_filter = filter_id.to_string();
        self.state.reset_window();
        Some(self.refresh())
    }

    /// Срабатывание поиска (уже после debounce)
    ///
    /// Счётчики считаются по всем курсам без учёта выбранной категории.
    pub fn apply_search(&mut self, query: &str) -> VisibilityReport {
        self.state.query = query.to_string();
        self.state.reset_window();
        self.counts = count_by_category_for_query(&self.courses, &self.state.query);
        log::debug!(
            "catalog: query {:?} matches {} courses",
            self.state.query,
            self.counts.total()
        );
        self.refresh()
    }

    /// Клик по "Показать ещё"
    pub fn load_more(&mut self) -> VisibilityReport {
        self.state.reveal_more();
        self.refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_course_catalog::ui::list::fixtures::{
        sample_cards, sample_catalog, visible_titles, FakeCard, FakeToggle,
    };
    use std::rc::Rc;

    fn controller() -> (CatalogController<FakeCard, Rc<FakeToggle>>, Rc<FakeToggle>) {
        let catalog = sample_catalog();
        let button = Rc::new(FakeToggle::default());
        let controller = CatalogController::new(
            catalog.items,
            catalog.filters,
            &catalog.view,
            sample_cards(),
            Some(button.clone()),
        );
        controller.refresh();
        (controller, button)
    }

    fn shown(controller: &CatalogController<FakeCard, Rc<FakeToggle>>) -> usize {
        visible_titles(controller.cards()).len()
    }

    #[test]
    fn test_initial_render() {
        let (controller, button) = controller();
        assert_eq!(shown(&controller), 9);
        assert!(button.is_visible());
        assert_eq!(controller.counts().total(), 12);
    }

    #[test]
    fn test_category_and_load_more_scenario() {
        let (mut controller, button) = controller();

        let report = controller.select_category("frontend").unwrap();
        assert_eq!(report.shown, 5);
        assert_eq!(shown(&controller), 5);
        assert!(!button.is_visible());

        controller.select_category("all").unwrap();
        assert_eq!(controller.state().visible_count, 9);
        assert_eq!(shown(&controller), 9);
        assert!(button.is_visible());

        controller.load_more();
        assert_eq!(controller.state().visible_count, 12);
        assert_eq!(shown(&controller), 12);
        assert!(!button.is_visible());
    }

    #[test]
    fn test_reselecting_active_filter_is_noop() {
        let (mut controller, _) = controller();
        controller.load_more();
        assert!(controller.select_category("all").is_none());
        assert_eq!(controller.state().visible_count, 12);
    }

    #[test]
    fn test_category_change_resets_window() {
        let (mut controller, _) = controller();
        controller.load_more();
        controller.load_more();
        controller.select_category("backend");
        assert_eq!(controller.state().visible_count, controller.state().initial_visible);
    }

    #[test]
    fn test_load_more_grows_by_page_size() {
        let (mut controller, _) = controller();
        for n in 1..=4 {
            let report = controller.load_more();
            let state = controller.state();
            assert_eq!(state.visible_count, state.initial_visible + n * state.page_size);
            assert_eq!(report.has_more, report.filtered > state.visible_count);
        }
        assert_eq!(shown(&controller), 12);
    }

    #[test]
    fn test_search_updates_counts_and_keeps_filter() {
        let (mut controller, button) = controller();
        controller.select_category("frontend");
        controller.load_more();

        let report = controller.apply_search("react");
        assert_eq!(controller.state().visible_count, 9);
        assert_eq!(controller.state().current_filter, "frontend");
        assert_eq!(report.filtered, 3);
        assert!(!button.is_visible());

        let buttons = controller.filter_buttons();
        let count = |id: &str| buttons.iter().find(|b| b.id == id).unwrap().count;
        assert_eq!(count("all"), 4);
        assert_eq!(count("frontend"), 3);
        assert_eq!(count("backend"), 1);
        assert_eq!(count("design"), 0);
        assert!(buttons.iter().find(|b| b.id == "frontend").unwrap().active);
    }

    #[test]
    fn test_search_across_all_categories() {
        let (mut controller, _) = controller();
        let report = controller.apply_search("React");
        assert_eq!(report.shown, 4);
        assert_eq!(
            visible_titles(controller.cards()),
            vec![
                "React from Scratch",
                "Advanced React Patterns",
                "Server-Side Rendering for React Apps",
                "Testing React Components",
            ]
        );
    }

    #[test]
    fn test_clearing_search_restores_counts() {
        let (mut controller, _) = controller();
        controller.apply_search("react");
        controller.apply_search("  ");
        assert_eq!(controller.counts().total(), 12);
        assert_eq!(shown(&controller), 9);
    }

    #[test]
    fn test_without_load_more_control() {
        let catalog = sample_catalog();
        let mut controller: CatalogController<FakeCard, FakeToggle> = CatalogController::new(
            catalog.items,
            catalog.filters,
            &catalog.view,
            sample_cards(),
            None,
        );
        let report = controller.load_more();
        assert_eq!(report.shown, 12);
    }
}

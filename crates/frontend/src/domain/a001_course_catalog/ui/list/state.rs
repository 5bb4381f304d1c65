use contracts::domain::a001_course::aggregate::ALL_FILTER_ID;
use contracts::shared::view_settings::ViewSettings;

/// Состояние просмотра каталога на время сессии страницы
///
/// `visible_count` всегда равен `initial_visible + N * page_size`:
/// сбрасывается при смене фильтра или запроса, растёт по "Показать ещё".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    // filters
    pub query: String,
    pub current_filter: String,

    // pagination
    pub visible_count: usize,
    pub page_size: usize,
    pub initial_visible: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewSettings::default())
    }
}

impl ViewState {
    pub fn new(settings: &ViewSettings) -> Self {
        Self {
            query: String::new(),
            current_filter: ALL_FILTER_ID.to_string(),
            visible_count: settings.initial_visible,
            page_size: settings.page_size,
            initial_visible: settings.initial_visible,
        }
    }

    pub fn reset_window(&mut self) {
        self.visible_count = self.initial_visible;
    }

    pub fn reveal_more(&mut self) {
        self.visible_count += self.page_size;
    }
}

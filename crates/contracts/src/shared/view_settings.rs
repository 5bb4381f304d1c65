use serde::Deserialize;

/// Настройки отображения каталога (пагинация и поиск)
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ViewSettings {
    /// Сколько карточек показывать сразу после загрузки и после смены фильтра
    #[serde(rename = "initialVisible", default = "default_initial_visible")]
    pub initial_visible: usize,

    /// На сколько карточек расширять список по кнопке "Показать ещё"
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: usize,

    /// Задержка debounce для поля поиска, мс
    #[serde(rename = "searchDebounceMs", default = "default_search_debounce_ms")]
    pub search_debounce_ms: u32,
}

fn default_initial_visible() -> usize {
    9
}

fn default_page_size() -> usize {
    3
}

fn default_search_debounce_ms() -> u32 {
    300
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            initial_visible: default_initial_visible(),
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl ViewSettings {
    /// Валидация настроек
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.initial_visible > 0, "initialVisible должен быть больше нуля");
        anyhow::ensure!(self.page_size > 0, "pageSize должен быть больше нуля");
        Ok(())
    }
}

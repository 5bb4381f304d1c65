use serde::Deserialize;

/// Зарезервированный id фильтра: "без ограничения по категории"
pub const ALL_FILTER_ID: &str = "all";

// ============================================================================
// Aggregate
// ============================================================================

/// Курс в каталоге
///
/// Категория и тема бейджа - открытые строковые теги: новые значения
/// приходят вместе с данными каталога, без изменения кода.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Course {
    pub title: String,
    pub author: String,
    pub price: String,
    pub image: String,
    pub category: String,

    #[serde(rename = "badgeText")]
    pub badge_text: String,

    #[serde(rename = "badgeTheme")]
    pub badge_theme: String,
}

/// Описание кнопки фильтра по категории
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterDefinition {
    pub id: String,
    pub label: String,
}

impl FilterDefinition {
    /// Является ли фильтр зарезервированным "Все"
    pub fn is_all(&self) -> bool {
        self.id == ALL_FILTER_ID
    }
}

use super::aggregate::{Course, FilterDefinition, ALL_FILTER_ID};
use crate::shared::view_settings::ViewSettings;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;

/// Каталог, встроенный в бинарник
const DEFAULT_CATALOG_JSON: &str = include_str!("catalog.json");

/// Данные каталога: настройки отображения, фильтры и курсы
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub view: ViewSettings,
    pub filters: Vec<FilterDefinition>,
    pub items: Vec<Course>,
}

impl CatalogData {
    /// Валидация данных каталога
    pub fn validate(&self) -> anyhow::Result<()> {
        self.view.validate()?;

        anyhow::ensure!(
            self.filters.iter().any(FilterDefinition::is_all),
            "В списке фильтров нет обязательного фильтра \"{}\"",
            ALL_FILTER_ID
        );

        let mut seen = HashSet::new();
        for filter in &self.filters {
            anyhow::ensure!(
                seen.insert(filter.id.as_str()),
                "Фильтр \"{}\" объявлен несколько раз",
                filter.id
            );
        }

        Ok(())
    }
}

/// Разбирает и валидирует JSON каталога
pub fn parse_catalog(json: &str) -> anyhow::Result<CatalogData> {
    let catalog: CatalogData =
        serde_json::from_str(json).context("Не удалось разобрать JSON каталога")?;
    catalog.validate()?;
    Ok(catalog)
}

/// Каталог по умолчанию (встроенный `catalog.json`)
pub fn default_catalog() -> anyhow::Result<CatalogData> {
    parse_catalog(DEFAULT_CATALOG_JSON)
}

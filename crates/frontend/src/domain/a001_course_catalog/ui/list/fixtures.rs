//! Тестовые данные и подмены DOM-элементов

use super::visibility::{CardElement, CardMeta, Toggle};
use contracts::domain::a001_course::aggregate::{Course, FilterDefinition};
use contracts::domain::a001_course::catalog::{default_catalog, CatalogData};
use std::cell::Cell;

pub fn sample_catalog() -> CatalogData {
    default_catalog().unwrap()
}

pub fn sample_courses() -> Vec<Course> {
    sample_catalog().items
}

pub fn sample_filters() -> Vec<FilterDefinition> {
    sample_catalog().filters
}

pub fn sample_cards() -> Vec<FakeCard> {
    sample_courses()
        .iter()
        .map(|course| FakeCard {
            meta: CardMeta::from_course(course),
            visible: Cell::new(true),
        })
        .collect()
}

pub fn visible_titles(cards: &[FakeCard]) -> Vec<String> {
    cards
        .iter()
        .filter(|c| c.visible.get())
        .map(|c| c.meta.title.clone())
        .collect()
}

#[derive(Debug)]
pub struct FakeCard {
    pub meta: CardMeta,
    pub visible: Cell<bool>,
}

impl FakeCard {
    pub fn new(category: &str, title: &str) -> Self {
        Self {
            meta: CardMeta {
                category: category.to_string(),
                title: title.to_string(),
            },
            visible: Cell::new(true),
        }
    }
}

impl Toggle for FakeCard {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

impl CardElement for FakeCard {
    fn meta(&self) -> &CardMeta {
        &self.meta
    }
}

#[derive(Debug, Default)]
pub struct FakeToggle {
    visible: Cell<bool>,
}

impl FakeToggle {
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl Toggle for FakeToggle {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

impl Toggle for std::rc::Rc<FakeToggle> {
    fn set_visible(&self, visible: bool) {
        self.as_ref().set_visible(visible);
    }
}

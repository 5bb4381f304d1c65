//! Точки монтирования на странице-хосте

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlInputElement};

pub const GRID_SELECTOR: &str = "[data-courses-grid]";
pub const FILTER_ROOT_SELECTOR: &str = "[data-filter-root]";
pub const SEARCH_INPUT_SELECTOR: &str = "[data-search-input]";
pub const LOAD_MORE_SELECTOR: &str = "[data-load-more]";
pub const SEARCH_FORM_SELECTOR: &str = ".search";

/// Элементы страницы, к которым привязывается каталог
///
/// Сетка и корень фильтров обязательны. Без поля поиска, формы поиска или
/// кнопки "Показать ещё" соответствующая функция просто не подключается.
pub struct MountPoints {
    pub grid: HtmlElement,
    pub filter_root: HtmlElement,
    pub search_input: Option<HtmlInputElement>,
    pub search_form: Option<HtmlElement>,
    pub load_more: Option<HtmlElement>,
}

impl MountPoints {
    /// Ищет точки монтирования. `None`, если нет обязательных элементов.
    pub fn discover(document: &Document) -> Option<Self> {
        let grid = find::<HtmlElement>(document, GRID_SELECTOR)?;
        let filter_root = find::<HtmlElement>(document, FILTER_ROOT_SELECTOR)?;

        Some(Self {
            grid,
            filter_root,
            search_input: find(document, SEARCH_INPUT_SELECTOR),
            search_form: find(document, SEARCH_FORM_SELECTOR),
            load_more: find(document, LOAD_MORE_SELECTOR),
        })
    }
}

fn find<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Показывает или прячет элемент через inline `display`
pub fn set_display(element: &HtmlElement, visible: bool) {
    let style = element.style();
    let _ = if visible {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
}

/// Подписывает обработчик на событие на всё время жизни страницы
///
/// Ошибку регистрации пишет в лог: без обработчика функция просто не работает.
pub fn attach_listener(target: &EventTarget, event: &str, handler: Closure<dyn FnMut(Event)>) {
    if let Err(err) =
        target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
    {
        log::warn!("Failed to attach '{}' listener: {:?}", event, err);
        return;
    }
    handler.forget();
}

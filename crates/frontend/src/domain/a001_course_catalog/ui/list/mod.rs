pub mod card;
pub mod controller;
pub mod counter;
pub mod filter_bar;
pub mod state;
pub mod visibility;

#[cfg(test)]
mod fixtures;

use self::card::{render_cards, CourseGrid, RenderedCard};
use self::controller::CatalogController;
use self::filter_bar::{FilterBar, FilterButton, BUTTON_CLASS};
use self::visibility::{CardElement, Toggle};
use crate::shared::debounce::{BrowserScheduler, Debouncer, Scheduler};
use crate::shared::dom::{attach_listener, set_display, MountPoints};
use contracts::domain::a001_course::catalog::CatalogData;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

/// Кнопка "Показать ещё" на странице-хосте
struct LoadMoreButton(HtmlElement);

impl Toggle for LoadMoreButton {
    fn set_visible(&self, visible: bool) {
        set_display(&self.0, visible);
    }
}

type SharedController = Rc<RefCell<CatalogController<RenderedCard, LoadMoreButton>>>;

/// Рендерит каталог в точки монтирования и подключает обработчики событий
pub fn mount_catalog(points: MountPoints, catalog: CatalogData) {
    let MountPoints {
        grid,
        filter_root,
        search_input,
        search_form,
        load_more,
    } = points;

    let debounce_ms = catalog.view.search_debounce_ms;
    let cards = render_cards(&catalog.items);
    let controller = CatalogController::new(
        catalog.items,
        catalog.filters,
        &catalog.view,
        cards.clone(),
        load_more.clone().map(LoadMoreButton),
    );
    let buttons = RwSignal::new(controller.filter_buttons());
    controller.refresh();
    let controller: SharedController = Rc::new(RefCell::new(controller));

    leptos::mount::mount_to(grid, move || view! { <CourseGrid cards=cards /> }).forget();
    leptos::mount::mount_to(filter_root.clone(), move || view! { <FilterBar buttons=buttons /> })
        .forget();

    setup_filter_handler(&filter_root, controller.clone(), buttons);

    if let Some(input) = &search_input {
        setup_search_handler(input, controller.clone(), buttons, debounce_ms);
    }

    if let Some(form) = &search_form {
        setup_search_form_handler(form, search_input.clone());
    }

    if let Some(button) = &load_more {
        setup_load_more_handler(button, controller);
    }
}

/// id фильтра кнопки, по которой кликнули; `None` для клика мимо кнопок
fn clicked_filter_id(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(&format!(".{}", BUTTON_CLASS)).ok()??;
    button.get_attribute("data-filter").filter(|id| !id.is_empty())
}

fn setup_filter_handler(
    root: &HtmlElement,
    controller: SharedController,
    buttons: RwSignal<Vec<FilterButton>>,
) {
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(filter_id) = clicked_filter_id(&event) else {
            return;
        };

        let mut controller = controller.borrow_mut();
        if controller.select_category(&filter_id).is_some() {
            buttons.set(controller.filter_buttons());
        }
    }) as Box<dyn FnMut(_)>);

    attach_listener(root, "click", on_click);
}

/// Откладывает поиск по `query`: из серии вводов применяется только последний
///
/// После срабатывания пересчитывает счётчики и перерисовывает панель
/// фильтров; активным остаётся текущий фильтр.
fn schedule_search<S, C, L>(
    debouncer: &mut Debouncer<S>,
    controller: &Rc<RefCell<CatalogController<C, L>>>,
    buttons: RwSignal<Vec<FilterButton>>,
    query: String,
) where
    S: Scheduler,
    C: CardElement + 'static,
    L: Toggle + 'static,
{
    let controller = controller.clone();
    debouncer.call(move || {
        let mut controller = controller.borrow_mut();
        controller.apply_search(&query);
        buttons.set(controller.filter_buttons());
    });
}

fn setup_search_handler(
    input: &HtmlInputElement,
    controller: SharedController,
    buttons: RwSignal<Vec<FilterButton>>,
    debounce_ms: u32,
) {
    let mut debouncer = Debouncer::new(BrowserScheduler, debounce_ms);
    let source = input.clone();

    let on_input = Closure::wrap(Box::new(move |_event: Event| {
        schedule_search(&mut debouncer, &controller, buttons, source.value());
    }) as Box<dyn FnMut(_)>);

    attach_listener(input, "input", on_input);
}

fn setup_search_form_handler(form: &HtmlElement, input: Option<HtmlInputElement>) {
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        if let Some(input) = &input {
            let _ = input.blur();
        }
    }) as Box<dyn FnMut(_)>);

    attach_listener(form, "submit", on_submit);
}

fn setup_load_more_handler(button: &HtmlElement, controller: SharedController) {
    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        controller.borrow_mut().load_more();
    }) as Box<dyn FnMut(_)>);

    attach_listener(button, "click", on_click);
}

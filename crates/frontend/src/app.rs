use crate::domain::a001_course_catalog::ui::list::mount_catalog;
use crate::shared::dom::MountPoints;
use contracts::domain::a001_course::catalog::default_catalog;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

/// Запуск каталога: сразу, если DOM уже разобран, иначе по `DOMContentLoaded`
pub fn run() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if !is_loading(&document.ready_state()) {
        render(&document);
        return;
    }

    let doc = document.clone();
    let on_ready = Closure::<dyn FnMut()>::once_into_js(move || render(&doc));
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        log::warn!("catalog: failed to wait for DOMContentLoaded: {:?}", err);
    }
}

/// `document.readyState` ещё "loading" - DOM разобран не до конца
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn render(document: &Document) {
    // Без сетки или панели фильтров рендерить некуда - это не ошибка
    let Some(points) = MountPoints::discover(document) else {
        log::debug!("catalog: grid or filter root not found, skipping render");
        return;
    };

    let catalog = match default_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Failed to load catalog: {:#}", err);
            return;
        }
    };

    log::info!(
        "catalog: {} courses, {} filters",
        catalog.items.len(),
        catalog.filters.len()
    );
    mount_catalog(points, catalog);
}

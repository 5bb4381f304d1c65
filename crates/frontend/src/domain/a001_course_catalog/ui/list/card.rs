use super::visibility::{CardElement, CardMeta, Toggle};
use contracts::domain::a001_course::aggregate::Course;
use leptos::prelude::*;

/// CSS-класс темы бейджа
///
/// Имя следует БЭМ-нотации стилей страницы-хоста: модификатор
/// `_theme_<тема>` блока `course-card__badge`.
pub fn badge_theme_class(theme: &str) -> String {
    format!("course-card__badge_theme_{}", theme)
}

/// Данные для заполнения слотов шаблона карточки
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub image: String,
    pub alt: String,
    pub badge_text: String,
    pub badge_class: String,
    pub title: String,
    pub price: String,
    pub author: String,
}

impl CardView {
    pub fn from_course(course: &Course) -> Self {
        Self {
            image: course.image.clone(),
            alt: course.title.clone(),
            badge_text: course.badge_text.clone(),
            badge_class: format!(
                "course-card__badge {}",
                badge_theme_class(&course.badge_theme)
            ),
            title: course.title.clone(),
            price: course.price.clone(),
            author: course.author.clone(),
        }
    }
}

/// Карточка, созданная один раз при старте
///
/// При смене фильтров карточки не пересоздаются: меняется только `visible`.
#[derive(Clone, Debug)]
pub struct RenderedCard {
    pub meta: CardMeta,
    pub view: CardView,
    pub visible: RwSignal<bool>,
}

impl Toggle for RenderedCard {
    fn set_visible(&self, visible: bool) {
        // без лишних оповещений, если значение не меняется
        if self.visible.get_untracked() != visible {
            self.visible.set(visible);
        }
    }
}

impl CardElement for RenderedCard {
    fn meta(&self) -> &CardMeta {
        &self.meta
    }
}

/// Создаёт по карточке на курс, в исходном порядке
pub fn render_cards(courses: &[Course]) -> Vec<RenderedCard> {
    courses
        .iter()
        .map(|course| RenderedCard {
            meta: CardMeta::from_course(course),
            view: CardView::from_course(course),
            visible: RwSignal::new(true),
        })
        .collect()
}

/// Шаблон карточки курса
///
/// Пока картинка не загрузилась (или не упала с ошибкой), на карточке висит
/// класс `course-card--loading`.
#[component]
pub fn CourseCard(card: RenderedCard) -> impl IntoView {
    let (loading, set_loading) = signal(true);
    let visible = card.visible;
    let slots = card.view;

    view! {
        <article
            class=move || {
                if loading.get() {
                    "course-card course-card--loading"
                } else {
                    "course-card"
                }
            }
            style=move || if visible.get() { "" } else { "display: none;" }
            data-category=card.meta.category
            data-title=card.meta.title
        >
            <img
                class="course-card__image"
                src=slots.image
                alt=slots.alt
                loading="lazy"
                on:load=move |_| set_loading.set(false)
                on:error=move |_| set_loading.set(false)
            />
            <div class="course-card__body">
                <span class=slots.badge_class>{slots.badge_text}</span>
                <h3 class="course-card__title">{slots.title}</h3>
                <div class="course-card__meta">
                    <span class="course-card__price">{slots.price}</span>
                    <span class="course-card__author">{slots.author}</span>
                </div>
            </div>
        </article>
    }
}

/// Все карточки каталога для сетки
#[component]
pub fn CourseGrid(cards: Vec<RenderedCard>) -> impl IntoView {
    cards
        .into_iter()
        .map(|card| view! { <CourseCard card=card /> })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_course_catalog::ui::list::fixtures::sample_courses;

    #[test]
    fn test_cards_keep_course_order_and_metadata() {
        let courses = sample_courses();
        let cards = render_cards(&courses);

        assert_eq!(cards.len(), courses.len());
        for (card, course) in cards.iter().zip(&courses) {
            assert_eq!(card.meta.title, course.title);
            assert_eq!(card.meta.category, course.category);
            assert_eq!(card.view.alt, course.title);
        }
    }

    #[test]
    fn test_badge_class_follows_theme() {
        let course = &sample_courses()[0];
        let view = CardView::from_course(course);
        assert_eq!(view.badge_class, "course-card__badge course-card__badge_theme_blue");
        assert_eq!(badge_theme_class("violet"), "course-card__badge_theme_violet");
    }

    #[test]
    fn test_rendered_card_toggles_signal() {
        let cards = render_cards(&sample_courses()[..1]);
        let card = &cards[0];
        assert!(card.visible.get_untracked());
        card.set_visible(false);
        assert!(!card.visible.get_untracked());
    }
}

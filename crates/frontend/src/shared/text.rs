//! Нормализация строк для поиска без учёта регистра и пробелов по краям

/// Приводит строку к нижнему регистру и обрезает пробелы по краям
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

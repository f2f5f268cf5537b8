use crate::catalog::model::Category;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Ordered keyword rules. Categories are mutually exclusive by
    /// construction: the first matching pattern decides.
    static ref CATEGORY_RULES: Vec<(Category, Regex)> = vec![
        rule(Category::Konzert, r"konzert|musik|band|jazz|rock|pop|sänger|benefiz.*konzert"),
        rule(Category::Theater, r"theater|schauspiel|bühne|drama|komödie|musical"),
        rule(Category::Sport, r"sport|fußball|volleyball|basketball|lauf|handball"),
        rule(Category::Kinder, r"kinder|kids|familie|jugend|figurentheater"),
        rule(Category::Kunst, r"kunst|ausstellung|galerie|museum"),
        rule(Category::Tanz, r"tanz|ballett|dance"),
        rule(Category::Party, r"party|club|disco|nacht"),
        rule(Category::Festival, r"festival|fest|markt"),
        rule(Category::Comedy, r"comedy|kabarett|satire|quatsch"),
        rule(Category::Lesung, r"lesung|literatur|vortrag"),
    ];
}

fn rule(category: Category, pattern: &str) -> (Category, Regex) {
    (
        category,
        Regex::new(pattern).expect("Failed to compile category pattern"),
    )
}

/// Files an event under one of the fixed categories based on its text,
/// falling back to [`Category::Sonstiges`] when no keyword matches.
pub fn categorize(title: &str, description: &str) -> Category {
    let text = format!("{} {}", title, description).to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(&text))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Sonstiges)
}

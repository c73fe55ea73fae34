use tracing::debug;

use crate::core::catalog::Categories;

/// Restrict `categories` to the titles listed in `selected`.
///
/// Each category's films come out in the order of `selected`, not source order.
/// A title found in several categories lands in all of them, and a title listed
/// twice in one category is kept twice. Categories without a match are left out.
pub fn filter_categories(categories: &Categories, selected: &[String]) -> Categories {
    let mut filtered = Categories::new();

    for title in selected {
        let mut matched = false;
        for (category, films) in categories {
            for film in films.iter().filter(|f| *f == title) {
                filtered
                    .entry(category.clone())
                    .or_default()
                    .push(film.clone());
                matched = true;
            }
        }
        if !matched {
            debug!("Selected title '{}' is not in any category", title);
        }
    }

    filtered
}

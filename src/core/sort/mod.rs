use std::cmp::Ordering;

use tracing::debug;

use crate::core::catalog::{Categories, Durations};

/// Known durations ascending, unknown durations after every known one.
fn compare_durations(left: Option<f32>, right: Option<f32>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => l.total_cmp(&r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order each category's films by running time, shortest first.
///
/// Films without a duration trail the list. The sort is stable, so equal
/// durations (and unknown ones) keep their input order. The input is not modified.
pub fn sort_by_duration(categories: &Categories, durations: &Durations) -> Categories {
    categories
        .iter()
        .map(|(category, films)| {
            let mut ordered = films.clone();
            ordered.sort_by(|l, r| {
                compare_durations(durations.get(l).copied(), durations.get(r).copied())
            });

            let unknown = ordered.iter().filter(|f| !durations.contains_key(*f)).count();
            if unknown > 0 {
                debug!("{} film(s) in '{}' have no known duration", unknown, category);
            }

            (category.clone(), ordered)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn durations(v: &[(&str, f32)]) -> Durations {
        v.iter().map(|(t, d)| (t.to_string(), *d)).collect()
    }

    #[test]
    fn ascending_by_duration() {
        let categories = Categories::from([("x".to_string(), strings(&["Amour", "Harry Potter", "Pelisky"]))]);
        let d = durations(&[("Amour", 1.75), ("Harry Potter", 5.0), ("Pelisky", 2.5)]);

        let sorted = sort_by_duration(&categories, &d);
        assert_eq!(sorted["x"], strings(&["Amour", "Pelisky", "Harry Potter"]));
    }

    #[test]
    fn unknown_durations_trail_regardless_of_input_order() {
        let d = durations(&[("Harry Potter", 5.0)]);
        for input in [&["Harry Potter", "bread"], &["bread", "Harry Potter"]] {
            let categories = Categories::from([("x".to_string(), strings(input))]);
            let sorted = sort_by_duration(&categories, &d);
            assert_eq!(sorted["x"], strings(&["Harry Potter", "bread"]));
        }
    }

    #[test]
    fn equal_and_unknown_durations_keep_input_order() {
        let categories = Categories::from([(
            "x".to_string(),
            strings(&["b-unknown", "Pelisky", "a-unknown", "Love Actually", "Amour"]),
        )]);
        let d = durations(&[("Pelisky", 2.5), ("Love Actually", 2.5), ("Amour", 1.75)]);

        let sorted = sort_by_duration(&categories, &d);
        assert_eq!(
            sorted["x"],
            strings(&["Amour", "Pelisky", "Love Actually", "b-unknown", "a-unknown"])
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let categories = Categories::from([("x".to_string(), strings(&["Harry Potter", "Amour"]))]);
        let before = categories.clone();
        let d = durations(&[("Amour", 1.75), ("Harry Potter", 5.0)]);

        let sorted = sort_by_duration(&categories, &d);
        assert_eq!(categories, before);
        assert_eq!(sorted["x"], strings(&["Amour", "Harry Potter"]));
    }

    #[test]
    fn comparator_places_known_before_unknown() {
        assert_eq!(compare_durations(Some(9.0), None), Ordering::Less);
        assert_eq!(compare_durations(None, Some(0.5)), Ordering::Greater);
        assert_eq!(compare_durations(None, None), Ordering::Equal);
        assert_eq!(compare_durations(Some(2.0), Some(3.0)), Ordering::Less);
    }
}

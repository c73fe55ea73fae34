use std::collections::{BTreeMap, HashMap};

use crate::utils::{Error, FilmcatResult};

/// Category name -> film titles, in source order.
pub type Categories = BTreeMap<String, Vec<String>>;

/// Film title -> running time in hours. A missing title means the duration is unknown.
pub type Durations = HashMap<String, f32>;

pub const ENGLISH: &str = "english";
pub const FRENCH: &str = "french";
pub const CZECH: &str = "czech";

/// Immutable film data, built once at startup and passed to every component.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub categories: Categories,
    /// Titles currently shown in cinemas, in programme order.
    pub cinema_titles: Vec<String>,
    pub durations: Durations,
}

impl Catalog {
    pub fn new(
        categories: Categories,
        cinema_titles: Vec<String>,
        durations: Durations,
    ) -> FilmcatResult<Self> {
        for (title, &value) in &durations {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidDuration {
                    title: title.clone(),
                    value,
                });
            }
        }

        Ok(Self {
            categories,
            cinema_titles,
            durations,
        })
    }

    /// The built-in catalog printed by the binary.
    pub fn sample() -> FilmcatResult<Self> {
        let categories = Categories::from([
            (
                ENGLISH.to_string(),
                owned(&["Fish Called Wanda", "bread", "Harry Potter", "Love Actually"]),
            ),
            (
                FRENCH.to_string(),
                owned(&[
                    "Prophet",
                    "Amelie",
                    "Cache",
                    "La Grande Illusion",
                    "Les Miserable",
                    "The Artist",
                    "Mon Oncle",
                    "Van Gogh",
                    "Pierrot Le Fou",
                    "Breathless",
                    "Buffet Froid",
                    "Amour",
                ]),
            ),
            (
                CZECH.to_string(),
                owned(&[
                    "Ucho",
                    "Pelisky",
                    "Ostre Sledovane Vlaky",
                    "Svetaci",
                    "Postriziny",
                    "Slavnost snezenek",
                ]),
            ),
        ]);

        let cinema_titles = owned(&[
            "Pelisky",
            "Love Actually",
            "Breathless",
            "Amour",
            "Ucho",
            "Harry Potter",
            "Fish Called Wanda",
            "Ostre Sledovane Vlaky",
            "Amelie",
            "Mon Oncle",
        ]);

        let durations: Durations = [
            ("Harry Potter", 5.0),
            ("Pelisky", 2.5),
            ("Ucho", 3.25),
            ("Breathless", 3.0),
            ("Amelie", 2.0),
            ("Amour", 1.75),
            ("Love Actually", 2.5),
        ]
        .into_iter()
        .map(|(title, hours)| (title.to_string(), hours))
        .collect();

        Self::new(categories, cinema_titles, durations)
    }
}

fn owned(titles: &[&str]) -> Vec<String> {
    titles.iter().map(|t| t.to_string()).collect()
}

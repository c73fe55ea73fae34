pub mod template;

use tracing::debug;

use crate::core::catalog::{Categories, CZECH, ENGLISH, FRENCH};
use crate::utils::{Error, FilmcatResult};
use template::{Fields, Template};

const CATALOG_TEMPLATE: &str = concat!(
    "\n",
    "======== Film Catalog ========\n",
    "      \n",
    "English\n",
    "\t{{ .English }}\n",
    "\n",
    "French\n",
    "\t{{ .French }}\n",
    "\n",
    "Czech\n",
    "\t{{ .Czech }}\n",
    "\n",
    "==============================\n",
);

/// Join titles as "A, B, C or D". A single title is returned as is.
pub fn collate(category: &str, titles: &[String]) -> FilmcatResult<String> {
    match titles.split_last() {
        None => Err(Error::EmptyCategory(category.to_string())),
        Some((last, [])) => Ok(last.clone()),
        Some((last, rest)) => Ok(format!("{} or {}", rest.join(", "), last)),
    }
}

/// Collated text for each fixed category. A category missing from the mapping
/// renders as an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub english: String,
    pub french: String,
    pub czech: String,
}

impl Sections {
    pub fn from_categories(categories: &Categories) -> FilmcatResult<Self> {
        let section = |key: &str| -> FilmcatResult<String> {
            match categories.get(key) {
                Some(titles) => collate(key, titles),
                None => {
                    debug!("No '{}' category to render", key);
                    Ok(String::new())
                }
            }
        };

        Ok(Self {
            english: section(ENGLISH)?,
            french: section(FRENCH)?,
            czech: section(CZECH)?,
        })
    }
}

impl Fields for Sections {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "English" => Some(&self.english),
            "French" => Some(&self.french),
            "Czech" => Some(&self.czech),
            _ => None,
        }
    }
}

/// Render a category mapping into the film catalog report.
pub fn render(categories: &Categories) -> FilmcatResult<String> {
    let sections = Sections::from_categories(categories)?;
    let template = Template::parse("catalog", CATALOG_TEMPLATE)?;
    template.execute(&sections)
}

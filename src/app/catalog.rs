use std::io::Write;

use tracing::info;

use crate::core;
use crate::core::catalog::Catalog;
use crate::utils::FilmcatResult;

/// Print the full catalog, the cinema subset, then the cinema subset ordered by duration.
///
/// Stops at the first failing pass; reports already written stay written.
pub fn run(out: &mut impl Write, catalog: &Catalog) -> FilmcatResult<()> {
    // Step 1. Full catalog, source order
    info!("Rendering full catalog ({} categories)", catalog.categories.len());
    write_report(out, &catalog.categories)?;

    // Step 2. Films currently in cinemas
    let cinema = core::filter::filter_categories(&catalog.categories, &catalog.cinema_titles);
    info!(
        "Rendering cinema catalog ({} films)",
        cinema.values().map(Vec::len).sum::<usize>()
    );
    write_report(out, &cinema)?;

    // Step 3. Same films, shortest first
    let ordered = core::sort::sort_by_duration(&cinema, &catalog.durations);
    info!("Rendering cinema catalog ordered by duration");
    write_report(out, &ordered)?;

    Ok(())
}

fn write_report(out: &mut impl Write, categories: &core::catalog::Categories) -> FilmcatResult<()> {
    let report = core::report::render(categories)?;
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}

use crate::core::catalog::Catalog;

mod app;
mod config;
mod core;
mod utils;

fn main() {
    let config = config::Config::init().expect("Failed to initialize configuration");
    app::common::init_logging(&config);

    let result = Catalog::sample().and_then(|catalog| {
        let mut stdout = std::io::stdout().lock();
        app::catalog::run(&mut stdout, &catalog)
    });
    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

/// Week planner demo entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use pageview::{DemoConfig, Session};

    // Optional config file as first argument
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match DemoConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .init();

    let mut session = Session::new(&config);
    let report = session.run(&Session::default_script());

    log::info!(
        "Session finished on page {} after {} page change(s)",
        report.selected_index,
        report.page_changes.len()
    );
    log::info!("Page changes: {:?}", report.page_changes);
    log::info!("Switch changes: {:?}", report.switch_changes);
    log::info!("Page messages: {:?}", report.messages);
    log::info!(
        "Final frame: {} draw command(s), texts {:?}",
        report.draw_commands,
        report.texts
    );
}

// WASM builds have no binary entry point
#[cfg(target_arch = "wasm32")]
fn main() {}

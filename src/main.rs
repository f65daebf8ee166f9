use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use zone_subnet_plan::config::load_config;
use zone_subnet_plan::{build_plan, print_plan};

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Info))?;
    log4rs::init_config(config)?;
    log::warn!("{LOG_CONFIG_FILE} not usable, logging to stderr at info");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref())?;

    let (base, layout) = build_plan(&config).map_err(|e| {
        log::error!("Planning failed: {e}");
        e
    })?;
    print_plan(config.output, &base, &layout)?;

    Ok(())
}

// SPDX-License-Identifier: MPL-2.0
use iced_glance::app::{self, paths, Flags};
use iced_glance::config;
use iced_glance::ui::preview::ImageList;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedGlance - gesture driven image preview

USAGE:
    iced_glance [OPTIONS] <LOCATOR>...

OPTIONS:
    --index <N>          Image shown first (clamped, default 0)
    --config-dir <PATH>  Directory holding settings.toml
    -h, --help           Print this help

ENVIRONMENT:
    ICED_GLANCE_CONFIG_DIR  Config directory when --config-dir is absent
    RUST_LOG                Log filter, overrides [general] log_filter
";

fn usage_error(message: &str) -> ! {
    eprintln!("error: {message}\n\n{HELP}");
    std::process::exit(2);
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let index: usize = args
        .opt_value_from_str("--index")
        .unwrap_or_else(|err| usage_error(&err.to_string()))
        .unwrap_or(0);
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| usage_error(&err.to_string()));
    let locators: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();

    paths::init_cli_override(config_dir);
    let (config, config_warning) = config::load();
    init_tracing(config.log_filter());

    let images = ImageList::new(locators).unwrap_or_else(|err| usage_error(&err.to_string()));

    app::run(Flags {
        images,
        index,
        config,
        config_warning,
    })
}

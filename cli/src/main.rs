mod commands;
mod session;
mod terminal;

use circ_common::config::Config;
use circ_common::success;
use circ_core::registry::Registry;
use circ_core::seed;
use commands::CommandLine;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        seed: commands.seed,
    };

    print::banner(&cfg);
    print::header("circulation desk", cfg.quiet);

    let mut registry = Registry::new();
    if cfg.seed {
        seed::load_demo_data(&mut registry);
        success!(
            "Demo data loaded: {} items, {} users",
            registry.item_count(),
            registry.user_count()
        );
    }

    session::run(registry, &cfg)
}

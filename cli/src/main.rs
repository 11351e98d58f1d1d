mod commands;
mod terminal;

use commands::{CommandLine, Commands, generate, init, outline};
use contractr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet)?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Generate(args) => {
            print::section_rule("generating contract", cfg.quiet);
            generate::generate(&args, &cfg)
        }
        Commands::Init(args) => {
            print::section_rule("writing sample parameters", cfg.quiet);
            init::init(&args)
        }
        Commands::Outline(args) => {
            print::section_rule("contract outline", cfg.quiet);
            outline::outline(&args)
        }
    }
}

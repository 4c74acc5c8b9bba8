mod commands;
mod terminal;

use commands::{CommandLine, Commands, announce, poem, reach};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init()?;
    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Some(Commands::Poem) => poem::poem(&cfg)?,
        Some(Commands::Announce) => announce::announce(&cfg)?,
        Some(Commands::Reach { upper, lower, x, y }) => reach::reach(upper, lower, x, y, &cfg)?,
        None => {
            poem::poem(&cfg)?;
            announce::announce(&cfg)?;
        }
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}

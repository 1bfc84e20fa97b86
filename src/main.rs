use anyhow::Result;
use clap::Parser;

use fractal_geometry::cli::Cli;
use fractal_geometry::export;
use fractal_geometry::generators::RngDraws;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let request = cli.request()?;

    let mut draws = match cli.seed {
        Some(seed) => RngDraws::seeded(seed),
        None => RngDraws::from_entropy(),
    };
    let buffer = request.build(&mut draws);

    export::export(cli.format, &request, &buffer, cli.output.as_deref())
}

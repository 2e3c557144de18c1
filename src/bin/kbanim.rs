use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kbanim", version, about = "Generate keyboard RGB animations")]
struct Cli {
    /// Generator name, `all` for every generator, or `conf` for the batch config.
    target: String,

    /// Directory holding keyboard.json, geometry.json and animations.json.
    #[arg(default_value = "layouts")]
    source_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = kbanim::Registry::builtin();
    let Some(selection) = kbanim::Selection::parse(&cli.target, &registry) else {
        println!("unknown generator '{}'; choose one of:", cli.target);
        for generator in registry.iter() {
            println!("  {:<10} {}", generator.name(), generator.summary());
        }
        println!("  {:<10} every generator above", kbanim::pipeline::ALL);
        println!("  {:<10} animations listed in animations.json", kbanim::pipeline::BATCH);
        return Ok(());
    };

    let path = kbanim::run(&cli.source_dir, &selection, &registry)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

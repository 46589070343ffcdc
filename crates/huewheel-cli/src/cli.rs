//! Argument parsing and command dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use huewheel::{
    render_color, render_palette, render_rgb, GenerateOptions, Hsl, OutputMode,
    PaletteConfig, PaletteGenerator, Rgb, RngSource, Seed, Strategy,
};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

/// Generate color palettes and convert between color notations.
#[derive(Debug, Parser)]
#[command(name = "huewheel", version)]
pub struct Cli {
    /// Log threshold when RUST_LOG is unset (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a palette with one of the strategies
    Generate(GenerateArgs),

    /// Show one color as rgb, hex and hsl
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// random, shades, complementary, split, triadic, tetradic or analogous
    #[arg(value_name = "STRATEGY")]
    pub strategy: Strategy,

    /// Base color as #hex, hsl(h, s%, l%) or rgb(r, g, b)
    #[arg(long, value_name = "COLOR")]
    pub seed: Option<String>,

    /// Seed the random generator for reproducible palettes
    #[arg(long, value_name = "N")]
    pub rng_seed: Option<u64>,

    /// YAML or JSON file overriding the random ranges and shade count
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Color as #hex, hsl(h, s%, l%) or rgb(r, g, b)
    #[arg(value_name = "COLOR")]
    pub color: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// auto, term, text, json or yaml
    #[arg(short, long, value_name = "MODE", default_value_t = OutputMode::Auto)]
    pub output: OutputMode,
}

/// Runs the parsed command and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Generate(args) => generate(args),
        Command::Convert(args) => convert(args),
    }
}

fn generate(args: &GenerateArgs) -> Result<String> {
    let config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            PaletteConfig::from_file(path)?
        }
        None => PaletteConfig::default(),
    };
    let options = GenerateOptions {
        seed: args.seed.as_deref().map(Seed::from),
    };

    let palette = match args.rng_seed {
        Some(n) => {
            debug!(rng_seed = n, "using seeded generator");
            PaletteGenerator::with_config(RngSource::seeded(n), config)
                .generate(args.strategy, &options)
        }
        None => PaletteGenerator::with_config(RngSource::thread(), config)
            .generate(args.strategy, &options),
    }
    .with_context(|| format!("invalid --seed {:?}", args.seed.as_deref().unwrap_or("")))?;

    Ok(render_palette(&palette, args.output.output)?)
}

fn convert(args: &ConvertArgs) -> Result<String> {
    let context = || format!("cannot read {:?} as a color", args.color);
    let mode = args.output.output;

    // hex and rgb() input is described from its own channels, hsl() from its own triple
    if args.color.trim().to_ascii_lowercase().starts_with("hsl") {
        let color: Hsl = args.color.parse().with_context(context)?;
        Ok(render_color(color, mode)?)
    } else {
        let color: Rgb = args.color.parse().with_context(context)?;
        Ok(render_rgb(color, mode)?)
    }
}

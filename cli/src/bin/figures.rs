use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use figures::AnalyzerConfig;
use figures_cli::{build_analyzer, fill_image, format_counts, load_image};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Count and recolor circles, rectangles and triangles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count figures in an image
    Count {
        /// Path to the input image
        image: PathBuf,
        /// Analyzer configuration file (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Relative error tolerance, overrides the config file
        #[arg(short, long)]
        tolerance: Option<f64>,
        /// Print counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fill figures with their configured colors and save the result
    Fill {
        /// Path to the input image
        image: PathBuf,
        /// Path of the recolored image
        output: PathBuf,
        /// Figures to fill
        #[arg(short, long, value_delimiter = ',', default_value = "circle,rectangle,triangle")]
        figures: Vec<String>,
        /// Analyzer configuration file (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Relative error tolerance, overrides the config file
        #[arg(short, long)]
        tolerance: Option<f64>,
    },
    /// Print the JSON schema of the configuration file
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Count { image, config, tolerance, json } => {
            let analyzer = build_analyzer(config.as_deref(), tolerance)?;
            let input = load_image(&image)?;
            info!("Counting figures in {:?} ({}x{})", image, input.width(), input.height());

            let counts = analyzer.figure_counts(&input)?;
            if json {
                println!("{}", serde_json::to_string(&counts)?);
            } else {
                println!("{}", format_counts(&counts));
            }
        }
        Commands::Fill { image, output, figures, config, tolerance } => {
            fill_image(&image, &output, figures.as_slice(), config.as_deref(), tolerance)?;
        }
        Commands::Schema => {
            let schema = AnalyzerConfig::schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

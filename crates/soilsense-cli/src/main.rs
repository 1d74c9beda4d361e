//! CLI entry point for the SoilSense crop recommendation pipeline.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use soilsense_learning::{
    PredictionService, RandomForest, SoilMeasurements, Trainer, TrainerConfig,
};
use soilsense_processing::{DataCleaner, load_dataset};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "soilsense",
    about = "Train and serve crop recommendations from soil measurements",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a crop recommendation model from a labeled dataset
    Train {
        /// Path to the crop recommendation CSV
        #[arg(long)]
        dataset: PathBuf,

        /// Fraction of rows held out for evaluation
        #[arg(long, default_value_t = 0.2)]
        test_size: f64,

        /// Seed for the train/test partition and the forest
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Number of forest trees
        #[arg(long, default_value_t = 100)]
        trees: u16,

        /// Maximum tree depth (unbounded when omitted)
        #[arg(long)]
        max_depth: Option<u16>,

        /// Write the trained bundle to this JSON file
        #[arg(long)]
        model_out: Option<PathBuf>,
    },

    /// Recommend a crop from one measurement vector
    Predict {
        /// Path to a trained bundle written by `train --model-out`
        #[arg(long)]
        model: PathBuf,

        /// Nitrogen content
        #[arg(long, visible_alias = "n")]
        nitrogen: f64,

        /// Phosphorus content
        #[arg(long, visible_alias = "p")]
        phosphorus: f64,

        /// Potassium content
        #[arg(long, visible_alias = "k")]
        potassium: f64,

        /// Temperature in degrees Celsius
        #[arg(long)]
        temperature: f64,

        /// Relative humidity in percent
        #[arg(long)]
        humidity: f64,

        /// Soil pH
        #[arg(long)]
        ph: f64,

        /// Rainfall in millimeters
        #[arg(long)]
        rainfall: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Train {
            dataset,
            test_size,
            seed,
            trees,
            max_depth,
            model_out,
        } => run_train(dataset, test_size, seed, trees, max_depth, model_out),
        Command::Predict {
            model,
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        } => run_predict(
            model,
            SoilMeasurements {
                nitrogen,
                phosphorus,
                potassium,
                temperature,
                humidity,
                ph,
                rainfall,
            },
        ),
    }
}

fn run_train(
    dataset: PathBuf,
    test_size: f64,
    seed: u64,
    trees: u16,
    max_depth: Option<u16>,
    model_out: Option<PathBuf>,
) -> Result<()> {
    let df = load_dataset(&dataset)
        .with_context(|| format!("failed to load dataset from {}", dataset.display()))?;

    let cleaned = DataCleaner::clean(df).context("failed to clean dataset")?;
    for step in &cleaned.steps {
        info!("{step}");
    }

    let mut builder = TrainerConfig::builder()
        .test_size(test_size)
        .seed(seed)
        .n_trees(trees);
    if let Some(depth) = max_depth {
        builder = builder.max_depth(depth);
    }
    let config = builder.build().context("invalid training configuration")?;

    let outcome = Trainer::new(config)
        .train_frame(&cleaned.frame)
        .context("training failed")?;

    println!(
        "Training report ({})",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("  model:      {}", outcome.report.model_name);
    println!("  accuracy:   {:.4}", outcome.report.accuracy);
    println!("  train rows: {}", outcome.report.train_rows);
    println!("  test rows:  {}", outcome.report.test_rows);
    println!("  classes:    {}", outcome.service.classes().join(", "));

    if let Some(path) = model_out {
        outcome
            .service
            .save(&path)
            .with_context(|| format!("failed to write bundle to {}", path.display()))?;
        info!("Saved model bundle to {}", path.display());
    }

    Ok(())
}

fn run_predict(model: PathBuf, measurements: SoilMeasurements) -> Result<()> {
    let service = PredictionService::<RandomForest>::load(&model)
        .with_context(|| format!("failed to load bundle from {}", model.display()))?;

    let crop = service.predict(&measurements)?;
    println!("{crop}");

    Ok(())
}

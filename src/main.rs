//! screendoc CLI
//!
//! 画面カタログとスクリーンショットから画面設計書（XLSX）を生成します。

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::Parser;
use log::{error, info, LevelFilter};
use screendoc::{DocumentBuilder, ScreenCatalog, ScreenDocError, DEFAULT_SCREENSHOT_DIR};

#[derive(Parser, Debug)]
#[command(
    name = "screendoc",
    version,
    about = "Generate a screen design workbook from a screen catalog and screenshots"
)]
struct Cli {
    /// Screen catalog JSON (default: embedded catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory containing {id}_{name}_{device}.png screenshots
    #[arg(long, default_value = DEFAULT_SCREENSHOT_DIR)]
    screenshots: PathBuf,

    /// Output workbook path (overwritten if it exists)
    #[arg(short, long, default_value = "docs/画面設計書.xlsx")]
    output: PathBuf,

    /// Creation date printed on the index sheet (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<(), ScreenDocError> {
    let mut builder = DocumentBuilder::new().with_screenshot_dir(&cli.screenshots);

    if let Some(path) = &cli.catalog {
        info!("Loading catalog {}", path.display());
        builder = builder.with_catalog(ScreenCatalog::from_path(path)?);
    }
    if let Some(date) = cli.date {
        builder = builder.with_generated_on(date);
    }

    let document = builder.build()?;
    info!(
        "Generating {} screen sheets from {}",
        document.catalog().len(),
        document.screenshot_dir().display()
    );
    document.write_to(&cli.output)
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => info!("Generated {}", cli.output.display()),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

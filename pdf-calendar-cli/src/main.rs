use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Weekday};
use clap::Parser;
use pdf_calendar::config::{DEFAULT_FILE_PREFIX, DEFAULT_PAGE_HEIGHT_MM, DEFAULT_PAGE_WIDTH_MM};
use pdf_calendar::{
    calendar::DEFAULT_LOOKAHEAD_DAYS, CalendarConfig, CalendarGenerator, GenerationReport,
    HeaderStyle,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "pdfcal",
    about = "Print a year of monthly calendar pages as PDF",
    version,
    author
)]
struct Cli {
    /// Year to print (defaults to the year of today + look-ahead)
    #[arg(long)]
    year: Option<i32>,

    /// Reference date instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Days added to the reference date before taking its year
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD_DAYS)]
    lookahead_days: u32,

    /// Directory for the generated files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// File name prefix: <prefix>-<year>-<month>.pdf
    #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
    prefix: String,

    /// Page width in millimetres
    #[arg(long, default_value_t = DEFAULT_PAGE_WIDTH_MM)]
    width_mm: f64,

    /// Page height in millimetres
    #[arg(long, default_value_t = DEFAULT_PAGE_HEIGHT_MM)]
    height_mm: f64,

    /// Weekday shown in the first column
    #[arg(long, default_value = "monday", value_parser = parse_weekday)]
    first_weekday: Weekday,

    /// Hue for the pages, once for all months or twelve times (degrees or 0-1)
    #[arg(long = "hue", value_name = "HUE", allow_negative_numbers = true)]
    hues: Vec<f64>,

    /// Print 1st, 2nd, 3rd... instead of bare day numbers
    #[arg(long)]
    ordinals: bool,

    /// Three-letter weekday headers (Mon, Tue, ...)
    #[arg(long)]
    long_day_names: bool,

    /// Write uncompressed content streams
    #[arg(long)]
    no_compress: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> CalendarConfig {
        let mut config = CalendarConfig::default()
            .with_lookahead_days(self.lookahead_days)
            .with_output_dir(&self.output_dir)
            .with_file_prefix(&self.prefix)
            .with_page_size_mm(self.width_mm, self.height_mm)
            .with_first_weekday(self.first_weekday)
            .with_ordinals(self.ordinals)
            .with_compress(!self.no_compress);

        if let Some(year) = self.year {
            config = config.with_year(year);
        }
        if !self.hues.is_empty() {
            config = config.with_hues(self.hues.clone());
        }
        if self.long_day_names {
            config = config.with_header_style(HeaderStyle::Abbreviated);
        }
        config
    }
}

fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_weekday(value: &str) -> std::result::Result<Weekday, String> {
    value
        .parse::<Weekday>()
        .map_err(|_| format!("unknown weekday '{value}'"))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pdf_calendar=debug,pdfcal=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pdf_calendar=info,pdfcal=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_report(report: &GenerationReport, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{rendered}");
        return Ok(());
    }

    for file in &report.files {
        println!("{}", file.path.display());
    }
    println!(
        "Calendar for {} written to {}",
        report.year,
        report.output_dir.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(%today, "Reference date");

    let generator = CalendarGenerator::new(cli.to_config(), today)
        .context("Invalid calendar options")?;
    let year = generator.target_year()?;
    let report = generator
        .generate_for_year(year)
        .with_context(|| format!("Failed to generate calendar for {year}"))?;

    print_report(&report, cli.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pdfcal"]);
        let config = cli.to_config();

        assert_eq!(config.year, None);
        assert_eq!(config.lookahead_days, 180);
        assert_eq!(config.file_prefix, "cal");
        assert_eq!(config.first_weekday, Weekday::Mon);
        assert_eq!(config.hues.len(), 12);
        assert!(config.compress);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_maps_flags() {
        let cli = Cli::parse_from([
            "pdfcal",
            "--year",
            "2030",
            "--first-weekday",
            "Sunday",
            "--hue",
            "200",
            "--long-day-names",
            "--ordinals",
            "--no-compress",
            "--width-mm",
            "148",
            "--height-mm",
            "105",
        ]);
        let config = cli.to_config();

        assert_eq!(config.year, Some(2030));
        assert_eq!(config.first_weekday, Weekday::Sun);
        assert_eq!(config.hues, vec![200.0]);
        assert_eq!(config.header_style, HeaderStyle::Abbreviated);
        assert!(config.ordinals);
        assert!(!config.compress);
        assert_eq!(config.page_width_mm, 148.0);
        assert_eq!(config.page_height_mm, 105.0);
    }

    #[test]
    fn test_parsers() {
        assert_eq!(
            parse_date("2024-07-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 5).unwrap()
        );
        assert!(parse_date("05/07/2024").is_err());
        assert_eq!(parse_weekday("tue").unwrap(), Weekday::Tue);
        assert!(parse_weekday("someday").is_err());
    }
}

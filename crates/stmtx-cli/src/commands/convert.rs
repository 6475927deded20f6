//! Convert command - turn a single statement file into a transaction table.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use stmtx_core::models::row::TABLE_HEADER;
use stmtx_core::{Conversion, KeywordConfig, StatementConverter, StmtxConfig};

/// Options shared by `convert` and `batch`.
#[derive(Args, Clone)]
pub struct ConversionOptions {
    /// Statement format id (see `stmtx formats`)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Four-digit statement year appended to dates that print none
    #[arg(short, long)]
    pub year: Option<String>,

    /// Keyword list file (JSON with "debit" and "credit" arrays)
    #[arg(short, long)]
    pub keywords: Option<PathBuf>,

    /// Sort rows by date instead of statement order
    #[arg(long)]
    pub sort: bool,
}

impl ConversionOptions {
    /// Build a converter from these options and the configuration.
    pub fn converter(&self, config: &StmtxConfig) -> anyhow::Result<StatementConverter> {
        let id = self
            .format
            .clone()
            .or_else(|| config.conversion.default_format.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("No statement format given. Use --format (see 'stmtx formats').")
            })?;

        let keywords = match &self.keywords {
            Some(path) => KeywordConfig::from_file(path)?,
            None => config.keywords()?,
        };

        Ok(StatementConverter::for_format_id(&id)?
            .with_keywords(keywords)
            .with_segmenter_config(config.segmenter.clone()))
    }

    fn year<'a>(&'a self, config: &'a StmtxConfig) -> Option<&'a str> {
        self.year
            .as_deref()
            .or(config.conversion.default_year.as_deref())
    }

    fn sort(&self, config: &StmtxConfig) -> bool {
        self.sort || config.conversion.sort_by_date
    }
}

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    #[command(flatten)]
    options: ConversionOptions,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 't', long = "to", value_enum, default_value = "json")]
    to: OutputFormat,

    /// Show conversion statistics
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text table
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ConvertArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Converting file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Reading statement...");

    let converter = args.options.converter(&config)?;
    let conversion = convert_file(&args.input, &converter, &config, &args.options)?;

    pb.finish_and_clear();

    for warning in &conversion.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    let output = format_conversion(&conversion, args.to)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} {} rows written to {}",
            style("✓").green(),
            conversion.rows.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.stats {
        let stats = &conversion.stats;
        eprintln!();
        eprintln!("{} Format: {}", style("ℹ").blue(), conversion.format_id);
        eprintln!(
            "{} Lines: {}, blocks: {}, balance markers: {}, dropped: {}",
            style("ℹ").blue(),
            stats.lines,
            stats.blocks,
            stats.balance_markers,
            stats.dropped_blocks
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read and convert one statement file. PDFs go through text extraction;
/// anything else is read as UTF-8 text.
pub fn convert_file(
    path: &Path,
    converter: &StatementConverter,
    config: &StmtxConfig,
    options: &ConversionOptions,
) -> anyhow::Result<Conversion> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let year = options.year(config);
    let mut conversion = if extension == "pdf" {
        let data = fs::read(path)?;
        converter.convert_pdf(&data, config.pdf.max_pages, year)?
    } else {
        let text = fs::read_to_string(path)?;
        converter.convert(&text, year)?
    };

    if options.sort(config) {
        conversion.sort_by_date();
    }

    Ok(conversion)
}

pub fn format_conversion(conversion: &Conversion, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(conversion)?),
        OutputFormat::Csv => format_csv(conversion),
        OutputFormat::Text => Ok(format_text(conversion)),
    }
}

fn format_csv(conversion: &Conversion) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(TABLE_HEADER)?;
    for row in conversion.transaction_rows() {
        wtr.write_record(row.cells())?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(conversion: &Conversion) -> String {
    let grid = conversion.to_grid();

    let mut widths = [0usize; 5];
    for row in &grid {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut output = String::new();
    for (n, row) in grid.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                // Amount columns are right-aligned
                if i >= 2 {
                    format!("{:>width$}", cell, width = widths[i])
                } else {
                    format!("{:<width$}", cell, width = widths[i])
                }
            })
            .collect();
        output.push_str(line.join("  ").trim_end());
        output.push('\n');

        if n == 0 {
            let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
            output.push_str(&"-".repeat(total));
            output.push('\n');
        }
    }

    output.push_str(&format!("\n{} rows\n", conversion.rows.len()));
    output
}

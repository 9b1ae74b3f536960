use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use invoice_generator::config::load_defaults;
use invoice_generator::error::{InvoiceError, Result};
use invoice_generator::invoice::{generate_invoice, prepare_invoice, Language, ParamInput};
use invoice_generator::logger::init_logger;
use invoice_generator::preview::render_preview;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PreviewFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "invoice-generator")]
#[command(version, about = "Generate PDF Invoice", long_about = None)]
struct Cli {
    /// Full name
    #[arg(long)]
    name: Option<String>,

    /// Company name
    #[arg(long)]
    company: Option<String>,

    /// Invoice number
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    invoice_number: u32,

    /// Invoice language
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Due date (YYYYMMDD)
    #[arg(long)]
    due_date: String,

    /// Bill to company
    #[arg(long)]
    bill_to: Option<String>,

    /// Shipping address, lines separated by a literal \n
    #[arg(long)]
    ship_to: Option<String>,

    /// Item description
    #[arg(long)]
    item: Option<String>,

    /// Payment terms
    #[arg(long)]
    payment_terms: Option<String>,

    /// Total value
    #[arg(long)]
    total_value: Decimal,

    /// Output filename (default: invoice_<number>.pdf)
    #[arg(long)]
    output: Option<String>,

    /// Output directory for generated invoices, absolute or relative to the project root
    #[arg(long)]
    output_dir: Option<String>,

    /// Path to custom config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the assembled invoice instead of writing a PDF
    #[arg(long)]
    dry_run: bool,

    /// Output format for --dry-run
    #[arg(long, value_enum, default_value = "text")]
    format: PreviewFormat,

    /// Open generated PDF with system default viewer
    #[arg(long, conflicts_with = "dry_run")]
    open: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(if e.is_usage() { 2 } else { 1 });
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let defaults = load_defaults(cli.config.as_deref(), &project_root)?;

    let input = ParamInput {
        name: cli.name,
        company: cli.company,
        invoice_number: cli.invoice_number,
        language: cli.language,
        due_date: cli.due_date,
        bill_to: cli.bill_to,
        ship_to: cli.ship_to,
        item: cli.item,
        payment_terms: cli.payment_terms,
        total_value: cli.total_value,
        output: cli.output,
        output_dir: cli.output_dir,
    };
    let params = input.resolve(&defaults, &project_root)?;
    let today = chrono::Local::now().date_naive();

    if cli.dry_run {
        let document = prepare_invoice(&params, today)?;
        match cli.format {
            PreviewFormat::Text => println!("{}", render_preview(&document)),
            PreviewFormat::Json => println!("{}", serde_json::to_string_pretty(&document)?),
        }
        return Ok(());
    }

    let path = generate_invoice(&params, today)?;
    println!("Invoice generated: {}", path.display());

    if cli.open {
        open_path(&path)?;
    }

    Ok(())
}

fn open_path(pdf_path: &Path) -> Result<()> {
    // Open with system default viewer
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(pdf_path)
            .spawn()
            .map_err(InvoiceError::Io)?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(pdf_path)
            .spawn()
            .map_err(InvoiceError::Io)?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .arg("/C")
            .arg("start")
            .arg("")
            .arg(pdf_path)
            .spawn()
            .map_err(InvoiceError::Io)?;
    }
    Ok(())
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use notaria_core::constants::ENGINE_VERSION;
use notaria_core::{ExpansionConfig, ExpansionPipeline, SalesPriceProperty};
use notaria_expand::{export_file, load_config, ExportError};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "notaria", version, about = "Expande atajos de registros notariales")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expande un fichero JSON (registro, lista o contenedor) en otro.
    Expand {
        input: PathBuf,
        output: PathBuf,
        /// Conserva las notas editoriales e internas como nodos lingüísticos.
        #[arg(long)]
        include_internal_notes: bool,
        /// Campo del contenedor que guarda la colección.
        #[arg(long)]
        graph_field: Option<String>,
        /// `had_sales_price` (P179) o `has_dimension` (P43).
        #[arg(long, value_parser = parse_sales_price)]
        sales_price_property: Option<SalesPriceProperty>,
    },
    /// Lista los atajos registrados en orden de ejecución.
    Shortcuts {
        /// Salida JSON en lugar de tabla.
        #[arg(long)]
        json: bool,
    },
}

fn parse_sales_price(s: &str) -> Result<SalesPriceProperty, String> {
    s.parse()
}

fn expand(input: PathBuf,
          output: PathBuf,
          include_internal_notes: bool,
          graph_field: Option<String>,
          sales_price_property: Option<SalesPriceProperty>)
          -> Result<(), ExportError> {
    let mut config: ExpansionConfig = load_config()?;
    if include_internal_notes {
        config.include_internal_annotations = true;
    }
    if let Some(field) = graph_field {
        config.graph_field = field;
    }
    if let Some(property) = sales_price_property {
        config.sales_price_property = property;
    }
    let report = export_file(&input, &output, &config)?;
    for skipped in &report.skipped {
        warn!("element {} left unchanged: {}", skipped.index, skipped.reason);
    }
    for residual in &report.residual {
        warn!("element {} ({}) still carries '{}'",
              residual.index,
              residual.record.as_deref().unwrap_or("sin id"),
              residual.key);
    }
    info!("{} record(s) expanded, {} skipped, {} residual shortcut(s)",
          report.transformed,
          report.skipped.len(),
          report.residual.len());
    Ok(())
}

fn shortcuts(json: bool) -> Result<(), ExportError> {
    let pipeline = ExpansionPipeline::standard()?;
    let rows = pipeline.describe();
    if json {
        let text = serde_json::to_string_pretty(&rows).map_err(std::io::Error::from)?;
        println!("{text}");
        return Ok(());
    }
    println!("# engine {ENGINE_VERSION}, {} shortcut(s)", rows.len());
    for row in rows {
        println!("{:>3}  {:<24} {:<14} {}", row.position, row.key, row.phase, row.writes.join(", "));
    }
    Ok(())
}

fn main() -> ExitCode {
    notaria_expand::config::init_env();
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Expand { input,
                          output,
                          include_internal_notes,
                          graph_field,
                          sales_price_property } => {
            expand(input, output, include_internal_notes, graph_field, sales_price_property)
        }
        Command::Shortcuts { json } => shortcuts(json),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("[notaria] {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

use clap::Parser;
use formspec::application::provider::FormSpecProvider;
use formspec::domain::ports::SpecSourceBox;
use formspec::infrastructure::in_memory::InMemoryFormSpecStore;
use formspec::infrastructure::source::{BundledSpecSource, FileSpecSource};
use formspec::interfaces::json::form_spec_writer::FormSpecWriter;
use miette::{IntoDiagnostic, Result, miette};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment method identifiers to print. Prints every entry when omitted.
    payment_methods: Vec<String>,

    /// Read default form specs from this file instead of the bundled document.
    #[arg(long, env = "FORMSPEC_DEFAULTS")]
    defaults: Option<PathBuf>,

    /// Override document applied after the defaults load. May be repeated.
    #[arg(long = "override", value_name = "PATH")]
    overrides: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let source: SpecSourceBox = match cli.defaults {
        Some(path) => Box::new(FileSpecSource::new(path)),
        None => Box::new(BundledSpecSource),
    };
    let mut provider = FormSpecProvider::new(Box::new(InMemoryFormSpecStore::new()), source);

    if !provider.load().await {
        return Err(miette!("failed to load default form specs"));
    }

    // Overrides apply in the order given
    for path in &cli.overrides {
        let bytes = tokio::fs::read(path).await.into_diagnostic()?;
        let value: serde_json::Value = serde_json::from_slice(&bytes).into_diagnostic()?;
        provider.load_from(&value).into_diagnostic()?;
    }

    let specs = if cli.payment_methods.is_empty() {
        provider.form_specs()
    } else {
        cli.payment_methods
            .iter()
            .filter_map(|id| {
                let spec = provider.form_spec(id);
                if spec.is_none() {
                    tracing::warn!(payment_method_type = %id, "no form spec for payment method");
                }
                spec
            })
            .collect()
    };

    let stdout = io::stdout();
    let mut writer = FormSpecWriter::new(stdout.lock());
    writer.write_specs(specs).into_diagnostic()?;

    Ok(())
}

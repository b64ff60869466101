use crate::Cli;
use crate::logging;
use faktura_core::config::loader::{ConfigLoader, default_config_path};
use faktura_core::config::types::ResolvedConfig;
use faktura_core::generate;
use faktura_core::invoice::StructuredInvoice;
use faktura_core::render::{OutputFormat, render_json, render_text};
use faktura_core::templates::TemplateResolver;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub fn run(cli: &Cli) {
    let cfg = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL faktura");
            println!("{e}");
            if cli.config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    let log_guard = logging::init(&cfg.logging);
    debug!(config = ?cfg.source, "configuration loaded");

    let result = generate_invoice(cli, &cfg);
    if let Err(ref msg) = result {
        error!("{msg}");
    }
    // Flush the file log before any exit below.
    drop(log_guard);

    match result {
        Ok(Some(output)) => {
            println!("OK   faktura");
            println!("template: {}", cli.template.display());
            println!("output: {}", output.display());
        }
        Ok(None) => {}
        Err(msg) => {
            println!("FAIL faktura");
            println!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Returns the written path, or `None` when the invoice went to stdout.
fn generate_invoice(cli: &Cli, cfg: &ResolvedConfig) -> Result<Option<PathBuf>, String> {
    let resolver = TemplateResolver::system();
    let invoice = generate(&cli.template, &resolver).map_err(|e| e.to_string())?;

    let format = cli.format.unwrap_or(cfg.output_format);
    let rendered = render(&invoice, format, cfg)?;

    if cli.stdout {
        print!("{rendered}");
        return Ok(None);
    }

    let output_dir = cli.output_dir.clone().unwrap_or_else(|| cfg.output_dir.clone());
    let output = output_path(&output_dir, &invoice.output_name, format);

    write_output(&output, &rendered)
        .map_err(|e| format!("failed to write {}: {e}", output.display()))?;

    info!(output = %output.display(), "invoice generated");
    Ok(Some(output))
}

fn render(
    invoice: &StructuredInvoice,
    format: OutputFormat,
    cfg: &ResolvedConfig,
) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(render_text(invoice, &cfg.currency)),
        OutputFormat::Json => render_json(invoice).map_err(|e| e.to_string()),
    }
}

/// `<dir>/<output name>` with the extension swapped for the format's.
fn output_path(dir: &Path, output_name: &str, format: OutputFormat) -> PathBuf {
    dir.join(output_name).with_extension(format.extension())
}

fn write_output(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_swaps_extension() {
        let p = output_path(Path::new("/out"), "faktura-2024-01.pdf", OutputFormat::Text);
        assert_eq!(p, PathBuf::from("/out/faktura-2024-01.txt"));
    }

    #[test]
    fn test_output_path_adds_missing_extension() {
        let p = output_path(Path::new("out"), "faktura", OutputFormat::Json);
        assert_eq!(p, PathBuf::from("out/faktura.json"));
    }
}

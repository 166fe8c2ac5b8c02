use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::cli::ExportArgs;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::export::{
    DiskSpaceChecker, ExportError, ExportOutcome, Exporter, HtmlFileRenderer, JsonFileDataSource,
};
use crate::model::ReportRequest;
use crate::output::ProgressBarSink;
use crate::{EXIT_CONFIG_ERROR, EXIT_EXPORT_FAILED, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_export(args: &ExportArgs, quiet: bool) -> i32 {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            return EXIT_CONFIG_ERROR;
        }
    };

    match runtime.block_on(run_export_impl(args, quiet)) {
        Ok(outcome) => report_outcome(&outcome),
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads configuration and data, then runs one export with local collaborators.
///
/// # Errors
/// Returns an error if the configuration or the data file cannot be loaded.
/// Export failures are reported through the returned [`ExportOutcome`].
pub async fn run_export_impl(args: &ExportArgs, quiet: bool) -> Result<ExportOutcome> {
    let config = load_config(args.config.as_deref())?;
    let source = JsonFileDataSource::load(&args.data).await?;

    let exporter = Exporter::new(
        source,
        DiskSpaceChecker::new(&args.output_dir),
        HtmlFileRenderer::new(&args.output_dir),
    )
    .with_config(&config);

    let progress = Arc::new(ProgressBarSink::new(quiet));
    let mut request = ReportRequest::new(&args.zone_id, &args.zone_name, args.start, args.end)
        .with_category(args.category)
        .with_progress(progress.clone());
    if let Some(tag) = &args.account_tag {
        request = request.with_account_tag(tag);
    }

    let outcome = exporter.export(&request).await;
    progress.finish();
    Ok(outcome)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loader = FileConfigLoader::new();
    let config = match path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    debug!(?config, "Configuration loaded");
    Ok(config)
}

fn report_outcome(outcome: &ExportOutcome) -> i32 {
    match outcome {
        ExportOutcome::Success { path, .. } => {
            println!("{}", path.display());
            EXIT_SUCCESS
        }
        ExportOutcome::Failure(error) => {
            eprintln!("{}", format_failure(error));
            EXIT_EXPORT_FAILED
        }
    }
}

/// Error text printed for a failed export: code and message, then details.
#[must_use]
pub fn format_failure(error: &ExportError) -> String {
    let mut text = format!("Error [{}]: {}", error.code, error.message);
    if let Some(details) = &error.details {
        text.push_str("\n  ");
        text.push_str(details);
    }
    text
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;

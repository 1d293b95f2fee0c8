// File: crates/demo/src/main.rs
// Summary: CLI that fetches ECG/EMG series (built-in samples or CSV), builds the weekly report and saves it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use medconnect_chart::config::generate_default_config;
use medconnect_chart::{
    export, FileSink, LabelRange, ReportBuilder, ReportConfig, ReportFormat, Series, StaticProvider,
};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "medconnect-report", version, about = "Export the MedConnect weekly health report")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format (text or html); overrides the config file
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Output directory; overrides the config file
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// CSV with `signal,label,value` rows instead of the built-in sample traces
    #[arg(long)]
    csv: Option<PathBuf>,

    /// First label to include (e.g. 00:02)
    #[arg(long)]
    from: Option<String>,

    /// Last label to include (e.g. 00:08)
    #[arg(long)]
    to: Option<String>,

    /// Print a commented default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "medconnect_chart=info,medconnect_report=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = ReportConfig::load_with_env(cli.config.as_deref()).context("unable to load configuration")?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(out) = cli.out {
        config.output_dir = out;
    }

    let provider = match &cli.csv {
        Some(path) => load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => StaticProvider::dashboard_samples(),
    };
    tracing::info!(signals = ?provider.signals().collect::<Vec<_>>(), "series provider ready");

    let file = ReportBuilder::new(config.render.clone())
        .vitals(config.vitals.clone())
        .signals(config.signals.clone())
        .range(LabelRange::new(cli.from, cli.to))
        .max_points(config.max_points_per_chart)
        .build(&provider, config.format, chrono::Local::now().naive_local())
        .context("unable to generate report")?;

    let mut sink = FileSink::new(&config.output_dir);
    export(file, &mut sink).context("unable to save report")?;
    for path in sink.written() {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    signal: String,
    label: String,
    value: f64,
}

/// Load `signal,label,value` rows; row order within a signal is kept as the time axis.
fn load_csv(path: &Path) -> Result<StaticProvider> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut by_signal: Vec<Series> = Vec::new();
    for (line, rec) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = rec.with_context(|| format!("row {}", line + 2))?;
        match by_signal.iter_mut().find(|s| s.name.eq_ignore_ascii_case(&row.signal)) {
            Some(series) => series.push(row.label, row.value),
            None => {
                let mut series = Series::new(row.signal);
                series.push(row.label, row.value);
                by_signal.push(series);
            }
        }
    }
    if by_signal.is_empty() {
        anyhow::bail!("no rows loaded; expected headers signal,label,value");
    }
    tracing::info!(path = %path.display(), signals = by_signal.len(), "loaded CSV series");
    Ok(by_signal.into_iter().fold(StaticProvider::new(), StaticProvider::with_series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use medconnect_chart::SeriesProvider;

    fn write_csv(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("series.csv");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn csv_signals_merge_case_insensitively_in_row_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "signal,label,value\nECG,00:00,0.1\nEMG,00:00,1\necg,00:01,0.2\nEcg,00:02,0.3\n",
        );
        let provider = load_csv(&path).unwrap();
        assert_eq!(provider.signals().count(), 2);

        let ecg = provider.fetch_series("ECG", &LabelRange::all()).unwrap();
        assert_eq!(ecg.name, "ECG");
        assert_eq!(ecg.values().collect::<Vec<_>>(), [0.1, 0.2, 0.3]);
        let labels: Vec<&str> = ecg.samples.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["00:00", "00:01", "00:02"]);

        assert_eq!(provider.fetch_series("emg", &LabelRange::all()).unwrap().len(), 1);
    }

    #[test]
    fn headers_only_csv_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "signal,label,value\n");
        let err = load_csv(&path).unwrap_err();
        assert!(err.to_string().contains("no rows loaded"), "{err:#}");
    }

    #[test]
    fn malformed_value_names_the_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "signal,label,value\nECG,00:00,0.1\nECG,00:01,abc\n");
        let err = load_csv(&path).unwrap_err();
        assert!(err.to_string().contains("row 3"), "{err:#}");
    }
}

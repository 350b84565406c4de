use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use agenda_chart::core::MetricSelection;
use agenda_chart::render::SvgRenderer;
use agenda_chart::telemetry::init_default_tracing;
use agenda_chart::{AgendaChart, AgendaChartConfig, AgendaSource, load_agenda};
use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "agenda-chart", version, about)]
struct Cli {
    /// Agenda JSON: an http(s) URL or a file path.
    source: String,

    /// Output SVG path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Chart config JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plot width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Height of one bar in pixels.
    #[arg(long)]
    bar_height: Option<f64>,

    /// Metrics drawn per talk.
    #[arg(long, value_enum)]
    metric: Option<MetricChoice>,

    /// Maximum label width in pixels before truncation.
    #[arg(long)]
    label_width: Option<f64>,

    /// Also write the flattened layout as versioned JSON.
    #[arg(long)]
    dump_layout: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricChoice {
    Both,
    Likes,
    Feedback,
}

impl From<MetricChoice> for MetricSelection {
    fn from(choice: MetricChoice) -> Self {
        match choice {
            MetricChoice::Both => Self::Both,
            MetricChoice::Likes => Self::Likes,
            MetricChoice::Feedback => Self::Feedback,
        }
    }
}

fn main() -> ExitCode {
    let _ = init_default_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = build_config(&cli)?;
    let mut chart = AgendaChart::new(SvgRenderer::new(), config).context("invalid chart config")?;

    let source = AgendaSource::parse(&cli.source);
    let code = match load_agenda(&source) {
        Ok(agenda) => {
            chart.render(&agenda).context("render agenda chart")?;
            if let Some(path) = &cli.dump_layout {
                let json = chart.snapshot(&agenda).to_json_contract_v1_pretty()?;
                std::fs::write(path, json)
                    .with_context(|| format!("write layout {}", path.display()))?;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            // The user sees the failure in place of the chart.
            tracing::warn!(source = %source, error = %err, "agenda unavailable");
            eprintln!("{err}");
            chart.render_message(&err.to_string())?;
            ExitCode::FAILURE
        }
    };

    emit(chart.renderer().document(), cli.out.as_deref())?;
    Ok(code)
}

fn build_config(cli: &Cli) -> anyhow::Result<AgendaChartConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            AgendaChartConfig::from_json_str(&raw)?
        }
        None => AgendaChartConfig::default(),
    };
    if let Some(width) = cli.width {
        config = config.with_width(width);
    }
    if let Some(bar_height) = cli.bar_height {
        config = config.with_bar_height(bar_height);
    }
    if let Some(metric) = cli.metric {
        config = config.with_metrics(metric.into());
    }
    if let Some(label_width) = cli.label_width {
        config = config.with_label_width(label_width);
    }
    Ok(config)
}

fn emit(document: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("write svg {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
    }
}

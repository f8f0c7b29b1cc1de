// File: crates/demo/src/main.rs
// Summary: Demo CLI: renders the weather (or CSV) line chart with an indicator tooltip and browses the stock catalog.

mod config;
mod data;
mod screens;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use stockline_core::nav::{Navigator, Route};
use stockline_core::sample::weather_dataset;
use stockline_core::stocks::catalog;
use stockline_core::{theme, LineChart, RenderOptions};
use tracing::{debug, info};

use crate::config::DemoConfig;

#[derive(Debug, Parser)]
#[command(name = "stockline-demo", about = "Line chart and stock browser demo")]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the chart to PNG and print the tooltip for each indicator position.
    Chart {
        /// CSV with an epoch-ms column followed by one column per series.
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pointer x in plot pixels; repeat to simulate a drag.
        #[arg(long = "indicator-x", allow_negative_numbers = true)]
        indicator_x: Vec<f64>,
        #[arg(long)]
        progress: Option<f64>,
        #[arg(long)]
        theme: Option<String>,
    },
    /// Show the stock list screen.
    Stocks,
    /// Show the detail screen for a symbol.
    Stock { symbol: String },
    /// Walk routes like `StockDetailScreen/MSFT`; `back` pops the stack.
    Browse { routes: Vec<String> },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // A host may already have installed a subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = DemoConfig::load(cli.config.as_deref())?;
    debug!(?cfg, "loaded config");

    match cli.command {
        Command::Chart { csv, out, indicator_x, progress, theme } => {
            run_chart(&cfg, csv, out, &indicator_x, progress, theme)
        }
        Command::Stocks => {
            print_lines(&screens::list_screen(&catalog()));
            Ok(())
        }
        Command::Stock { symbol } => {
            print_lines(&screens::detail_screen(&catalog(), &symbol));
            Ok(())
        }
        Command::Browse { routes } => run_browse(&routes),
    }
}

fn run_chart(
    cfg: &DemoConfig,
    csv: Option<PathBuf>,
    out: Option<PathBuf>,
    indicator_x: &[f64],
    progress: Option<f64>,
    theme_name: Option<String>,
) -> Result<()> {
    let dataset = match csv {
        Some(path) => data::load_dataset_csv(&path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => {
            let now_ms = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as i64;
            weather_dataset(now_ms)
        }
    };
    println!("{}: {}", dataset.label, dataset.content_description());

    let chart = LineChart::new(dataset)
        .with_label_counts(cfg.chart.x_label_count, cfg.chart.y_label_count);
    let mut opts = RenderOptions {
        width: cfg.chart.width,
        height: cfg.chart.height,
        theme: theme::find(theme_name.as_deref().unwrap_or(&cfg.chart.theme)),
        progress: progress.unwrap_or(cfg.chart.progress),
        stroke_width: cfg.chart.stroke_width,
        ..RenderOptions::default()
    };

    for &x in indicator_x {
        opts.indicator_x = Some(x);
        if let Some(tip) = chart.tooltip(&opts)? {
            println!("indicator @ {:.1}px", tip.x_px);
            for line in tip.lines() {
                println!("  {line}");
            }
        }
    }

    let out = out.unwrap_or_else(|| cfg.chart.out.clone());
    chart.render_to_png(&opts, &out)?;
    info!(path = %out.display(), theme = opts.theme.name, "chart written");
    println!("Wrote {}", out.display());
    Ok(())
}

fn run_browse(routes: &[String]) -> Result<()> {
    let stocks = catalog();
    let mut nav = Navigator::new();
    print_lines(&screens::screen_for(nav.current(), &stocks));
    for raw in routes {
        if raw.eq_ignore_ascii_case("back") {
            if !nav.pop_back() {
                info!("already at the start screen");
            }
        } else {
            let route: Route = raw.parse()?;
            nav.navigate(route);
        }
        println!("--- {} ---", nav.current());
        print_lines(&screens::screen_for(nav.current(), &stocks));
    }
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

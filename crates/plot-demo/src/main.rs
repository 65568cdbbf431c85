// File: crates/plot-demo/src/main.rs
// Summary: Renders a plot request (query string like `a=-1&vb=3`) to PNG, to a file or stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use plot_core::{render_request_png, theme, PlotRequest, RenderOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_OUT: &str = "target/out/plot.png";

struct Args {
    query: String,
    out: Option<PathBuf>,
    seed: Option<u64>,
    theme: Option<String>,
    draw_labels: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout may carry the image.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let request = PlotRequest::from_query(&args.query);
    info!(?request, "plot request");

    let mut opts = RenderOptions::default();
    if let Some(name) = &args.theme {
        opts = opts.with_theme(theme::find(name));
    }
    opts.draw_labels = args.draw_labels;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let bytes = render_request_png(&request, &opts, &mut rng)?;

    match args.out {
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("write PNG to stdout")?;
            stdout.flush()?;
            info!(bytes = bytes.len(), "wrote PNG to stdout");
        }
        Some(path) => {
            write_file(&path, &bytes)?;
            info!(bytes = bytes.len(), path = %path.display(), "wrote PNG");
        }
    }
    Ok(())
}

/// `[QUERY] [--out PATH|-] [--seed N] [--theme NAME] [--no-labels]`.
/// The query falls back to `PLOT_QUERY`, then to the empty query (all defaults).
fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        query: std::env::var("PLOT_QUERY").unwrap_or_default(),
        out: Some(PathBuf::from(DEFAULT_OUT)),
        seed: None,
        theme: None,
        draw_labels: true,
    };
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                let v = it.next().context("--out needs a path")?;
                args.out = if v == "-" { None } else { Some(PathBuf::from(v)) };
            }
            "--seed" => {
                let v = it.next().context("--seed needs a value")?;
                args.seed = Some(v.parse().with_context(|| format!("invalid seed '{v}'"))?);
            }
            "--theme" => args.theme = Some(it.next().context("--theme needs a name")?),
            "--no-labels" => args.draw_labels = false,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            query => args.query = query.to_string(),
        }
    }
    Ok(args)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

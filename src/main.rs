use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vectorgen::{emit, extract, plan};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate interrupt vector table stubs from a datasheet PDF"
)]
struct Args {
    /// Path to the input PDF file.
    #[arg(short, long)]
    input: PathBuf,
    /// Path of the generated C file.
    #[arg(short, long, default_value = "generated_functions.c")]
    output: PathBuf,
    /// Column index holding the vector acronyms (0-based).
    #[arg(short, long, default_value_t = 0)]
    column: usize,
    /// Start page index (0-based).
    #[arg(short, long, default_value_t = 0)]
    start_page: usize,
    /// End page index (0-based, exclusive). Defaults to the last page.
    #[arg(short, long)]
    end_page: Option<usize>,
    /// Treat a dash before the first named vector as the reserved
    /// stack-pointer slot and drop it from the array.
    #[arg(short = 'f', long)]
    skip_first_dash: bool,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();

    // ─── 2) extract the vector column ────────────────────────────────
    if !args.input.exists() {
        bail!("input file {} not found", args.input.display());
    }
    let entries =
        extract::extract_column(&args.input, args.column, args.start_page, args.end_page)?;
    if entries.is_empty() {
        bail!(
            "no entries found in column {} over the selected page range; nothing written",
            args.column
        );
    }
    info!(entries = entries.len(), "extracted column entries");

    // ─── 3) plan slots & emit the C file ─────────────────────────────
    let skip = plan::skip_index(&entries, args.skip_first_dash);
    let plan = plan::build_plan(&entries, skip);
    emit::write_vector_table(&plan, &args.output)?;

    info!(output = %args.output.display(), "vector table generated");
    Ok(())
}

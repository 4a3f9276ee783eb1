use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vectorgen::firmware::{self, FwConfig};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Run firmware build/flash/debug actions with streamed output"
)]
struct Args {
    /// YAML config overriding the build script, ELF path and flash size.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the firmware and report flash usage.
    Build {
        /// Use the ninja generator instead of make.
        #[arg(long)]
        ninja: bool,
    },
    /// Force a full rebuild.
    Rebuild {
        /// Use the ninja generator instead of make.
        #[arg(long)]
        ninja: bool,
    },
    /// Remove build outputs.
    Clean,
    /// Flash the firmware onto the target.
    Flash,
    /// Print section sizes of the current binary.
    Size,
    /// Disassemble the current binary.
    Objdump,
    /// Start a GDB debug session.
    Gdb,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let cfg = FwConfig::load(args.config.as_deref())?;

    let (subcommand, ninja, report_flash) = match args.action {
        Action::Build { ninja } => ("build", ninja, true),
        Action::Rebuild { ninja } => ("rebuild", ninja, false),
        Action::Clean => ("clean", false, false),
        Action::Flash => ("flash", false, false),
        Action::Size => ("size", false, false),
        Action::Objdump => ("objdump", false, false),
        Action::Gdb => ("gdb", false, false),
    };

    let mut cmd = format!("{} {}", cfg.build_script, subcommand);
    if ninja {
        cmd.push_str(" --ninja");
    }
    firmware::run_streamed(&cmd)?;

    if report_flash {
        match firmware::flash_usage(&cfg) {
            Some(report) => println!(
                "\nFlash used: {} bytes ({:.2}%)",
                report.used_bytes, report.used_percent
            ),
            None => println!("\nFlash usage unavailable"),
        }
    }

    Ok(())
}

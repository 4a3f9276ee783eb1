//! Helpers behind the `fwbuild` front-end: shelling out to the build
//! script with streamed output, and the flash usage report.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Front-end configuration, optionally loaded from a YAML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FwConfig {
    /// Build script invoked for every action.
    pub build_script: String,
    /// ELF inspected for the flash usage report.
    pub elf_path: PathBuf,
    /// Flash capacity of the target part in bytes.
    pub flash_size_bytes: u64,
}

impl Default for FwConfig {
    fn default() -> Self {
        FwConfig {
            build_script: "./build.sh".to_string(),
            elf_path: PathBuf::from("build/firmware.elf"),
            // STM32F446 = 512 KB
            flash_size_bytes: 512 * 1024,
        }
    }
}

impl FwConfig {
    /// Load from `path`, or fall back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read config {}", p.display()))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("failed to parse config {}", p.display()))
            }
            None => Ok(FwConfig::default()),
        }
    }
}

/// Run `cmd` through the shell, echoing combined stdout/stderr line-by-line
/// as it is produced. Returns the exit status; a non-zero exit is the
/// caller's call, not an error here.
pub fn run_streamed(cmd: &str) -> Result<ExitStatus> {
    println!("$ {cmd}\n");

    let mut child = Command::new("sh")
        .arg("-c")
        .arg(format!("{cmd} 2>&1"))
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn `{cmd}`"))?;

    let stdout = child.stdout.take().context("child stdout not captured")?;
    for line in BufReader::new(stdout).lines() {
        println!("{}", line?);
    }

    Ok(child.wait()?)
}

/// Flash usage computed from `arm-none-eabi-size` output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashReport {
    pub used_bytes: u64,
    pub used_percent: f64,
}

/// Parse `size` output and compute usage against `flash_size_bytes`.
///
/// The tool prints a header line followed by one data line:
///
/// ```text
///    text    data     bss     dec     hex filename
///   87220     120     500   87840   15720 build/firmware.elf
/// ```
///
/// Flash holds text + data. Returns `None` when the second line is missing
/// or does not start with two numeric fields.
pub fn parse_size_output(output: &str, flash_size_bytes: u64) -> Option<FlashReport> {
    let line = output.lines().nth(1)?;
    let mut fields = line.split_whitespace();
    let text: u64 = fields.next()?.parse().ok()?;
    let data: u64 = fields.next()?.parse().ok()?;

    let used = text + data;
    Some(FlashReport {
        used_bytes: used,
        used_percent: used as f64 / flash_size_bytes as f64 * 100.0,
    })
}

/// Run `arm-none-eabi-size` on the configured ELF and compute percent flash
/// used. Any failure to run or parse degrades to `None`; a missing report
/// never fails the build action it follows.
pub fn flash_usage(cfg: &FwConfig) -> Option<FlashReport> {
    let out = Command::new("arm-none-eabi-size")
        .arg(&cfg.elf_path)
        .output()
        .map_err(|err| {
            debug!(%err, "arm-none-eabi-size not runnable");
            err
        })
        .ok()?;
    parse_size_output(&String::from_utf8_lossy(&out.stdout), cfg.flash_size_bytes)
}

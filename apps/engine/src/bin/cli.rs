//! engine-cli — process-lifecycle control for a background cv-engine worker.
//!
//! The worker is supervised through a PID file: `start` spawns the engine
//! binary detached and records its PID, `stop` terminates it (SIGTERM, then
//! SIGKILL after a grace period), `status` reports liveness and cleans up a
//! stale PID file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "engine-cli",
    version,
    about = "Start, stop and inspect a background cv-engine worker"
)]
struct Cli {
    /// Path to the engine executable
    #[arg(long, default_value = "./cv-engine")]
    engine: PathBuf,

    /// Path to the PID file
    #[arg(long, default_value = "engine.pid")]
    pid_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the engine in the background
    Start,
    /// Stop the running engine
    Stop,
    /// Stop, then start the engine again
    Restart,
    /// Show whether the engine is running
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Start => start(&cli.engine, &cli.pid_file),
        Commands::Stop => stop(&cli.pid_file),
        Commands::Restart => {
            stop(&cli.pid_file)?;
            thread::sleep(Duration::from_secs(1));
            start(&cli.engine, &cli.pid_file)
        }
        Commands::Status => status(&cli.pid_file),
    }
}

fn start(engine: &Path, pid_file: &Path) -> Result<()> {
    if let Some(pid) = running_pid(pid_file) {
        println!("Engine is already running (PID: {pid})");
        return Ok(());
    }
    if !engine.exists() {
        anyhow::bail!("Engine executable not found: {}", engine.display());
    }

    let child = Command::new(engine)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to start {}", engine.display()))?;

    let pid = child.id();
    fs::write(pid_file, pid.to_string())
        .with_context(|| format!("engine started but failed to save {}", pid_file.display()))?;
    println!("Engine started successfully (PID: {pid})");
    Ok(())
}

fn stop(pid_file: &Path) -> Result<()> {
    let Some(pid) = running_pid(pid_file) else {
        println!("Engine is not running");
        return Ok(());
    };

    signal(pid, "-TERM")?;
    thread::sleep(Duration::from_secs(2));

    if process_alive(pid) {
        signal(pid, "-KILL")?;
        println!("Engine forcefully stopped");
    } else {
        println!("Engine stopped successfully");
    }
    let _ = fs::remove_file(pid_file);
    Ok(())
}

fn status(pid_file: &Path) -> Result<()> {
    match running_pid(pid_file) {
        Some(pid) => println!("Engine is running (PID: {pid})"),
        None => {
            println!("Engine is not running");
            // Clean up a stale PID file if one is left behind
            if pid_file.exists() {
                let _ = fs::remove_file(pid_file);
            }
        }
    }
    Ok(())
}

/// Reads the PID file and returns the PID only if that process is alive.
fn running_pid(pid_file: &Path) -> Option<u32> {
    let pid: u32 = fs::read_to_string(pid_file).ok()?.trim().parse().ok()?;
    process_alive(pid).then_some(pid)
}

/// Signal 0 probes for existence without touching the process.
fn process_alive(pid: u32) -> bool {
    Command::new("kill")
        .args(["-0", &pid.to_string()])
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn signal(pid: u32, sig: &str) -> Result<()> {
    let status = Command::new("kill")
        .args([sig, &pid.to_string()])
        .status()
        .context("failed to invoke kill")?;
    if !status.success() {
        anyhow::bail!("failed to signal PID {pid} with {sig}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_pid_none_without_pid_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(running_pid(&dir.path().join("engine.pid")), None);
    }

    #[test]
    fn test_running_pid_none_for_garbage_pid_file() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("engine.pid");
        fs::write(&pid_file, "not-a-pid").unwrap();
        assert_eq!(running_pid(&pid_file), None);
    }

    #[test]
    fn test_status_cleans_stale_pid_file() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("engine.pid");
        // PID that is near-certainly free: the max value on Linux defaults
        // to 4194304, so anything above it cannot be alive.
        fs::write(&pid_file, "4999999").unwrap();
        status(&pid_file).unwrap();
        assert!(!pid_file.exists());
    }

    #[test]
    fn test_stop_without_pid_file_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        stop(&dir.path().join("engine.pid")).unwrap();
    }
}

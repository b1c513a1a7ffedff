use crate::error::Error;
use std::{
    path::PathBuf,
    process::Command,
    time::{Duration, Instant},
};
use strum_macros::{Display, EnumString};
use tracing::{info, warn};

/// What to launch and how many times. The paths are handed to the child untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub executable: PathBuf,
    pub matrix_file: PathBuf,
    /// Passed verbatim as the second argument.
    pub source_node: String,
    pub repetitions: u32,
}

impl RunConfig {
    pub fn new(
        executable: impl Into<PathBuf>,
        matrix_file: impl Into<PathBuf>,
        source_node: impl Into<String>,
        repetitions: u32,
    ) -> Result<Self, Error> {
        if repetitions == 0 {
            return Err(Error::ZeroRepetitions);
        }
        Ok(Self {
            executable: executable.into(),
            matrix_file: matrix_file.into(),
            source_node: source_node.into(),
            repetitions,
        })
    }
}

/// Which run count the accumulated time is divided by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AveragePolicy {
    /// Divide by the requested repetition count. Failed runs add no time but
    /// still count, which pulls the average down.
    #[default]
    Requested,
    /// Divide by the number of runs that exited successfully.
    Successful,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialStatus {
    Succeeded,
    /// Non-zero exit. `None` when the child was killed by a signal.
    Failed(Option<i32>),
}

/// Outcome of a single launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    pub elapsed: Duration,
    pub status: TrialStatus,
}

impl Trial {
    pub fn succeeded(elapsed: Duration) -> Self {
        Self {
            elapsed,
            status: TrialStatus::Succeeded,
        }
    }

    pub fn failed(elapsed: Duration, code: Option<i32>) -> Self {
        Self {
            elapsed,
            status: TrialStatus::Failed(code),
        }
    }
}

pub trait Launcher {
    /// Runs `<executable> <matrix_file> <source_node>` once, blocking until it exits.
    ///
    /// A child that starts and exits non-zero is a failed [`Trial`], not an error;
    /// `Err` is reserved for a child that could not be started at all.
    fn launch(&mut self, config: &RunConfig) -> Result<Trial, Error>;
}

/// Spawns a real child process with inherited standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, config: &RunConfig) -> Result<Trial, Error> {
        let start = Instant::now();
        let status = Command::new(&config.executable)
            .arg(&config.matrix_file)
            .arg(&config.source_node)
            .status()
            .map_err(|source| Error::Spawn {
                executable: config.executable.clone(),
                source,
            })?;
        let elapsed = start.elapsed();

        Ok(if status.success() {
            Trial::succeeded(elapsed)
        } else {
            Trial::failed(elapsed, status.code())
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub requested: u32,
    pub successful: u32,
    /// Sum of the successful runs only.
    pub total: Duration,
    pub policy: AveragePolicy,
    pub average_ms: f64,
}

impl BenchmarkReport {
    pub fn failed(&self) -> u32 {
        self.requested - self.successful
    }
}

pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Launches the configured program `repetitions` times in sequence and averages
/// the wall-clock time of the successful runs according to `policy`.
pub fn run_program<L: Launcher + ?Sized>(
    config: &RunConfig,
    launcher: &mut L,
    policy: AveragePolicy,
) -> Result<BenchmarkReport, Error> {
    if config.repetitions == 0 {
        return Err(Error::ZeroRepetitions);
    }

    let mut total = Duration::ZERO;
    let mut successful = 0u32;

    for run in 1..=config.repetitions {
        info!("Run {}/{}...", run, config.repetitions);

        let trial = launcher.launch(config)?;
        match trial.status {
            TrialStatus::Succeeded => {
                total += trial.elapsed;
                successful += 1;
                info!(
                    "Execution time for run {}: {:.4} ms",
                    run,
                    as_millis_f64(trial.elapsed)
                );
            }
            TrialStatus::Failed(Some(code)) => {
                warn!("Error occurred while running the program: exit status {}", code)
            }
            TrialStatus::Failed(None) => {
                warn!("Error occurred while running the program: terminated by signal")
            }
        }
    }

    let divisor = match policy {
        AveragePolicy::Requested => config.repetitions,
        AveragePolicy::Successful if successful == 0 => {
            return Err(Error::NoSuccessfulRuns {
                requested: config.repetitions,
            })
        }
        AveragePolicy::Successful => successful,
    };

    Ok(BenchmarkReport {
        requested: config.repetitions,
        successful,
        total,
        policy,
        average_ms: total.as_secs_f64() / f64::from(divisor) * 1000.0,
    })
}

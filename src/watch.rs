use crate::console;
use crate::error::ReportError;
use crate::models::Report;
use crate::services::ReportService;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Consecutive failures before the refresh interval is extended.
const BACKOFF_THRESHOLD: u32 = 3;

/// How long shutdown waits for an in-flight fetch before aborting it.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Single-slot admission for the background fetch. At most one request is in
/// flight; claiming the slot while one is pending is a no-op.
#[derive(Debug, Default)]
pub struct SingleFlight {
    in_flight: bool,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot. Returns false, changing nothing, when a fetch is
    /// already pending.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Refresh cadence with the simple failure backoff: after three consecutive
/// failures the next interval doubles, resetting on the first success.
#[derive(Debug)]
pub struct RefreshSchedule {
    base: Duration,
    consecutive_failures: u32,
}

impl RefreshSchedule {
    pub fn new(base: Duration) -> Self {
        Self {
            base,
            consecutive_failures: 0,
        }
    }

    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }

    pub fn record_failure(&mut self) {
        self.consecutive_failures += 1;
    }

    pub fn next_interval(&self) -> Duration {
        if self.consecutive_failures >= BACKOFF_THRESHOLD {
            self.base * 2
        } else {
            self.base
        }
    }
}

/// Auto-refreshing front end. A 1-second ticker drives the countdown; when
/// it reaches zero a fetch is spawned on a background task (unless one is
/// still in flight), and its result comes back over the channel to this
/// loop, the only place the displayed snapshot is touched.
pub async fn run(
    service: Arc<ReportService>,
    gas_units: f64,
    currency: String,
    interval: Duration,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Result<Report, ReportError>>(1);
    let mut flight = SingleFlight::new();
    let mut schedule = RefreshSchedule::new(interval);
    let mut worker: Option<JoinHandle<()>> = None;

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Countdown starts expired so the first tick fetches immediately.
    let mut countdown: u64 = 0;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("watch mode shutting down");
                break;
            }
            Some(result) = rx.recv() => {
                flight.finish();
                match result {
                    Ok(report) => {
                        schedule.record_success();
                        clear_screen();
                        console::print_report(&report);
                    }
                    Err(e) => {
                        // The previous snapshot is discarded rather than
                        // left on screen looking current.
                        schedule.record_failure();
                        clear_screen();
                        println!("{}", e);
                        tracing::error!("background fetch failed: {}", e);
                    }
                }
                // Re-arm from completion so a just-recorded failure streak
                // extends the very next wait.
                countdown = schedule.next_interval().as_secs();
            }
            _ = ticker.tick() => {
                if countdown == 0 {
                    if flight.try_begin() {
                        let service = service.clone();
                        let currency = currency.clone();
                        let tx = tx.clone();
                        worker = Some(tokio::spawn(async move {
                            let result = service.build_report(gas_units, &currency).await;
                            let _ = tx.send(result).await;
                        }));
                    } else {
                        tracing::warn!("previous fetch still in flight, skipping this refresh");
                    }
                    countdown = schedule.next_interval().as_secs();
                } else {
                    countdown -= 1;
                }
                print_countdown(countdown);
            }
        }
    }

    // Bounded-wait shutdown: give an in-flight request the grace period to
    // run to completion, then release it. No mid-request cancellation.
    if let Some(handle) = worker.take() {
        let abort = handle.abort_handle();
        if tokio::time::timeout(SHUTDOWN_GRACE, handle).await.is_err() {
            tracing::warn!("fetch did not finish within grace period, aborting");
            abort.abort();
        }
    }

    Ok(())
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}

fn print_countdown(seconds: u64) {
    print!("\rNext refresh in {}s   ", seconds);
    let _ = std::io::stdout().flush();
}

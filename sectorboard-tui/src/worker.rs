//! Background worker thread: every network fetch runs here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. Each
//! command carries the ticket and cancel token of the view that issued it;
//! cancelled commands are skipped and their results are never sent.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use sectorboard_core::api::{ApiError, IndustryApi};
use sectorboard_core::cancel::{CancelToken, Ticket};
use sectorboard_core::domain::{Dataset, ReportDocument};
use sectorboard_core::route::ReportDate;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchDashboard {
        ticket: Ticket,
        token: CancelToken,
    },
    FetchReport {
        ticket: Ticket,
        token: CancelToken,
        industry: String,
        date: ReportDate,
    },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    Dashboard {
        ticket: Ticket,
        result: Result<Dataset, ApiError>,
    },
    Report {
        ticket: Ticket,
        result: Result<(ReportDocument, Dataset), ApiError>,
    },
}

impl WorkerResponse {
    pub fn ticket(&self) -> Ticket {
        match self {
            WorkerResponse::Dashboard { ticket, .. } | WorkerResponse::Report { ticket, .. } => {
                *ticket
            }
        }
    }
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    api: Box<dyn IndustryApi>,
    benchmark_name: String,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("sectorboard-worker".into())
        .spawn(move || {
            worker_loop(api.as_ref(), &benchmark_name, rx, tx);
        })
}

fn worker_loop(
    api: &dyn IndustryApi,
    benchmark_name: &str,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) {
    info!(source = api.name(), "worker started");
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(cmd) => {
                if let Some(resp) = handle_command(cmd, api, benchmark_name) {
                    if tx.send(resp).is_err() {
                        break;
                    }
                }
            }
        }
    }
    info!("worker stopped");
}

fn handle_command(
    cmd: WorkerCommand,
    api: &dyn IndustryApi,
    benchmark_name: &str,
) -> Option<WorkerResponse> {
    match cmd {
        WorkerCommand::FetchDashboard { ticket, token } => {
            if token.is_cancelled() {
                debug!(?ticket, "dashboard fetch skipped: cancelled");
                return None;
            }
            let result = fetch_dataset(api, benchmark_name);
            finish(&token, ticket, WorkerResponse::Dashboard { ticket, result })
        }
        WorkerCommand::FetchReport {
            ticket,
            token,
            industry,
            date,
        } => {
            if token.is_cancelled() {
                debug!(?ticket, %industry, "report fetch skipped: cancelled");
                return None;
            }
            let result = api.industry_report(&industry, date).and_then(|doc| {
                if token.is_cancelled() {
                    return Err(ApiError::Cancelled);
                }
                fetch_dataset(api, benchmark_name).map(|ds| (doc, ds))
            });
            finish(&token, ticket, WorkerResponse::Report { ticket, result })
        }
        WorkerCommand::Shutdown => None,
    }
}

fn fetch_dataset(api: &dyn IndustryApi, benchmark_name: &str) -> Result<Dataset, ApiError> {
    api.industry_data()
        .map(|records| Dataset::from_records(records, benchmark_name))
}

/// Drop the response if its view went away while the fetch was in flight.
fn finish(token: &CancelToken, ticket: Ticket, resp: WorkerResponse) -> Option<WorkerResponse> {
    if token.is_cancelled() {
        debug!(?ticket, "response discarded: cancelled");
        None
    } else {
        Some(resp)
    }
}

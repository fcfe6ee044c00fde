use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use crate::query_gateway::{self, QueryError, QueryResponse};

pub(crate) enum JobMessage {
    QueryFinished(QueryOutcome),
}

/// Work order for one background query.
#[derive(Debug)]
pub(crate) struct QueryJob {
    pub(crate) endpoint: String,
    pub(crate) question: String,
}

/// Result of one background query, tagged with the question that caused it.
#[derive(Debug)]
pub(crate) struct QueryOutcome {
    pub(crate) question: String,
    pub(crate) result: Result<QueryResponse, QueryError>,
}

/// Channel plumbing and the single-in-flight guard for background work.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pub(super) query_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            query_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn query_in_progress(&self) -> bool {
        self.query_in_progress
    }

    /// Spawn the blocking HTTP call on a worker thread.
    ///
    /// A second call while one is running is ignored; the guard is cleared
    /// when the outcome is applied, success or failure.
    pub(super) fn begin_query(&mut self, job: QueryJob) {
        if self.query_in_progress {
            return;
        }
        self.query_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = query_gateway::run_query(&job.endpoint, &job.question);
            let _ = tx.send(JobMessage::QueryFinished(QueryOutcome {
                question: job.question,
                result,
            }));
        });
    }

    pub(super) fn clear_query(&mut self) {
        self.query_in_progress = false;
    }
}

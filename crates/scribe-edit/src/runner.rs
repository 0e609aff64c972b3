//! Sequential action runner bound to an editor screen's lifetime.
//!
//! [`EditRunner::spawn`] moves an [`EditSession`] into a task that executes
//! queued [`EditAction`]s one at a time. Shutting the runner down abandons
//! queued actions and interrupts the running one; a save already in flight
//! still completes because its store work runs in its own task.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use scribe_core::{Error, Result};

use crate::action::EditAction;
use crate::session::EditSession;

struct Command {
    action: EditAction,
    reply: oneshot::Sender<Result<()>>,
}

/// Handle for controlling a running edit session.
pub struct EditHandle {
    tx: mpsc::Sender<Command>,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<EditSession>,
}

impl EditHandle {
    /// Queue an action and wait for its result.
    pub async fn dispatch(&self, action: EditAction) -> Result<()> {
        let reply = self.submit(action).await?;
        reply.await.map_err(|_| runner_stopped())?
    }

    /// Queue an action without waiting for it to run.
    ///
    /// The returned receiver yields the action's result.
    pub async fn submit(&self, action: EditAction) -> Result<oneshot::Receiver<Result<()>>> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command { action, reply })
            .await
            .map_err(|_| runner_stopped())?;
        Ok(rx)
    }

    /// Tear the session down: stop the runner without running queued actions.
    pub fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);
    }

    /// Run every queued action, then stop the runner and return the session.
    pub async fn join(self) -> Result<EditSession> {
        let EditHandle {
            tx,
            shutdown_tx,
            task,
        } = self;
        drop(tx);
        let session = task
            .await
            .map_err(|e| Error::Internal(format!("edit runner failed: {e}")))?;
        drop(shutdown_tx);
        Ok(session)
    }
}

/// Spawns edit sessions onto their own task.
pub struct EditRunner;

impl EditRunner {
    /// Move `session` into a task processing actions from a bounded queue.
    pub fn spawn(session: EditSession) -> EditHandle {
        let capacity = session.config().action_queue_capacity.max(1);
        let (tx, rx) = mpsc::channel(capacity);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(run(session, rx, shutdown_rx));
        EditHandle {
            tx,
            shutdown_tx,
            task,
        }
    }
}

async fn run(
    mut session: EditSession,
    mut rx: mpsc::Receiver<Command>,
    mut shutdown: watch::Receiver<bool>,
) -> EditSession {
    let session_id = session.id();
    info!(subsystem = "edit", component = "runner", %session_id, "Edit runner started");

    loop {
        let Command { action, reply } = tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            command = rx.recv() => match command {
                Some(command) => command,
                None => break,
            },
        };

        let op = action.name();
        tokio::select! {
            biased;
            _ = shutdown.changed() => {
                debug!(%session_id, op, "Action interrupted by shutdown");
                let _ = reply.send(Err(Error::Cancelled(format!(
                    "{op} interrupted by session teardown"
                ))));
                break;
            }
            result = session.apply(action) => {
                if let Err(e) = &result {
                    error!(%session_id, op, error = %e, "Edit action failed");
                }
                let _ = reply.send(result);
            }
        }
    }

    info!(subsystem = "edit", component = "runner", %session_id, "Edit runner stopped");
    session
}

fn runner_stopped() -> Error {
    Error::Cancelled("edit runner stopped".to_string())
}

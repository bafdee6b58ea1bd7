//! Work-queue drainer: one background thread running queued jobs in order.
//!
//! DESIGN
//! ======
//! Producers push [`WorkItem`]s through a cloneable [`WorkQueue`] handle from
//! any thread. A single named consumer thread takes one item at a time from an
//! unbounded FIFO and runs it to completion before taking the next, so jobs
//! never overlap and run exactly once.
//!
//! Stopping has two paths. [`QueueThread::stop`] only raises a flag that the
//! drainer checks between items: a drainer blocked on an empty queue keeps
//! waiting until one more item arrives, runs it, and only then exits.
//! [`QueueThread::shutdown`] also sends a stop message through the queue, which
//! wakes a blocked drainer right away; items already queued ahead of it still run.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("failed to spawn queue thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("work queue is closed")]
    Closed,
    #[error("queue thread panicked")]
    Panicked,
}

/// A labelled job. The label is logged when the job runs.
pub struct WorkItem {
    label: String,
    job: Box<dyn FnOnce() + Send>,
}

impl WorkItem {
    pub fn new(label: impl Into<String>, job: impl FnOnce() + Send + 'static) -> Self {
        Self { label: label.into(), job: Box::new(job) }
    }

    /// A job that calls `f` with `args` when it runs.
    pub fn with_args<A>(label: impl Into<String>, f: impl FnOnce(A) + Send + 'static, args: A) -> Self
    where
        A: Send + 'static,
    {
        Self::new(label, move || f(args))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn run(self) {
        (self.job)();
    }
}

impl std::fmt::Debug for WorkItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkItem").field("label", &self.label).finish_non_exhaustive()
    }
}

#[derive(Debug)]
enum Message {
    Work(WorkItem),
    Stop,
}

/// Producer handle for a [`QueueThread`].
#[derive(Debug, Clone)]
pub struct WorkQueue {
    tx: mpsc::UnboundedSender<Message>,
}

impl WorkQueue {
    /// Enqueue an item. Never blocks.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Closed`] once the drainer has exited.
    pub fn push(&self, item: WorkItem) -> Result<(), QueueError> {
        self.tx.send(Message::Work(item)).map_err(|_| QueueError::Closed)
    }
}

/// The consumer thread and its stop flag.
#[derive(Debug)]
pub struct QueueThread {
    queue: WorkQueue,
    stopped: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl QueueThread {
    /// Spawn a drainer thread named `name` over a fresh, empty queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Spawn`] if the OS refuses to create the thread.
    pub fn spawn(name: &str) -> Result<Self, QueueError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let stopped = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stopped);
        let handle = std::thread::Builder::new().name(name.to_owned()).spawn(move || drain(rx, &flag))?;
        info!(thread = name, "work queue started");
        Ok(Self { queue: WorkQueue { tx }, stopped, handle })
    }

    /// A producer handle for this drainer's queue.
    #[must_use]
    pub fn queue(&self) -> WorkQueue {
        self.queue.clone()
    }

    /// Raise the stop flag. The drainer checks it before each dequeue: a
    /// drainer that has not yet blocked exits at once, while one parked on an
    /// empty queue exits only after the next item arrives and runs.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the drainer even if it is blocked on an empty queue, and wait for it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Panicked`] if a job panicked on the drainer thread.
    pub fn shutdown(self) -> Result<(), QueueError> {
        if self.queue.tx.send(Message::Stop).is_err() {
            debug!("work queue already closed at shutdown");
        }
        self.join()
    }

    /// Wait for the drainer to exit on its own. Blocks for as long as other
    /// [`WorkQueue`] handles are alive and the stop flag is down.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Panicked`] if a job panicked on the drainer thread.
    pub fn join(self) -> Result<(), QueueError> {
        let Self { queue, handle, .. } = self;
        // Our sender must not keep the drainer waiting.
        drop(queue);
        handle.join().map_err(|_| QueueError::Panicked)
    }
}

fn drain(mut rx: mpsc::UnboundedReceiver<Message>, stopped: &AtomicBool) {
    let mut ran = 0_u64;
    while !stopped.load(Ordering::Acquire) {
        match rx.blocking_recv() {
            Some(Message::Work(item)) => {
                debug!(label = item.label(), "running work item");
                item.run();
                ran += 1;
            }
            Some(Message::Stop) => break,
            None => {
                debug!("all work queue senders dropped");
                break;
            }
        }
    }
    info!(ran, "work queue stopped");
}

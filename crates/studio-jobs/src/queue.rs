//! The queue itself: one worker thread, in-flight de-duplication, cache
//! lookups on submission.

use std::collections::BTreeMap;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::JobCache;
use crate::error::Result;
use crate::handle::{JobHandle, Progress, Shared};
use crate::key::JobKey;

type JobFn<T> = Box<dyn FnOnce() -> anyhow::Result<T> + Send>;

struct QueuedJob<T> {
    key: JobKey,
    shared: Arc<Shared<T>>,
    run: JobFn<T>,
}

type InFlight<T> = Arc<Mutex<BTreeMap<JobKey, JobHandle<T>>>>;

/// Serialized background execution of keyed jobs.
pub struct JobQueue<T> {
    sender: Option<mpsc::Sender<QueuedJob<T>>>,
    worker: Option<JoinHandle<()>>,
    in_flight: InFlight<T>,
    cache: JobCache,
}

impl<T> JobQueue<T>
where
    T: Clone + Send + Serialize + DeserializeOwned + 'static,
{
    /// Start the worker with the given result cache.
    pub fn start(cache: JobCache) -> Self {
        let (sender, receiver) = mpsc::channel::<QueuedJob<T>>();
        let in_flight: InFlight<T> = Arc::new(Mutex::new(BTreeMap::new()));
        let worker_in_flight = Arc::clone(&in_flight);
        let worker_cache = cache.clone();
        let worker = std::thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                run_job(job, &worker_in_flight, &worker_cache);
            }
        });
        Self {
            sender: Some(sender),
            worker: Some(worker),
            in_flight,
            cache,
        }
    }

    /// Submit a job for a key.
    ///
    /// A key that is already pending or running returns the in-flight
    /// handle; a key with a cached result returns a finished handle
    /// without executing the closure.
    pub fn submit<F>(&self, key: JobKey, job: F) -> JobHandle<T>
    where
        F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(handle) = in_flight.get(&key) {
            debug!(%key, "joining in-flight job");
            return handle.clone();
        }

        match self.cache.load::<T>(&key) {
            Ok(Some(value)) => {
                debug!(%key, "job served from cache");
                return JobHandle::done(key, value);
            }
            Ok(None) => {}
            Err(error) => warn!(%key, %error, "job cache read failed"),
        }

        let shared = Shared::pending();
        let handle = JobHandle {
            key: key.clone(),
            shared: Arc::clone(&shared),
        };
        in_flight.insert(key.clone(), handle.clone());
        drop(in_flight);

        let queued = QueuedJob {
            key: key.clone(),
            shared,
            run: Box::new(job),
        };
        let send_result = match &self.sender {
            Some(sender) => sender.send(queued),
            None => Err(mpsc::SendError(queued)),
        };
        if send_result.is_err() {
            warn!(%key, "job queue closed before submission");
            handle.shared.set(Progress::Failed("job queue is shut down".to_string()));
            let mut in_flight = self
                .in_flight
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            in_flight.remove(&key);
        }
        handle
    }

    /// True while a job for the key is pending or running.
    pub fn is_in_flight(&self, key: &JobKey) -> bool {
        let in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        in_flight.contains_key(key)
    }

    pub fn cache(&self) -> &JobCache {
        &self.cache
    }

    /// Drop cached results; in-flight jobs are unaffected.
    pub fn clear_cache(&self) -> Result<()> {
        self.cache.clear()
    }
}

fn run_job<T>(job: QueuedJob<T>, in_flight: &InFlight<T>, cache: &JobCache)
where
    T: Clone + Send + Serialize + DeserializeOwned + 'static,
{
    let QueuedJob { key, shared, run } = job;
    debug!(%key, "job started");
    shared.set(Progress::Running);
    match run() {
        Ok(value) => {
            if let Err(error) = cache.store(&key, &value) {
                warn!(%key, %error, "job cache write failed");
            }
            shared.set(Progress::Done(value));
            debug!(%key, "job finished");
        }
        Err(error) => {
            warn!(%key, %error, "job failed");
            shared.set(Progress::Failed(error.to_string()));
        }
    }
    let mut in_flight = in_flight
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    in_flight.remove(&key);
}

impl<T> Drop for JobQueue<T> {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

//! Job handles and their lifecycle states.

use std::sync::{Arc, Condvar, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::JobError;
use crate::key::JobKey;

/// Externally visible lifecycle of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Pending,
    Running,
    Done,
    Failed,
}

pub(crate) enum Progress<T> {
    Pending,
    Running,
    Done(T),
    Failed(String),
}

pub(crate) struct Shared<T> {
    pub(crate) progress: Mutex<Progress<T>>,
    pub(crate) changed: Condvar,
}

impl<T> Shared<T> {
    pub(crate) fn pending() -> Arc<Self> {
        Arc::new(Self {
            progress: Mutex::new(Progress::Pending),
            changed: Condvar::new(),
        })
    }

    pub(crate) fn set(&self, progress: Progress<T>) {
        let mut guard = self
            .progress
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = progress;
        self.changed.notify_all();
    }
}

/// Handle to a submitted job.
///
/// Cloning shares the underlying state; every clone observes the same
/// transitions.
pub struct JobHandle<T> {
    pub(crate) key: JobKey,
    pub(crate) shared: Arc<Shared<T>>,
}

impl<T> Clone for JobHandle<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone> JobHandle<T> {
    pub(crate) fn done(key: JobKey, value: T) -> Self {
        Self {
            key,
            shared: Arc::new(Shared {
                progress: Mutex::new(Progress::Done(value)),
                changed: Condvar::new(),
            }),
        }
    }

    pub fn key(&self) -> &JobKey {
        &self.key
    }

    pub fn state(&self) -> JobState {
        let guard = self
            .shared
            .progress
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match *guard {
            Progress::Pending => JobState::Pending,
            Progress::Running => JobState::Running,
            Progress::Done(_) => JobState::Done,
            Progress::Failed(_) => JobState::Failed,
        }
    }

    /// True while the triggering widgets should stay disabled.
    pub fn is_in_flight(&self) -> bool {
        matches!(self.state(), JobState::Pending | JobState::Running)
    }

    /// The result, if the job has finished either way.
    pub fn try_result(&self) -> Option<Result<T, JobError>> {
        let guard = self
            .shared
            .progress
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match &*guard {
            Progress::Pending | Progress::Running => None,
            Progress::Done(value) => Some(Ok(value.clone())),
            Progress::Failed(message) => Some(Err(JobError::Failed(message.clone()))),
        }
    }

    /// Block until the job finishes.
    pub fn wait(&self) -> Result<T, JobError> {
        let mut guard = self
            .shared
            .progress
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        loop {
            match &*guard {
                Progress::Done(value) => return Ok(value.clone()),
                Progress::Failed(message) => return Err(JobError::Failed(message.clone())),
                Progress::Pending | Progress::Running => {
                    guard = self
                        .shared
                        .changed
                        .wait(guard)
                        .unwrap_or_else(std::sync::PoisonError::into_inner);
                }
            }
        }
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, mpsc};

use studio_jobs::{JobCache, JobError, JobKey, JobQueue, JobState};

fn open_cache(dir: &std::path::Path) -> JobCache {
    JobCache::open(dir.join("jobs")).expect("open cache")
}

#[test]
fn job_runs_and_result_is_cached() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let queue: JobQueue<String> = JobQueue::start(open_cache(tmp.path()));
    let key = JobKey::derive("export", &("landing", "params")).unwrap();

    let handle = queue.submit(key.clone(), || Ok("artifact.json".to_string()));
    assert_eq!(handle.wait().unwrap(), "artifact.json");
    assert_eq!(handle.state(), JobState::Done);

    let cached: Option<String> = queue.cache().load(&key).unwrap();
    assert_eq!(cached.as_deref(), Some("artifact.json"));
}

#[test]
fn duplicate_submission_joins_the_in_flight_job() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let queue: JobQueue<u32> = JobQueue::start(open_cache(tmp.path()));
    let key = JobKey::derive("export", &1u8).unwrap();

    let runs = Arc::new(AtomicUsize::new(0));
    let (release, gate) = mpsc::channel::<()>();

    let runs_in_job = Arc::clone(&runs);
    let first = queue.submit(key.clone(), move || {
        gate.recv().ok();
        runs_in_job.fetch_add(1, Ordering::SeqCst);
        Ok(7)
    });

    // Second click while the first job is still in flight.
    let runs_in_dup = Arc::clone(&runs);
    let second = queue.submit(key.clone(), move || {
        runs_in_dup.fetch_add(1, Ordering::SeqCst);
        Ok(99)
    });
    assert!(second.is_in_flight());
    assert!(queue.is_in_flight(&key));

    release.send(()).unwrap();
    assert_eq!(first.wait().unwrap(), 7);
    assert_eq!(second.wait().unwrap(), 7);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn cached_key_resolves_without_execution() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let cache = open_cache(tmp.path());
    let key = JobKey::derive("summary", &"alice").unwrap();

    {
        let queue: JobQueue<String> = JobQueue::start(cache.clone());
        queue
            .submit(key.clone(), || Ok("summary text".to_string()))
            .wait()
            .unwrap();
    }

    // Fresh queue over the same cache directory.
    let queue: JobQueue<String> = JobQueue::start(cache);
    let handle = queue.submit(key, || panic!("must not execute"));
    assert_eq!(handle.state(), JobState::Done);
    assert_eq!(handle.wait().unwrap(), "summary text");
}

#[test]
fn failure_propagates_and_is_not_cached() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let queue: JobQueue<String> = JobQueue::start(open_cache(tmp.path()));
    let key = JobKey::derive("export", &"broken").unwrap();

    let handle = queue.submit(key.clone(), || {
        Err(anyhow::anyhow!("template key missing"))
    });
    let error = handle.wait().unwrap_err();
    assert!(matches!(
        &error,
        JobError::Failed(message) if message.contains("template key missing")
    ));
    assert_eq!(handle.state(), JobState::Failed);

    // The failure left nothing behind; a retry runs the job again.
    let handle = queue.submit(key, || Ok("recovered".to_string()));
    assert_eq!(handle.wait().unwrap(), "recovered");
}

#[test]
fn clear_cache_forces_re_execution() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let queue: JobQueue<u32> = JobQueue::start(open_cache(tmp.path()));
    let key = JobKey::derive("export", &"again").unwrap();

    queue.submit(key.clone(), || Ok(1)).wait().unwrap();
    queue.clear_cache().unwrap();

    let handle = queue.submit(key, || Ok(2));
    assert_eq!(handle.wait().unwrap(), 2);
}

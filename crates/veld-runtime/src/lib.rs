//! Background regeneration pool: full-window rebuilds off the frame path.
#![forbid(unsafe_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, unbounded};
use rayon::{ThreadPool, ThreadPoolBuilder};
use veld_grid::{SectorGrid, populate_grid};
use veld_noise::{NoiseField, NoiseParams};

/// A full-window rebuild request. `rev` is the submitter's parameter
/// revision; results tagged with an older rev than the newest submitted one
/// are dropped at drain time.
#[derive(Clone, Debug)]
pub struct RegenJob {
    pub center: (i64, i64),
    pub dim: usize,
    pub spacing: f32,
    pub seed: i32,
    pub params: NoiseParams,
    pub rev: u64,
    pub job_id: u64,
}

/// A completed rebuild, ready to hand to `Viewport::install_grid`.
pub struct RegenOut {
    pub grid: SectorGrid,
    pub rev: u64,
    pub job_id: u64,
    pub t_gen_ms: u32,
}

fn process_regen_job(job: RegenJob, tx: &Sender<RegenOut>) {
    let t0 = Instant::now();
    let field = NoiseField::new(job.seed);
    let mut grid = SectorGrid::centered(job.dim, job.spacing, job.center);
    populate_grid(&mut grid, &field, &job.params);
    let t_gen_ms = t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
    let _ = tx.send(RegenOut {
        grid,
        rev: job.rev,
        job_id: job.job_id,
        t_gen_ms,
    });
}

pub struct Runtime {
    job_tx: Sender<RegenJob>,
    res_rx: Receiver<RegenOut>,
    _pool: Arc<ThreadPool>,
    queued: Arc<AtomicUsize>,
    latest_rev: AtomicU64,
    pub workers: usize,
}

impl Runtime {
    /// Spins up `workers` regen threads.
    ///
    /// # Panics
    /// Panics if `workers` is zero.
    pub fn new(workers: usize) -> Self {
        assert!(workers > 0, "regen pool needs at least one worker");
        let (job_tx, job_rx) = unbounded::<RegenJob>();
        let (res_tx, res_rx) = unbounded::<RegenOut>();
        let queued = Arc::new(AtomicUsize::new(0));
        let pool = Arc::new(
            ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("veld-regen-{i}"))
                .build()
                .expect("regen pool"),
        );
        for _ in 0..workers {
            let rx = job_rx.clone();
            let tx = res_tx.clone();
            let queued = queued.clone();
            pool.spawn(move || {
                while let Ok(job) = rx.recv() {
                    queued.fetch_sub(1, Ordering::Relaxed);
                    process_regen_job(job, &tx);
                }
            });
        }
        Self {
            job_tx,
            res_rx,
            _pool: pool,
            queued,
            latest_rev: AtomicU64::new(0),
            workers,
        }
    }

    /// Worker count derived from the machine: half the cores, at least one.
    pub fn with_default_workers() -> Self {
        let n = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(8);
        Self::new((n / 2).max(1))
    }

    pub fn submit_regen(&self, job: RegenJob) {
        self.latest_rev.fetch_max(job.rev, Ordering::Relaxed);
        self.queued.fetch_add(1, Ordering::Relaxed);
        if self.job_tx.send(job).is_err() {
            self.queued.fetch_sub(1, Ordering::Relaxed);
        }
    }

    /// Collects finished rebuilds, dropping any whose rev is older than the
    /// newest rev submitted so far.
    pub fn drain_results(&self) -> Vec<RegenOut> {
        let cur = self.latest_rev.load(Ordering::Relaxed);
        self.res_rx.try_iter().filter(|out| out.rev >= cur).collect()
    }

    /// Jobs accepted but not yet picked up by a worker.
    pub fn queue_len(&self) -> usize {
        self.queued.load(Ordering::Relaxed)
    }
}

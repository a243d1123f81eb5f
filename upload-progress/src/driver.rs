//! Background frame clock for a shared ring controller.
//!
//! The driver ticks the controller from one dedicated thread. A settlement is
//! taken with the lock held and reported after it is released, so
//! `on_finish` handlers may lock the controller themselves. Reports are
//! delivered one at a time, in pass order.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::ProgressRingController;

/// Default tick interval, roughly one frame at 60 Hz.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Ticks a shared [`ProgressRingController`] until stopped or dropped.
#[derive(Debug)]
pub struct FrameDriver {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FrameDriver {
    /// Starts ticking `controller` every `interval`.
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(
        controller: Arc<Mutex<ProgressRingController>>,
        interval: Duration,
    ) -> std::io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let handle = thread::Builder::new()
            .name("progress-frame".into())
            .spawn(move || frame_loop(&controller, &flag, interval))?;
        debug!(interval_ms = interval.as_millis() as u64, "frame driver started");
        Ok(Self {
            running,
            handle: Some(handle),
        })
    }

    /// Whether the frame thread is still ticking.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
            && self
                .handle
                .as_ref()
                .is_some_and(|handle| !handle.is_finished())
    }

    /// Stops ticking and waits for the frame thread to exit.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                error!("frame driver thread panicked");
            }
            debug!("frame driver stopped");
        }
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

fn frame_loop(
    controller: &Mutex<ProgressRingController>,
    running: &AtomicBool,
    interval: Duration,
) {
    while running.load(Ordering::Acquire) {
        let frame_start = Instant::now();
        let settlement = controller.lock().advance(frame_start);
        if let Some(settlement) = settlement {
            settlement.notify();
        }
        let spent = frame_start.elapsed();
        if let Some(remaining) = interval.checked_sub(spent) {
            thread::park_timeout(remaining);
        }
    }
}

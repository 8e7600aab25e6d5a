/// Receives a notification after every completed trial.
///
/// With parallel runs the observer is called from worker threads and
/// `completed` may arrive out of order.
pub trait ProgressObserver: Sync {
    fn on_trial_complete(&self, completed: usize, total: usize);
}

impl<F> ProgressObserver for F
where
    F: Fn(usize, usize) + Sync,
{
    fn on_trial_complete(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// Observer that ignores progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_trial_complete(&self, _completed: usize, _total: usize) {}
}

/// Trial counts at which a run has crossed another `1 / steps` of its total.
///
/// Useful for throttled progress output (every 10% with `steps = 10`).
pub fn is_progress_step(completed: usize, total: usize, steps: usize) -> bool {
    if total == 0 || steps == 0 {
        return false;
    }
    if completed >= total {
        return true;
    }
    let stride = (total / steps).max(1);
    completed % stride == 0
}

//! Frame-scheduled tasks
//!
//! Animations are sampled once per rendered frame instead of running on
//! timers. Each task is stored under a key; scheduling a new task under a key
//! that is still running replaces the old one outright, so it is never
//! sampled again.

/// A task that produces one value per frame until it reports completion
pub trait FrameTask {
    type Output;

    /// Sample the task at `now` (seconds). The flag is true once the task is done;
    /// the value returned alongside it is the final one.
    fn sample(&self, now: f64) -> (Self::Output, bool);
}

/// Keyed set of running frame tasks
#[derive(Debug)]
pub struct FrameTasks<K, T> {
    tasks: Vec<(K, T)>,
}

impl<K, T> Default for FrameTasks<K, T> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<K: Copy + PartialEq, T: FrameTask> FrameTasks<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `task` under `key`. Returns true if it superseded a running task.
    pub fn schedule(&mut self, key: K, task: T) -> bool {
        if let Some(slot) = self.tasks.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = task;
            true
        } else {
            self.tasks.push((key, task));
            false
        }
    }

    /// Drop the task under `key` without sampling it again
    pub fn cancel(&mut self, key: K) -> Option<T> {
        let idx = self.tasks.iter().position(|(k, _)| *k == key)?;
        Some(self.tasks.remove(idx).1)
    }

    pub fn is_running(&self, key: K) -> bool {
        self.tasks.iter().any(|(k, _)| *k == key)
    }

    pub fn get(&self, key: K) -> Option<&T> {
        self.tasks.iter().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sample every task once. Finished tasks yield their final value and are dropped.
    pub fn tick(&mut self, now: f64) -> Vec<(K, T::Output)> {
        let mut out = Vec::with_capacity(self.tasks.len());
        self.tasks.retain(|(key, task)| {
            let (value, done) = task.sample(now);
            out.push((*key, value));
            !done
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts up from `start`, finishing at `end`
    struct Ramp {
        start: f64,
        end: f64,
    }

    impl FrameTask for Ramp {
        type Output = f64;
        fn sample(&self, now: f64) -> (f64, bool) {
            let v = (now - self.start).min(self.end - self.start);
            (v, now >= self.end)
        }
    }

    #[test]
    fn test_tick_drops_finished() {
        let mut tasks = FrameTasks::new();
        tasks.schedule("a", Ramp { start: 0.0, end: 1.0 });
        assert_eq!(tasks.tick(0.5), vec![("a", 0.5)]);
        assert!(tasks.is_running("a"));
        assert_eq!(tasks.tick(2.0), vec![("a", 1.0)]);
        assert!(!tasks.is_running("a"));
        assert!(tasks.tick(3.0).is_empty());
    }

    #[test]
    fn test_schedule_supersedes() {
        let mut tasks = FrameTasks::new();
        assert!(!tasks.schedule("color", Ramp { start: 0.0, end: 1.0 }));
        assert!(tasks.schedule("color", Ramp { start: 0.4, end: 10.0 }));
        assert_eq!(tasks.len(), 1);

        // Only the replacement is sampled
        let out = tasks.tick(1.4);
        assert_eq!(out.len(), 1);
        assert!((out[0].1 - 1.0).abs() < 1e-9);
        assert!(tasks.is_running("color"));
    }

    #[test]
    fn test_independent_keys() {
        let mut tasks = FrameTasks::new();
        tasks.schedule(1, Ramp { start: 0.0, end: 1.0 });
        tasks.schedule(2, Ramp { start: 0.0, end: 5.0 });
        tasks.tick(2.0);
        assert!(!tasks.is_running(1));
        assert!(tasks.is_running(2));
        assert!(tasks.cancel(2).is_some());
        assert!(tasks.is_empty());
    }
}

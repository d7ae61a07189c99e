// core/schedule.rs
//
// Delayed and repeating actions, owned by whoever drives the game.
// The engine never interprets the payload; games define an action enum and
// handle whatever `tick` hands back.
//
// Usage:
//   let mut timers = Scheduler::new();
//   timers.every(1.5, Action::Spawn);
//   timers.after(3.0, Action::Expire(id));
//   for action in timers.tick(dt) { ... }
//   timers.cancel_all();

/// Shortest period a repeating timer may have, in seconds.
const MIN_PERIOD: f32 = 1.0e-3;

/// Handle to a scheduled timer for later cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

#[derive(Debug, Clone)]
struct Timer<T> {
    id: TimerId,
    /// Seconds until the next firing.
    remaining: f32,
    /// `Some` for repeating timers.
    period: Option<f32>,
    action: T,
}

/// Ordered list of pending timers. Timers fire in the order they were
/// scheduled when several come due in the same tick.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    timers: Vec<Timer<T>>,
    next_id: u32,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 1,
        }
    }

    fn next_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Fire `action` once, `delay` seconds from now.
    pub fn after(&mut self, delay: f32, action: T) -> TimerId {
        let id = self.next_id();
        self.timers.push(Timer {
            id,
            remaining: delay.max(0.0),
            period: None,
            action,
        });
        id
    }

    /// Fire `action` every `period` seconds. The first firing is one full
    /// period from now.
    pub fn every(&mut self, period: f32, action: T) -> TimerId {
        let period = period.max(MIN_PERIOD);
        let id = self.next_id();
        self.timers.push(Timer {
            id,
            remaining: period,
            period: Some(period),
            action,
        });
        id
    }

    /// Cancel a single timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Cancel every pending timer in one step. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.timers.len();
        self.timers.clear();
        n
    }

    pub fn contains(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance every timer by `dt` seconds and return the actions that came due.
    /// One-shot timers are removed once fired; repeating timers may fire more
    /// than once if `dt` spans several periods.
    pub fn tick(&mut self, dt: f32) -> Vec<T> {
        let dt = dt.max(0.0);
        let mut fired = Vec::new();

        for timer in &mut self.timers {
            timer.remaining -= dt;
            match timer.period {
                Some(period) => {
                    while timer.remaining <= 0.0 {
                        fired.push(timer.action.clone());
                        timer.remaining += period;
                    }
                }
                None => {
                    if timer.remaining <= 0.0 {
                        fired.push(timer.action.clone());
                    }
                }
            }
        }

        self.timers
            .retain(|t| t.period.is_some() || t.remaining > 0.0);
        fired
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Action {
        Spawn,
        Expire(u32),
    }

    #[test]
    fn one_shot_fires_once_after_delay() {
        let mut s = Scheduler::new();
        s.after(3.0, Action::Expire(7));

        assert!(s.tick(2.9).is_empty());
        assert_eq!(s.tick(0.2), vec![Action::Expire(7)]);
        assert!(s.is_empty());
        assert!(s.tick(10.0).is_empty());
    }

    #[test]
    fn repeating_fires_every_period() {
        let mut s = Scheduler::new();
        s.every(1.5, Action::Spawn);

        assert!(s.tick(1.0).is_empty());
        assert_eq!(s.tick(0.5), vec![Action::Spawn]);
        assert!(s.tick(1.0).is_empty());
        assert_eq!(s.tick(0.5), vec![Action::Spawn]);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn long_tick_fires_repeating_timer_multiple_times() {
        let mut s = Scheduler::new();
        s.every(1.0, Action::Spawn);
        assert_eq!(s.tick(3.5).len(), 3);
    }

    #[test]
    fn cancel_single_timer() {
        let mut s = Scheduler::new();
        let spawn = s.every(1.0, Action::Spawn);
        s.after(1.0, Action::Expire(1));

        assert!(s.cancel(spawn));
        assert!(!s.cancel(spawn));
        assert_eq!(s.tick(1.0), vec![Action::Expire(1)]);
    }

    #[test]
    fn cancel_all_clears_everything() {
        let mut s = Scheduler::new();
        s.every(1.5, Action::Spawn);
        s.after(3.0, Action::Expire(1));
        s.after(3.0, Action::Expire(2));

        assert_eq!(s.cancel_all(), 3);
        assert!(s.tick(100.0).is_empty());
    }

    #[test]
    fn due_timers_fire_in_schedule_order() {
        let mut s = Scheduler::new();
        s.after(1.0, Action::Expire(1));
        s.every(0.5, Action::Spawn);
        s.after(0.2, Action::Expire(2));

        let fired = s.tick(1.0);
        assert_eq!(
            fired,
            vec![Action::Expire(1), Action::Spawn, Action::Spawn, Action::Expire(2)]
        );
    }

    #[test]
    fn zero_period_does_not_spin_forever() {
        let mut s = Scheduler::new();
        s.every(0.0, Action::Spawn);
        let fired = s.tick(0.01);
        assert!((9..=11).contains(&fired.len()), "fired {} times", fired.len());
    }
}

//! Virtual task clock.
//!
//! One clock per engine. Every wait in the encounter — spawn delays,
//! formation staggering, invulnerability windows, boss sequencing, enemy
//! fire cadence — is a keyed task against this clock, so pausing or
//! rate-scaling the clock freezes all of them atomically.
//!
//! Deadlines are stored in integer microseconds of virtual time; a paused
//! clock simply stops accumulating, so timers can never drift. Due tasks
//! are yielded one at a time in `(deadline, registration order)` order,
//! letting a handler cancel a later-due task before it fires within the
//! same update.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use novastorm_core::constants::MAX_TIME_SCALE;

/// Identity of a scheduled task. Registering a key that is already live
/// cancels and replaces the prior registration (last-writer-wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// The wave spawner's single sequencing timer.
    WaveSpawn,
    /// The director's field-clear grace window.
    ClearGrace,
    /// The pre-boss warning period.
    BossWarning,
    /// One repeating boss volley slot, by pattern index.
    BossAttack(usize),
    /// The boss defeat-sequence pulse chain.
    BossDefeat,
    /// The player's invulnerability window.
    Invulnerability,
    /// A formation's attack-delay (and spinner orbit) timer.
    FormationAttack(u32),
    /// One formation member's staggered entry spawn.
    FormationEntry(u32, usize),
    /// One formation member's staggered attack launch.
    MemberLaunch(u32, usize),
    /// One enemy's fire-interval timer, by public entity id.
    EnemyFire(u64),
    /// Auto-generated key from [`TaskClock::after_anon`].
    Anon(u64),
}

#[derive(Debug)]
struct Registration<T> {
    seq: u64,
    task: T,
    /// Repeat period for `every` tasks, in virtual microseconds.
    repeat_us: Option<u64>,
}

/// Heap entry, min-ordered by `(due_us, seq)` through `Reverse`.
/// `seq` is unique, so the ordering is total without involving the key.
#[derive(Debug, Clone, Copy)]
struct Entry {
    due_us: u64,
    seq: u64,
    key: TaskKey,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due_us, self.seq).cmp(&(other.due_us, other.seq))
    }
}

/// Pausable, rate-scalable virtual clock with keyed one-shot and
/// repeating tasks.
#[derive(Debug)]
pub struct TaskClock<T> {
    now_us: u64,
    rate: f64,
    paused: bool,
    next_seq: u64,
    next_anon: u64,
    heap: BinaryHeap<Reverse<Entry>>,
    registry: HashMap<TaskKey, Registration<T>>,
}

impl<T: Clone> TaskClock<T> {
    pub fn new(rate: f64) -> Self {
        Self {
            now_us: 0,
            rate: rate.clamp(0.0, MAX_TIME_SCALE),
            paused: false,
            next_seq: 0,
            next_anon: 0,
            heap: BinaryHeap::new(),
            registry: HashMap::new(),
        }
    }

    /// Current virtual time in seconds.
    pub fn now(&self) -> f64 {
        self.now_us as f64 / 1e6
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the slow-motion rate, clamped to `[0, MAX_TIME_SCALE]`.
    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate.clamp(0.0, MAX_TIME_SCALE);
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Schedule a one-shot task. Replaces any live task under `key`.
    pub fn after(&mut self, secs: f32, key: TaskKey, task: T) {
        self.register(secs, key, task, None);
    }

    /// Schedule a repeating task with period `secs`. Replaces any live
    /// task under `key`; repeats until cancelled.
    pub fn every(&mut self, secs: f32, key: TaskKey, task: T) {
        let period = to_us(secs).max(1);
        self.register(secs, key, task, Some(period));
    }

    /// Schedule a one-shot task under a fresh auto-generated key.
    pub fn after_anon(&mut self, secs: f32, task: T) -> TaskKey {
        let key = TaskKey::Anon(self.next_anon);
        self.next_anon += 1;
        self.after(secs, key, task);
        key
    }

    /// Cancel the task registered under `key`. Unknown keys are a no-op.
    pub fn cancel(&mut self, key: TaskKey) {
        self.registry.remove(&key);
    }

    /// Whether `key` currently names a live task.
    pub fn is_scheduled(&self, key: TaskKey) -> bool {
        self.registry.contains_key(&key)
    }

    /// Advance virtual time by `dt` wall seconds scaled by the rate
    /// (zero while paused). Returns the virtual seconds actually added,
    /// which the engine uses as the integration step.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if self.paused {
            return 0.0;
        }
        let add_us = (dt * self.rate * 1e6).round() as u64;
        self.now_us += add_us;
        add_us as f64 / 1e6
    }

    /// Pop the next due task, if any. Tasks come out one at a time in
    /// `(deadline, registration order)` order; repeating tasks are
    /// re-queued one period ahead before being returned.
    pub fn pop_due(&mut self) -> Option<(TaskKey, T)> {
        while let Some(Reverse(head)) = self.heap.peek() {
            if head.due_us > self.now_us {
                return None;
            }
            let entry = self.heap.pop().map(|r| r.0)?;
            let key = entry.key;
            match self.registry.get(&key) {
                // Live registration matching this heap entry.
                Some(reg) if reg.seq == entry.seq => {
                    let task = reg.task.clone();
                    if let Some(period) = reg.repeat_us {
                        self.heap.push(Reverse(Entry {
                            due_us: entry.due_us + period,
                            seq: entry.seq,
                            key: entry.key,
                        }));
                    } else {
                        self.registry.remove(&key);
                    }
                    return Some((key, task));
                }
                // Cancelled or replaced registration; skip the stale entry.
                _ => continue,
            }
        }
        None
    }

    fn register(&mut self, secs: f32, key: TaskKey, task: T, repeat_us: Option<u64>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.registry.insert(key, Registration { seq, task, repeat_us });
        self.heap.push(Reverse(Entry {
            due_us: self.now_us + to_us(secs),
            seq,
            key,
        }));
    }
}

fn to_us(secs: f32) -> u64 {
    (secs.max(0.0) as f64 * 1e6).round() as u64
}

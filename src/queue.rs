//! Safeguard queue & proportion schedule.
//!
//! A fixed-size ring buffer of the last `m` observed violator counts,
//! tracking running min/max, driving the damped/expanding reassignment
//! proportion `p`.

pub(crate) struct ViolatorQueue {
    buf: Vec<usize>,
    head: usize,
    min_val: usize,
    min_pos: usize,
    max_val: usize,
    max_pos: usize,
}

impl ViolatorQueue {
    /// `m` slots, all initialized to `sentinel` (spec: a value larger than
    /// any possible violator count, typically `n`).
    pub(crate) fn new(m: usize, sentinel: usize) -> Self {
        assert!(m >= 1);
        ViolatorQueue {
            buf: vec![sentinel; m],
            head: 0,
            min_val: sentinel,
            min_pos: 0,
            max_val: sentinel,
            max_pos: 0,
        }
    }

    pub(crate) fn min(&self) -> usize {
        self.min_val
    }

    pub(crate) fn max(&self) -> usize {
        self.max_val
    }

    fn rescan_min(&mut self) {
        let (pos, &val) = self.buf.iter().enumerate().min_by_key(|&(_, v)| v).unwrap();
        self.min_pos = pos;
        self.min_val = val;
    }

    fn rescan_max(&mut self) {
        let (pos, &val) = self.buf.iter().enumerate().max_by_key(|&(_, v)| v).unwrap();
        self.max_pos = pos;
        self.max_val = val;
    }

    /// Overwrite the oldest slot with `value`, advance the ring, and update
    /// `min`/`max` tracking: trivially if `value` itself beats the current
    /// extremum, by rescan if the overwritten slot held it.
    fn push(&mut self, value: usize) {
        let pos = self.head;
        self.buf[pos] = value;
        self.head = (self.head + 1) % self.buf.len();

        if pos == self.min_pos {
            self.rescan_min();
        } else if value < self.min_val {
            self.min_val = value;
            self.min_pos = pos;
        }

        if pos == self.max_pos {
            self.rescan_max();
        } else if value > self.max_val {
            self.max_val = value;
            self.max_pos = pos;
        }
    }

    /// Observe `n_vio` for this iteration and return the updated
    /// proportion `p`, via a three-branch safeguard:
    /// new minimum expands `p` and always pushes; stagnation (`n_vio >=
    /// max`) shrinks `p` and never pushes, to keep `max` representative of
    /// non-pathological iterations; anything in between pushes and leaves
    /// `p` unchanged.
    pub(crate) fn update(&mut self, n_vio: usize, p: f64, delta_s: f64, delta_e: f64) -> f64 {
        if n_vio < self.min_val {
            let new_p = (delta_e * p).min(1.0);
            self.push(n_vio);
            new_p
        } else if n_vio >= self.max_val {
            (delta_s * p).max(1.0 / n_vio as f64)
        } else {
            self.push(n_vio);
            p
        }
    }
}

//! Step counters for checking complexity bounds
//!
//! A [`Trace`] travels beside an operation's result and counts the steps the
//! operation took. It is diagnostic only. Every trace starts at one step for
//! the call itself.
//!
//! [`Complexity`] gives the step budget each operation is expected to stay
//! within for a heap of `n` keys.

/// Number of steps taken by one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Trace {
    steps: usize,
}

impl Trace {
    /// Starts a trace that has counted the call itself
    pub fn new() -> Self {
        Self { steps: 1 }
    }

    /// Counts one more step
    pub(crate) fn tick(&mut self) {
        self.steps += 1;
    }

    /// Total number of steps counted
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns true if the step count stays within `class` for `n` keys
    pub fn within(&self, class: Complexity, n: usize) -> bool {
        self.steps as f64 <= class.bound(n)
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

/// Asymptotic classes used to bound step counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    /// One step
    Constant,
    /// `n + 1` steps
    Linear,
    /// `log2(n) + 1` steps (one step for an empty heap)
    Logarithmic,
    /// `sqrt(2n) + 1` steps
    SquareRoot,
    /// `2 * (sqrt(2n) + 1)` steps, the beap search bound of
    /// "at most 2 sqrt(2n) + O(1) comparisons"
    DoubleSquareRoot,
}

impl Complexity {
    /// Step budget for `n` keys
    pub fn bound(&self, n: usize) -> f64 {
        let n = n as f64;
        match self {
            Complexity::Constant => 1.0,
            Complexity::Linear => n + 1.0,
            Complexity::Logarithmic if n == 0.0 => 1.0,
            Complexity::Logarithmic => n.log2() + 1.0,
            Complexity::SquareRoot => (2.0 * n).sqrt() + 1.0,
            Complexity::DoubleSquareRoot => 2.0 * ((2.0 * n).sqrt() + 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_counts_call() {
        let mut trace = Trace::new();
        assert_eq!(trace.steps(), 1);
        trace.tick();
        trace.tick();
        assert_eq!(trace.steps(), 3);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Complexity::Constant.bound(1000), 1.0);
        assert_eq!(Complexity::Linear.bound(4), 5.0);
        assert_eq!(Complexity::Logarithmic.bound(0), 1.0);
        assert_eq!(Complexity::Logarithmic.bound(8), 4.0);
        assert_eq!(Complexity::SquareRoot.bound(8), 5.0);
        assert_eq!(Complexity::DoubleSquareRoot.bound(8), 10.0);
    }

    #[test]
    fn test_within() {
        let mut trace = Trace::new();
        assert!(trace.within(Complexity::Constant, 0));
        trace.tick();
        assert!(!trace.within(Complexity::Constant, 0));
        assert!(trace.within(Complexity::Logarithmic, 2));
    }
}

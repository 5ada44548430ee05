//! Work-unit counter used to compare algorithm cost.
//!
//! Each engine run owns one counter. It is a relative cost proxy, not a cycle
//! count: every primitive structural step adds exactly one.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct OperationCounter(u64);

impl OperationCounter {
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn tick(&mut self) {
        self.0 += 1;
    }

    #[inline]
    pub fn add(&mut self, n: usize) {
        self.0 += n as u64;
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

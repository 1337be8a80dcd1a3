//! Variable bounds with an undo log, so a depth-first search can tighten bounds on the way down
//! and restore them on the way back up.
use crate::csp::{Domain, Label, VarId};

#[derive(Debug, Clone)]
pub struct Bounds {
    min: Vec<Label>,
    max: Vec<Label>,
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone)]
enum HistoryEntry {
    Min { var: VarId, previous: Label },
    Max { var: VarId, previous: Label },
}

impl Bounds {
    pub fn new(domains: &[Domain]) -> Self {
        Self {
            min: domains.iter().map(|d| d.min).collect(),
            max: domains.iter().map(|d| d.max).collect(),
            history: Vec::new(),
        }
    }

    pub fn get(&self, var: VarId) -> Domain {
        Domain {
            min: self.min[var],
            max: self.max[var],
        }
    }

    /// Raise the lower bound of `var` to at least `value`.
    /// Returns `false` if this leaves `var` with no candidate values.
    pub fn raise_min(&mut self, var: VarId, value: Label) -> bool {
        if value > self.min[var] {
            self.history.push(HistoryEntry::Min {
                var,
                previous: self.min[var],
            });
            self.min[var] = value;
        }
        self.min[var] <= self.max[var]
    }

    /// Lower the upper bound of `var` to at most `value`.
    /// Returns `false` if this leaves `var` with no candidate values.
    pub fn lower_max(&mut self, var: VarId, value: Label) -> bool {
        if value < self.max[var] {
            self.history.push(HistoryEntry::Max {
                var,
                previous: self.max[var],
            });
            self.max[var] = value;
        }
        self.min[var] <= self.max[var]
    }

    pub fn snapshot(&self) -> usize {
        self.history.len()
    }

    pub fn rollback(&mut self, snapshot: usize) {
        while self.history.len() > snapshot {
            match self.history.pop() {
                Some(HistoryEntry::Min { var, previous }) => self.min[var] = previous,
                Some(HistoryEntry::Max { var, previous }) => self.max[var] = previous,
                None => break,
            }
        }
    }
}

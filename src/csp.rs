// A small finite-domain constraint engine.
//
// Variables range over contiguous integer intervals and are related by binary ordering
// constraints. The search is a depth-first backtracking enumeration of *every* solution, with
// bounds tightened from each assignment and undone through the trail on backtrack.

use crate::trail::Bounds;

pub type VarId = usize;
pub type Label = usize;

/// An inclusive interval `min..=max` of candidate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    pub min: Label,
    pub max: Label,
}

impl Domain {
    pub fn new(min: Label, max: Label) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.max - self.min + 1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `left <= right`
    LessEq,
    /// `left < right`
    Less,
}

impl Relation {
    pub fn holds(self, left: Label, right: Label) -> bool {
        match self {
            Relation::LessEq => left <= right,
            Relation::Less => left < right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub left: VarId,
    pub relation: Relation,
    pub right: VarId,
}

/// Order in which unassigned variables are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarOrder {
    /// Variables in the order they were added.
    /// Solutions come out in lexicographic order of their value vectors.
    #[default]
    Declaration,
    /// Smallest current domain first (MRV), ties broken by declaration order.
    SmallestDomain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub order: VarOrder,
    /// Tighten neighbouring bounds after each assignment.
    /// Without it, constraints are only checked once both ends are assigned.
    pub propagate: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            order: VarOrder::Declaration,
            propagate: true,
        }
    }
}

/// Observer for search progress.
pub trait SearchTrace {
    fn on_event(&self, _event: SearchEvent) {}
}

pub struct NoopTrace;

impl SearchTrace for NoopTrace {}

/// Forwards every event to the `log` facade at trace level.
pub struct LogTrace;

impl SearchTrace for LogTrace {
    fn on_event(&self, event: SearchEvent) {
        log::trace!("{event:?}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    Assign {
        var: VarId,
        value: Label,
        depth: usize,
    },
    Prune {
        var: VarId,
        depth: usize,
    },
    Solution {
        index: usize,
    },
    Exhausted {
        solutions: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Csp {
    // Candidate values for each variable (indexed by VarId).
    domains: Vec<Domain>,
    constraints: Vec<Constraint>,
    // Reverse index so we only check constraints that mention a variable.
    constraints_by_var: Vec<Vec<usize>>,
}

impl Csp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_var(&mut self, domain: Domain) -> VarId {
        let id = self.domains.len();
        self.domains.push(domain);
        self.constraints_by_var.push(Vec::new());
        id
    }

    /// # Panics
    ///
    /// If either variable was not created by [`Csp::add_var`].
    pub fn add_constraint(&mut self, left: VarId, relation: Relation, right: VarId) {
        let idx = self.constraints.len();
        self.constraints.push(Constraint {
            left,
            relation,
            right,
        });
        self.constraints_by_var[left].push(idx);
        if right != left {
            self.constraints_by_var[right].push(idx);
        }
    }

    pub fn add_less_eq(&mut self, left: VarId, right: VarId) {
        self.add_constraint(left, Relation::LessEq, right);
    }

    pub fn add_less(&mut self, left: VarId, right: VarId) {
        self.add_constraint(left, Relation::Less, right);
    }

    pub fn num_vars(&self) -> usize {
        self.domains.len()
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Does a complete assignment satisfy every domain and constraint?
    pub fn is_solution(&self, values: &[Label]) -> bool {
        values.len() == self.domains.len()
            && self
                .domains
                .iter()
                .zip(values)
                .all(|(d, &v)| d.min <= v && v <= d.max)
            && self
                .constraints
                .iter()
                .all(|c| c.relation.holds(values[c.left], values[c.right]))
    }

    pub fn solve_all(&self) -> Vec<Vec<Label>> {
        self.solve_all_with(&SearchConfig::default(), &NoopTrace)
    }

    /// Every solution, in lexicographic order of value vectors regardless of `config`.
    pub fn solve_all_with(
        &self,
        config: &SearchConfig,
        trace: &dyn SearchTrace,
    ) -> Vec<Vec<Label>> {
        let mut solutions = Vec::new();
        self.for_each_solution(config, trace, |values| solutions.push(values.to_vec()));
        if config.order != VarOrder::Declaration {
            solutions.sort();
        }
        solutions
    }

    /// Run the search, handing each solution to `on_solution` as soon as it is found.
    /// Returns the number of solutions.
    pub fn for_each_solution<F>(
        &self,
        config: &SearchConfig,
        trace: &dyn SearchTrace,
        mut on_solution: F,
    ) -> usize
    where
        F: FnMut(&[Label]),
    {
        let mut search = Search {
            csp: self,
            config,
            trace,
            assignment: vec![None; self.domains.len()],
            bounds: Bounds::new(&self.domains),
            solutions: 0,
        };

        // Nothing to assign into an empty domain.
        if self.domains.iter().all(|d| !d.is_empty()) {
            search.backtrack(0, &mut on_solution);
        }

        let solutions = search.solutions;
        trace.on_event(SearchEvent::Exhausted { solutions });
        solutions
    }
}

struct Search<'a> {
    csp: &'a Csp,
    config: &'a SearchConfig,
    trace: &'a dyn SearchTrace,
    assignment: Vec<Option<Label>>,
    bounds: Bounds,
    solutions: usize,
}

impl Search<'_> {
    fn backtrack<F: FnMut(&[Label])>(&mut self, depth: usize, on_solution: &mut F) {
        let Some(var) = self.select_unassigned_var() else {
            // All variables assigned: hand out a concrete solution.
            let values = self.assignment.iter().flatten().copied().collect::<Vec<_>>();
            self.trace.on_event(SearchEvent::Solution {
                index: self.solutions,
            });
            self.solutions += 1;
            on_solution(&values);
            return;
        };

        let candidates = if self.config.propagate {
            self.bounds.get(var)
        } else {
            self.csp.domains[var]
        };

        for value in candidates.min..=candidates.max {
            self.trace.on_event(SearchEvent::Assign { var, value, depth });
            self.assignment[var] = Some(value);
            let snapshot = self.bounds.snapshot();

            if self.consistent(var) && (!self.config.propagate || self.propagate(var, value)) {
                self.backtrack(depth + 1, on_solution);
            } else {
                self.trace.on_event(SearchEvent::Prune { var, depth });
            }

            self.bounds.rollback(snapshot);
            self.assignment[var] = None;
        }
    }

    fn select_unassigned_var(&self) -> Option<VarId> {
        let mut unassigned = self
            .assignment
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(var, _)| var);

        match self.config.order {
            VarOrder::Declaration => unassigned.next(),
            // min_by_key keeps the first of equal keys, so ties go to the lowest VarId.
            VarOrder::SmallestDomain => unassigned.min_by_key(|&var| self.bounds.get(var).len()),
        }
    }

    // Check only constraints that mention the last-assigned variable and are fully assigned.
    fn consistent(&self, var: VarId) -> bool {
        self.csp.constraints_by_var[var].iter().all(|&idx| {
            let c = &self.csp.constraints[idx];
            match (self.assignment[c.left], self.assignment[c.right]) {
                (Some(left), Some(right)) => c.relation.holds(left, right),
                _ => true,
            }
        })
    }

    // Narrow the bounds of unassigned neighbours of `var`. False if one is wiped out.
    fn propagate(&mut self, var: VarId, value: Label) -> bool {
        let csp = self.csp;
        for &idx in &csp.constraints_by_var[var] {
            let c = csp.constraints[idx];
            let ok = if c.left == var && self.assignment[c.right].is_none() {
                match c.relation {
                    Relation::LessEq => self.bounds.raise_min(c.right, value),
                    Relation::Less => self.bounds.raise_min(c.right, value + 1),
                }
            } else if c.right == var && self.assignment[c.left].is_none() {
                match c.relation {
                    Relation::LessEq => self.bounds.lower_max(c.left, value),
                    Relation::Less => match value.checked_sub(1) {
                        Some(max) => self.bounds.lower_max(c.left, max),
                        None => false,
                    },
                }
            } else {
                true
            };
            if !ok {
                return false;
            }
        }
        true
    }
}

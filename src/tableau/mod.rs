//! Young diagrams, their labellings, and exhaustive enumeration of semistandard tableaux.
mod diagram;
mod enumerate;
mod model;
mod shape;

pub use crate::csp::Label;
pub use diagram::{Diagram, Tableau, UNSET};
pub use enumerate::{enumerate_tableaux, enumerate_tableaux_with};
pub use model::{count_constraints, ordering_constraints, TableauModel};
pub use shape::{Cell, Shape};

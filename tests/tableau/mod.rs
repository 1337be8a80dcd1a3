pub mod test_diagram;
pub mod test_enumerate;

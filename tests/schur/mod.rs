pub mod test_cross_validate;
pub mod test_scenarios;

mod registry_scenarios;
mod shape_validation;

#[path = "property/network_properties.rs"]
mod network_properties;

#[path = "property/scoring_properties.rs"]
mod scoring_properties;

pub mod fleet_generator;

pub use fleet_generator::FleetGenerator;

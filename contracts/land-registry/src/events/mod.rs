mod builder;
mod types;

mod contract;
mod land;

pub use contract::*;
pub use land::*;

pub(crate) const STANDARD: &str = "land-registry";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const LAND: &str = "LAND_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";

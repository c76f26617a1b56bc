pub mod collector;
pub mod probes;
pub mod snapshot;

pub mod challenge;
pub mod gate;
pub mod settings;
pub mod utils;

pub use gate::run_gate;

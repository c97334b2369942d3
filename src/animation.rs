pub mod descriptor;
pub mod ease;
pub mod generators;
pub mod presets;

mod sample;

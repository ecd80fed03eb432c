pub mod icon_gen;
pub mod verify;

pub use icon_gen::{default_specs, generate, render, run, Circle, IconSpec};
pub use verify::{verify_icon, IconReport};

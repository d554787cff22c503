// Adapters layer: concrete implementations of the domain ports (dialogs, filesystem, processes).

pub mod fs;
pub mod preset;
pub mod process;
pub mod terminal;
pub mod zenity;

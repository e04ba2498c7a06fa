pub mod command;
pub mod console;
pub mod render;

pub use console::{Console, ConsoleError};
pub use render::Dashboard;

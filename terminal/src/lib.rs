pub mod config;
pub mod console;
pub mod human;
pub mod logging;
pub mod session;

pub use config::{Config, ABOUT};
pub use console::Console;
pub use human::HumanPlayer;
pub use session::Session;

mod config;
mod node;
mod tree;
mod ui;

pub use config::*;
pub use node::*;
pub use tree::*;
pub use ui::*;

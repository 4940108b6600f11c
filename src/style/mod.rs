pub mod color;
mod computed_style;
mod descriptor;
mod invalidation;
mod merge;
mod parsed_style;
mod parser;
mod resource;
mod sides;
mod unit;

pub use color::Color;
pub use computed_style::*;
pub use descriptor::*;
pub use invalidation::*;
pub use merge::*;
pub use parsed_style::*;
pub use parser::*;
pub use resource::*;
pub use sides::*;
pub use unit::*;

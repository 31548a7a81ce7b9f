mod kind;
mod upload;

pub use kind::*;
pub use upload::*;

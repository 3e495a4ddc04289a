mod bits;
mod date;
mod kind;
#[allow(clippy::module_inception)]
mod token;
mod width;

pub use bits::*;
pub use date::*;
pub use kind::*;
pub use token::*;
pub use width::*;

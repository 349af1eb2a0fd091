mod point;
mod result;
mod segment;

pub use point::*;
pub use result::*;
pub use segment::*;

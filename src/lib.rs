#![warn(clippy::pedantic)]

pub use matstack_math as math;
pub use matstack_transform as transform;

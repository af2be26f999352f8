//! Small helpers shared across the engine.
//!
//! - `char` - byte classification for numeric text
//! - `float` - fast numeric text reading
//! - `slice` - checked indexed access returning result containers

pub mod char;
pub mod float;
pub mod slice;

pub use self::char::{is_digit, is_numerical};
pub use self::float::{parse_f64, read_f32, read_f64};
pub use self::slice::{at, at_mut};

//! Testing utilities and harness for pagefold

pub mod assertions;
pub mod robot;

pub use assertions::*;
pub use robot::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::robot::*;
}

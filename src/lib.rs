//! A component runtime where attribute and behavior resolution is an open,
//! composable extension point.
//!

pub use trellis_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use trellis_internal::prelude::*;
}

//! Concrete calendar implementations.

mod target;

pub use target::Target;

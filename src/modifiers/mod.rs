//! Domain modifiers for SDFs (Deep Fried Edition)
//!
//! Modifiers deform the space before evaluating the child SDF.
//!
//! Author: Moroya Sakamoto

mod repeat;

pub use repeat::modifier_repeat_uniform;

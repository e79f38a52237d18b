//! Step-size strategies.
//!
//! - [`Constant`] — the same step for every iteration
//! - [`backtracking::LineSearch`] — shrinks a trial step until a
//!   sufficient-decrease condition holds
//! - [`Polyak`] — scales the gap between current and best objective values
//!   by the squared subgradient
//!
//! Closures also work as strategies; see [`StepSize`].
//!
//! [`StepSize`]: descent_core::StepSize

mod constant;
mod polyak;

pub mod backtracking;

pub use constant::Constant;
pub use polyak::Polyak;

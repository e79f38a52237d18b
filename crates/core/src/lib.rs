//! Core traits and types for scalar first-order optimization.
//!
//! This crate defines the shared abstractions that the solvers build on:
//!
//! - [`ScalarFn`] — a deterministic, fallible scalar callable used for
//!   objectives, gradients, and subgradients
//! - [`StepSize`] — a step-size strategy, generic over the context it reads
//!   ([`IterationContext`], [`PointContext`], [`HistoryContext`])
//! - [`Observer`] — receives solver events

mod function;
mod observer;
mod step_size;

pub use function::ScalarFn;
pub use observer::Observer;
pub use step_size::{HistoryContext, IterationContext, PointContext, StepSize};

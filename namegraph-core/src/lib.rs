//! Pattern-graph name generation library.
//!
//! This crate invents plausible new words or names by sampling constrained
//! random walks over a small directed graph of phonetic tokens. It provides:
//! - A pattern-graph data model with optional per-graph generation bounds
//! - A word-segmentation enumerator (every admissible token grouping)
//! - A corpus-to-graph compiler that learns a graph from example names
//! - A backtracking sampler producing one name per call
//! - A batch generator with duplicate avoidance and graceful degradation
//! - An offline diversity evaluator for generated batches
//!
//! Only the high-level API is exposed publicly. Low-level components
//! (the backtracking frame) are kept internal to ensure consistency
//! and prevent misuse.

/// Core pattern-graph model and generation logic.
///
/// This module exposes the high-level generation interface while keeping
/// internal stack-frame representations private.
pub mod model;

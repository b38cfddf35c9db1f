//! Top-level module for the pattern-graph generation system.
//!
//! This crate provides a constrained random-walk name generator, including:
//! - The graph data model (`PatternGraph`, `ChainOptions`)
//! - Word segmentation (`segmenter`)
//! - Corpus learning (`chain_builder`)
//! - The backtracking sampler (`walker`)
//! - Batch generation (`batch`)
//! - Batch quality scoring (`diversity`)
//! - Built-in language tables (`registry`)

/// Graph data model: token adjacency, generation bounds, boundary markers.
pub mod pattern_graph;

/// Exhaustive word segmentation under an optional constraint set.
pub mod segmenter;

/// Corpus-to-graph compiler built on top of the segmenter.
pub mod chain_builder;

/// Internal representation of one backtracking-stack level.
///
/// Tracks the untried successor set and accumulated counters.
/// This module is not exposed publicly.
mod frame;

/// The constrained backtracking sampler producing one name per call.
pub mod walker;

/// Batch generation with duplicate avoidance and graceful degradation.
pub mod batch;

/// Offline diversity scoring for generated batches.
pub mod diversity;

/// Tagged-variant error type shared by all generation entry points.
pub mod error;

/// Registry of built-in, hand-authored language graphs.
pub mod registry;

//! # Introduction
//!
//! algotrace runs classic interview-style algorithms to completion while
//! recording a snapshot of their working state at every meaningful step. The
//! finished trace is then replayed forward and backward, either in a terminal
//! UI built with [ratatui](https://docs.rs/ratatui) or as plain text or JSON.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Algorithm + Recorder → Snapshots → Playback → TUI / text / JSON
//! ```
//!
//! 1. [`input`]: parses command-line arguments into typed problem input.
//! 2. [`algorithms`]: fifteen traced problems. Each returns its result together
//!    with the [`snapshot::Snapshot`]s that explain it.
//! 3. [`snapshot`]: the append-only [`snapshot::Recorder`], action tags and
//!    per-family state bags, plus trace validation.
//! 4. [`structures`]: arena-backed linked lists and binary trees, and the
//!    [`structures::value::Value`] used to display state.
//! 5. [`playback`]: a clamped cursor over a finished trace.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Problems
//!
//! Frequency and membership: anagrams, most frequent character, all unique,
//! intersection, exclusive items, intersection with duplicates. Pair search:
//! pair sum, pair product. Linked lists: values, sum, find, get node value,
//! reverse. Trees: breadth-first values, maximum root-to-leaf path sum.

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod input;
pub mod playback;
pub mod report;
pub mod snapshot;
pub mod structures;
pub mod ui;

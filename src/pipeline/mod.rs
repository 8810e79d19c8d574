//! Pipeline module - The word count batch job
//!
//! Stages, in data-flow order:
//! - materialize: copy seed files into the working input directory
//! - loader: read every input file into a flat list of lines
//! - normalize: lowercase and strip lines to the word alphabet
//! - tokenize: split normalized lines into words
//! - aggregate: count words into a frequency table
//! - output: write the report and the success marker
//!
//! `job` wires loader through output into a single run.

pub mod aggregate;
pub mod job;
pub mod loader;
pub mod materialize;
pub mod normalize;
pub mod output;
pub mod tokenize;

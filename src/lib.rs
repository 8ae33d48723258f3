//! Pirate Log Tools
//!
//! Reads the binary logs written by the cache pirate measurement tool and
//! converts their performance counter samples into CSV or readable text.
//!
//! A log is the magic `PIRATEv1`, one header frame, then sample frames until
//! end of file. Each frame is a native-endian `u32` length followed by a
//! protobuf message.
//!
//! ## Getting Started
//!
//! ```bash
//! pirate-log csv run.log --fs ,
//! pirate-log dump run.log
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

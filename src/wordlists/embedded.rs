//! Embedded word lists
//!
//! Default lists compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

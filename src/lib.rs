//! # Tape
//!
//! A front end for the tape language: programs are sequences of
//! nested, labeled, parameterized tapes built from identifiers,
//! literals, and call/address markers.
//!
//! Begin by opening a terminal and running the executable. If you get
//! the following, you have achieved success.
//! ```text
//! TAPE
//! READY.
//! █
//! ```
//!
//! Every line you enter is lexed, parsed, and resolved, and the
//! finished tree (or the first error) is printed back. Whole files can
//! be parsed with `.load <filename>`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;

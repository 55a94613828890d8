//! # Tape
//!
//! Interactive front end for the tape language parser.
//!

mod term;

fn main() {
    term::main()
}

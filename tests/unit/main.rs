//! Unit test suite mirroring the src module tree

mod domain;
mod io;
mod spatial;

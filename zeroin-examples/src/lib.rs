//! Example applications for the zeroin root-finding crates.
//!
//! See the `examples/` directory; run one with
//! `cargo run -p zeroin-examples --example compare_methods`.

//! Shared leaf types for the hyphen engine.
//!
//! This crate holds the two concepts every other layer agrees on:
//!
//! - [`weight`] -- the signed hyphenation score and its narrowing policy
//! - [`letter`] -- mapping bytes onto the dense a-z table alphabet
//!
//! Nothing here allocates and nothing here can fail: lookups outside the
//! table alphabet are absorbed by the callers as neutral weight.

pub mod letter;
pub mod weight;

pub use letter::{ALPHABET_SIZE, is_vowel, letter_index, to_lower};
pub use weight::{NEUTRAL, Weight, narrow};

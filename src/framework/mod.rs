//! A small framework that retries transactions against the run history provider.
//!
//! See: [`retrying`], [`StateError`]

#![cfg(feature = "framework")]

mod state;

pub use state::*;

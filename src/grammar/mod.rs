//! External grammar-checking pass for paragraph text.
//!
//! Talks to a LanguageTool-style HTTP service: the full paragraph text goes
//! out as a URL-encoded form, a list of matches comes back, and only the
//! first suggested replacement of each match is spliced in. Transport and
//! parse failures propagate to the caller and abort the remaining pass.

pub mod client;

pub use client::*;

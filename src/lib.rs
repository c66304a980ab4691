#![forbid(unsafe_code)]
//! Find the `package.json` nearest to a directory and summarize it.
//!
//! The pipeline is [`locate`](locate::locate) → [`read_manifest`](manifest::read_manifest)
//! → [`summarize`](summary::summarize); [`inspect::inspect`] runs all three.

pub mod error;
pub mod inspect;
pub mod locate;
pub mod manifest;
pub mod summary;

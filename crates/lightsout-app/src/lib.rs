//! Terminal front end for Lights Out.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod command;
pub mod session;
pub mod version;

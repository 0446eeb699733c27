//! Core library for the bandi-export command line application.
//!
//! The crate downloads the Regione Lombardia grant announcements dataset and
//! saves it as a single-sheet Excel workbook. Record decoding lives in
//! [`bandi::model`], the sheet layout in [`bandi::table`], the HTTP and Excel
//! adapters under [`bandi::io`], and the download-then-export orchestration in
//! [`bandi::pipeline`].

pub mod bandi;

pub use bandi::{ErrorKind, Result, ToolError, error, io, model, pipeline, table};

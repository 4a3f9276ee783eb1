//! Vector table generation from datasheet PDFs.
//!
//! The pipeline runs strictly forward: [`extract`] pulls one column of the
//! interrupt-vector table out of a page range, [`sanitize`] turns raw cell
//! text into C identifiers, [`plan`] decides which slot (if any) to elide
//! and lays out the array, and [`emit`] renders and writes the generated C
//! file. [`firmware`] holds the helpers behind the `fwbuild` front-end.

pub mod emit;
pub mod extract;
pub mod firmware;
pub mod plan;
pub mod sanitize;

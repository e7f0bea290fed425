//! Known-answer suites stored as TOML under `src/vectors/kat`
//!
//! Each file names one [`Algorithm`] and lists cases whose inputs are hex
//! strings. A case either produces the listed outputs or, when marked
//! `invalid`, fails with the listed [`vau_api::ErrorKind`].

pub mod error;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::KatError;
pub use loader::{load_all, load_suite_by_name};
pub use model::{Algorithm, ExpectedResult, TestCase, TestSuite};
pub use runner::run_suite;

//! Single-component unit tests.

mod document_tests;
mod measure_tests;

//! Cross-crate tests: parameters are loaded with `contractr-common`, then
//! assembled, rendered and written with `contractr-core`.

mod contract;
mod export;

//! # Contractr Core
//!
//! Builds the contract document from a [`ContractConfig`](contractr_common::contract::ContractConfig).
//!
//! * [`assembler`]: turns contract parameters into an ordered [`document::Document`].
//! * [`render`]: the [`render::Renderer`] seam and its Markdown implementation.
//! * [`export`]: writes rendered text to disk.

pub mod assembler;
pub mod document;
pub mod export;
pub mod payments;
pub mod render;
pub mod section;

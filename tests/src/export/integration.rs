#![cfg(test)]
use std::fs;

use contractr_common::contract::ContractConfig;
use contractr_core::render::{Markdown, Renderer};
use contractr_core::{assembler, export};

#[test]
fn written_file_matches_rendered_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Contract.md");
    let markdown = Markdown.render(&assembler::assemble(&ContractConfig::sample()));

    export::write(&path, &markdown).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), markdown);
}

#[test]
fn existing_file_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Contract.md");
    fs::write(&path, "stale contents that are much longer than the replacement").unwrap();

    export::write(&path, "# Fresh\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "# Fresh\n");
}

#[test]
fn sample_parameters_can_be_written_and_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contract.toml");
    let sample = ContractConfig::sample();

    export::write(&path, &sample.to_toml_string().unwrap()).unwrap();

    assert_eq!(ContractConfig::load(&path).unwrap(), sample);
}

#![cfg(test)]
use contractr_common::contract::{ContractConfig, Phase, Phases};
use contractr_core::assembler;
use contractr_core::document::DocumentNode;
use contractr_core::render::{self, Markdown, Renderer};
use contractr_core::section::Section;

fn contract_with_costs(costs: &[u64]) -> ContractConfig {
    let phases: Vec<Phase> = costs
        .iter()
        .enumerate()
        .map(|(index, cost)| Phase::new(index, *cost, [format!("Work item {index}.")]))
        .collect();

    ContractConfig {
        phases: Phases::new(phases).unwrap(),
        ..ContractConfig::sample()
    }
}

/// Level-3 headings between "## Project Phases" and the next level-2 heading.
fn phase_headings(markdown: &str) -> Vec<String> {
    render::parse_headings(markdown)
        .into_iter()
        .skip_while(|(level, text)| !(*level == 2 && text == Section::Phases.title()))
        .skip(1)
        .take_while(|(level, _)| *level != 2)
        .map(|(_, text)| text)
        .collect()
}

#[test]
fn rendered_sections_round_trip_in_order() {
    let markdown = Markdown.render(&assembler::assemble(&ContractConfig::sample()));

    let sections: Vec<Section> = render::parse_headings(&markdown)
        .into_iter()
        .filter(|(level, _)| *level == 2)
        .filter_map(|(_, text)| Section::from_title(&text))
        .collect();

    assert_eq!(sections, Section::ALL.to_vec());
}

#[test]
fn multi_line_deliverable_keeps_section_order() {
    let mut phases: Vec<Phase> = ContractConfig::sample().phases.into();
    phases[1].deliverables = vec![String::from("Landing page\n## Payments")];
    let contract = ContractConfig {
        phases: Phases::new(phases).unwrap(),
        ..ContractConfig::sample()
    };

    let markdown = Markdown.render(&assembler::assemble(&contract));
    let sections: Vec<String> = render::parse_headings(&markdown)
        .into_iter()
        .filter(|(level, _)| *level == 2)
        .map(|(_, text)| text)
        .collect();
    let expected: Vec<String> = Section::ALL.iter().map(|s| s.title().to_string()).collect();

    assert_eq!(sections, expected);
    assert!(markdown.contains("- Landing page\n  \\## Payments\n"));
}

#[test]
fn phase_blocks_match_billable_phase_count() {
    for costs in [&[100][..], &[100, 200][..], &[500, 1000, 750][..], &[1, 2, 3, 4, 5][..]] {
        let markdown = Markdown.render(&assembler::assemble(&contract_with_costs(costs)));
        let headings = phase_headings(&markdown);

        assert_eq!(headings.len(), costs.len(), "costs: {costs:?}");
        assert_eq!(headings.last().map(String::as_str), Some("Final Review & Amendments"));
        for (idx, heading) in headings.iter().take(costs.len() - 1).enumerate() {
            assert_eq!(heading, &format!("Phase {}", idx + 1));
        }
    }
}

#[test]
fn payments_section_matches_phase_costs() {
    let markdown = Markdown.render(&assembler::assemble(&contract_with_costs(&[500, 1000, 750])));

    assert!(markdown.contains("The total cost of the project is `$2250 CAD`."));
    assert!(markdown.contains("initial down payment of $500 CAD once this agreement has been signed"));
    assert!(markdown.contains("remaining balance(s) ($1000 CAD, $750 CAD) after each"));
}

#[test]
fn phase_zero_has_no_block_of_its_own() {
    let document = assembler::assemble(&contract_with_costs(&[500, 1000]));

    let phase_zero = DocumentNode::heading(3, "Phase 0");
    assert!(document.iter().all(|node| *node != phase_zero));
    assert!(
        document
            .iter()
            .all(|node| !matches!(node, DocumentNode::List(items) if items.iter().any(|i| i == "Work item 0.")))
    );
}

#[test]
fn contract_file_drives_the_document() {
    let raw = ContractConfig::sample()
        .to_toml_string()
        .unwrap()
        .replace("project_type = \"web\"", "project_type = \"mobile\"")
        .replace("jurisdiction = \"Canada\"", "jurisdiction = \"Ontario\"");
    let contract = ContractConfig::from_toml_str(&raw).unwrap();

    let markdown = Markdown.render(&assembler::assemble(&contract));

    assert!(markdown.starts_with("# Mobile Development Contract.\n"));
    assert!(markdown.contains("in accordance with the laws of Ontario"));
    assert!(markdown.contains("Client (Dana Reyes for Northwind Trading)"));
}

#[test]
fn empty_phase_list_never_reaches_the_assembler() {
    let raw = ContractConfig::sample().to_toml_string().unwrap();
    let without_phases: String = raw
        .split("[[phases]]")
        .next()
        .unwrap()
        .to_string();
    let raw = format!("phases = []\n{without_phases}");

    let err = ContractConfig::from_toml_str(&raw).unwrap_err();
    let cause = std::error::Error::source(&err).map(|e| e.to_string()).unwrap_or_default();
    assert!(cause.contains("at least one phase"), "{cause}");
}

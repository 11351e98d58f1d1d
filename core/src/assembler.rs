//! # Document Assembler
//!
//! Turns a [`ContractConfig`] into the contract [`Document`].
//!
//! Assembly is a single pass over [`Section::ALL`]: every section gets a
//! level-2 heading followed by its clauses, with the contract parameters
//! substituted in. The function is pure and cannot fail; a config that made it
//! past [`Phases`](contractr_common::contract::Phases) validation always has a
//! down payment.

use contractr_common::contract::{ContractConfig, Phase};
use tracing::debug;

use crate::document::{Document, DocumentNode};
use crate::payments::PaymentSchedule;
use crate::section::Section;

mod clauses;

/// Builds the full contract for `config`.
pub fn assemble(config: &ContractConfig) -> Document {
    let mut document = Document::new();

    document.push(DocumentNode::heading(1, clauses::title(config)));
    document.push(DocumentNode::quote(clauses::subtitle(config)));

    for section in Section::ALL {
        document.push(DocumentNode::heading(2, section.title()));
        document.extend(section_body(section, config));
    }

    debug!(nodes = document.len(), "contract assembled");
    document
}

fn section_body(section: Section, config: &ContractConfig) -> Vec<DocumentNode> {
    match section {
        Section::Introduction => vec![DocumentNode::paragraph(clauses::INTRODUCTION)],
        Section::Summary => vec![DocumentNode::paragraph(clauses::project_summary(config))],
        Section::Agreements => vec![
            DocumentNode::paragraph(clauses::CLIENT_AGREES),
            DocumentNode::list(clauses::CLIENT_AGREEMENTS),
            DocumentNode::paragraph(clauses::DEVELOPER_AGREES),
            DocumentNode::list(clauses::DEVELOPER_AGREEMENTS),
        ],
        Section::Details => vec![DocumentNode::paragraphs(clauses::details(config))],
        Section::Cancellation => vec![
            DocumentNode::paragraph(clauses::CLIENT_CANCELS),
            DocumentNode::list(clauses::CLIENT_CANCELLATION),
            DocumentNode::paragraph(clauses::DEVELOPER_CANCELS),
            DocumentNode::list(clauses::DEVELOPER_CANCELLATION),
        ],
        Section::Legal => vec![DocumentNode::paragraphs(clauses::legal(config))],
        Section::Copyright => vec![
            DocumentNode::paragraphs(clauses::copyright(config)),
            DocumentNode::list(clauses::copyright_assignments(config)),
        ],
        Section::Phases => phase_blocks(config),
        Section::Payments => {
            let schedule = PaymentSchedule::from_phases(&config.phases);
            vec![DocumentNode::paragraphs(payment_terms(config, &schedule))]
        }
        Section::Signatures => {
            let mut lines: Vec<DocumentNode> = clauses::signatures(config)
                .into_iter()
                .map(DocumentNode::paragraph)
                .collect();
            lines.push(DocumentNode::paragraph(clauses::SIGNATURES_CLOSING));
            lines
        }
    }
}

/// One heading, cost quote and checklist per billable phase, then the final
/// review block. The down payment (phase 0) gets no block of its own.
fn phase_blocks(config: &ContractConfig) -> Vec<DocumentNode> {
    let milestones = config.phases.milestones();
    let mut nodes = Vec::with_capacity((milestones.len() + 1) * 3);

    for phase in milestones {
        nodes.extend(phase_block(config, phase));
    }

    nodes.push(DocumentNode::heading(3, clauses::FINAL_REVIEW_TITLE));
    nodes.push(DocumentNode::quote(clauses::FINAL_REVIEW_COST));
    nodes.push(DocumentNode::list(clauses::FINAL_REVIEW_CHECKLIST));
    nodes
}

fn phase_block(config: &ContractConfig, phase: &Phase) -> [DocumentNode; 3] {
    let checklist = phase
        .deliverables
        .iter()
        .map(String::as_str)
        .chain(clauses::PHASE_CHECKLIST);

    [
        DocumentNode::heading(3, format!("Phase {}", phase.index)),
        DocumentNode::quote(format!("Cost: {}", config.developer.money(phase.cost))),
        DocumentNode::list(checklist),
    ]
}

fn payment_terms(config: &ContractConfig, schedule: &PaymentSchedule) -> Vec<String> {
    let developer = &config.developer;
    let mut terms = vec![
        String::from(clauses::PAYMENTS_PREAMBLE),
        format!(
            "The total cost of the project is `{}`.",
            developer.money(schedule.total)
        ),
        format!(
            "I will invoice for an initial down payment of {} once this agreement has been signed. \
I will start work after receiving this payment.",
            developer.money(schedule.down_payment)
        ),
    ];

    if !schedule.balances.is_empty() {
        let balances = schedule
            .balances
            .iter()
            .map(|cost| developer.money(*cost).to_string())
            .collect::<Vec<String>>()
            .join(", ");

        terms.push(format!(
            "I will invoice for the remaining balance(s) ({balances}) after each of the respective phases are \
completed as described. These are due not more than 7 days after the phase has been considered complete and \
the invoice has been sent."
        ));
    }

    terms.push(format!(
        "Interest accrued if payment is more than 14 days late is {}% of the outstanding amount to be added every \
7 days, starting from the 15th day after the invoice has been sent.",
        developer.interest_rate
    ));
    terms
}

use std::io::{self, Write};

use anyhow::Context;
use colored::*;

use crate::commands::{GenerateArgs, load_contract};
use crate::terminal::{colors, format, print};
use contractr_common::{config::Config, contract::ContractConfig, success};
use contractr_core::assembler;
use contractr_core::export;
use contractr_core::payments::PaymentSchedule;
use contractr_core::render::{Markdown, Renderer};

pub fn generate(args: &GenerateArgs, cfg: &Config) -> anyhow::Result<()> {
    let contract: ContractConfig = load_contract(args.config.as_deref())?;

    let document = assembler::assemble(&contract);
    let markdown: String = Markdown.render(&document);

    if !args.no_stdout {
        io::stdout()
            .lock()
            .write_all(markdown.as_bytes())
            .context("failed to print the contract")?;
    }

    export::write(&args.output, &markdown)?;
    success!("Contract written to {}", args.output.display());

    print_summary(&contract, args, cfg);
    Ok(())
}

fn print_summary(contract: &ContractConfig, args: &GenerateArgs, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let schedule = PaymentSchedule::from_phases(&contract.phases);

    print::section_rule("contract", cfg.quiet);
    print::fields(&[
        ("Project", contract.project_type.clone()),
        ("Governed by", contract.jurisdiction.clone()),
        ("Output", args.output.display().to_string()),
    ]);

    print::section_rule("parties", cfg.quiet);
    print::entry(0, &contract.developer.party.name);
    print::branches(&format::party_to_details(&contract.developer.party));
    print::blank();
    print::entry(1, &contract.client.name);
    print::branches(&format::party_to_details(&contract.client));

    print::section_rule("payment schedule", cfg.quiet);
    print::branches(&format::schedule_to_details(&schedule, &contract.developer));

    let phases: ColoredString = format!("{} billable phases", schedule.balances.len())
        .bold()
        .green();
    let total: ColoredString = contract
        .developer
        .money(schedule.total)
        .to_string()
        .bold()
        .yellow();
    let output: String = format!("Contract Ready: {phases} totalling {total}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    print::closing_rule();
    print::centered(&output);
}

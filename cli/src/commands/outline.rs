use colored::*;

use crate::commands::{OutlineArgs, load_contract};
use crate::terminal::print::{self, Detail};
use contractr_core::assembler;
use contractr_core::render::{self, Markdown, Renderer};

/// Prints the headings of the rendered contract as a tree: one entry per
/// section, sub-headings listed underneath.
pub fn outline(args: &OutlineArgs) -> anyhow::Result<()> {
    let contract = render_contract(args)?;
    let headings: Vec<(u8, String)> = render::parse_headings(&contract);

    let mut section_idx: usize = 0;
    let mut parts: Vec<Detail> = Vec::new();

    for (level, text) in headings {
        match level {
            1 => print::status(&text.bold().to_string()),
            2 => {
                flush_parts(&mut parts);
                if section_idx > 0 {
                    print::blank();
                }
                print::entry(section_idx, &text);
                section_idx += 1;
            }
            _ => parts.push((String::from("Part"), text.normal())),
        }
    }
    flush_parts(&mut parts);

    Ok(())
}

fn render_contract(args: &OutlineArgs) -> anyhow::Result<String> {
    let contract = load_contract(args.config.as_deref())?;
    Ok(Markdown.render(&assembler::assemble(&contract)))
}

fn flush_parts(parts: &mut Vec<Detail>) {
    if !parts.is_empty() {
        print::branches(&std::mem::take(parts));
    }
}

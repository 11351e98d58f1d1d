use crate::terminal::colors;
use crate::terminal::print::Detail;
use colored::*;
use contractr_common::contract::{Developer, Party};
use contractr_core::payments::PaymentSchedule;

pub fn party_to_details(party: &Party) -> Vec<Detail> {
    vec![
        (String::from("Company"), party.company.normal()),
        (String::from("Alias"), party.nickname.normal()),
        (String::from("Contact"), party.contact.normal()),
    ]
}

/// Down payment, one line per billable phase, then the total.
pub fn schedule_to_details(schedule: &PaymentSchedule, developer: &Developer) -> Vec<Detail> {
    let amount = |cost: u64| developer.money(cost).to_string().color(colors::AMOUNT);

    let mut details: Vec<Detail> = Vec::with_capacity(schedule.balances.len() + 2);
    details.push((String::from("Down payment"), amount(schedule.down_payment)));

    for (idx, cost) in schedule.balances.iter().enumerate() {
        details.push((format!("Phase {}", idx + 1), amount(*cost)));
    }

    details.push((
        String::from("Total"),
        developer.money(schedule.total).to_string().bold().green(),
    ));
    details
}

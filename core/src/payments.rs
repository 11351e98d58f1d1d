use contractr_common::contract::Phases;

/// Invoice amounts derived from the phase costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSchedule {
    /// Sum of every phase cost, down payment included.
    pub total: u64,
    /// Cost of phase 0.
    pub down_payment: u64,
    /// Costs of phases 1..N, in order.
    pub balances: Vec<u64>,
}

impl PaymentSchedule {
    pub fn from_phases(phases: &Phases) -> Self {
        Self {
            total: phases.total_cost(),
            down_payment: phases.down_payment().cost,
            balances: phases.milestones().iter().map(|phase| phase.cost).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contractr_common::contract::Phase;

    #[test]
    fn splits_down_payment_from_balances() {
        let phases = Phases::new(vec![
            Phase::new(0, 500, ["Kickoff."]),
            Phase::new(1, 1000, ["Build."]),
            Phase::new(2, 750, ["Ship."]),
        ])
        .unwrap();

        let schedule = PaymentSchedule::from_phases(&phases);
        assert_eq!(schedule.total, 2250);
        assert_eq!(schedule.down_payment, 500);
        assert_eq!(schedule.balances, vec![1000, 750]);
    }

    #[test]
    fn down_payment_only() {
        let phases = Phases::new(vec![Phase::new(0, 900, Vec::<String>::new())]).unwrap();

        let schedule = PaymentSchedule::from_phases(&phases);
        assert_eq!(schedule.total, 900);
        assert_eq!(schedule.down_payment, 900);
        assert!(schedule.balances.is_empty());
    }
}

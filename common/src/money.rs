use std::fmt;

/// An amount in whole units of the contract currency.
///
/// Displays as `$500 CAD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money<'a> {
    pub amount: u64,
    pub currency: &'a str,
}

impl<'a> Money<'a> {
    pub fn new(amount: u64, currency: &'a str) -> Self {
        Self { amount, currency }
    }
}

impl fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} {}", self.amount, self.currency)
    }
}

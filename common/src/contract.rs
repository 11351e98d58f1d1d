//! # Contract Parameters
//!
//! Everything the document assembler needs to know about a contract: who the
//! two parties are, what kind of project it is and how the work is split into
//! paid phases.
//!
//! Parameters are read from a TOML file:
//!
//! ```toml
//! project_type = "web"
//!
//! [developer]
//! name = "Alex Morgan"
//! nickname = "Alex"
//! company = "Morgan Software"
//! contact = "Alex Morgan"
//! hourly_rate = 60
//! currency = "CAD"
//! feedback_days = 5
//! interest_rate = 2.0
//!
//! [client]
//! name = "Northwind Trading"
//! nickname = "Northwind"
//! company = "Northwind Trading Ltd."
//! contact = "Dana Reyes"
//!
//! [[phases]]
//! index = 0
//! cost = 500
//! deliverables = ["Requirements workshop."]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::money::Money;

const DEFAULT_JURISDICTION: &str = "Canada";

/// One side of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Party {
    pub name: String,
    pub nickname: String,
    pub company: String,
    /// Person signing on behalf of the party.
    pub contact: String,
}

/// The party doing the work, plus the commercial terms they set.
///
/// Stored flat: party fields and terms share the `[developer]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DeveloperTable", into = "DeveloperTable")]
pub struct Developer {
    pub party: Party,
    /// Rate for work requested after the final phase, in whole currency units.
    pub hourly_rate: u64,
    /// Currency label appended to every amount, e.g. `CAD`.
    pub currency: String,
    /// Business days the client has to give feedback on a finished phase.
    pub feedback_days: u32,
    /// Percentage added to a late invoice every 7 days.
    pub interest_rate: f64,
}

/// On-disk shape of [`Developer`]: party fields and terms side by side.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeveloperTable {
    name: String,
    nickname: String,
    company: String,
    contact: String,
    hourly_rate: u64,
    currency: String,
    feedback_days: u32,
    interest_rate: f64,
}

impl From<DeveloperTable> for Developer {
    fn from(table: DeveloperTable) -> Self {
        Self {
            party: Party {
                name: table.name,
                nickname: table.nickname,
                company: table.company,
                contact: table.contact,
            },
            hourly_rate: table.hourly_rate,
            currency: table.currency,
            feedback_days: table.feedback_days,
            interest_rate: table.interest_rate,
        }
    }
}

impl From<Developer> for DeveloperTable {
    fn from(developer: Developer) -> Self {
        let Developer {
            party,
            hourly_rate,
            currency,
            feedback_days,
            interest_rate,
        } = developer;

        Self {
            name: party.name,
            nickname: party.nickname,
            company: party.company,
            contact: party.contact,
            hourly_rate,
            currency,
            feedback_days,
            interest_rate,
        }
    }
}

impl Developer {
    pub fn money(&self, amount: u64) -> Money<'_> {
        Money::new(amount, &self.currency)
    }
}

/// A billable milestone. Phase 0 is the down payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Phase {
    pub index: usize,
    pub cost: u64,
    #[serde(default, alias = "elements")]
    pub deliverables: Vec<String>,
}

impl Phase {
    pub fn new<I, S>(index: usize, cost: u64, deliverables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            index,
            cost,
            deliverables: deliverables.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered, non-empty list of phases.
///
/// Phase `i` always sits at position `i`, so the down payment exists for every
/// value of this type and the total of all costs fits in a `u64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Phase>", into = "Vec<Phase>")]
pub struct Phases {
    down_payment: Phase,
    milestones: Vec<Phase>,
}

impl Phases {
    pub fn new(phases: Vec<Phase>) -> Result<Self, ConfigError> {
        Self::try_from(phases)
    }

    /// Phase 0, invoiced once the contract is signed.
    pub fn down_payment(&self) -> &Phase {
        &self.down_payment
    }

    /// Phases 1..N, invoiced as each one is completed.
    pub fn milestones(&self) -> &[Phase] {
        &self.milestones
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        std::iter::once(&self.down_payment).chain(self.milestones.iter())
    }

    pub fn total_cost(&self) -> u64 {
        self.iter().map(|phase| phase.cost).sum()
    }
}

impl TryFrom<Vec<Phase>> for Phases {
    type Error = ConfigError;

    fn try_from(phases: Vec<Phase>) -> Result<Self, Self::Error> {
        for (position, phase) in phases.iter().enumerate() {
            if phase.index != position {
                return Err(ConfigError::PhaseIndex {
                    position,
                    found: phase.index,
                });
            }
        }

        phases
            .iter()
            .try_fold(0u64, |total, phase| total.checked_add(phase.cost))
            .ok_or(ConfigError::CostOverflow)?;

        let mut phases = phases.into_iter();
        let down_payment = phases.next().ok_or(ConfigError::NoPhases)?;

        Ok(Self {
            down_payment,
            milestones: phases.collect(),
        })
    }
}

impl From<Phases> for Vec<Phase> {
    fn from(phases: Phases) -> Self {
        let mut all = Vec::with_capacity(phases.milestones.len() + 1);
        all.push(phases.down_payment);
        all.extend(phases.milestones);
        all
    }
}

/// Full set of parameters substituted into the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
    /// Kind of application being built, e.g. `web` or `mobile`.
    pub project_type: String,
    /// Legal system named in the governing law clause.
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
    pub developer: Developer,
    pub client: Party,
    pub phases: Phases,
}

fn default_jurisdiction() -> String {
    DEFAULT_JURISDICTION.to_string()
}

impl ContractConfig {
    /// Reads and validates a TOML contract file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })?;

        debug!(
            path = %path.display(),
            phases = config.phases.iter().count(),
            "contract parameters loaded"
        );
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            origin: String::from("<string>"),
            source,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Example parameters, used when no contract file is given and written out
    /// by `contractr init`.
    pub fn sample() -> Self {
        Self {
            project_type: String::from("web"),
            jurisdiction: default_jurisdiction(),
            developer: Developer {
                party: Party {
                    name: String::from("Alex Morgan"),
                    nickname: String::from("Alex"),
                    company: String::from("Morgan Software"),
                    contact: String::from("Alex Morgan"),
                },
                hourly_rate: 60,
                currency: String::from("CAD"),
                feedback_days: 5,
                interest_rate: 2.0,
            },
            client: Party {
                name: String::from("Northwind Trading"),
                nickname: String::from("Northwind"),
                company: String::from("Northwind Trading Ltd."),
                contact: String::from("Dana Reyes"),
            },
            phases: Phases {
                down_payment: Phase::new(0, 500, ["Requirements workshop and project plan."]),
                milestones: vec![
                    Phase::new(
                        1,
                        1000,
                        [
                            "Application layout and navigation.",
                            "Account sign-up and login.",
                        ],
                    ),
                    Phase::new(
                        2,
                        750,
                        ["Admin dashboard.", "Deployment to production hosting."],
                    ),
                ],
            },
        }
    }
}

//! # Tax Policy — Standard Deduction and Bracket Schedule
//!
//! A `TaxPolicy` carries the two policy inputs of the calculator: the
//! standard deduction and the progressive bracket table. The default is
//! the 2024 single-filer schedule:
//!
//! | Taxable income | Tax |
//! |----------------|-----|
//! | `< 11600` | `income × 0.10` |
//! | `< 47150` | `1160 + (income − 11600) × 0.12` |
//! | otherwise | `5426 + (income − 47150) × 0.22` |
//!
//! Each bracket stores its cumulative base explicitly rather than deriving
//! it, so the default table reproduces those constants exactly. The bases
//! are continuity points of a piecewise-linear function; [`TaxPolicy::validate()`]
//! rejects tables where they are not.
//!
//! Policies are loaded from YAML or JSON and validated at load time. Once
//! loaded, applying a policy never fails.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard deduction for a single filer, tax year 2024.
pub const STANDARD_DEDUCTION_2024_SINGLE: f64 = 14_600.0;

/// Tolerance for bracket continuity checks.
const CONTINUITY_TOLERANCE: f64 = 1e-6;

/// One marginal-rate bracket: `tax = base + (income − lower) × rate` for
/// `lower ≤ income < upper`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of taxable income.
    pub lower: f64,
    /// Exclusive upper bound; `None` for the top bracket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    /// Marginal rate in `[0, 1]`.
    pub rate: f64,
    /// Cumulative tax owed at `lower`.
    pub base: f64,
}

impl TaxBracket {
    /// Whether `income` falls below this bracket's upper bound.
    fn contains_below_upper(&self, income: f64) -> bool {
        self.upper.map_or(true, |upper| income < upper)
    }

    /// Tax owed for `income` within this bracket.
    fn tax_for(&self, income: f64) -> f64 {
        self.base + (income - self.lower) * self.rate
    }
}

/// Errors rejecting a bracket table or deduction amount.
#[derive(Error, Debug, PartialEq)]
pub enum PolicyError {
    /// The bracket table is empty.
    #[error("policy has no tax brackets")]
    NoBrackets,

    /// The first bracket does not start at zero with a zero base.
    #[error("first bracket must start at 0 with base 0, found lower {lower} base {base}")]
    FirstBracketOffset {
        /// Lower bound of the first bracket.
        lower: f64,
        /// Base of the first bracket.
        base: f64,
    },

    /// A bracket does not start where the previous one ended.
    #[error("bracket {index} starts at {found}, expected {expected}")]
    Gap {
        /// Index of the offending bracket.
        index: usize,
        /// Upper bound of the previous bracket.
        expected: f64,
        /// Lower bound of this bracket.
        found: f64,
    },

    /// A bracket other than the last has no upper bound.
    #[error("bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeLast {
        /// Index of the offending bracket.
        index: usize,
    },

    /// The last bracket has an upper bound.
    #[error("last bracket must be unbounded")]
    BoundedTop,

    /// A bracket's upper bound is not above its lower bound.
    #[error("bracket {index} upper bound {upper} is not above lower bound {lower}")]
    EmptyBracket {
        /// Index of the offending bracket.
        index: usize,
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// A marginal rate outside `[0, 1]`.
    #[error("bracket {index} rate {rate} is outside [0, 1]")]
    RateOutOfRange {
        /// Index of the offending bracket.
        index: usize,
        /// The rejected rate.
        rate: f64,
    },

    /// A base amount that does not continue the previous bracket.
    #[error("bracket {index} base {found} breaks continuity, expected {expected}")]
    Discontinuity {
        /// Index of the offending bracket.
        index: usize,
        /// Cumulative tax at the end of the previous bracket.
        expected: f64,
        /// Base stored on this bracket.
        found: f64,
    },

    /// A bracket bound or base is NaN or infinite.
    #[error("bracket {index} {field} must be finite, found {value}")]
    NonFinite {
        /// Index of the offending bracket.
        index: usize,
        /// Which field: `lower`, `upper` or `base`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Standard deduction is negative or not finite.
    #[error("standard deduction must be a finite non-negative amount, found {0}")]
    InvalidStandardDeduction(f64),

    /// The policy document could not be parsed.
    #[error("failed to parse policy: {0}")]
    Parse(String),
}

/// Standard deduction and progressive bracket schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// Human-readable policy name (e.g., `"2024 single filer"`).
    pub name: String,
    /// Deduction taken when itemized deductions do not exceed it.
    pub standard_deduction: f64,
    /// Brackets in ascending order of `lower`.
    pub brackets: Vec<TaxBracket>,
}

impl TaxPolicy {
    /// The 2024 single-filer schedule (10% / 12% / 22%).
    pub fn single_2024() -> Self {
        Self {
            name: "2024 single filer".to_string(),
            standard_deduction: STANDARD_DEDUCTION_2024_SINGLE,
            brackets: vec![
                TaxBracket {
                    lower: 0.0,
                    upper: Some(11_600.0),
                    rate: 0.10,
                    base: 0.0,
                },
                TaxBracket {
                    lower: 11_600.0,
                    upper: Some(47_150.0),
                    rate: 0.12,
                    base: 1_160.0,
                },
                TaxBracket {
                    lower: 47_150.0,
                    upper: None,
                    rate: 0.22,
                    base: 5_426.0,
                },
            ],
        }
    }

    /// Parse and validate a policy from YAML.
    pub fn from_yaml_str(s: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_yaml::from_str(s).map_err(|e| PolicyError::Parse(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Parse and validate a policy from JSON.
    pub fn from_json_str(s: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(s).map_err(|e| PolicyError::Parse(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check the structural and continuity rules of the schedule.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.standard_deduction.is_finite() || self.standard_deduction < 0.0 {
            return Err(PolicyError::InvalidStandardDeduction(self.standard_deduction));
        }

        for (index, bracket) in self.brackets.iter().enumerate() {
            let fields = [
                ("lower", Some(bracket.lower)),
                ("upper", bracket.upper),
                ("base", Some(bracket.base)),
            ];
            for (field, value) in fields {
                if let Some(value) = value.filter(|v| !v.is_finite()) {
                    return Err(PolicyError::NonFinite {
                        index,
                        field,
                        value,
                    });
                }
            }
        }

        let first = self.brackets.first().ok_or(PolicyError::NoBrackets)?;
        if first.lower != 0.0 || first.base != 0.0 {
            return Err(PolicyError::FirstBracketOffset {
                lower: first.lower,
                base: first.base,
            });
        }

        let last_index = self.brackets.len() - 1;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if !(0.0..=1.0).contains(&bracket.rate) {
                return Err(PolicyError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }
            match bracket.upper {
                None if index != last_index => {
                    return Err(PolicyError::UnboundedBeforeLast { index });
                }
                Some(_) if index == last_index => return Err(PolicyError::BoundedTop),
                Some(upper) if upper <= bracket.lower => {
                    return Err(PolicyError::EmptyBracket {
                        index,
                        lower: bracket.lower,
                        upper,
                    });
                }
                _ => {}
            }

            if index == 0 {
                continue;
            }
            let previous = &self.brackets[index - 1];
            // `previous.upper` is Some: only the last bracket may be unbounded.
            let previous_upper = previous.upper.unwrap_or(f64::INFINITY);
            if bracket.lower != previous_upper {
                return Err(PolicyError::Gap {
                    index,
                    expected: previous_upper,
                    found: bracket.lower,
                });
            }
            let expected = previous.tax_for(previous_upper);
            if (bracket.base - expected).abs() > CONTINUITY_TOLERANCE {
                return Err(PolicyError::Discontinuity {
                    index,
                    expected,
                    found: bracket.base,
                });
            }
        }
        Ok(())
    }

    /// Unrounded progressive tax on `taxable_income`.
    ///
    /// Zero or negative income owes nothing. Income at or above the last
    /// bounded upper limit falls in the top bracket.
    pub fn tax_on(&self, taxable_income: f64) -> f64 {
        if taxable_income <= 0.0 {
            return 0.0;
        }
        self.brackets
            .iter()
            .find(|bracket| bracket.contains_below_upper(taxable_income))
            .or_else(|| self.brackets.last())
            .map_or(0.0, |bracket| bracket.tax_for(taxable_income))
    }

    /// The marginal rate applied to `taxable_income`.
    pub fn marginal_rate(&self, taxable_income: f64) -> f64 {
        if taxable_income <= 0.0 {
            return 0.0;
        }
        self.brackets
            .iter()
            .find(|bracket| bracket.contains_below_upper(taxable_income))
            .or_else(|| self.brackets.last())
            .map_or(0.0, |bracket| bracket.rate)
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::single_2024()
    }
}

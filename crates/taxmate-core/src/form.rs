//! # Form Types — Single Source of Truth
//!
//! Defines the `FormType` enum: every document category the analysis
//! collaborator can assign. This is the ONE definition used across the
//! workspace. Every `match` on `FormType` must be exhaustive, so adding a
//! form forces the aggregation logic to decide what it contributes.
//!
//! The serialized labels are the ones the analysis collaborator emits and
//! the presentation layer displays (`"W-2"`, `"Schedule K-1"`, ...).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Document categories recognized by Taxmate.
///
/// | Label | Contribution to the summary |
/// |-------|-----------------------------|
/// | `W-2` | Wages and federal withholding |
/// | `1099-NEC` | Nonemployee compensation and withholding |
/// | `1099-DIV` | Ordinary dividends and withholding |
/// | `1099-INT` | Interest income and withholding |
/// | `Schedule K-1` | Ordinary business + net rental real estate income |
/// | `1040` | Reserved, contributes nothing |
/// | `Receipt` | Itemized deduction amount |
/// | `Unknown` | Nothing (lowers the compliance score once verified) |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormType {
    /// Wage and tax statement.
    #[serde(rename = "W-2")]
    W2,
    /// Nonemployee compensation.
    #[serde(rename = "1099-NEC")]
    Form1099Nec,
    /// Dividends and distributions.
    #[serde(rename = "1099-DIV")]
    Form1099Div,
    /// Interest income.
    #[serde(rename = "1099-INT")]
    Form1099Int,
    /// Partner's share of income from a partnership.
    #[serde(rename = "Schedule K-1")]
    ScheduleK1,
    /// Individual income tax return. Reserved.
    #[serde(rename = "1040")]
    Form1040,
    /// Deductible expense receipt.
    #[serde(rename = "Receipt")]
    Receipt,
    /// Not yet classified, or not classifiable.
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

/// Total number of form types.
pub const FORM_TYPE_COUNT: usize = 8;

impl FormType {
    /// Returns all form types in canonical order.
    pub fn all() -> &'static [FormType] {
        &[
            Self::W2,
            Self::Form1099Nec,
            Self::Form1099Div,
            Self::Form1099Int,
            Self::ScheduleK1,
            Self::Form1040,
            Self::Receipt,
            Self::Unknown,
        ]
    }

    /// Returns the display label for this form type.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::W2 => "W-2",
            Self::Form1099Nec => "1099-NEC",
            Self::Form1099Div => "1099-DIV",
            Self::Form1099Int => "1099-INT",
            Self::ScheduleK1 => "Schedule K-1",
            Self::Form1040 => "1040",
            Self::Receipt => "Receipt",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = CoreError;

    /// Parse a form type from its display label.
    ///
    /// Accepts the same labels produced by [`FormType::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|form| form.as_str() == s)
            .copied()
            .ok_or_else(|| CoreError::UnknownFormType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_form_types_count() {
        assert_eq!(FormType::all().len(), FORM_TYPE_COUNT);
    }

    #[test]
    fn test_all_form_types_unique() {
        let mut seen = std::collections::HashSet::new();
        for form in FormType::all() {
            assert!(seen.insert(form), "Duplicate form type: {form}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for form in FormType::all() {
            let parsed: FormType = form.as_str().parse().unwrap();
            assert_eq!(*form, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("W2".parse::<FormType>().is_err());
        assert!("w-2".parse::<FormType>().is_err()); // case-sensitive
        assert!("".parse::<FormType>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for form in FormType::all() {
            let json = serde_json::to_string(form).unwrap();
            assert_eq!(json, format!("\"{}\"", form.as_str()));
        }
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(FormType::default(), FormType::Unknown);
    }
}

//! # Return Review
//!
//! The Form 1040 summary shown before submission. Taxes withheld are
//! reconstructed as `estimated tax + estimated refund`; the last line reads
//! "Estimated Refund" or "Amount Owed" depending on the sign.

use serde::Serialize;
use taxmate_calc::{FilingStatus, TaxSummary};

use crate::money::format_dollars;

/// One labelled amount on the review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewLine {
    /// Line label.
    pub label: &'static str,
    /// Amount in dollars.
    pub amount: f64,
}

/// Form 1040 review projection of a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnReview {
    /// Ordered review lines.
    pub lines: Vec<ReviewLine>,
    /// Readiness of the return.
    pub filing_status: FilingStatus,
}

impl ReturnReview {
    /// Build the review lines from a summary.
    pub fn from_summary(summary: &TaxSummary) -> Self {
        let outcome = if summary.is_refund() {
            ReviewLine {
                label: "Estimated Refund",
                amount: summary.estimated_refund as f64,
            }
        } else {
            ReviewLine {
                label: "Amount Owed",
                amount: summary.estimated_refund.unsigned_abs() as f64,
            }
        };

        Self {
            lines: vec![
                ReviewLine {
                    label: "Total Income",
                    amount: summary.total_income,
                },
                ReviewLine {
                    label: "Total Deductions",
                    amount: summary.deductions,
                },
                ReviewLine {
                    label: "Taxable Income",
                    amount: summary.taxable_income(),
                },
                ReviewLine {
                    label: "Total Tax Liability",
                    amount: summary.estimated_tax as f64,
                },
                ReviewLine {
                    label: "Taxes Withheld",
                    amount: summary.withheld_tax() as f64,
                },
                outcome,
            ],
            filing_status: summary.filing_status,
        }
    }

    /// Look up a line by label.
    pub fn line(&self, label: &str) -> Option<&ReviewLine> {
        self.lines.iter().find(|line| line.label == label)
    }
}

impl std::fmt::Display for ReturnReview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Federal 1040 Summary ({})", self.filing_status)?;
        for line in &self.lines {
            writeln!(f, "  {:<22}{:>14}", line.label, format_dollars(line.amount))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxmate_calc::calculate_tax_summary;
    use taxmate_core::{ExtractedData, FormType, TaxDocument};

    fn review_for(wages: f64, withheld: f64) -> ReturnReview {
        ReturnReview::from_summary(&calculate_tax_summary(&[TaxDocument::verified(
            FormType::W2,
            ExtractedData::new()
                .with("Wages, Tips", wages)
                .with("Fed Income Tax", withheld),
        )]))
    }

    #[test]
    fn test_refund_review_lines() {
        let review = review_for(85_000.0, 12_500.0);
        let labels: Vec<_> = review.lines.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "Total Income",
                "Total Deductions",
                "Taxable Income",
                "Total Tax Liability",
                "Taxes Withheld",
                "Estimated Refund",
            ]
        );
        assert_eq!(review.line("Taxable Income").unwrap().amount, 70_400.0);
        assert_eq!(review.line("Taxes Withheld").unwrap().amount, 12_500.0);
        assert_eq!(review.line("Estimated Refund").unwrap().amount, 1_959.0);
    }

    #[test]
    fn test_amount_owed_line() {
        let review = review_for(85_000.0, 10_000.0);
        assert!(review.line("Estimated Refund").is_none());
        assert_eq!(review.line("Amount Owed").unwrap().amount, 541.0);
    }

    #[test]
    fn test_extreme_withholding_does_not_overflow() {
        let review = review_for(85_000.0, 1e19);
        assert_eq!(review.line("Taxes Withheld").unwrap().amount, i64::MAX as f64);
        assert!(review.line("Estimated Refund").is_some());
        assert!(review.to_string().contains("Estimated Refund"));
    }

    #[test]
    fn test_display_formats_dollars() {
        let text = review_for(85_000.0, 12_500.0).to_string();
        assert!(text.starts_with("Federal 1040 Summary (Review Ready)\n"));
        assert!(text.contains("$85,000"));
        assert!(text.contains("$10,541"));
        assert!(text.contains("$1,959"));
    }
}

//! # Tax Summary Properties
//!
//! End-to-end checks of the calculator against the reference scenarios:
//! empty collection, the single-W-2 worked example, bracket continuity,
//! the itemizing threshold, receipts never touching income, error
//! documents blocking readiness, and idempotence.

use proptest::prelude::*;
use taxmate_calc::{calculate_tax_summary, FilingStatus, TaxCalculator, TaxPolicy};
use taxmate_core::{DocumentStatus, ExtractedData, FormType, TaxDocument};

fn w2(wages: f64, withheld: f64) -> TaxDocument {
    TaxDocument::verified(
        FormType::W2,
        ExtractedData::new()
            .with("Wages, Tips", wages)
            .with("Fed Income Tax", withheld),
    )
}

fn receipt(amount: f64) -> TaxDocument {
    TaxDocument::verified(FormType::Receipt, ExtractedData::new().with("Amount", amount))
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_empty_collection_summary() {
    let summary = calculate_tax_summary(&[]);
    assert_eq!(summary.total_income, 0.0);
    assert_eq!(summary.deductions, 14_600.0);
    assert_eq!(summary.estimated_tax, 0);
    assert_eq!(summary.estimated_refund, 0);
    assert_eq!(summary.filing_status, FilingStatus::NotStarted);
    assert_eq!(summary.compliance_score, 0);

    assert_eq!(summary.income_breakdown.len(), 1);
    assert_eq!(summary.income_breakdown[0].name, "No Income");
    assert_eq!(summary.income_breakdown[0].value, 1.0);

    assert_eq!(summary.deduction_breakdown.len(), 1);
    assert_eq!(summary.deduction_breakdown[0].name, "Standard Deduction");
    assert_eq!(summary.deduction_breakdown[0].value, 14_600.0);
}

#[test]
fn test_single_w2_worked_example() {
    let summary = calculate_tax_summary(&[w2(85_000.0, 12_500.0)]);
    assert_eq!(summary.total_income, 85_000.0);
    assert_eq!(summary.taxable_income(), 70_400.0);
    assert_eq!(summary.estimated_tax, 10_541);
    assert_eq!(summary.estimated_refund, 1_959);
    assert_eq!(summary.filing_status, FilingStatus::ReviewReady);
    assert_eq!(summary.income_breakdown.len(), 1);
    assert_eq!(summary.income_breakdown[0].name, "W-2 Wages");
    assert_eq!(summary.income_breakdown[0].value, 85_000.0);
}

#[test]
fn test_bracket_continuity_at_first_boundary() {
    let policy = TaxPolicy::default();
    // Limit of the first bracket and base of the second agree.
    assert!((11_600.0 * 0.10 - 1_160.0_f64).abs() < 1e-9);
    assert_eq!(policy.tax_on(11_600.0), 1_160.0);
    // W-2 wages that land exactly on the boundary after the deduction.
    let summary = calculate_tax_summary(&[w2(14_600.0 + 11_600.0, 0.0)]);
    assert_eq!(summary.estimated_tax, 1_160);
}

#[test]
fn test_bracket_continuity_at_second_boundary() {
    let policy = TaxPolicy::default();
    let from_below = 1_160.0 + (47_150.0 - 11_600.0) * 0.12;
    assert!((from_below - 5_426.0_f64).abs() < 1e-9);
    assert_eq!(policy.tax_on(47_150.0), 5_426.0);
}

#[test]
fn test_itemizing_threshold() {
    let at = calculate_tax_summary(&[w2(50_000.0, 0.0), receipt(14_600.0)]);
    assert_eq!(at.deductions, 14_600.0);
    assert_eq!(at.deduction_breakdown[0].name, "Standard Deduction");

    let above = calculate_tax_summary(&[w2(50_000.0, 0.0), receipt(14_600.5)]);
    assert_eq!(above.deductions, 14_600.5);
    assert_eq!(above.deduction_breakdown[0].name, "Business Expenses");
    assert_eq!(above.deduction_breakdown[0].value, 14_600.5);
}

#[test]
fn test_receipt_changes_deductions_not_income() {
    let base = vec![w2(85_000.0, 12_500.0), receipt(14_500.0)];
    let mut with_receipt = base.clone();
    with_receipt.push(receipt(500.0));

    let before = calculate_tax_summary(&base);
    let after = calculate_tax_summary(&with_receipt);
    assert_eq!(before.total_income, after.total_income);
    assert_eq!(before.deductions, 14_600.0);
    assert_eq!(after.deductions, 15_000.0);
    assert!(after.estimated_tax < before.estimated_tax);
}

#[test]
fn test_error_document_blocks_review_and_costs_twenty() {
    let verified = vec![w2(85_000.0, 12_500.0), receipt(100.0)];
    let mut with_error = verified.clone();
    with_error.push(TaxDocument::uploading("blurry.jpg").with_status(DocumentStatus::Error));

    let clean = calculate_tax_summary(&verified);
    let failing = calculate_tax_summary(&with_error);
    assert_eq!(clean.filing_status, FilingStatus::ReviewReady);
    assert_eq!(failing.filing_status, FilingStatus::InProgress);
    assert_eq!(clean.compliance_score - failing.compliance_score, 20);
    assert_eq!(clean.total_income, failing.total_income);
}

#[test]
fn test_full_mixed_return() {
    let documents = vec![
        w2(60_000.0, 7_000.0),
        TaxDocument::verified(
            FormType::Form1099Nec,
            ExtractedData::new()
                .with("Payer Name", "Tech Corp LLC")
                .with("Nonemployee Comp", 15_400.0)
                .with("Fed Tax Withheld", 0.0),
        ),
        TaxDocument::verified(
            FormType::Form1099Div,
            ExtractedData::new()
                .with("Total Ordinary Dividends", 1_200.0)
                .with("Federal Income Tax Withheld", 50.0),
        ),
        TaxDocument::verified(
            FormType::Form1099Int,
            ExtractedData::new().with("Interest Income", "400"),
        ),
        TaxDocument::verified(
            FormType::ScheduleK1,
            ExtractedData::new()
                .with("Ordinary Business Income", 3_000.0)
                .with("Net Rental Real Estate Income", 1_000.0),
        ),
    ];
    let summary = calculate_tax_summary(&documents);
    assert_eq!(summary.total_income, 81_000.0);
    let labels: Vec<_> = summary
        .income_breakdown
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["W-2 Wages", "1099-NEC", "Dividends", "Interest", "K-1 Income"]
    );
    let breakdown_total: f64 = summary.income_breakdown.iter().map(|e| e.value).sum();
    assert_eq!(breakdown_total, summary.total_income);

    // 81000 - 14600 = 66400 taxable; 5426 + 19250 * 0.22 = 9661.
    assert_eq!(summary.estimated_tax, 9_661);
    assert_eq!(summary.estimated_refund, 7_050 - 9_661);
}

#[test]
fn test_custom_calculator_matches_default_function() {
    let documents = vec![w2(42_000.0, 3_000.0), receipt(900.0)];
    assert_eq!(
        TaxCalculator::new(TaxPolicy::single_2024()).summarize(&documents),
        calculate_tax_summary(&documents)
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn any_status() -> impl Strategy<Value = DocumentStatus> {
    prop_oneof![
        Just(DocumentStatus::Uploading),
        Just(DocumentStatus::Analyzing),
        Just(DocumentStatus::Verified),
        Just(DocumentStatus::Error),
    ]
}

fn any_document() -> impl Strategy<Value = TaxDocument> {
    (
        prop::sample::select(taxmate_core::FormType::all().to_vec()),
        any_status(),
        0.0f64..250_000.0,
        0.0f64..40_000.0,
    )
        .prop_map(|(form, status, amount, withheld)| {
            let data = ExtractedData::new()
                .with("Wages, Tips", amount)
                .with("Fed Income Tax", withheld)
                .with("Nonemployee Comp", amount)
                .with("Fed Tax Withheld", withheld)
                .with("Total Ordinary Dividends", amount)
                .with("Interest Income", amount)
                .with("Federal Income Tax Withheld", withheld)
                .with("Ordinary Business Income", amount)
                .with("Amount", amount);
            TaxDocument::verified(form, data).with_status(status)
        })
}

proptest! {
    /// Same documents in, bit-identical summary out.
    #[test]
    fn summary_is_idempotent(documents in prop::collection::vec(any_document(), 0..12)) {
        let first = calculate_tax_summary(&documents);
        let second = calculate_tax_summary(&documents);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    /// Receipts only ever move deductions.
    #[test]
    fn receipts_never_change_income(
        documents in prop::collection::vec(any_document(), 0..8),
        amount in 0.0f64..50_000.0,
    ) {
        let mut with_receipt = documents.clone();
        with_receipt.push(receipt(amount));
        let before = calculate_tax_summary(&documents);
        let after = calculate_tax_summary(&with_receipt);
        prop_assert_eq!(before.total_income, after.total_income);
        prop_assert!(after.deductions >= before.deductions);
    }

    /// Deductions never fall below the standard deduction and the score
    /// stays in range.
    #[test]
    fn summary_bounds(documents in prop::collection::vec(any_document(), 0..12)) {
        let summary = calculate_tax_summary(&documents);
        prop_assert!(summary.deductions >= 14_600.0);
        prop_assert!(summary.compliance_score <= 100);
        prop_assert!(summary.estimated_tax >= 0);
        prop_assert!(!summary.income_breakdown.is_empty());
        prop_assert_eq!(summary.deduction_breakdown.len(), 1);
        prop_assert_ne!(summary.filing_status, FilingStatus::Filed);
    }

    /// Tax is monotonically non-decreasing in taxable income.
    #[test]
    fn tax_is_monotonic(a in 0.0f64..500_000.0, b in 0.0f64..500_000.0) {
        let policy = TaxPolicy::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(policy.tax_on(low) <= policy.tax_on(high) + 1e-9);
    }
}

//! Subcommand handlers run against files on disk.

use std::path::{Path, PathBuf};

use taxmate_cli::context::{run_context, ContextArgs};
use taxmate_cli::policy::{run_policy, PolicyArgs, PolicyCommand, PolicyFormat};
use taxmate_cli::review::{run_review, ReviewArgs};
use taxmate_cli::summarize::{run_summarize, SummarizeArgs, SummaryFormat};
use taxmate_cli::{load_documents, load_policy};
use taxmate_calc::{FilingStatus, TaxCalculator, TaxPolicy};

const DOCUMENTS: &str = r#"{
  "documents": [
    {
      "id": "w2-acme",
      "name": "W2_Acme.pdf",
      "type": "W-2",
      "status": "verified",
      "confidence": 0.98,
      "uploadedAt": "2024-02-01T10:00:00Z",
      "extractedData": { "Wages, Tips": 85000, "Fed Income Tax": 12500 }
    },
    {
      "id": "div-1",
      "name": "1099-DIV.pdf",
      "type": "1099-DIV",
      "status": "verified",
      "confidence": 0.91,
      "extractedData": { "Total Ordinary Dividends": "1200" }
    },
    {
      "id": "pending",
      "name": "receipt.jpg",
      "status": "analyzing"
    }
  ]
}"#;

const FLAT_POLICY_YAML: &str = "\
name: flat ten
standard_deduction: 10000
brackets:
  - lower: 0
    rate: 0.1
    base: 0
";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// ── Loading ──────────────────────────────────────────────────────────

#[test]
fn test_load_wrapped_documents_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "docs.json", DOCUMENTS);
    let docs = load_documents(&path).unwrap();
    assert_eq!(docs.len(), 3);

    let summary = TaxCalculator::default().summarize(&docs);
    assert_eq!(summary.filing_status, FilingStatus::InProgress);
    assert_eq!(summary.total_income, 86_200.0);
}

#[test]
fn test_load_yaml_policy_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "flat.yaml", FLAT_POLICY_YAML);
    let policy = load_policy(Some(path.as_path())).unwrap();
    assert_eq!(policy.name, "flat ten");
    assert_eq!(policy.tax_on(50_000.0), 5_000.0);
}

#[test]
fn test_load_invalid_policy_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "gap.yaml",
        "name: gap\nstandard_deduction: 0\nbrackets:\n  - lower: 100\n    rate: 0.1\n    base: 0\n",
    );
    let err = load_policy(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().starts_with("invalid policy file"));
}

// ── Handlers ─────────────────────────────────────────────────────────

#[test]
fn test_summarize_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let documents = write(dir.path(), "docs.json", DOCUMENTS);
    for format in [SummaryFormat::Text, SummaryFormat::Json] {
        let args = SummarizeArgs {
            documents: documents.clone(),
            format,
        };
        assert_eq!(run_summarize(&args, &TaxPolicy::default()).unwrap(), 0);
    }
}

#[test]
fn test_summarize_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let args = SummarizeArgs {
        documents: dir.path().join("absent.json"),
        format: SummaryFormat::Text,
    };
    assert!(run_summarize(&args, &TaxPolicy::default()).is_err());
}

#[test]
fn test_summarize_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let documents = write(
        dir.path(),
        "dupes.json",
        r#"[{"id": "a", "status": "uploading"}, {"id": "a", "status": "uploading"}]"#,
    );
    let args = SummarizeArgs {
        documents,
        format: SummaryFormat::Json,
    };
    let err = run_summarize(&args, &TaxPolicy::default()).unwrap_err();
    assert!(format!("{err:#}").contains("already exists"));
}

#[test]
fn test_review_and_context_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let documents = write(dir.path(), "docs.json", DOCUMENTS);
    let policy = TaxPolicy::default();

    let review = ReviewArgs {
        documents: documents.clone(),
    };
    assert_eq!(run_review(&review, &policy).unwrap(), 0);

    let context = ContextArgs {
        documents,
        instruction: true,
    };
    assert_eq!(run_context(&context, &policy).unwrap(), 0);
}

#[test]
fn test_policy_show_and_check() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "flat.yaml", FLAT_POLICY_YAML);

    let show = PolicyArgs {
        command: PolicyCommand::Show {
            format: PolicyFormat::Json,
        },
    };
    assert_eq!(run_policy(&show, &TaxPolicy::default()).unwrap(), 0);

    let check = PolicyArgs {
        command: PolicyCommand::Check { file },
    };
    assert_eq!(run_policy(&check, &TaxPolicy::default()).unwrap(), 0);
}

#[test]
fn test_policy_check_rejects_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "broken.json", "{\"name\": \"x\"}");
    let check = PolicyArgs {
        command: PolicyCommand::Check { file },
    };
    assert!(run_policy(&check, &TaxPolicy::default()).is_err());
}

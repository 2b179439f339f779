// Reconciliation: diff extracted document data against the application
//
// Read-only and side-effect-free. Each rule is evaluated independently; a
// missing field on either side simply skips that rule. Nothing here ever
// mutates the application — remediation is caller-driven.
use crate::config::{INCOME_VARIANCE_TOLERANCE, WIZARD_STEP_ASSETS, WIZARD_STEP_EMPLOYMENT};
use crate::types::{ApplicationSnapshot, Discrepancy, ExtractedData, Severity};

/// Compare extracted document fields against the borrower's self-reported
/// application data and collect discrepancies.
pub fn compare(application: &ApplicationSnapshot, document: &ExtractedData) -> Vec<Discrepancy> {
    let mut discrepancies = Vec::new();
    income_rule(application, document, &mut discrepancies);
    employer_rule(application, document, &mut discrepancies);
    assets_rule(application, document, &mut discrepancies);
    tracing::debug!(count = discrepancies.len(), "reconciliation finished");
    discrepancies
}

// Relative variance of declared base income against documented income.
// The documented value is the denominator; a documented value of zero skips
// the rule entirely (the ratio is undefined).
fn income_rule(
    application: &ApplicationSnapshot,
    document: &ExtractedData,
    out: &mut Vec<Discrepancy>,
) {
    let documented = document
        .employment
        .as_ref()
        .and_then(|e| e.monthly_income)
        .or(document.monthly_income);
    let (Some(documented), Some(employment)) = (documented, application.employment.first()) else {
        return;
    };
    if documented == 0.0 {
        return;
    }

    let declared = employment.monthly_income.base;
    let variance = (declared - documented).abs() / documented;
    if variance > INCOME_VARIANCE_TOLERANCE {
        out.push(Discrepancy {
            id: "income-variance".to_string(),
            field_path: "employment[0].monthlyIncome.base".to_string(),
            label: "Base monthly income".to_string(),
            application_value: fmt_usd(declared),
            document_value: fmt_usd(documented),
            severity: Severity::Critical,
            message: format!(
                "Documented income differs from the application by {:.0}%",
                variance * 100.0
            ),
            wizard_step: Some(WIZARD_STEP_EMPLOYMENT),
        });
    }
}

// Fuzzy employer comparison: normalize both names and accept mutual
// substring containment ("Acme Corp" vs "acme corp.").
fn employer_rule(
    application: &ApplicationSnapshot,
    document: &ExtractedData,
    out: &mut Vec<Discrepancy>,
) {
    let documented = document
        .employment
        .as_ref()
        .and_then(|e| e.employer_name.as_deref());
    let (Some(documented), Some(employment)) = (documented, application.employment.first()) else {
        return;
    };

    let doc_normalized = normalize_name(documented);
    let app_normalized = normalize_name(&employment.employer_name);
    if doc_normalized.is_empty() || app_normalized.is_empty() {
        return;
    }

    let matches =
        doc_normalized.contains(&app_normalized) || app_normalized.contains(&doc_normalized);
    if !matches {
        out.push(Discrepancy {
            id: "employer-mismatch".to_string(),
            field_path: "employment[0].employerName".to_string(),
            label: "Employer name".to_string(),
            application_value: employment.employer_name.clone(),
            document_value: documented.to_string(),
            severity: Severity::Warning,
            message: "Employer on the document does not match the application".to_string(),
            wizard_step: Some(WIZARD_STEP_EMPLOYMENT),
        });
    }
}

// Fires only when the application declares exactly zero assets while a
// document proves a positive balance. Deliberately asymmetric: a document
// showing less than declared is not flagged.
fn assets_rule(
    application: &ApplicationSnapshot,
    document: &ExtractedData,
    out: &mut Vec<Discrepancy>,
) {
    if document.assets.is_empty() {
        return;
    }
    let documented_total: f64 = document.assets.iter().filter_map(|a| a.balance).sum();
    if documented_total > 0.0 && application.total_assets() == 0.0 {
        out.push(Discrepancy {
            id: "assets-undisclosed".to_string(),
            field_path: "assets.totalValue".to_string(),
            label: "Total assets".to_string(),
            application_value: fmt_usd(0.0),
            document_value: fmt_usd(documented_total),
            severity: Severity::Warning,
            message: "The application reports no assets, but a document shows a balance"
                .to_string(),
            wizard_step: Some(WIZARD_STEP_ASSETS),
        });
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

pub(crate) fn fmt_usd(value: f64) -> String {
    format!("${value:.2}")
}

// Filename-based fallback hints
//
// Consulted only when content-based confidence is below the fallback
// threshold; a confident content result always wins over the filename.
use crate::types::DocumentType;

// Ordered: first matching needle wins.
static HINTS: &[(&str, DocumentType)] = &[
    ("w-2", DocumentType::W2),
    ("w2", DocumentType::W2),
    ("paystub", DocumentType::PayStub),
    ("pay-stub", DocumentType::PayStub),
    ("pay_stub", DocumentType::PayStub),
    ("pay stub", DocumentType::PayStub),
    ("earnings", DocumentType::PayStub),
    ("1003", DocumentType::Form1003),
    ("loan-application", DocumentType::Form1003),
    ("loan_application", DocumentType::Form1003),
    ("1099", DocumentType::Form1099),
    ("1040", DocumentType::TaxReturn),
    ("tax-return", DocumentType::TaxReturn),
    ("tax_return", DocumentType::TaxReturn),
    ("bank", DocumentType::BankStatement),
    ("drivers-license", DocumentType::Id),
    ("drivers_license", DocumentType::Id),
    ("license", DocumentType::Id),
    ("passport", DocumentType::Passport),
    ("appraisal", DocumentType::Appraisal),
    ("insurance", DocumentType::HomeownersInsurance),
    ("gift", DocumentType::GiftLetter),
    ("lease", DocumentType::LeaseAgreement),
    ("credit-report", DocumentType::CreditReport),
    ("credit_report", DocumentType::CreditReport),
];

pub fn hint(file_name: &str) -> Option<DocumentType> {
    let lowered = file_name.to_lowercase();
    HINTS
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, doc_type)| *doc_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_common_names() {
        assert_eq!(hint("2023-W2.pdf"), Some(DocumentType::W2));
        assert_eq!(hint("march_paystub.jpg"), Some(DocumentType::PayStub));
        assert_eq!(hint("BANK statement jan.pdf"), Some(DocumentType::BankStatement));
    }

    #[test]
    fn no_hint_for_neutral_names() {
        assert_eq!(hint("scan_0001.pdf"), None);
        assert_eq!(hint("upload.jpeg"), None);
    }

    #[test]
    fn first_needle_wins() {
        // "w2" appears before "1099" in the table
        assert_eq!(hint("w2-not-1099.pdf"), Some(DocumentType::W2));
    }
}

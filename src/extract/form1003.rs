// Form 1003 (Uniform Residential Loan Application) parser
//
// Structurally the same best-effort regex approach as the per-type
// extractors, but covering the whole application form. OCR noise is
// expected: every match is optional, nothing is required.
use crate::types::{
    AssetAccount, BorrowerIdentity, EmploymentInfo, LoanPurpose, PartialLoanApplication,
};

use super::patterns::{self, first_capture};
use super::{parse_amount, parse_date};

/// Parse a scanned 1003 application into a sparse application record.
pub fn parse_form_1003(text: &str) -> PartialLoanApplication {
    let lowered = text.to_lowercase();
    let mut app = PartialLoanApplication::default();

    let (first_name, last_name) = first_capture(&patterns::F1003_NAME, &lowered)
        .map(split_name)
        .unwrap_or((None, None));
    let ssn = first_capture(&patterns::SSN, &lowered);
    let date_of_birth = first_capture(&patterns::F1003_DOB, &lowered).and_then(|d| parse_date(&d));
    if first_name.is_some() || last_name.is_some() || ssn.is_some() || date_of_birth.is_some() {
        app.borrower = Some(BorrowerIdentity {
            first_name,
            last_name,
            ssn,
            date_of_birth,
        });
    }

    let employer_name = first_capture(&patterns::F1003_EMPLOYER, &lowered);
    let monthly_income =
        first_capture(&patterns::F1003_BASE_INCOME, &lowered).and_then(|raw| parse_amount(&raw));
    if employer_name.is_some() || monthly_income.is_some() {
        app.employment = Some(EmploymentInfo {
            employer_name,
            monthly_income,
            ..Default::default()
        });
    }

    // Loose scan for deposit accounts anywhere in the assets section
    for captures in patterns::F1003_DEPOSIT_ACCOUNT.captures_iter(&lowered) {
        let account_type = captures.get(1).map(|m| m.as_str().to_string());
        let balance = captures.get(2).and_then(|m| parse_amount(m.as_str()));
        if balance.is_some() {
            app.assets.push(AssetAccount {
                institution: None,
                account_type,
                balance,
                statement_date: None,
            });
        }
    }

    app.loan_amount =
        first_capture(&patterns::F1003_LOAN_AMOUNT, &lowered).and_then(|raw| parse_amount(&raw));
    app.purchase_price = first_capture(&patterns::F1003_PURCHASE_PRICE, &lowered)
        .and_then(|raw| parse_amount(&raw));
    app.property_address = first_capture(&patterns::F1003_PROPERTY_ADDRESS, &lowered);

    app.loan_purpose = if lowered.contains("refinance") {
        Some(LoanPurpose::Refinance)
    } else if lowered.contains("purchase") {
        Some(LoanPurpose::Purchase)
    } else {
        None
    };

    app
}

// First token is the first name, last token the last name; middle names and
// OCR debris in between are ignored.
fn split_name(raw: String) -> (Option<String>, Option<String>) {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    match tokens.as_slice() {
        [] => (None, None),
        [only] => (Some(only.to_string()), None),
        [first, .., last] => (Some(first.to_string()), Some(last.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
uniform residential loan application
borrower's name: jane q doe
social security number 987-65-4321
date of birth: 04/02/1990
employer or business name: initech llc
base income $ 7,200.00
assets and liabilities
checking account wells fargo $ 4,500.00
savings account $ 10,000
loan amount $ 425,000
purchase price $ 500,000
subject property address: 12 elm street, springfield, il
loan purpose: purchase";

    #[test]
    fn parses_borrower_block() {
        let app = parse_form_1003(SAMPLE);
        let borrower = app.borrower.unwrap();
        assert_eq!(borrower.first_name.as_deref(), Some("jane"));
        assert_eq!(borrower.last_name.as_deref(), Some("doe"));
        assert_eq!(borrower.ssn.as_deref(), Some("987-65-4321"));
        assert_eq!(borrower.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 2));
    }

    #[test]
    fn parses_employment_and_amounts() {
        let app = parse_form_1003(SAMPLE);
        let employment = app.employment.unwrap();
        assert_eq!(employment.employer_name.as_deref(), Some("initech llc"));
        assert_eq!(employment.monthly_income, Some(7200.0));
        assert_eq!(app.loan_amount, Some(425000.0));
        assert_eq!(app.purchase_price, Some(500000.0));
        assert_eq!(
            app.property_address.as_deref(),
            Some("12 elm street, springfield, il")
        );
        assert_eq!(app.loan_purpose, Some(LoanPurpose::Purchase));
    }

    #[test]
    fn scans_deposit_accounts_loosely() {
        let app = parse_form_1003(SAMPLE);
        assert_eq!(app.assets.len(), 2);
        assert_eq!(app.assets[0].account_type.as_deref(), Some("checking"));
        assert_eq!(app.assets[0].balance, Some(4500.0));
        assert_eq!(app.assets[1].account_type.as_deref(), Some("savings"));
        assert_eq!(app.assets[1].balance, Some(10000.0));
    }

    #[test]
    fn refinance_keyword_wins_over_purchase() {
        let text = "uniform residential loan application\nloan purpose: refinance of purchase money loan";
        let app = parse_form_1003(text);
        assert_eq!(app.loan_purpose, Some(LoanPurpose::Refinance));
    }

    #[test]
    fn empty_text_yields_empty_application() {
        let app = parse_form_1003("");
        assert_eq!(app, PartialLoanApplication::default());
    }
}

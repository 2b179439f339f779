// Field extraction over the public API
use chrono::NaiveDate;
use docsift::extract::{extract, form1003::parse_form_1003};
use docsift::types::{DocumentType, ExtractedData, PayFrequency};
use rstest::rstest;

fn w2_text(wages: &str) -> String {
    format!(
        "form w-2 wage and tax statement tax year 2023\n\
         c employer's name, address, and zip code\n\
         acme widget company\n\
         d control number 00123\n\
         wages, tips, other compensation: {wages}"
    )
}

#[rstest]
#[case("$60,000.00", 5000.0)]
#[case("$54,000", 4500.0)]
#[case("$50,000.00", 4167.0)] // 50000 / 12 rounds to the nearest dollar
fn w2_income_round_trip(#[case] wages: &str, #[case] expected_monthly: f64) {
    let data = extract(&w2_text(wages), DocumentType::W2);
    let employment = data.employment.expect("employment block");
    assert_eq!(employment.monthly_income, Some(expected_monthly));
}

#[test]
fn w2_extracts_employer_and_tax_year() {
    let data = extract(&w2_text("$60,000.00"), DocumentType::W2);
    assert_eq!(
        data.employment.unwrap().employer_name.as_deref(),
        Some("acme widget company")
    );
    assert_eq!(data.document_date, NaiveDate::from_ymd_opt(2023, 12, 31));
}

#[rstest]
#[case("weekly", 1000.0, 4333.0)] // 1000 * 52 / 12
#[case("biweekly", 2000.0, 4333.0)] // 2000 * 26 / 12
#[case("semi-monthly", 2500.0, 5000.0)] // 2500 * 24 / 12
#[case("monthly", 6000.0, 6000.0)] // 6000 * 12 / 12
fn pay_stub_annualizes_by_stated_frequency(
    #[case] frequency: &str,
    #[case] gross: f64,
    #[case] expected_monthly: f64,
) {
    let text = format!(
        "earnings statement\npay frequency: {frequency}\ngross pay: ${gross:.2}"
    );
    let data = extract(&text, DocumentType::PayStub);
    assert_eq!(
        data.employment.unwrap().monthly_income,
        Some(expected_monthly)
    );
}

#[test]
fn pay_stub_without_stated_frequency_assumes_semi_monthly() {
    let text = "earnings statement\ngross pay: $2,500.00";
    let data = extract(text, DocumentType::PayStub);
    let employment = data.employment.unwrap();
    assert_eq!(employment.monthly_income, Some(5000.0));
    assert_eq!(employment.pay_frequency, None);
}

#[test]
fn pay_stub_reports_stated_frequency() {
    let text = "earnings statement\npay frequency: biweekly\ngross pay: $2,000.00";
    let data = extract(text, DocumentType::PayStub);
    assert_eq!(
        data.employment.unwrap().pay_frequency,
        Some(PayFrequency::Biweekly)
    );
}

#[test]
fn extraction_is_additive_not_failing() {
    // A W-2 with no recognizable boxes produces an empty record, not an error
    let data = extract("completely unrelated text about gardening", DocumentType::W2);
    assert!(data.is_empty());

    // Partial matches populate only what matched
    let data = extract("wages, tips, other compensation: $48,000", DocumentType::W2);
    let employment = data.employment.unwrap();
    assert_eq!(employment.monthly_income, Some(4000.0));
    assert_eq!(employment.employer_name, None);
    assert!(data.borrower.is_none());
}

#[test]
fn absent_fields_stay_absent_rather_than_zero() {
    let data = extract("no financial vocabulary here", DocumentType::BankStatement);
    assert_eq!(data, ExtractedData::default());
    assert!(data.assets.is_empty());
}

#[test]
fn types_without_routines_return_empty_records() {
    for doc_type in [
        DocumentType::Appraisal,
        DocumentType::GiftLetter,
        DocumentType::CreditReport,
        DocumentType::Other,
    ] {
        let data = extract("ending balance $5,000.00 gross pay $2,000", doc_type);
        assert!(data.is_empty(), "{doc_type} should not extract");
    }
}

#[test]
fn bank_statement_extraction() {
    let text = "chase bank account summary\n\
                statement period 02/01/2024 - 02/29/2024\n\
                beginning balance: $9,100.00\n\
                ending balance: $10,250.50";
    let data = extract(text, DocumentType::BankStatement);
    let account = &data.assets[0];
    assert_eq!(account.institution.as_deref(), Some("Chase"));
    assert_eq!(account.balance, Some(10250.50));
    assert_eq!(account.statement_date, NaiveDate::from_ymd_opt(2024, 2, 1));
}

#[test]
fn tax_return_income_is_tagged_self_employed() {
    let text = "form 1040 adjusted gross income $120,000 taxable income $98,000";
    let data = extract(text, DocumentType::TaxReturn);
    let employment = data.employment.unwrap();
    assert_eq!(employment.monthly_income, Some(10000.0));
    assert_eq!(employment.self_employed, Some(true));
}

#[test]
fn form_1003_full_parse() {
    let text = "uniform residential loan application\n\
                borrower's name: john a smith\n\
                social security number 123-45-6789\n\
                employer or business name: hooli inc\n\
                base income $ 8,500.00\n\
                checking account $ 12,000.00\n\
                savings $ 3,000\n\
                loan amount $ 380,000\n\
                purchase price $ 475,000\n\
                property address: 9 main street, austin, tx\n\
                loan purpose: purchase";
    let app = parse_form_1003(text);

    let borrower = app.borrower.unwrap();
    assert_eq!(borrower.first_name.as_deref(), Some("john"));
    assert_eq!(borrower.last_name.as_deref(), Some("smith"));
    assert_eq!(app.employment.unwrap().monthly_income, Some(8500.0));
    assert_eq!(app.assets.len(), 2);
    assert_eq!(app.loan_amount, Some(380000.0));
    assert_eq!(app.purchase_price, Some(475000.0));
    assert!(app.property_address.is_some());
}

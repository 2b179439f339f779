// Type-specific field extraction from classified text
//
// Extraction is purely additive: a pattern that does not match leaves its
// field absent. It never fails — the worst case is an empty record.
pub mod form1003;
pub mod patterns;

use chrono::NaiveDate;

use crate::types::{
    AssetAccount, BorrowerIdentity, DocumentType, EmploymentInfo, ExtractedData, PayFrequency,
};
use self::patterns::first_capture;

/// Extract structured fields for one document type. Coverage is intentionally
/// partial: only the highest-value types have extraction routines, everything
/// else returns an empty record.
pub fn extract(text: &str, doc_type: DocumentType) -> ExtractedData {
    let lowered = text.to_lowercase();
    match doc_type {
        DocumentType::W2 => extract_w2(&lowered),
        DocumentType::PayStub => extract_pay_stub(&lowered),
        DocumentType::Id => extract_id(&lowered),
        DocumentType::BankStatement => extract_bank_statement(&lowered),
        DocumentType::TaxReturn => extract_tax_return(&lowered),
        _ => ExtractedData::default(),
    }
}

fn extract_w2(lowered: &str) -> ExtractedData {
    let mut data = ExtractedData::default();

    let employer_name = first_capture(&patterns::W2_EMPLOYER, lowered);
    let monthly_income = first_capture(&patterns::W2_WAGES, lowered)
        .and_then(|raw| parse_amount(&raw))
        .map(monthly_from_annual);
    if employer_name.is_some() || monthly_income.is_some() {
        data.employment = Some(EmploymentInfo {
            employer_name,
            monthly_income,
            ..Default::default()
        });
    }

    if let Some(ssn) = first_capture(&patterns::SSN, lowered) {
        data.borrower = Some(BorrowerIdentity {
            ssn: Some(ssn),
            ..Default::default()
        });
    }

    // Tax year stands in for the document date
    data.document_date = first_capture(&patterns::W2_TAX_YEAR, lowered)
        .and_then(|y| y.parse::<i32>().ok())
        .and_then(|y| NaiveDate::from_ymd_opt(y, 12, 31));

    data
}

fn extract_pay_stub(lowered: &str) -> ExtractedData {
    let mut data = ExtractedData::default();

    let pay_frequency = infer_pay_frequency(lowered);
    let monthly_income = first_capture(&patterns::PAYSTUB_GROSS, lowered)
        .and_then(|raw| parse_amount(&raw))
        .map(|gross| {
            let periods = pay_frequency
                .unwrap_or(PayFrequency::SemiMonthly)
                .periods_per_year();
            monthly_from_annual(gross * periods)
        });
    let employer_name = first_capture(&patterns::PAYSTUB_EMPLOYER, lowered);

    if employer_name.is_some() || monthly_income.is_some() || pay_frequency.is_some() {
        data.employment = Some(EmploymentInfo {
            employer_name,
            monthly_income,
            pay_frequency,
            ..Default::default()
        });
    }

    data.document_date =
        first_capture(&patterns::PAYSTUB_DATE, lowered).and_then(|raw| parse_date(&raw));

    data
}

fn extract_id(lowered: &str) -> ExtractedData {
    let mut data = ExtractedData::default();

    let last_name = first_capture(&patterns::ID_LAST_NAME, lowered);
    let first_name = first_capture(&patterns::ID_FIRST_NAME, lowered);
    let date_of_birth =
        first_capture(&patterns::ID_DOB, lowered).and_then(|raw| parse_date(&raw));

    if last_name.is_some() || first_name.is_some() || date_of_birth.is_some() {
        data.borrower = Some(BorrowerIdentity {
            first_name,
            last_name,
            date_of_birth,
            ..Default::default()
        });
    }

    data
}

fn extract_bank_statement(lowered: &str) -> ExtractedData {
    let mut data = ExtractedData::default();

    let balance = first_capture(&patterns::BANK_BALANCE, lowered).and_then(|raw| parse_amount(&raw));
    let institution = patterns::BANK_NAMES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, display)| display.to_string());
    let statement_date =
        first_capture(&patterns::BANK_DATE, lowered).and_then(|raw| parse_date(&raw));

    if balance.is_some() || institution.is_some() || statement_date.is_some() {
        data.assets.push(AssetAccount {
            institution,
            account_type: None,
            balance,
            statement_date,
        });
    }
    data.document_date = statement_date;

    data
}

fn extract_tax_return(lowered: &str) -> ExtractedData {
    let mut data = ExtractedData::default();

    // AGI / 12, tagged self-employed by convention
    if let Some(agi) = first_capture(&patterns::TAX_AGI, lowered).and_then(|raw| parse_amount(&raw))
    {
        data.employment = Some(EmploymentInfo {
            monthly_income: Some(monthly_from_annual(agi)),
            self_employed: Some(true),
            ..Default::default()
        });
    }

    data.document_date = first_capture(&patterns::TAX_YEAR, lowered)
        .and_then(|y| y.parse::<i32>().ok())
        .and_then(|y| NaiveDate::from_ymd_opt(y, 12, 31));

    data
}

/// Pay frequency from keyword presence. Probe order matters: "biweekly"
/// contains "weekly" and "semi-monthly" contains "monthly".
pub(crate) fn infer_pay_frequency(lowered: &str) -> Option<PayFrequency> {
    if lowered.contains("biweekly")
        || lowered.contains("bi-weekly")
        || lowered.contains("every two weeks")
    {
        Some(PayFrequency::Biweekly)
    } else if lowered.contains("weekly") || lowered.contains("per week") {
        Some(PayFrequency::Weekly)
    } else if lowered.contains("semi-monthly")
        || lowered.contains("semimonthly")
        || lowered.contains("twice a month")
    {
        Some(PayFrequency::SemiMonthly)
    } else if lowered.contains("monthly") || lowered.contains("per month") {
        Some(PayFrequency::Monthly)
    } else {
        None
    }
}

/// Parse a dollar figure, tolerating `$`, commas and stray whitespace.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Parse a date in any of the formats OCR output tends to carry.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    use chrono::Datelike;

    // %Y also accepts two-digit input ("24" -> year 24), so implausible
    // years fall through to the %y formats instead of being kept.
    const FORMATS: &[&str] = &["%m/%d/%Y", "%m-%d-%Y", "%Y-%m-%d", "%m/%d/%y", "%m-%d-%y"];
    let trimmed = raw.trim();
    FORMATS.iter().find_map(|f| {
        NaiveDate::parse_from_str(trimmed, f)
            .ok()
            .filter(|d| d.year() >= 1900)
    })
}

/// Annual figure to whole-dollar monthly income.
pub(crate) fn monthly_from_annual(annual: f64) -> f64 {
    (annual / 12.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_strips_noise() {
        assert_eq!(parse_amount("$60,000.00"), Some(60000.0));
        assert_eq!(parse_amount("1,234"), Some(1234.0));
        assert_eq!(parse_amount("no digits"), None);
    }

    #[test]
    fn parse_date_accepts_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(parse_date("01/31/2024"), Some(expected));
        assert_eq!(parse_date("01-31-2024"), Some(expected));
        assert_eq!(parse_date("2024-01-31"), Some(expected));
        assert_eq!(parse_date("01/31/24"), Some(expected));
        assert_eq!(parse_date("31/31/2024"), None);
    }

    #[test]
    fn pay_frequency_probe_order() {
        assert_eq!(infer_pay_frequency("paid biweekly"), Some(PayFrequency::Biweekly));
        assert_eq!(infer_pay_frequency("paid weekly"), Some(PayFrequency::Weekly));
        assert_eq!(
            infer_pay_frequency("semi-monthly schedule"),
            Some(PayFrequency::SemiMonthly)
        );
        assert_eq!(infer_pay_frequency("monthly salary"), Some(PayFrequency::Monthly));
        assert_eq!(infer_pay_frequency("no schedule stated"), None);
    }

    #[test]
    fn w2_extracts_income_employer_and_year() {
        let text = "form w-2 wage and tax statement tax year 2023\n\
                    c employer's name, address, and zip code\n\
                    acme widget company\n\
                    500 industrial way\n\
                    d control number 00123\n\
                    employee ssn 123-45-6789\n\
                    wages, tips, other compensation: $60,000.00";
        let data = extract(text, DocumentType::W2);
        let employment = data.employment.expect("employment populated");
        assert_eq!(employment.monthly_income, Some(5000.0));
        assert_eq!(employment.employer_name.as_deref(), Some("acme widget company"));
        assert_eq!(data.borrower.unwrap().ssn.as_deref(), Some("123-45-6789"));
        assert_eq!(data.document_date, NaiveDate::from_ymd_opt(2023, 12, 31));
    }

    #[test]
    fn pay_stub_annualizes_by_frequency() {
        let text = "earnings statement\ncompany: globex corporation\n\
                    pay frequency: biweekly\npay date: 03/15/2024\n\
                    gross pay: $2,000.00\nnet pay: $1,540.22";
        let data = extract(text, DocumentType::PayStub);
        let employment = data.employment.unwrap();
        // 2000 * 26 / 12, rounded
        assert_eq!(employment.monthly_income, Some(4333.0));
        assert_eq!(employment.pay_frequency, Some(PayFrequency::Biweekly));
        assert_eq!(employment.employer_name.as_deref(), Some("globex corporation"));
        assert_eq!(data.document_date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn pay_stub_defaults_to_semi_monthly() {
        let text = "earnings statement gross pay: $3,000.00";
        let data = extract(text, DocumentType::PayStub);
        // 3000 * 24 / 12 = 6000, frequency itself stays absent
        let employment = data.employment.unwrap();
        assert_eq!(employment.monthly_income, Some(6000.0));
        assert_eq!(employment.pay_frequency, None);
    }

    #[test]
    fn id_extracts_license_layout() {
        let text = "driver license ln doe fn john dob 01/15/1985 expires 01/15/2029";
        let data = extract(text, DocumentType::Id);
        let borrower = data.borrower.unwrap();
        assert_eq!(borrower.last_name.as_deref(), Some("doe"));
        assert_eq!(borrower.first_name.as_deref(), Some("john"));
        assert_eq!(borrower.date_of_birth, NaiveDate::from_ymd_opt(1985, 1, 15));
    }

    #[test]
    fn bank_statement_extracts_balance_and_institution() {
        let text = "wells fargo account summary\nstatement period 01/01/2024 - 01/31/2024\n\
                    ending balance: $12,345.67";
        let data = extract(text, DocumentType::BankStatement);
        assert_eq!(data.assets.len(), 1);
        let account = &data.assets[0];
        assert_eq!(account.balance, Some(12345.67));
        assert_eq!(account.institution.as_deref(), Some("Wells Fargo"));
        assert_eq!(account.statement_date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn tax_return_divides_agi_and_tags_self_employed() {
        let text = "form 1040 tax year 2023 adjusted gross income $96,000";
        let data = extract(text, DocumentType::TaxReturn);
        let employment = data.employment.unwrap();
        assert_eq!(employment.monthly_income, Some(8000.0));
        assert_eq!(employment.self_employed, Some(true));
    }

    #[test]
    fn uncovered_types_return_empty_record() {
        let text = "grant deed recorded for the county assessor parcel number 001";
        let data = extract(text, DocumentType::Deed);
        assert!(data.is_empty());
        assert_eq!(data, ExtractedData::default());
    }
}

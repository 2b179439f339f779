// Core types for the docsift pipeline
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed catalog of mortgage document categories. External callers switch on
/// the serialized tags, so every variant carries an explicit rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    // Income & employment
    #[serde(rename = "W2")]
    W2,
    #[serde(rename = "PAY_STUB")]
    PayStub,
    #[serde(rename = "TAX_RETURN")]
    TaxReturn,
    #[serde(rename = "BUSINESS_TAX_RETURN")]
    BusinessTaxReturn,
    #[serde(rename = "FORM_1099")]
    Form1099,
    #[serde(rename = "FORM_1099_INT")]
    Form1099Int,
    #[serde(rename = "FORM_1099_DIV")]
    Form1099Div,
    #[serde(rename = "FORM_1099_R")]
    Form1099R,
    #[serde(rename = "SCHEDULE_K1")]
    ScheduleK1,
    #[serde(rename = "PROFIT_LOSS_STATEMENT")]
    ProfitLossStatement,
    #[serde(rename = "SOCIAL_SECURITY_AWARD")]
    SocialSecurityAward,
    #[serde(rename = "PENSION_STATEMENT")]
    PensionStatement,
    #[serde(rename = "VA_BENEFITS_LETTER")]
    VaBenefitsLetter,
    #[serde(rename = "DISABILITY_AWARD")]
    DisabilityAward,
    #[serde(rename = "EMPLOYMENT_OFFER")]
    EmploymentOffer,
    #[serde(rename = "EMPLOYMENT_VERIFICATION")]
    EmploymentVerification,
    #[serde(rename = "BUSINESS_LICENSE")]
    BusinessLicense,
    #[serde(rename = "CPA_LETTER")]
    CpaLetter,

    // Assets
    #[serde(rename = "BANK_STATEMENT")]
    BankStatement,
    #[serde(rename = "INVESTMENT_STATEMENT")]
    InvestmentStatement,
    #[serde(rename = "RETIREMENT_STATEMENT")]
    RetirementStatement,
    #[serde(rename = "GIFT_LETTER")]
    GiftLetter,
    #[serde(rename = "EARNEST_MONEY_RECEIPT")]
    EarnestMoneyReceipt,
    #[serde(rename = "VERIFICATION_OF_DEPOSIT")]
    VerificationOfDeposit,

    // Identity
    #[serde(rename = "ID")]
    Id,
    #[serde(rename = "PASSPORT")]
    Passport,
    #[serde(rename = "SOCIAL_SECURITY_CARD")]
    SocialSecurityCard,
    #[serde(rename = "GREEN_CARD")]
    GreenCard,
    #[serde(rename = "VISA")]
    Visa,
    #[serde(rename = "BIRTH_CERTIFICATE")]
    BirthCertificate,

    // Property
    #[serde(rename = "PURCHASE_AGREEMENT")]
    PurchaseAgreement,
    #[serde(rename = "APPRAISAL")]
    Appraisal,
    #[serde(rename = "HOMEOWNERS_INSURANCE")]
    HomeownersInsurance,
    #[serde(rename = "FLOOD_INSURANCE")]
    FloodInsurance,
    #[serde(rename = "FLOOD_CERTIFICATE")]
    FloodCertificate,
    #[serde(rename = "TITLE_REPORT")]
    TitleReport,
    #[serde(rename = "DEED")]
    Deed,
    #[serde(rename = "SURVEY")]
    Survey,
    #[serde(rename = "HOA_STATEMENT")]
    HoaStatement,
    #[serde(rename = "PROPERTY_TAX_BILL")]
    PropertyTaxBill,
    #[serde(rename = "LEASE_AGREEMENT")]
    LeaseAgreement,
    #[serde(rename = "RENT_ROLL")]
    RentRoll,
    #[serde(rename = "HOME_INSPECTION")]
    HomeInspection,
    #[serde(rename = "PEST_INSPECTION")]
    PestInspection,
    #[serde(rename = "CONDO_QUESTIONNAIRE")]
    CondoQuestionnaire,

    // Credit & liabilities
    #[serde(rename = "CREDIT_REPORT")]
    CreditReport,
    #[serde(rename = "CREDIT_EXPLANATION_LETTER")]
    CreditExplanationLetter,
    #[serde(rename = "BANKRUPTCY_DISCHARGE")]
    BankruptcyDischarge,
    #[serde(rename = "DIVORCE_DECREE")]
    DivorceDecree,
    #[serde(rename = "CHILD_SUPPORT_ORDER")]
    ChildSupportOrder,
    #[serde(rename = "STUDENT_LOAN_STATEMENT")]
    StudentLoanStatement,
    #[serde(rename = "MORTGAGE_STATEMENT")]
    MortgageStatement,
    #[serde(rename = "AUTO_LOAN_STATEMENT")]
    AutoLoanStatement,
    #[serde(rename = "CREDIT_CARD_STATEMENT")]
    CreditCardStatement,
    #[serde(rename = "JUDGMENT_OR_LIEN")]
    JudgmentOrLien,

    // Loan & closing forms
    #[serde(rename = "FORM_1003")]
    Form1003,
    #[serde(rename = "FORM_4506C")]
    Form4506C,
    #[serde(rename = "FORM_SSA89")]
    FormSsa89,
    #[serde(rename = "FORM_W9")]
    FormW9,
    #[serde(rename = "LOAN_ESTIMATE")]
    LoanEstimate,
    #[serde(rename = "CLOSING_DISCLOSURE")]
    ClosingDisclosure,
    #[serde(rename = "PROMISSORY_NOTE")]
    PromissoryNote,
    #[serde(rename = "DEED_OF_TRUST")]
    DeedOfTrust,
    #[serde(rename = "ESCROW_STATEMENT")]
    EscrowStatement,
    #[serde(rename = "PAYOFF_STATEMENT")]
    PayoffStatement,
    #[serde(rename = "VERIFICATION_OF_RENT")]
    VerificationOfRent,
    #[serde(rename = "POWER_OF_ATTORNEY")]
    PowerOfAttorney,
    #[serde(rename = "TRUST_CERTIFICATION")]
    TrustCertification,
    #[serde(rename = "UTILITY_BILL")]
    UtilityBill,

    #[serde(rename = "OTHER")]
    Other,
}

impl DocumentType {
    /// All variants in declaration order. Kept in sync with the enum by the
    /// catalog coverage test.
    pub const ALL: &'static [DocumentType] = &[
        DocumentType::W2,
        DocumentType::PayStub,
        DocumentType::TaxReturn,
        DocumentType::BusinessTaxReturn,
        DocumentType::Form1099,
        DocumentType::Form1099Int,
        DocumentType::Form1099Div,
        DocumentType::Form1099R,
        DocumentType::ScheduleK1,
        DocumentType::ProfitLossStatement,
        DocumentType::SocialSecurityAward,
        DocumentType::PensionStatement,
        DocumentType::VaBenefitsLetter,
        DocumentType::DisabilityAward,
        DocumentType::EmploymentOffer,
        DocumentType::EmploymentVerification,
        DocumentType::BusinessLicense,
        DocumentType::CpaLetter,
        DocumentType::BankStatement,
        DocumentType::InvestmentStatement,
        DocumentType::RetirementStatement,
        DocumentType::GiftLetter,
        DocumentType::EarnestMoneyReceipt,
        DocumentType::VerificationOfDeposit,
        DocumentType::Id,
        DocumentType::Passport,
        DocumentType::SocialSecurityCard,
        DocumentType::GreenCard,
        DocumentType::Visa,
        DocumentType::BirthCertificate,
        DocumentType::PurchaseAgreement,
        DocumentType::Appraisal,
        DocumentType::HomeownersInsurance,
        DocumentType::FloodInsurance,
        DocumentType::FloodCertificate,
        DocumentType::TitleReport,
        DocumentType::Deed,
        DocumentType::Survey,
        DocumentType::HoaStatement,
        DocumentType::PropertyTaxBill,
        DocumentType::LeaseAgreement,
        DocumentType::RentRoll,
        DocumentType::HomeInspection,
        DocumentType::PestInspection,
        DocumentType::CondoQuestionnaire,
        DocumentType::CreditReport,
        DocumentType::CreditExplanationLetter,
        DocumentType::BankruptcyDischarge,
        DocumentType::DivorceDecree,
        DocumentType::ChildSupportOrder,
        DocumentType::StudentLoanStatement,
        DocumentType::MortgageStatement,
        DocumentType::AutoLoanStatement,
        DocumentType::CreditCardStatement,
        DocumentType::JudgmentOrLien,
        DocumentType::Form1003,
        DocumentType::Form4506C,
        DocumentType::FormSsa89,
        DocumentType::FormW9,
        DocumentType::LoanEstimate,
        DocumentType::ClosingDisclosure,
        DocumentType::PromissoryNote,
        DocumentType::DeedOfTrust,
        DocumentType::EscrowStatement,
        DocumentType::PayoffStatement,
        DocumentType::VerificationOfRent,
        DocumentType::PowerOfAttorney,
        DocumentType::TrustCertification,
        DocumentType::UtilityBill,
        DocumentType::Other,
    ];

    /// The external tag callers switch on.
    pub fn as_tag(&self) -> &'static str {
        match self {
            DocumentType::W2 => "W2",
            DocumentType::PayStub => "PAY_STUB",
            DocumentType::TaxReturn => "TAX_RETURN",
            DocumentType::BusinessTaxReturn => "BUSINESS_TAX_RETURN",
            DocumentType::Form1099 => "FORM_1099",
            DocumentType::Form1099Int => "FORM_1099_INT",
            DocumentType::Form1099Div => "FORM_1099_DIV",
            DocumentType::Form1099R => "FORM_1099_R",
            DocumentType::ScheduleK1 => "SCHEDULE_K1",
            DocumentType::ProfitLossStatement => "PROFIT_LOSS_STATEMENT",
            DocumentType::SocialSecurityAward => "SOCIAL_SECURITY_AWARD",
            DocumentType::PensionStatement => "PENSION_STATEMENT",
            DocumentType::VaBenefitsLetter => "VA_BENEFITS_LETTER",
            DocumentType::DisabilityAward => "DISABILITY_AWARD",
            DocumentType::EmploymentOffer => "EMPLOYMENT_OFFER",
            DocumentType::EmploymentVerification => "EMPLOYMENT_VERIFICATION",
            DocumentType::BusinessLicense => "BUSINESS_LICENSE",
            DocumentType::CpaLetter => "CPA_LETTER",
            DocumentType::BankStatement => "BANK_STATEMENT",
            DocumentType::InvestmentStatement => "INVESTMENT_STATEMENT",
            DocumentType::RetirementStatement => "RETIREMENT_STATEMENT",
            DocumentType::GiftLetter => "GIFT_LETTER",
            DocumentType::EarnestMoneyReceipt => "EARNEST_MONEY_RECEIPT",
            DocumentType::VerificationOfDeposit => "VERIFICATION_OF_DEPOSIT",
            DocumentType::Id => "ID",
            DocumentType::Passport => "PASSPORT",
            DocumentType::SocialSecurityCard => "SOCIAL_SECURITY_CARD",
            DocumentType::GreenCard => "GREEN_CARD",
            DocumentType::Visa => "VISA",
            DocumentType::BirthCertificate => "BIRTH_CERTIFICATE",
            DocumentType::PurchaseAgreement => "PURCHASE_AGREEMENT",
            DocumentType::Appraisal => "APPRAISAL",
            DocumentType::HomeownersInsurance => "HOMEOWNERS_INSURANCE",
            DocumentType::FloodInsurance => "FLOOD_INSURANCE",
            DocumentType::FloodCertificate => "FLOOD_CERTIFICATE",
            DocumentType::TitleReport => "TITLE_REPORT",
            DocumentType::Deed => "DEED",
            DocumentType::Survey => "SURVEY",
            DocumentType::HoaStatement => "HOA_STATEMENT",
            DocumentType::PropertyTaxBill => "PROPERTY_TAX_BILL",
            DocumentType::LeaseAgreement => "LEASE_AGREEMENT",
            DocumentType::RentRoll => "RENT_ROLL",
            DocumentType::HomeInspection => "HOME_INSPECTION",
            DocumentType::PestInspection => "PEST_INSPECTION",
            DocumentType::CondoQuestionnaire => "CONDO_QUESTIONNAIRE",
            DocumentType::CreditReport => "CREDIT_REPORT",
            DocumentType::CreditExplanationLetter => "CREDIT_EXPLANATION_LETTER",
            DocumentType::BankruptcyDischarge => "BANKRUPTCY_DISCHARGE",
            DocumentType::DivorceDecree => "DIVORCE_DECREE",
            DocumentType::ChildSupportOrder => "CHILD_SUPPORT_ORDER",
            DocumentType::StudentLoanStatement => "STUDENT_LOAN_STATEMENT",
            DocumentType::MortgageStatement => "MORTGAGE_STATEMENT",
            DocumentType::AutoLoanStatement => "AUTO_LOAN_STATEMENT",
            DocumentType::CreditCardStatement => "CREDIT_CARD_STATEMENT",
            DocumentType::JudgmentOrLien => "JUDGMENT_OR_LIEN",
            DocumentType::Form1003 => "FORM_1003",
            DocumentType::Form4506C => "FORM_4506C",
            DocumentType::FormSsa89 => "FORM_SSA89",
            DocumentType::FormW9 => "FORM_W9",
            DocumentType::LoanEstimate => "LOAN_ESTIMATE",
            DocumentType::ClosingDisclosure => "CLOSING_DISCLOSURE",
            DocumentType::PromissoryNote => "PROMISSORY_NOTE",
            DocumentType::DeedOfTrust => "DEED_OF_TRUST",
            DocumentType::EscrowStatement => "ESCROW_STATEMENT",
            DocumentType::PayoffStatement => "PAYOFF_STATEMENT",
            DocumentType::VerificationOfRent => "VERIFICATION_OF_RENT",
            DocumentType::PowerOfAttorney => "POWER_OF_ATTORNEY",
            DocumentType::TrustCertification => "TRUST_CERTIFICATION",
            DocumentType::UtilityBill => "UTILITY_BILL",
            DocumentType::Other => "OTHER",
        }
    }

    /// Reverse of `as_tag`, used by the CLI.
    pub fn from_tag(tag: &str) -> Option<DocumentType> {
        DocumentType::ALL.iter().copied().find(|t| t.as_tag() == tag)
    }

    /// Human-readable name for checklists and insights.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::W2 => "W-2 Wage and Tax Statement",
            DocumentType::PayStub => "Pay Stub",
            DocumentType::TaxReturn => "Personal Tax Return",
            DocumentType::BusinessTaxReturn => "Business Tax Return",
            DocumentType::Form1099 => "Form 1099",
            DocumentType::Form1099Int => "Form 1099-INT",
            DocumentType::Form1099Div => "Form 1099-DIV",
            DocumentType::Form1099R => "Form 1099-R",
            DocumentType::ScheduleK1 => "Schedule K-1",
            DocumentType::ProfitLossStatement => "Profit & Loss Statement",
            DocumentType::SocialSecurityAward => "Social Security Award Letter",
            DocumentType::PensionStatement => "Pension Statement",
            DocumentType::VaBenefitsLetter => "VA Benefits Letter",
            DocumentType::DisabilityAward => "Disability Award Letter",
            DocumentType::EmploymentOffer => "Employment Offer Letter",
            DocumentType::EmploymentVerification => "Verification of Employment",
            DocumentType::BusinessLicense => "Business License",
            DocumentType::CpaLetter => "CPA Letter",
            DocumentType::BankStatement => "Bank Statement",
            DocumentType::InvestmentStatement => "Investment Account Statement",
            DocumentType::RetirementStatement => "Retirement Account Statement",
            DocumentType::GiftLetter => "Gift Letter",
            DocumentType::EarnestMoneyReceipt => "Earnest Money Receipt",
            DocumentType::VerificationOfDeposit => "Verification of Deposit",
            DocumentType::Id => "Driver's License / State ID",
            DocumentType::Passport => "Passport",
            DocumentType::SocialSecurityCard => "Social Security Card",
            DocumentType::GreenCard => "Permanent Resident Card",
            DocumentType::Visa => "Visa",
            DocumentType::BirthCertificate => "Birth Certificate",
            DocumentType::PurchaseAgreement => "Purchase Agreement",
            DocumentType::Appraisal => "Appraisal Report",
            DocumentType::HomeownersInsurance => "Homeowners Insurance",
            DocumentType::FloodInsurance => "Flood Insurance",
            DocumentType::FloodCertificate => "Flood Certificate",
            DocumentType::TitleReport => "Title Report",
            DocumentType::Deed => "Deed",
            DocumentType::Survey => "Property Survey",
            DocumentType::HoaStatement => "HOA Statement",
            DocumentType::PropertyTaxBill => "Property Tax Bill",
            DocumentType::LeaseAgreement => "Lease Agreement",
            DocumentType::RentRoll => "Rent Roll",
            DocumentType::HomeInspection => "Home Inspection Report",
            DocumentType::PestInspection => "Pest Inspection Report",
            DocumentType::CondoQuestionnaire => "Condo Questionnaire",
            DocumentType::CreditReport => "Credit Report",
            DocumentType::CreditExplanationLetter => "Letter of Explanation",
            DocumentType::BankruptcyDischarge => "Bankruptcy Discharge",
            DocumentType::DivorceDecree => "Divorce Decree",
            DocumentType::ChildSupportOrder => "Child Support Order",
            DocumentType::StudentLoanStatement => "Student Loan Statement",
            DocumentType::MortgageStatement => "Mortgage Statement",
            DocumentType::AutoLoanStatement => "Auto Loan Statement",
            DocumentType::CreditCardStatement => "Credit Card Statement",
            DocumentType::JudgmentOrLien => "Judgment or Lien",
            DocumentType::Form1003 => "Uniform Residential Loan Application (1003)",
            DocumentType::Form4506C => "Form 4506-C",
            DocumentType::FormSsa89 => "Form SSA-89",
            DocumentType::FormW9 => "Form W-9",
            DocumentType::LoanEstimate => "Loan Estimate",
            DocumentType::ClosingDisclosure => "Closing Disclosure",
            DocumentType::PromissoryNote => "Promissory Note",
            DocumentType::DeedOfTrust => "Deed of Trust",
            DocumentType::EscrowStatement => "Escrow Statement",
            DocumentType::PayoffStatement => "Payoff Statement",
            DocumentType::VerificationOfRent => "Verification of Rent",
            DocumentType::PowerOfAttorney => "Power of Attorney",
            DocumentType::TrustCertification => "Trust Certification",
            DocumentType::UtilityBill => "Utility Bill",
            DocumentType::Other => "Unrecognized Document",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// The input artifact as handed over by the consuming UI's file picker.
/// Ephemeral: consumed by acquisition, then dropped.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub media_type: String,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            media_type: media_type.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcquisitionMethod {
    Plain,
    Native,
    Ocr,
}

/// Output of text acquisition. Read-only once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,
    pub source_len: usize,
    pub method: AcquisitionMethod,
}

/// Classifier verdict for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub doc_type: DocumentType,
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

/// Human-readable finding attached to a classification for the review UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub label: String,
    pub detail: String,
}

/// Per-document pipeline result. Always produced, even for unreadable input
/// (type OTHER, confidence 0, failure reason set).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub source_file: String,
    pub doc_type: DocumentType,
    pub confidence: f32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<AcquisitionMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub insights: Vec<Insight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted: Option<ExtractedData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    SemiMonthly,
    Monthly,
}

impl PayFrequency {
    pub fn periods_per_year(&self) -> f64 {
        match self {
            PayFrequency::Weekly => 52.0,
            PayFrequency::Biweekly => 26.0,
            PayFrequency::SemiMonthly => 24.0,
            PayFrequency::Monthly => 12.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowerIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl BorrowerIdentity {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.ssn.is_none()
            && self.date_of_birth.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_frequency: Option<PayFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_employed: Option<bool>,
}

impl EmploymentInfo {
    pub fn is_empty(&self) -> bool {
        self.employer_name.is_none()
            && self.monthly_income.is_none()
            && self.pay_frequency.is_none()
            && self.self_employed.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_date: Option<NaiveDate>,
}

/// Sparse structured record pulled out of one document. Fields are populated
/// only when their pattern matched; absent and zero are distinct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower: Option<BorrowerIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment: Option<EmploymentInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub assets: Vec<AssetAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_date: Option<NaiveDate>,
}

impl ExtractedData {
    pub fn is_empty(&self) -> bool {
        self.borrower.as_ref().map_or(true, |b| b.is_empty())
            && self.employment.as_ref().map_or(true, |e| e.is_empty())
            && self.assets.is_empty()
            && self.monthly_income.is_none()
            && self.document_date.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanPurpose {
    Purchase,
    Refinance,
}

/// Best-effort parse of a full 1003 loan application form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialLoanApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower: Option<BorrowerIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment: Option<EmploymentInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub assets: Vec<AssetAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_purpose: Option<LoanPurpose>,
}

impl PartialLoanApplication {
    /// Project the application-form parse onto the generic extraction record
    /// so the pipeline can surface it like any other document.
    pub fn to_extracted_data(&self) -> ExtractedData {
        ExtractedData {
            borrower: self.borrower.clone(),
            employment: self.employment.clone(),
            assets: self.assets.clone(),
            monthly_income: None,
            document_date: None,
        }
    }
}

// --- Application snapshot (owned by the surrounding app, read-only here) ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyIncome {
    pub base: f64,
    #[serde(default)]
    pub overtime: f64,
    #[serde(default)]
    pub bonus: f64,
    #[serde(default)]
    pub commission: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEmployment {
    pub employer_name: String,
    pub monthly_income: MonthlyIncome,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    pub value: f64,
}

/// Borrower-entered loan application data as reported by the wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSnapshot {
    #[serde(default)]
    pub employment: Vec<AppEmployment>,
    #[serde(default)]
    pub assets: Vec<AppAsset>,
}

impl ApplicationSnapshot {
    pub fn total_assets(&self) -> f64 {
        self.assets.iter().map(|a| a.value).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Critical,
}

/// A flagged mismatch between declared application data and document data.
/// Never persisted or auto-applied here; remediation is caller-driven.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discrepancy {
    pub id: String,
    pub field_path: String,
    pub label: String,
    pub application_value: String,
    pub document_value: String,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wizard_step: Option<u32>,
}

// Acquisition failure taxonomy. Terminal per document, never fatal for a batch.
#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("failed to parse PDF: {0}")]
    UnreadablePdf(String),

    #[error("page rendering failed: {0}")]
    Render(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("unsupported or undecodable input: {0}")]
    Unsupported(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AcquireError {
    /// The user-facing failure reason carried on a terminal result.
    pub fn user_message(&self) -> String {
        match self {
            AcquireError::UnreadablePdf(_) => {
                "Unable to read this PDF. It may be corrupted or password-protected.".to_string()
            }
            AcquireError::Render(_) | AcquireError::Ocr(_) => {
                "Unable to read text from this document image.".to_string()
            }
            AcquireError::Unsupported(_) => {
                "This file type is not supported for automatic review.".to_string()
            }
            AcquireError::Io(_) => "Unable to read this file.".to_string(),
        }
    }
}

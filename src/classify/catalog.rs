// Static pattern catalog for document classification
//
// One entry per document type. Entry order is the tie-break order: when two
// types score equally, the earlier entry wins. All terms are lower-case and
// matched as plain substrings against the lower-cased document text.
use crate::types::DocumentType;

pub const CRITICAL_BONUS: i32 = 100;
pub const NEGATIVE_PENALTY: i32 = 50;
pub const CURRENCY_BONUS: i32 = 20;

#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub doc_type: DocumentType,
    /// Ordinary (term, weight) keyword pairs.
    pub keywords: &'static [(&'static str, i32)],
    /// Near-decisive phrases, e.g. the literal form title.
    pub critical: &'static [&'static str],
    /// Terms that penalize this type to resolve vocabulary overlap.
    pub negative: &'static [&'static str],
    /// Minimum currency-token count that earns the structural bonus.
    pub min_currency_hits: Option<usize>,
}

pub static CATALOG: &[PatternRule] = &[
    // --- Income & employment ---
    PatternRule {
        doc_type: DocumentType::W2,
        keywords: &[
            ("wages, tips, other compensation", 15),
            ("federal income tax withheld", 10),
            ("social security wages", 10),
            ("medicare wages", 8),
            ("employer identification number", 5),
            ("control number", 5),
            ("w-2", 10),
        ],
        critical: &["wage and tax statement", "form w-2"],
        negative: &["1099", "nonemployee compensation", "self-employment"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::PayStub,
        keywords: &[
            ("gross pay", 12),
            ("net pay", 10),
            ("pay period", 10),
            ("year to date", 8),
            ("ytd", 6),
            ("deductions", 5),
            ("earnings statement", 10),
            ("direct deposit", 4),
            ("pay date", 5),
        ],
        critical: &["earnings statement"],
        negative: &["wage and tax statement", "1099"],
        min_currency_hits: Some(3),
    },
    PatternRule {
        doc_type: DocumentType::TaxReturn,
        keywords: &[
            ("adjusted gross income", 12),
            ("taxable income", 8),
            ("filing status", 8),
            ("standard deduction", 6),
            ("refund", 4),
            ("1040", 10),
            ("schedule a", 4),
            ("schedule c", 4),
        ],
        critical: &["form 1040", "u.s. individual income tax return"],
        negative: &["1120", "1065", "wage and tax statement"],
        min_currency_hits: Some(3),
    },
    PatternRule {
        doc_type: DocumentType::BusinessTaxReturn,
        keywords: &[
            ("1120", 10),
            ("1065", 10),
            ("ordinary business income", 10),
            ("gross receipts", 8),
            ("cost of goods sold", 6),
            ("corporation", 4),
            ("partnership", 4),
        ],
        critical: &[
            "u.s. corporation income tax return",
            "u.s. return of partnership income",
        ],
        negative: &["form 1040", "individual income tax return"],
        min_currency_hits: Some(3),
    },
    PatternRule {
        doc_type: DocumentType::Form1099,
        keywords: &[
            ("1099", 10),
            ("payer", 6),
            ("recipient", 6),
            ("nonemployee compensation", 10),
            ("miscellaneous income", 8),
            ("rents", 3),
            ("royalties", 3),
        ],
        critical: &["form 1099-misc", "form 1099-nec"],
        negative: &["wage and tax statement", "1099-int", "1099-div", "1099-r"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::Form1099Int,
        keywords: &[
            ("1099-int", 15),
            ("interest income", 10),
            ("payer", 4),
            ("recipient", 4),
            ("early withdrawal penalty", 5),
        ],
        critical: &["form 1099-int"],
        negative: &["1099-div", "dividends"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::Form1099Div,
        keywords: &[
            ("1099-div", 15),
            ("ordinary dividends", 10),
            ("qualified dividends", 10),
            ("capital gain distributions", 8),
            ("payer", 4),
        ],
        critical: &["form 1099-div"],
        negative: &["1099-int", "interest income"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::Form1099R,
        keywords: &[
            ("1099-r", 15),
            ("gross distribution", 10),
            ("taxable amount", 8),
            ("distribution code", 8),
            ("pensions, annuities", 6),
        ],
        critical: &["form 1099-r"],
        negative: &["1099-int", "1099-div"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::ScheduleK1,
        keywords: &[
            ("schedule k-1", 15),
            ("partner's share", 10),
            ("shareholder's share", 10),
            ("ordinary business income", 6),
            ("partnership", 4),
        ],
        critical: &["schedule k-1"],
        negative: &["wage and tax statement"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::ProfitLossStatement,
        keywords: &[
            ("profit and loss", 12),
            ("profit & loss", 12),
            ("net income", 6),
            ("total revenue", 8),
            ("total expenses", 8),
            ("operating expenses", 6),
            ("cost of goods sold", 5),
        ],
        critical: &["profit and loss statement", "profit & loss statement"],
        negative: &["form 1040", "1120"],
        min_currency_hits: Some(4),
    },
    PatternRule {
        doc_type: DocumentType::SocialSecurityAward,
        keywords: &[
            ("social security administration", 12),
            ("benefit amount", 8),
            ("monthly benefit", 8),
            ("retirement benefit", 6),
            ("supplemental security income", 6),
            ("cost-of-living", 4),
        ],
        critical: &["your benefit verification letter"],
        negative: &["form ssa-89"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::PensionStatement,
        keywords: &[
            ("pension", 10),
            ("annuity", 8),
            ("monthly benefit", 8),
            ("retirement plan", 6),
            ("defined benefit", 8),
            ("beneficiary", 4),
        ],
        critical: &[],
        negative: &["social security administration", "401(k)"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::VaBenefitsLetter,
        keywords: &[
            ("department of veterans affairs", 12),
            ("va benefits", 10),
            ("service-connected", 8),
            ("disability compensation", 8),
            ("veteran", 5),
        ],
        critical: &["benefit summary letter"],
        negative: &["social security administration"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::DisabilityAward,
        keywords: &[
            ("disability benefits", 10),
            ("long term disability", 10),
            ("short term disability", 8),
            ("benefit award", 8),
            ("claim number", 4),
        ],
        critical: &[],
        negative: &["department of veterans affairs", "social security administration"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::EmploymentOffer,
        keywords: &[
            ("offer of employment", 12),
            ("we are pleased to offer", 12),
            ("start date", 8),
            ("annual salary", 8),
            ("position", 4),
            ("contingent upon", 4),
        ],
        critical: &["offer letter"],
        negative: &["verification of employment"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::EmploymentVerification,
        keywords: &[
            ("verification of employment", 15),
            ("date of hire", 8),
            ("probability of continued employment", 10),
            ("current position", 6),
            ("human resources", 4),
        ],
        critical: &["verification of employment"],
        negative: &["offer of employment"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::BusinessLicense,
        keywords: &[
            ("business license", 15),
            ("license number", 8),
            ("doing business as", 8),
            ("license expires", 6),
            ("issued to", 4),
        ],
        critical: &["business license"],
        negative: &["driver license", "driver's license"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::CpaLetter,
        keywords: &[
            ("certified public accountant", 12),
            ("cpa", 8),
            ("self-employed", 8),
            ("i have prepared", 6),
            ("tax returns for", 6),
        ],
        critical: &[],
        negative: &["form 1040"],
        min_currency_hits: None,
    },
    // --- Assets ---
    PatternRule {
        doc_type: DocumentType::BankStatement,
        keywords: &[
            ("beginning balance", 10),
            ("ending balance", 12),
            ("account summary", 8),
            ("deposits and credits", 8),
            ("withdrawals and debits", 8),
            ("available balance", 6),
            ("checking", 5),
            ("savings", 5),
            ("statement period", 8),
        ],
        critical: &[],
        negative: &["401(k)", "brokerage", "escrow account"],
        min_currency_hits: Some(5),
    },
    PatternRule {
        doc_type: DocumentType::InvestmentStatement,
        keywords: &[
            ("brokerage", 10),
            ("portfolio value", 10),
            ("securities", 6),
            ("holdings", 6),
            ("market value", 6),
            ("unrealized gain", 6),
            ("dividends", 4),
        ],
        critical: &[],
        negative: &["401(k)", "ira", "checking"],
        min_currency_hits: Some(4),
    },
    PatternRule {
        doc_type: DocumentType::RetirementStatement,
        keywords: &[
            ("401(k)", 12),
            ("403(b)", 10),
            ("ira", 8),
            ("vested balance", 10),
            ("employer match", 6),
            ("contribution", 5),
            ("retirement savings", 8),
        ],
        critical: &[],
        negative: &["brokerage", "checking"],
        min_currency_hits: Some(3),
    },
    PatternRule {
        doc_type: DocumentType::GiftLetter,
        keywords: &[
            ("gift letter", 15),
            ("donor", 10),
            ("no repayment", 10),
            ("gift funds", 10),
            ("relationship to borrower", 8),
        ],
        critical: &["gift letter"],
        negative: &[],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::EarnestMoneyReceipt,
        keywords: &[
            ("earnest money", 15),
            ("deposit receipt", 10),
            ("escrow holder", 6),
            ("received from", 5),
        ],
        critical: &["earnest money receipt"],
        negative: &[],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::VerificationOfDeposit,
        keywords: &[
            ("verification of deposit", 15),
            ("depository", 8),
            ("average balance", 8),
            ("date opened", 6),
            ("account in name of", 6),
        ],
        critical: &["verification of deposit"],
        negative: &["verification of employment"],
        min_currency_hits: None,
    },
    // --- Identity ---
    PatternRule {
        doc_type: DocumentType::Id,
        keywords: &[
            ("driver license", 12),
            ("driver's license", 12),
            ("identification card", 10),
            ("dob", 6),
            ("class", 3),
            ("expires", 4),
            ("height", 3),
            ("eyes", 3),
            ("organ donor", 5),
        ],
        critical: &[],
        negative: &["passport", "business license"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::Passport,
        keywords: &[
            ("passport", 15),
            ("nationality", 8),
            ("place of birth", 6),
            ("date of issue", 5),
            ("date of expiration", 5),
            ("united states of america", 4),
        ],
        critical: &[],
        negative: &["driver license"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::SocialSecurityCard,
        keywords: &[
            ("social security", 8),
            ("this number has been established for", 12),
            ("signature", 3),
        ],
        critical: &["social security card"],
        negative: &["social security administration", "benefit"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::GreenCard,
        keywords: &[
            ("permanent resident", 15),
            ("uscis", 8),
            ("resident since", 8),
            ("card expires", 6),
            ("alien number", 8),
        ],
        critical: &["permanent resident card"],
        negative: &["passport"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::Visa,
        keywords: &[
            ("visa", 10),
            ("nonimmigrant", 10),
            ("visa type", 8),
            ("entries", 4),
            ("annotation", 4),
        ],
        critical: &[],
        negative: &["permanent resident", "credit card"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::BirthCertificate,
        keywords: &[
            ("certificate of live birth", 15),
            ("birth certificate", 12),
            ("county of birth", 8),
            ("registrar", 6),
            ("mother's maiden name", 6),
        ],
        critical: &["certificate of live birth"],
        negative: &[],
        min_currency_hits: None,
    },
    // --- Property ---
    PatternRule {
        doc_type: DocumentType::PurchaseAgreement,
        keywords: &[
            ("purchase agreement", 12),
            ("purchase price", 8),
            ("buyer", 5),
            ("seller", 5),
            ("closing date", 6),
            ("contingencies", 6),
            ("real estate purchase contract", 10),
        ],
        critical: &["residential purchase agreement"],
        negative: &["loan estimate", "closing disclosure"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::Appraisal,
        keywords: &[
            ("appraisal report", 12),
            ("appraised value", 10),
            ("comparable sales", 8),
            ("subject property", 6),
            ("appraiser", 6),
            ("uniform residential appraisal report", 12),
        ],
        critical: &["uniform residential appraisal report"],
        negative: &["home inspection"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::HomeownersInsurance,
        keywords: &[
            ("homeowners insurance", 12),
            ("declarations page", 10),
            ("dwelling coverage", 10),
            ("policy number", 6),
            ("premium", 6),
            ("deductible", 5),
        ],
        critical: &[],
        negative: &["flood insurance", "flood zone"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::FloodInsurance,
        keywords: &[
            ("flood insurance", 15),
            ("national flood insurance program", 12),
            ("flood zone", 8),
            ("policy number", 5),
            ("premium", 4),
        ],
        critical: &["national flood insurance program"],
        negative: &["flood hazard determination"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::FloodCertificate,
        keywords: &[
            ("flood hazard determination", 15),
            ("flood zone", 10),
            ("fema", 8),
            ("community number", 6),
            ("panel number", 6),
        ],
        critical: &["standard flood hazard determination form"],
        negative: &["flood insurance policy"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::TitleReport,
        keywords: &[
            ("title report", 12),
            ("preliminary report", 10),
            ("title commitment", 10),
            ("legal description", 6),
            ("easements", 6),
            ("exceptions", 5),
            ("vesting", 6),
        ],
        critical: &[],
        negative: &["deed of trust"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::Deed,
        keywords: &[
            ("grant deed", 12),
            ("warranty deed", 12),
            ("quitclaim deed", 12),
            ("grantor", 8),
            ("grantee", 8),
            ("conveys", 5),
        ],
        critical: &[],
        negative: &["deed of trust"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::Survey,
        keywords: &[
            ("survey", 8),
            ("surveyor", 8),
            ("plat", 8),
            ("boundary", 6),
            ("bearings", 6),
            ("monument", 4),
        ],
        critical: &[],
        negative: &["appraisal"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::HoaStatement,
        keywords: &[
            ("homeowners association", 12),
            ("hoa dues", 10),
            ("association fees", 8),
            ("assessment", 6),
            ("common area", 5),
        ],
        critical: &[],
        negative: &["condo questionnaire"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::PropertyTaxBill,
        keywords: &[
            ("property tax", 12),
            ("tax collector", 8),
            ("assessed value", 8),
            ("parcel number", 8),
            ("first installment", 6),
            ("second installment", 6),
        ],
        critical: &[],
        negative: &["income tax", "form 1040"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::LeaseAgreement,
        keywords: &[
            ("lease agreement", 12),
            ("landlord", 8),
            ("tenant", 8),
            ("monthly rent", 8),
            ("security deposit", 6),
            ("term of lease", 6),
        ],
        critical: &["residential lease agreement"],
        negative: &["rent roll"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::RentRoll,
        keywords: &[
            ("rent roll", 15),
            ("unit", 4),
            ("occupied", 6),
            ("vacancy", 6),
            ("monthly rent", 5),
        ],
        critical: &["rent roll"],
        negative: &["lease agreement"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::HomeInspection,
        keywords: &[
            ("home inspection", 12),
            ("inspector", 6),
            ("deficiencies", 8),
            ("roof", 4),
            ("foundation", 4),
            ("electrical", 3),
            ("plumbing", 3),
        ],
        critical: &["home inspection report"],
        negative: &["pest", "termite", "appraised value"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::PestInspection,
        keywords: &[
            ("termite", 12),
            ("pest inspection", 12),
            ("wood destroying", 10),
            ("infestation", 8),
            ("structural pest control", 8),
        ],
        critical: &["wood destroying pests and organisms inspection report"],
        negative: &["home inspection report"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::CondoQuestionnaire,
        keywords: &[
            ("condominium questionnaire", 15),
            ("condo questionnaire", 12),
            ("owner occupancy", 8),
            ("units in project", 8),
            ("litigation", 5),
            ("reserves", 5),
        ],
        critical: &["condominium project questionnaire"],
        negative: &[],
        min_currency_hits: None,
    },
    // --- Credit & liabilities ---
    PatternRule {
        doc_type: DocumentType::CreditReport,
        keywords: &[
            ("credit report", 12),
            ("credit score", 10),
            ("fico", 8),
            ("tradeline", 8),
            ("equifax", 6),
            ("experian", 6),
            ("transunion", 6),
            ("inquiries", 5),
        ],
        critical: &[],
        negative: &["credit card statement"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::CreditExplanationLetter,
        keywords: &[
            ("letter of explanation", 15),
            ("to whom it may concern", 8),
            ("late payment", 6),
            ("credit inquiry", 6),
            ("i am writing to explain", 10),
        ],
        critical: &["letter of explanation"],
        negative: &[],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::BankruptcyDischarge,
        keywords: &[
            ("discharge of debtor", 15),
            ("bankruptcy", 10),
            ("chapter 7", 8),
            ("chapter 13", 8),
            ("united states bankruptcy court", 10),
            ("case number", 4),
        ],
        critical: &["discharge of debtor"],
        negative: &[],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::DivorceDecree,
        keywords: &[
            ("decree of dissolution", 15),
            ("divorce", 10),
            ("petitioner", 6),
            ("respondent", 6),
            ("marital settlement", 8),
            ("spousal support", 8),
        ],
        critical: &["decree of dissolution of marriage"],
        negative: &[],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::ChildSupportOrder,
        keywords: &[
            ("child support", 15),
            ("custodial parent", 8),
            ("obligor", 8),
            ("support order", 8),
            ("per month per child", 6),
        ],
        critical: &[],
        negative: &["spousal support only"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::StudentLoanStatement,
        keywords: &[
            ("student loan", 15),
            ("loan servicer", 8),
            ("deferment", 8),
            ("forbearance", 8),
            ("principal balance", 5),
            ("interest rate", 4),
        ],
        critical: &[],
        negative: &["mortgage", "auto"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::MortgageStatement,
        keywords: &[
            ("mortgage statement", 15),
            ("principal balance", 8),
            ("escrow balance", 8),
            ("interest rate", 4),
            ("amount due", 5),
            ("loan number", 5),
        ],
        critical: &[],
        negative: &["student loan", "auto loan", "payoff"],
        min_currency_hits: Some(3),
    },
    PatternRule {
        doc_type: DocumentType::AutoLoanStatement,
        keywords: &[
            ("auto loan", 15),
            ("vehicle", 8),
            ("vin", 8),
            ("payment due", 5),
            ("principal balance", 4),
        ],
        critical: &[],
        negative: &["mortgage", "student loan"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::CreditCardStatement,
        keywords: &[
            ("credit card", 10),
            ("minimum payment", 10),
            ("new balance", 6),
            ("credit limit", 8),
            ("purchases", 5),
            ("apr", 5),
            ("payment due date", 5),
        ],
        critical: &[],
        negative: &["credit report", "credit score"],
        min_currency_hits: Some(3),
    },
    PatternRule {
        doc_type: DocumentType::JudgmentOrLien,
        keywords: &[
            ("judgment", 10),
            ("lien", 10),
            ("abstract of judgment", 12),
            ("creditor", 6),
            ("debtor", 6),
            ("recorded", 4),
        ],
        critical: &[],
        negative: &["discharge of debtor"],
        min_currency_hits: None,
    },
    // --- Loan & closing forms ---
    PatternRule {
        doc_type: DocumentType::Form1003,
        keywords: &[
            ("uniform residential loan application", 15),
            ("1003", 10),
            ("borrower information", 8),
            ("loan purpose", 6),
            ("monthly income", 5),
            ("assets and liabilities", 8),
            ("declarations", 5),
        ],
        critical: &["uniform residential loan application"],
        negative: &["loan estimate", "closing disclosure"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::Form4506C,
        keywords: &[
            ("4506-c", 15),
            ("ives request", 12),
            ("transcript of tax return", 10),
            ("internal revenue service", 5),
        ],
        critical: &["ives request for transcript of tax return"],
        negative: &[],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::FormSsa89,
        keywords: &[
            ("ssa-89", 15),
            ("authorization for the social security administration", 12),
            ("consent based", 8),
            ("verify my ssn", 8),
        ],
        critical: &["form ssa-89"],
        negative: &[],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::FormW9,
        keywords: &[
            ("w-9", 12),
            ("request for taxpayer identification number", 12),
            ("taxpayer identification number", 8),
            ("backup withholding", 8),
        ],
        critical: &["request for taxpayer identification number and certification"],
        negative: &["w-2", "wage and tax statement"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::LoanEstimate,
        keywords: &[
            ("loan estimate", 15),
            ("estimated cash to close", 10),
            ("loan costs", 8),
            ("origination charges", 8),
            ("prepaids", 6),
            ("services you can shop for", 8),
        ],
        critical: &[],
        negative: &["closing disclosure"],
        min_currency_hits: Some(4),
    },
    PatternRule {
        doc_type: DocumentType::ClosingDisclosure,
        keywords: &[
            ("closing disclosure", 15),
            ("cash to close", 8),
            ("closing costs", 8),
            ("loan terms", 5),
            ("projected payments", 8),
            ("summaries of transactions", 8),
        ],
        critical: &["closing disclosure"],
        negative: &["loan estimate"],
        min_currency_hits: Some(5),
    },
    PatternRule {
        doc_type: DocumentType::PromissoryNote,
        keywords: &[
            ("promissory note", 15),
            ("promise to pay", 10),
            ("note holder", 8),
            ("principal", 4),
            ("maturity date", 6),
        ],
        critical: &["promissory note"],
        negative: &["deed of trust"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::DeedOfTrust,
        keywords: &[
            ("deed of trust", 15),
            ("trustor", 8),
            ("trustee", 8),
            ("beneficiary", 6),
            ("security instrument", 8),
        ],
        critical: &["deed of trust"],
        negative: &["grant deed", "quitclaim"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::EscrowStatement,
        keywords: &[
            ("escrow account", 12),
            ("escrow analysis", 12),
            ("escrow balance", 8),
            ("shortage", 6),
            ("surplus", 6),
            ("projected disbursements", 8),
        ],
        critical: &["annual escrow account disclosure statement"],
        negative: &["earnest money"],
        min_currency_hits: Some(3),
    },
    PatternRule {
        doc_type: DocumentType::PayoffStatement,
        keywords: &[
            ("payoff statement", 15),
            ("payoff amount", 12),
            ("good through", 8),
            ("per diem", 8),
            ("unpaid principal", 6),
        ],
        critical: &["payoff statement"],
        negative: &[],
        min_currency_hits: Some(2),
    },
    PatternRule {
        doc_type: DocumentType::VerificationOfRent,
        keywords: &[
            ("verification of rent", 15),
            ("rental history", 8),
            ("monthly rent", 6),
            ("late payments", 6),
            ("landlord", 5),
        ],
        critical: &["verification of rent"],
        negative: &["lease agreement"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::PowerOfAttorney,
        keywords: &[
            ("power of attorney", 15),
            ("attorney-in-fact", 10),
            ("principal", 4),
            ("hereby appoint", 8),
            ("notary", 4),
        ],
        critical: &["power of attorney"],
        negative: &[],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::TrustCertification,
        keywords: &[
            ("certification of trust", 15),
            ("trustee", 6),
            ("revocable", 6),
            ("trust agreement", 8),
            ("successor trustee", 8),
        ],
        critical: &["certification of trust"],
        negative: &["deed of trust"],
        min_currency_hits: None,
    },
    PatternRule {
        doc_type: DocumentType::UtilityBill,
        keywords: &[
            ("utility", 8),
            ("electric", 5),
            ("gas service", 5),
            ("water", 4),
            ("kwh", 8),
            ("service address", 8),
            ("amount due", 4),
            ("billing period", 6),
        ],
        critical: &[],
        negative: &["mortgage", "escrow"],
        min_currency_hits: None,
    },
];

/// Look up the catalog entry for one type, if it has one (OTHER does not).
pub fn rule_for(doc_type: DocumentType) -> Option<&'static PatternRule> {
    CATALOG.iter().find(|r| r.doc_type == doc_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_type_except_other_has_exactly_one_entry() {
        let mut seen = HashSet::new();
        for rule in CATALOG {
            assert!(seen.insert(rule.doc_type), "duplicate entry for {}", rule.doc_type);
            assert_ne!(rule.doc_type, DocumentType::Other);
        }
        assert_eq!(seen.len(), DocumentType::ALL.len() - 1);
    }

    #[test]
    fn all_terms_are_lowercase() {
        for rule in CATALOG {
            for (term, weight) in rule.keywords {
                assert_eq!(*term, term.to_lowercase(), "keyword in {}", rule.doc_type);
                assert!(*weight > 0, "non-positive weight in {}", rule.doc_type);
            }
            for term in rule.critical {
                assert_eq!(*term, term.to_lowercase(), "critical in {}", rule.doc_type);
            }
            for term in rule.negative {
                assert_eq!(*term, term.to_lowercase(), "negative in {}", rule.doc_type);
            }
        }
    }

    #[test]
    fn rule_for_finds_entries() {
        assert!(rule_for(DocumentType::W2).is_some());
        assert!(rule_for(DocumentType::Other).is_none());
    }
}

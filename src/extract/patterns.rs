// Compiled extraction patterns, grouped by document type
//
// Every pattern list is probed in order against lower-cased text; the first
// capture wins. Extraction is best-effort: a non-matching pattern just
// leaves the field absent.
use once_cell::sync::Lazy;
use regex::Regex;

fn build(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

// --- W-2 ---

pub static W2_EMPLOYER: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        // Box c label line, employer on the next line, control number below
        r"(?s)employer(?:'s)?\s+name[^\n]*\n\s*([^\n]+?)\s*(?:\n.*?)?control number",
        r"employer(?:'s)?\s+name\s*[:\-]\s*([^\n]+)",
    ])
});

pub static W2_WAGES: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"wages,?\s*tips,?\s*other\s+comp(?:ensation|\.)?\s*[:\s]*\$?\s*([\d,]+(?:\.\d{1,2})?)",
        r"box\s*1\s*[:\s]*\$?\s*([\d,]+(?:\.\d{1,2})?)",
    ])
});

pub static SSN: Lazy<Vec<Regex>> = Lazy::new(|| build(&[r"\b(\d{3}-\d{2}-\d{4})\b"]));

pub static W2_TAX_YEAR: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"tax\s+year\s*[:\s]*(20\d{2})",
        r"(20\d{2})\s+(?:form\s+)?w-?2",
        r"w-?2[^0-9]{0,20}(20\d{2})",
    ])
});

// --- Pay stub ---

pub static PAYSTUB_GROSS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"gross\s+pay\s*[:\s]*\$?\s*([\d,]+(?:\.\d{1,2})?)",
        r"gross\s+earnings\s*[:\s]*\$?\s*([\d,]+(?:\.\d{1,2})?)",
        r"total\s+gross\s*[:\s]*\$?\s*([\d,]+(?:\.\d{1,2})?)",
    ])
});

pub static PAYSTUB_EMPLOYER: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[r"(?:employer|company)(?:\s+name)?\s*:\s*([^\n]+)"])
});

pub static PAYSTUB_DATE: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"(?:pay\s+date|pay\s+period\s+end(?:ing)?|period\s+end(?:ing)?)\s*[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
    ])
});

// --- Driver's license / state ID ---

pub static ID_LAST_NAME: Lazy<Vec<Regex>> = Lazy::new(|| build(&[r"\bln[:\s]+([a-z'\-]+)"]));

pub static ID_FIRST_NAME: Lazy<Vec<Regex>> = Lazy::new(|| build(&[r"\bfn[:\s]+([a-z'\-]+)"]));

pub static ID_DOB: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[r"(?:dob|date\s+of\s+birth)[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"])
});

// --- Bank statement ---

pub static BANK_BALANCE: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"(?:ending|new|closing)\s+balance[^0-9$\n]*\$?\s*([\d,]+(?:\.\d{1,2})?)",
    ])
});

pub static BANK_DATE: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[r"statement\s+(?:date|period)[^0-9\n]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"])
});

/// Institutions recognized by name. First contained needle wins.
pub static BANK_NAMES: &[(&str, &str)] = &[
    ("wells fargo", "Wells Fargo"),
    ("bank of america", "Bank of America"),
    ("jpmorgan chase", "Chase"),
    ("chase bank", "Chase"),
    ("citibank", "Citibank"),
    ("u.s. bank", "U.S. Bank"),
    ("us bank", "U.S. Bank"),
    ("pnc bank", "PNC Bank"),
    ("capital one", "Capital One"),
    ("td bank", "TD Bank"),
    ("truist", "Truist"),
    ("fifth third", "Fifth Third Bank"),
    ("ally bank", "Ally Bank"),
    ("navy federal", "Navy Federal Credit Union"),
    ("regions bank", "Regions Bank"),
    ("keybank", "KeyBank"),
    ("charles schwab", "Charles Schwab"),
    ("huntington", "Huntington Bank"),
];

// --- Tax return ---

pub static TAX_AGI: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[r"adjusted\s+gross\s+income[^0-9$\n]*\$?\s*([\d,]+(?:\.\d{1,2})?)"])
});

pub static TAX_YEAR: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"tax\s+year\s*[:\s]*(20\d{2})",
        r"form\s+1040[^0-9]{0,20}(20\d{2})",
        r"(20\d{2})\s+form\s+1040",
    ])
});

// --- Form 1003 (full application) ---

pub static F1003_NAME: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"borrower(?:'s)?\s+name[^:\n]*:\s*([^\n]+)",
        r"name\s*\(first,?\s*(?:middle,?\s*)?last\)\s*[:\s]\s*([^\n]+)",
    ])
});

pub static F1003_DOB: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[r"(?:date\s+of\s+birth|dob)[^0-9\n]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"])
});

pub static F1003_EMPLOYER: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"(?:employer\s+or\s+business\s+name|name\s+of\s+employer|current\s+employer)[^:\n]*:\s*([^\n]+)",
        r"employer\s*:\s*([^\n]+)",
    ])
});

pub static F1003_BASE_INCOME: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[
        r"base\s+(?:employment\s+)?income[^0-9$\n]*\$?\s*([\d,]+(?:\.\d{1,2})?)",
        r"gross\s+monthly\s+income[^0-9$\n]*\$?\s*([\d,]+(?:\.\d{1,2})?)",
    ])
});

// Loose scan: any checking/savings/money-market line with a dollar figure,
// anywhere in the assets section. Capture 1 is the account kind, capture 2
// the amount.
pub static F1003_DEPOSIT_ACCOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(checking|savings|money market)[^$\n]{0,40}\$\s*([\d,]+(?:\.\d{1,2})?)").unwrap()
});

pub static F1003_LOAN_AMOUNT: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[r"loan\s+amount[^0-9$\n]*\$?\s*([\d,]+(?:\.\d{1,2})?)"])
});

pub static F1003_PURCHASE_PRICE: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[r"(?:purchase|sales)\s+price[^0-9$\n]*\$?\s*([\d,]+(?:\.\d{1,2})?)"])
});

pub static F1003_PROPERTY_ADDRESS: Lazy<Vec<Regex>> = Lazy::new(|| {
    build(&[r"(?:subject\s+)?property\s+address[^:\n]*:\s*([^\n]+)"])
});

/// Probe a pattern list in order, returning the first capture, trimmed.
pub fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    for pattern in patterns {
        if let Some(captures) = pattern.captures(text) {
            if let Some(matched) = captures.get(1) {
                let value = matched.as_str().trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile() {
        // Touch every Lazy so a bad pattern fails loudly here.
        assert!(!W2_EMPLOYER.is_empty());
        assert!(!W2_WAGES.is_empty());
        assert!(!SSN.is_empty());
        assert!(!W2_TAX_YEAR.is_empty());
        assert!(!PAYSTUB_GROSS.is_empty());
        assert!(!PAYSTUB_EMPLOYER.is_empty());
        assert!(!PAYSTUB_DATE.is_empty());
        assert!(!ID_LAST_NAME.is_empty());
        assert!(!ID_FIRST_NAME.is_empty());
        assert!(!ID_DOB.is_empty());
        assert!(!BANK_BALANCE.is_empty());
        assert!(!BANK_DATE.is_empty());
        assert!(!TAX_AGI.is_empty());
        assert!(!TAX_YEAR.is_empty());
        assert!(!F1003_NAME.is_empty());
        assert!(!F1003_DOB.is_empty());
        assert!(!F1003_EMPLOYER.is_empty());
        assert!(!F1003_BASE_INCOME.is_empty());
        assert!(F1003_DEPOSIT_ACCOUNT.is_match("checking account $1,000"));
        assert!(!F1003_LOAN_AMOUNT.is_empty());
        assert!(!F1003_PURCHASE_PRICE.is_empty());
        assert!(!F1003_PROPERTY_ADDRESS.is_empty());
    }

    #[test]
    fn first_capture_probes_in_order() {
        let text = "employer's name: acme co";
        assert_eq!(
            first_capture(&W2_EMPLOYER, text).as_deref(),
            Some("acme co")
        );
    }
}

// Structural feature scan used alongside keyword scoring
use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s?\d[\d,]*(?:\.\d{1,2})?").unwrap());

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap());

static SSN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap());

static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b\d+\s+[a-z][a-z ]*\s(?:street|st|avenue|ave|road|rd|drive|dr|lane|ln|court|ct|boulevard|blvd|way|place|pl|circle|cir)\b",
    )
    .unwrap()
});

/// Structural signals of one document text. Financial paperwork tends to be
/// dense in currency and date tokens; identity documents carry SSNs and
/// street addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFeatures {
    pub currency_count: usize,
    pub date_count: usize,
    pub has_ssn: bool,
    pub has_address: bool,
}

impl TextFeatures {
    /// Scan expects already lower-cased text (the classifier lowers once).
    pub fn scan(lowered: &str) -> Self {
        Self {
            currency_count: CURRENCY.find_iter(lowered).count(),
            date_count: DATE.find_iter(lowered).count(),
            has_ssn: SSN.is_match(lowered),
            has_address: ADDRESS.is_match(lowered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_currency_tokens() {
        let f = TextFeatures::scan("deposit $1,200.00 withdrawal $85.50 fee $12");
        assert_eq!(f.currency_count, 3);
    }

    #[test]
    fn counts_date_tokens() {
        let f = TextFeatures::scan("period 01/01/2024 through 01/31/2024");
        assert_eq!(f.date_count, 2);
    }

    #[test]
    fn detects_ssn_and_address() {
        let f = TextFeatures::scan("ssn 123-45-6789 at 500 oak street anytown");
        assert!(f.has_ssn);
        assert!(f.has_address);
    }

    #[test]
    fn empty_text_has_no_features() {
        assert_eq!(TextFeatures::scan(""), TextFeatures::default());
    }
}

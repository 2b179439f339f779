// Document classification: keyword scoring over the static catalog
pub mod catalog;
pub mod features;
pub mod filename;

use crate::config::{
    CONFIDENCE_SATURATION, FILENAME_FALLBACK_THRESHOLD, MIN_CLASSIFIABLE_CHARS,
    MIN_READABLE_CHARS,
};
use crate::types::{Classification, DocumentType};
use self::catalog::{CATALOG, CRITICAL_BONUS, CURRENCY_BONUS, NEGATIVE_PENALTY};
use self::features::TextFeatures;

pub const REASON_NO_TEXT: &str = "Document is too blurry or contains no readable text";
pub const REASON_LOW_QUALITY: &str = "Document quality is too low to classify reliably";

/// Raw score for one catalog entry on one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeScore {
    pub doc_type: DocumentType,
    pub score: i32,
}

/// Score every catalog entry against a text. Scores are computed into a
/// local scratch vector; the catalog itself is never mutated, so concurrent
/// classification is safe.
pub fn scores(text: &str) -> Vec<TypeScore> {
    let lowered = text.to_lowercase();
    let feats = TextFeatures::scan(&lowered);
    score_catalog(&lowered, &feats)
}

fn score_catalog(lowered: &str, feats: &TextFeatures) -> Vec<TypeScore> {
    let mut scored = Vec::with_capacity(CATALOG.len());
    for rule in CATALOG {
        let mut score = 0i32;
        for term in rule.critical {
            if lowered.contains(term) {
                score += CRITICAL_BONUS;
            }
        }
        for term in rule.negative {
            if lowered.contains(term) {
                score -= NEGATIVE_PENALTY;
            }
        }
        for (term, weight) in rule.keywords {
            if lowered.contains(term) {
                score += weight;
            }
        }
        if let Some(min) = rule.min_currency_hits {
            if feats.currency_count >= min {
                score += CURRENCY_BONUS;
            }
        }
        scored.push(TypeScore {
            doc_type: rule.doc_type,
            score,
        });
    }
    scored
}

/// Classify one text. Deterministic: the same text and filename always yield
/// the same result. The filename is consulted only when content-based
/// confidence falls below the fallback threshold.
pub fn classify(text: &str, file_name: &str) -> Classification {
    let readable = text.trim().chars().count();

    if readable < MIN_READABLE_CHARS {
        return Classification {
            doc_type: DocumentType::Other,
            confidence: 0.0,
            failure_reason: Some(REASON_NO_TEXT.to_string()),
        };
    }
    if readable < MIN_CLASSIFIABLE_CHARS {
        return Classification {
            doc_type: DocumentType::Other,
            confidence: 0.1,
            failure_reason: Some(REASON_LOW_QUALITY.to_string()),
        };
    }

    let lowered = text.to_lowercase();
    let feats = TextFeatures::scan(&lowered);
    let scored = score_catalog(&lowered, &feats);

    // Highest score wins; ties keep the earlier catalog entry.
    let mut best = scored[0];
    for candidate in &scored[1..] {
        if candidate.score > best.score {
            best = *candidate;
        }
    }

    let mut doc_type = best.doc_type;
    let confidence = (best.score as f32 / CONFIDENCE_SATURATION).clamp(0.0, 1.0);

    if confidence < FILENAME_FALLBACK_THRESHOLD {
        if let Some(hinted) = filename::hint(file_name) {
            tracing::debug!(
                file = file_name,
                from = %doc_type,
                to = %hinted,
                "low-confidence result overridden by filename hint"
            );
            doc_type = hinted;
        }
    }

    tracing::debug!(
        doc_type = %doc_type,
        score = best.score,
        confidence,
        currency = feats.currency_count,
        dates = feats.date_count,
        "classified text"
    );

    Classification {
        doc_type,
        confidence,
        failure_reason: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Padding keeps synthetic texts above the readability threshold without
    // touching any catalog vocabulary.
    const PAD: &str = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor";

    #[test]
    fn short_text_is_unreadable() {
        let c = classify("abc", "scan.pdf");
        assert_eq!(c.doc_type, DocumentType::Other);
        assert_eq!(c.confidence, 0.0);
        assert_eq!(c.failure_reason.as_deref(), Some(REASON_NO_TEXT));
    }

    #[test]
    fn marginal_text_is_low_quality() {
        let c = classify("twenty characters ok", "scan.pdf");
        assert_eq!(c.doc_type, DocumentType::Other);
        assert_eq!(c.confidence, 0.1);
        assert_eq!(c.failure_reason.as_deref(), Some(REASON_LOW_QUALITY));
    }

    #[test]
    fn critical_keyword_saturates_confidence() {
        let text = format!("wage and tax statement {PAD}");
        let c = classify(&text, "scan.pdf");
        assert_eq!(c.doc_type, DocumentType::W2);
        assert_eq!(c.confidence, 1.0);
        assert!(c.failure_reason.is_none());
    }

    #[test]
    fn filename_hint_applies_only_below_threshold() {
        // No catalog vocabulary at all: score 0 everywhere, hint wins.
        let text = format!("{PAD} {PAD}");
        let c = classify(&text, "march_paystub.jpg");
        assert_eq!(c.doc_type, DocumentType::PayStub);

        // Confident content result ignores a conflicting filename.
        let w2 = format!("wage and tax statement {PAD}");
        let c = classify(&w2, "march_paystub.jpg");
        assert_eq!(c.doc_type, DocumentType::W2);
    }

    #[test]
    fn low_confidence_without_hint_stands() {
        let text = format!("{PAD} {PAD}");
        let c = classify(&text, "scan_0001.pdf");
        assert_eq!(c.confidence, 0.0);
        assert!(c.failure_reason.is_none());
    }

    #[test]
    fn currency_bonus_requires_threshold() {
        let sparse = format!("ending balance recorded {PAD}");
        let dense = format!(
            "ending balance recorded $1.00 $2.00 $3.00 $4.00 $5.00 {PAD}"
        );
        let score_of = |text: &str| {
            scores(text)
                .into_iter()
                .find(|s| s.doc_type == DocumentType::BankStatement)
                .unwrap()
                .score
        };
        assert_eq!(
            score_of(&dense) - score_of(&sparse),
            catalog::CURRENCY_BONUS
        );
    }
}

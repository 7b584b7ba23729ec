use sha2::{Digest, Sha256};

/// Masked card data derived at intake. The PAN and CVV are dropped after this
/// conversion; only the fingerprint allows equality checks later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub brand: Option<String>,
    pub last4: String,
    pub fingerprint: String,
}

pub fn summarize(card_number: &str) -> Result<CardSummary, String> {
    let digits: String = card_number.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 12 || digits.len() > 19 {
        return Err("Número de tarjeta inválido".to_string());
    }
    if !luhn_valid(&digits) {
        return Err("Número de tarjeta inválido".to_string());
    }

    let mut hasher = Sha256::new();
    hasher.update(digits.as_bytes());
    let fingerprint = hex::encode(hasher.finalize());

    Ok(CardSummary {
        brand: detect_brand(&digits).map(str::to_string),
        last4: digits[digits.len() - 4..].to_string(),
        fingerprint,
    })
}

fn luhn_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let mut d = c.to_digit(10).unwrap_or(0);
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    sum % 10 == 0
}

fn detect_brand(digits: &str) -> Option<&'static str> {
    if digits.starts_with('4') {
        Some("visa")
    } else if matches!(&digits[..2], "51" | "52" | "53" | "54" | "55") {
        Some("mastercard")
    } else if digits.starts_with("34") || digits.starts_with("37") {
        Some("amex")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visa_test_number_is_summarized() {
        let summary = summarize("4242 4242 4242 4242").unwrap();
        assert_eq!(summary.brand.as_deref(), Some("visa"));
        assert_eq!(summary.last4, "4242");
        assert_eq!(summary.fingerprint.len(), 64);
    }

    #[test]
    fn fingerprint_ignores_spacing() {
        let a = summarize("4242424242424242").unwrap();
        let b = summarize("4242 4242 4242 4242").unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
    }

    #[test]
    fn luhn_failure_is_rejected() {
        assert!(summarize("4242424242424241").is_err());
    }

    #[test]
    fn too_short_number_is_rejected() {
        assert!(summarize("42424242").is_err());
    }

    #[test]
    fn mastercard_prefix_is_detected() {
        let summary = summarize("5555555555554444").unwrap();
        assert_eq!(summary.brand.as_deref(), Some("mastercard"));
    }
}

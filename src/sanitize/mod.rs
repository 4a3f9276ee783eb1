// src/sanitize/mod.rs

use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_]+").expect("invalid identifier pattern"));

/// Sanitize a raw table cell into a valid C identifier.
///
/// Trims surrounding whitespace, collapses every run of characters outside
/// `[0-9A-Za-z_]` into a single underscore, and replaces a leading digit
/// with an underscore. Total: every input produces an output, including the
/// empty string (which stays empty). Distinct raw names may sanitize to the
/// same identifier; no uniqueness check happens here.
pub fn sanitize_identifier(raw: &str) -> String {
    let mut out = NON_IDENT.replace_all(raw.trim(), "_").into_owned();
    if out.chars().next().map_or(false, |c| c.is_ascii_digit()) {
        out.replace_range(0..1, "_");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_symbol_runs_to_one_underscore() {
        assert_eq!(sanitize_identifier("I2C1-EV"), "I2C1_EV");
        assert_eq!(sanitize_identifier("TIM1 BRK / TIM9"), "TIM1_BRK_TIM9");
        assert_eq!(sanitize_identifier("Reserved (CTI0)"), "Reserved_CTI0_");
    }

    #[test]
    fn replaces_leading_digit() {
        assert_eq!(sanitize_identifier("16C0"), "_6C0");
        assert_eq!(sanitize_identifier("100_irq"), "_00_irq");
    }

    #[test]
    fn trims_and_survives_degenerate_input() {
        assert_eq!(sanitize_identifier("  USART1  "), "USART1");
        assert_eq!(sanitize_identifier(""), "");
        assert_eq!(sanitize_identifier("***"), "_");
        assert_eq!(sanitize_identifier("-"), "_");
    }

    const SAMPLES: &[&str] = &[
        "WWDG",
        "EXTI9_5",
        "TIM1 BRK / TIM9",
        "I2C1-EV",
        "100_irq",
        "16C0",
        "überbremse",
        "",
        " ",
        "-",
        "(reserved)",
        "DMA2 Stream7",
    ];

    #[test]
    fn idempotent_over_representative_inputs() {
        for s in SAMPLES {
            let once = sanitize_identifier(s);
            assert_eq!(sanitize_identifier(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn output_is_always_a_valid_identifier() {
        for s in SAMPLES {
            let out = sanitize_identifier(s);
            assert!(
                !out.chars().next().map_or(false, |c| c.is_ascii_digit()),
                "{out:?} starts with a digit"
            );
            assert!(
                out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "{out:?} contains a non-identifier character"
            );
        }
    }
}

//! Positional `{}` template formatting
//!
//! A minimal string-templating formatter for log lines: successive `{}`
//! tokens in the template are replaced by the stringified fields, in
//! order. The two mismatch cases are non-fatal:
//!
//! - Fields exhausted first: the remaining template text is kept as-is.
//! - Placeholders exhausted first: the unused field count is appended to
//!   the output as a diagnostic suffix.

use std::fmt::Display;

/// The placeholder token recognized in templates.
const DELIMITER: &str = "{}";

/// Formats `template`, substituting successive `{}` tokens with the
/// stringified `fields` in order.
///
/// # Example
///
/// ```
/// use opal_utils::logfmt;
///
/// assert_eq!(logfmt::format("value:[{}] bad", &[&7]), "value:[7] bad");
/// assert_eq!(
///     logfmt::format("no placeholder", &[&7]),
///     "no placeholder WARNING:fields left: 1."
/// );
/// ```
pub fn format(template: &str, fields: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut pos = 0;
    while pos < fields.len() {
        match rest.find(DELIMITER) {
            Some(index) => {
                out.push_str(&rest[..index]);
                out.push_str(&fields[pos].to_string());
                rest = &rest[index + DELIMITER.len()..];
                pos += 1;
            }
            None => {
                // Placeholders ran out before fields; report, don't fail.
                out.push_str(rest);
                out.push_str(" WARNING:fields left: ");
                out.push_str(&(fields.len() - pos).to_string());
                out.push('.');
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Formats the template and emits the line at `info` level.
pub fn info(template: &str, fields: &[&dyn Display]) {
    tracing::info!("{}", format(template, fields));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_fields_in_order() {
        assert_eq!(format("value:[{}] bad", &[&7]), "value:[7] bad");
        assert_eq!(format("{} + {} = {}", &[&1, &2, &3]), "1 + 2 = 3");
    }

    #[test]
    fn test_template_remainder_kept_when_fields_exhausted() {
        assert_eq!(format("a:{} b:{} c:{}", &[&1]), "a:1 b:{} c:{}");
    }

    #[test]
    fn test_unused_fields_reported() {
        assert_eq!(
            format("no placeholder", &[&7]),
            "no placeholder WARNING:fields left: 1."
        );
        assert_eq!(format("one:{} only", &[&1, &2, &3]), "one:1 only WARNING:fields left: 2.");
    }

    #[test]
    fn test_no_fields_returns_template_verbatim() {
        assert_eq!(format("untouched {} text", &[]), "untouched {} text");
        assert_eq!(format("", &[]), "");
    }

    #[test]
    fn test_mixed_field_types() {
        assert_eq!(
            format("{}={} ({})", &[&"answer", &42, &true]),
            "answer=42 (true)"
        );
    }
}

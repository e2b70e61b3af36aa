//! Template interpolation
//!
//! The shared primitive behind both keyed lookup and explicit plural
//! selection: a single-pass scanner that substitutes `{{ name }}` tokens
//! with supplied variable values.

use crate::models::Variables;

/// Substitute `{{ name }}` placeholder tokens in `template`.
///
/// Token names consist of ASCII letters, digits and underscores; whitespace
/// around the name is ignored. A token whose variable is missing or null is
/// re-emitted in normalized form (`{{name}}`, whitespace stripped) so a
/// human reader can see which variable was not supplied. Malformed tokens
/// (unclosed, empty, or invalid name characters) pass through literally.
///
/// Substituted values are not re-scanned, so replacement never recurses.
/// When `variables` is `None` the template is returned unchanged without
/// any scanning.
pub fn interpolate(template: &str, variables: Option<&Variables>) -> String {
    let Some(vars) = variables else {
        return template.to_string();
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match parse_token(after) {
            Some((name, consumed)) => {
                match vars.get(name).and_then(|v| v.to_display()) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after[consumed..];
            }
            None => {
                // Not a well-formed token; emit the braces and keep scanning
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parse `name }}` (with optional surrounding whitespace) at the start of
/// `s`. Returns the name and the number of bytes consumed through the
/// closing braces.
fn parse_token(s: &str) -> Option<(&str, usize)> {
    let skip_ws = |mut i: usize| {
        while let Some(ch) = s[i..].chars().next() {
            if ch.is_whitespace() {
                i += ch.len_utf8();
            } else {
                break;
            }
        }
        i
    };

    let start = skip_ws(0);
    let mut end = start;
    while let Some(ch) = s[end..].chars().next() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            end += 1;
        } else {
            break;
        }
    }
    if end == start {
        return None;
    }

    let after_name = skip_ws(end);
    if s[after_name..].starts_with("}}") {
        Some((&s[start..end], after_name + 2))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VarValue;

    fn vars(entries: &[(&str, VarValue)]) -> Variables {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_substitutes_named_value() {
        let v = vars(&[("x", VarValue::from(5i64))]);
        assert_eq!(interpolate("{{x}}", Some(&v)), "5");
    }

    #[test]
    fn test_missing_variable_preserves_token() {
        let v = Variables::new();
        assert_eq!(interpolate("{{x}}", Some(&v)), "{{x}}");
    }

    #[test]
    fn test_no_variables_returns_template_unchanged() {
        assert_eq!(interpolate("no vars here", None), "no vars here");
        assert_eq!(interpolate("{{x}}", None), "{{x}}");
    }

    #[test]
    fn test_null_value_preserves_token() {
        let v = vars(&[("x", VarValue::Null)]);
        assert_eq!(interpolate("{{x}}", Some(&v)), "{{x}}");
    }

    #[test]
    fn test_whitespace_around_name_is_ignored() {
        let v = vars(&[("name", VarValue::from("Alice"))]);
        assert_eq!(interpolate("Hello, {{ name }}!", Some(&v)), "Hello, Alice!");
    }

    #[test]
    fn test_preserved_token_is_normalized() {
        let v = Variables::new();
        assert_eq!(interpolate("{{ name }}", Some(&v)), "{{name}}");
    }

    #[test]
    fn test_repeated_placeholder_substituted_each_time() {
        let v = vars(&[("x", VarValue::from("A"))]);
        assert_eq!(interpolate("{{x}} and {{x}}", Some(&v)), "A and A");
    }

    #[test]
    fn test_substitution_is_not_recursive() {
        let v = vars(&[
            ("x", VarValue::from("{{y}}")),
            ("y", VarValue::from("boom")),
        ]);
        assert_eq!(interpolate("{{x}}", Some(&v)), "{{y}}");
    }

    #[test]
    fn test_malformed_tokens_pass_through() {
        let v = vars(&[("x", VarValue::from("A"))]);
        assert_eq!(interpolate("{{x", Some(&v)), "{{x");
        assert_eq!(interpolate("{{}}", Some(&v)), "{{}}");
        assert_eq!(interpolate("{{a-b}}", Some(&v)), "{{a-b}}");
        assert_eq!(interpolate("{x}", Some(&v)), "{x}");
    }

    #[test]
    fn test_doubled_open_braces_before_token() {
        let v = vars(&[("x", VarValue::from("A"))]);
        assert_eq!(interpolate("{{{{x}}", Some(&v)), "{{A");
    }

    #[test]
    fn test_value_display_variants() {
        let v = vars(&[
            ("s", VarValue::from("txt")),
            ("i", VarValue::from(7i64)),
            ("f", VarValue::from(1.5)),
            ("b", VarValue::from(false)),
        ]);
        assert_eq!(
            interpolate("{{s}} {{i}} {{f}} {{b}}", Some(&v)),
            "txt 7 1.5 false"
        );
    }

    #[test]
    fn test_multibyte_text_around_tokens() {
        let v = vars(&[("name", VarValue::from("Ana"))]);
        assert_eq!(interpolate("¡Hola, {{name}}!", Some(&v)), "¡Hola, Ana!");
    }
}

//! Quantity token parsing and small text utilities

use larder_core::MeasureError;

/// Unicode vulgar fractions accepted in quantity tokens
fn unicode_fraction(c: char) -> Option<f64> {
    match c {
        '¼' => Some(0.25),
        '½' => Some(0.5),
        '¾' => Some(0.75),
        '⅓' => Some(1.0 / 3.0),
        '⅔' => Some(2.0 / 3.0),
        '⅛' => Some(0.125),
        '⅜' => Some(0.375),
        '⅝' => Some(0.625),
        '⅞' => Some(0.875),
        _ => None,
    }
}

/// Parse one quantity token: "2", "1.5", "1/2", "1 1/2", "½", "1½".
pub(crate) fn parse_quantity_token(tok: &str) -> Result<f64, MeasureError> {
    let t = tok.trim();
    if t.is_empty() {
        return Err(MeasureError::InvalidQuantity(tok.to_string()));
    }

    // trailing Unicode fraction, with or without a leading whole part
    let mut chars = t.chars();
    if let Some(last) = chars.next_back() {
        if let Some(frac) = unicode_fraction(last) {
            let lead = chars.as_str().trim();
            if lead.is_empty() {
                return Ok(frac);
            }
            let whole: f64 = lead
                .parse()
                .map_err(|_| MeasureError::InvalidQuantity(tok.to_string()))?;
            return Ok(whole + frac);
        }
    }

    if t.contains('/') {
        // mixed number "1 1/2", else plain fraction (possibly spaced "1 / 2")
        if let Some((head, tail)) = t.split_once(char::is_whitespace) {
            let tail = tail.trim_start();
            if !tail.starts_with('/') {
                let whole: f64 = head
                    .parse()
                    .map_err(|_| MeasureError::InvalidQuantity(tok.to_string()))?;
                return Ok(whole + parse_fraction(tail, tok)?);
            }
        }
        return parse_fraction(t, tok);
    }

    t.parse()
        .map_err(|_| MeasureError::InvalidQuantity(tok.to_string()))
}

fn parse_fraction(s: &str, original: &str) -> Result<f64, MeasureError> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let (num, den) = compact
        .split_once('/')
        .ok_or_else(|| MeasureError::InvalidQuantity(original.to_string()))?;
    let n: f64 = num
        .parse()
        .map_err(|_| MeasureError::InvalidQuantity(original.to_string()))?;
    let d: f64 = den
        .parse()
        .map_err(|_| MeasureError::InvalidQuantity(original.to_string()))?;
    if d == 0.0 {
        return Err(MeasureError::InvalidQuantity(original.to_string()));
    }
    Ok(n / d)
}

/// Collapse runs of whitespace to single spaces and trim
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_integers_and_decimals() {
        assert!(close(parse_quantity_token("2").unwrap(), 2.0));
        assert!(close(parse_quantity_token("1.5").unwrap(), 1.5));
        assert!(close(parse_quantity_token(".5").unwrap(), 0.5));
    }

    #[test]
    fn test_fractions() {
        assert!(close(parse_quantity_token("1/2").unwrap(), 0.5));
        assert!(close(parse_quantity_token("3/4").unwrap(), 0.75));
        assert!(close(parse_quantity_token("1 / 2").unwrap(), 0.5));
    }

    #[test]
    fn test_mixed_numbers() {
        assert!(close(parse_quantity_token("1 1/2").unwrap(), 1.5));
        assert!(close(parse_quantity_token("2 3/4").unwrap(), 2.75));
    }

    #[test]
    fn test_unicode_fractions() {
        assert!(close(parse_quantity_token("½").unwrap(), 0.5));
        assert!(close(parse_quantity_token("¾").unwrap(), 0.75));
        assert!(close(parse_quantity_token("1½").unwrap(), 1.5));
        assert!(close(parse_quantity_token("2 ⅓").unwrap(), 2.0 + 1.0 / 3.0));
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(parse_quantity_token("").is_err());
        assert!(parse_quantity_token("abc").is_err());
        assert!(parse_quantity_token("1/0").is_err());
        assert!(parse_quantity_token("1//2").is_err());
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  chicken   breast "), "chicken breast");
    }
}

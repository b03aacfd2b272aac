use crate::foundation::error::{VitrineError, VitrineResult};

/// Straight-alpha color parsed from a CSS color string, components in 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl CssColor {
    /// Opaque black, the shadow-color fallback.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`/`#RRGGBB`/`#RRGGBBAA` hex plus the `rgb()`, `rgba()`,
    /// `hsl()` and `hsla()` functional forms.
    pub fn parse(s: &str) -> VitrineResult<Self> {
        let t = s.trim();
        if let Some(hex) = t.strip_prefix('#') {
            return parse_hex(hex).map_err(VitrineError::validation);
        }

        let lower = t.to_ascii_lowercase();
        let body = |prefix: &str| -> Option<&str> {
            lower
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix(')'))
        };

        if let Some(args) = body("rgba(").or_else(|| body("rgb(")) {
            return parse_rgb_args(args).map_err(VitrineError::validation);
        }
        if let Some(args) = body("hsla(").or_else(|| body("hsl(")) {
            return parse_hsl_args(args).map_err(VitrineError::validation);
        }

        Err(VitrineError::validation(format!(
            "unsupported color string \"{t}\""
        )))
    }

    /// Parse, falling back to `fallback` on any error.
    pub fn parse_or(s: &str, fallback: Self) -> Self {
        Self::parse(s).unwrap_or(fallback)
    }

    /// Straight-alpha 8-bit components.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

fn parse_hex(s: &str) -> Result<CssColor, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    fn hex_nibble(ch: &str) -> Result<u8, String> {
        let v = u8::from_str_radix(ch, 16).map_err(|_| format!("invalid hex digit \"{ch}\""))?;
        Ok(v * 17)
    }

    let (r, g, b, a) = match s.len() {
        3 => {
            let r = hex_nibble(&s[0..1])?;
            let g = hex_nibble(&s[1..2])?;
            let b = hex_nibble(&s[2..3])?;
            (r, g, b, 255)
        }
        6 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            (r, g, b, 255)
        }
        8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = hex_byte(&s[6..8])?;
            (r, g, b, a)
        }
        _ => {
            return Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA".to_owned());
        }
    };

    Ok(CssColor::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

fn parse_rgb_args(args: &str) -> Result<CssColor, String> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err("rgb()/rgba() expects 3 or 4 components".to_owned());
    }

    // Channels are 0..255, alpha 0..1, per the CSS legacy syntax.
    let channel = |s: &str| -> Result<f64, String> {
        let v: f64 = s
            .parse()
            .map_err(|_| format!("invalid rgb channel \"{s}\""))?;
        Ok((v / 255.0).clamp(0.0, 1.0))
    };

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if parts.len() == 4 {
        parts[3]
            .parse::<f64>()
            .map_err(|_| format!("invalid alpha \"{}\"", parts[3]))?
            .clamp(0.0, 1.0)
    } else {
        1.0
    };

    Ok(CssColor::rgba(r, g, b, a))
}

fn parse_hsl_args(args: &str) -> Result<CssColor, String> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err("hsl()/hsla() expects 3 or 4 components".to_owned());
    }

    let h: f64 = parts[0]
        .parse()
        .map_err(|_| format!("invalid hue \"{}\"", parts[0]))?;
    let percent = |s: &str| -> Result<f64, String> {
        let body = s.strip_suffix('%').unwrap_or(s);
        let v: f64 = body
            .parse()
            .map_err(|_| format!("invalid percentage \"{s}\""))?;
        Ok((v / 100.0).clamp(0.0, 1.0))
    };
    let s = percent(parts[1])?;
    let l = percent(parts[2])?;
    let a = if parts.len() == 4 {
        parts[3]
            .parse::<f64>()
            .map_err(|_| format!("invalid alpha \"{}\"", parts[3]))?
            .clamp(0.0, 1.0)
    } else {
        1.0
    };

    Ok(hsla_to_rgba(h, s, l, a))
}

fn hsla_to_rgba(h: f64, s: f64, l: f64, a: f64) -> CssColor {
    // Standard HSL -> RGB conversion (sRGB space, normalized 0..1 inputs).
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return CssColor::rgba(l, l, l, a);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);
    CssColor::rgba(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        let c = CssColor::parse("#ff0000").unwrap();
        assert_eq!(c, CssColor::rgba(1.0, 0.0, 0.0, 1.0));

        let c = CssColor::parse("#f00").unwrap();
        assert_eq!(c, CssColor::rgba(1.0, 0.0, 0.0, 1.0));

        let c = CssColor::parse("#0000ff80").unwrap();
        assert!((c.b - 1.0).abs() < 1e-9);
        assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
    }

    #[test]
    fn parses_functional_forms() {
        let c = CssColor::parse("rgb(255, 128, 0)").unwrap();
        assert!((c.r - 1.0).abs() < 1e-9);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-9);
        assert!((c.a - 1.0).abs() < 1e-9);

        let c = CssColor::parse("rgba(0, 0, 0, 0.5)").unwrap();
        assert!((c.a - 0.5).abs() < 1e-9);

        let c = CssColor::parse("hsl(0, 100%, 50%)").unwrap();
        assert!((c.r - 1.0).abs() < 1e-9);
        assert!((c.g - 0.0).abs() < 1e-9);
        assert!((c.b - 0.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_strings_fall_back() {
        assert!(CssColor::parse("").is_err());
        assert!(CssColor::parse("magentaish").is_err());
        assert!(CssColor::parse("#12345").is_err());
        assert_eq!(CssColor::parse_or("nope", CssColor::BLACK), CssColor::BLACK);
    }

    #[test]
    fn to_rgba8_keeps_straight_alpha() {
        let s = CssColor::rgba(1.0, 1.0, 1.0, 0.5).to_rgba8();
        assert_eq!(s, [255, 255, 255, 128]);
        assert_eq!(CssColor::rgba(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }
}

//! Concrete color parsing and perceived-brightness classification.
//!
//! Everything the pipeline knows about a *concrete* color string lives here:
//! turning it into channel values, deciding whether it reads as dark or light,
//! and re-emitting it with a different alpha.
//!
//! # Supported syntax
//!
//! | Form | Example |
//! |------|---------|
//! | Hex, 3/4/6/8 digits | `#fff`, `#7D4CDB`, `#11111111` |
//! | `rgb()` / `rgba()` | `rgb(125, 76, 219)`, `rgba(0, 0, 0, 0.33)`, `rgb(0 0 0 / 50%)` |
//! | `hsl()` / `hsla()` | `hsl(260, 66%, 58%)` |
//!
//! Anything else (gradients, `url(...)`, `transparent`, CSS color keywords like
//! `crimson`) is deliberately left unparsed. Those values cannot take part in
//! contrast inference and are emitted verbatim by the style emitter.
//!
//! Parsing goes through the `cssparser` tokenizer so comments, whitespace and
//! case are handled the way a browser would handle them.
//!
//! # Example
//!
//! ```rust
//! use backdrop::colorspace::{blend, is_dark};
//!
//! assert_eq!(is_dark("#7D4CDB"), Some(true));
//! assert_eq!(is_dark("#FFCA58"), Some(false));
//! assert_eq!(is_dark("linear-gradient(#000, #fff)"), None);
//!
//! assert_eq!(blend("#7D4CDB", Some(0.4)).as_deref(), Some("rgba(125, 76, 219, 0.4)"));
//! ```

use cssparser::{ParseError, Parser, ParserInput, Token};

/// Perceived brightness below which a color counts as dark.
pub const DARK_BRIGHTNESS_THRESHOLD: f64 = 125.0;

/// Alpha below which a color is too translucent to classify.
pub const MIN_CLASSIFIABLE_ALPHA: f64 = 0.5;

// ─── Rgba ───────────────────────────────────────────────────────────────────

/// A parsed sRGB color with an optional alpha channel.
///
/// `alpha` is `None` when the source syntax carried no alpha component, which
/// is distinct from an explicit `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: Option<f64>,
}

impl Rgba {
    /// Creates an opaque color with no explicit alpha.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Returns the same channels with the given alpha.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// Perceived brightness on a 0–255 scale.
    ///
    /// Uses the weighted channel sum `(299 r + 587 g + 114 b) / 1000`, the
    /// same formula the W3C accessibility notes use for color-contrast checks.
    pub fn brightness(&self) -> f64 {
        (299.0 * self.red as f64 + 587.0 * self.green as f64 + 114.0 * self.blue as f64) / 1000.0
    }

    /// Classifies the color as dark (`Some(true)`) or light (`Some(false)`).
    ///
    /// Returns `None` when the alpha channel is below
    /// [`MIN_CLASSIFIABLE_ALPHA`]: the surface underneath dominates what the
    /// reader actually sees.
    pub fn is_dark(&self) -> Option<bool> {
        if self.alpha.is_some_and(|a| a < MIN_CLASSIFIABLE_ALPHA) {
            return None;
        }
        Some(self.brightness() < DARK_BRIGHTNESS_THRESHOLD)
    }

    /// Formats as `rgba(r, g, b, a)`, treating a missing alpha as `1`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            self.alpha.unwrap_or(1.0)
        )
    }

    /// Parses hex digits (without the `#` prefix).
    ///
    /// Accepts 3, 4, 6 or 8 digits. Short forms double each digit, and a
    /// fourth/eighth component becomes the alpha channel scaled to `0..=1`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channels: Vec<u8> = match hex.len() {
            3 | 4 => hex
                .chars()
                .map(|c| u8::from_str_radix(&format!("{c}{c}"), 16))
                .collect::<Result<_, _>>()
                .ok()?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
                .collect::<Result<_, _>>()
                .ok()?,
            _ => return None,
        };

        let mut color = Rgba::rgb(channels[0], channels[1], channels[2]);
        if let Some(alpha) = channels.get(3) {
            color.alpha = Some(*alpha as f64 / 255.0);
        }
        Some(color)
    }
}

// ─── Parsing ────────────────────────────────────────────────────────────────

/// Parses a concrete CSS color string.
///
/// Returns `None` for anything outside the supported syntax, including
/// trailing garbage after an otherwise valid color.
pub fn parse_color(color: &str) -> Option<Rgba> {
    let mut input = ParserInput::new(color.trim());
    let mut parser = Parser::new(&mut input);
    let rgba = parse_color_token(&mut parser).ok()?;
    parser.expect_exhausted().ok()?;
    Some(rgba)
}

/// Classifies a concrete color string as dark or light.
///
/// `None` means "unknown": the string is not a parseable color (gradient,
/// keyword, image) or is too translucent to judge. Callers must not coerce it
/// to either answer.
pub fn is_dark(color: &str) -> Option<bool> {
    parse_color(color).and_then(|rgba| rgba.is_dark())
}

/// Re-emits `color` as `rgba()` with the given opacity.
///
/// Returns `None` if there is no opacity to apply or the color cannot be
/// parsed; callers keep the original color in that case.
pub fn blend(color: &str, opacity: Option<f64>) -> Option<String> {
    let opacity = opacity?;
    parse_color(color).map(|rgba| rgba.with_alpha(opacity).to_css())
}

fn parse_color_token<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Rgba, ParseError<'i, ()>> {
    let token = input.next()?.clone();
    match token {
        Token::Hash(ref hex) | Token::IDHash(ref hex) => {
            Rgba::from_hex(hex.as_ref()).ok_or_else(|| input.new_custom_error::<(), ()>(()))
        }
        Token::Function(ref name) if is_function(name.as_ref(), "rgb") => {
            input.parse_nested_block(|input| parse_rgb_arguments(input))
        }
        Token::Function(ref name) if is_function(name.as_ref(), "hsl") => {
            input.parse_nested_block(|input| parse_hsl_arguments(input))
        }
        _ => Err(input.new_custom_error::<(), ()>(())),
    }
}

/// Matches `rgb`/`rgba` (or `hsl`/`hsla`) case-insensitively.
fn is_function(name: &str, base: &str) -> bool {
    name.eq_ignore_ascii_case(base)
        || (name.len() == base.len() + 1
            && name
                .get(..base.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(base))
            && name.ends_with(|c: char| c == 'a' || c == 'A'))
}

/// A numeric component inside a color function.
#[derive(Debug, Clone, Copy)]
enum Component {
    Number(f32),
    Percent(f32),
}

impl Component {
    /// Value as a 0–255 channel.
    fn channel(self) -> u8 {
        let value = match self {
            Component::Number(n) => n,
            Component::Percent(p) => p * 255.0,
        };
        value.round().clamp(0.0, 255.0) as u8
    }

    /// Value as a 0–1 fraction (alpha, saturation, lightness).
    fn fraction(self, number_scale: f32) -> f64 {
        let value = match self {
            Component::Number(n) => n / number_scale,
            Component::Percent(p) => p,
        };
        (value as f64).clamp(0.0, 1.0)
    }
}

/// Collects the numeric components of a color function body.
///
/// Commas and a `/` alpha separator are accepted and skipped, so both the
/// legacy and the space-separated syntax parse. A `deg` angle is only valid as
/// the first component, and only when `leading_angle` is set (the hue of `hsl()`).
fn parse_components<'i, 't>(
    input: &mut Parser<'i, 't>,
    leading_angle: bool,
) -> Result<Vec<Component>, ParseError<'i, ()>> {
    let mut components = Vec::new();
    while !input.is_exhausted() {
        let token = input.next()?.clone();
        match token {
            Token::Number { value, .. } => components.push(Component::Number(value)),
            Token::Percentage { unit_value, .. } => components.push(Component::Percent(unit_value)),
            Token::Dimension {
                value, ref unit, ..
            } if leading_angle && components.is_empty() && unit.eq_ignore_ascii_case("deg") => {
                components.push(Component::Number(value))
            }
            Token::Comma | Token::Delim('/') => {}
            _ => return Err(input.new_custom_error::<(), ()>(())),
        }
    }
    Ok(components)
}

fn parse_rgb_arguments<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Rgba, ParseError<'i, ()>> {
    let components = parse_components(input, false)?;
    match components.as_slice() {
        [r, g, b] => Ok(Rgba::rgb(r.channel(), g.channel(), b.channel())),
        [r, g, b, a] => Ok(Rgba::rgb(r.channel(), g.channel(), b.channel()).with_alpha(a.fraction(1.0))),
        _ => Err(input.new_custom_error::<(), ()>(())),
    }
}

fn parse_hsl_arguments<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Rgba, ParseError<'i, ()>> {
    let components = parse_components(input, true)?;
    let (hue, saturation, lightness, alpha) = match components.as_slice() {
        [h, s, l] => (*h, *s, *l, None),
        [h, s, l, a] => (*h, *s, *l, Some(a.fraction(1.0))),
        _ => return Err(input.new_custom_error::<(), ()>(())),
    };
    let hue = match hue {
        Component::Number(n) => n as f64,
        Component::Percent(p) => p as f64 * 360.0,
    };
    // Bare numbers for saturation/lightness are read as percentages.
    let (red, green, blue) = hsl_to_rgb(hue, saturation.fraction(100.0), lightness.fraction(100.0));
    let rgba = Rgba::rgb(red, green, blue);
    Ok(match alpha {
        Some(a) => rgba.with_alpha(a),
        None => rgba,
    })
}

/// Converts HSL (hue in degrees, saturation and lightness in `0..=1`) to sRGB.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let to_channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    if saturation == 0.0 {
        let gray = to_channel(lightness);
        return (gray, gray, gray);
    }

    let h = hue.rem_euclid(360.0) / 360.0;
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let hue_to_rgb = |t: f64| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    (
        to_channel(hue_to_rgb(h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(h)),
        to_channel(hue_to_rgb(h - 1.0 / 3.0)),
    )
}

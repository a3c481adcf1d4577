//! Markup emission: number formatting, attribute escaping and the element
//! writer every generator ends with.
//!
//! Fragments use single-quoted attributes and self-closing tags:
//! `<ellipse cx='50' cy='25' rx='50' ry='25' fill='#ff0000' ... />`.

use std::borrow::Cow;
use std::fmt;

use glam::DVec2;

use super::defaults::SIG_FIGS;
use super::fill::Paint;

/// Format a coordinate with the engine's precision.
///
/// NaN and infinities print as `0`; nothing non-finite ever reaches markup.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, SIG_FIGS)
}

/// `%g`-style formatting: `sig_figs` significant digits, trailing zeros
/// dropped from the fraction.
pub fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if !value.is_finite() || value.abs() < 1e-9 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);

    // Integers carry no fraction to trim: "100000" must stay "100000".
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// `x,y` pairs separated by spaces, as used by `points` attributes.
pub fn fmt_points(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape a caller-supplied value for a single-quoted attribute.
///
/// Existing entities such as `&amp;` or `&#39;` pass through untouched.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '\'', '"']) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len() + 8);
    for (i, ch) in s.char_indices() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            '&' if is_entity_at(bytes, i) => out.push('&'),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Matches `&[#]?[a-zA-Z0-9]+;` at `i`.
fn is_entity_at(bytes: &[u8], i: usize) -> bool {
    let mut j = i + 1;
    if bytes.get(j) == Some(&b'#') {
        j += 1;
    }
    let start = j;
    while let Some(&c) = bytes.get(j) {
        if c == b';' {
            return j > start;
        } else if c.is_ascii_alphanumeric() {
            j += 1;
        } else {
            return false;
        }
    }
    false
}

/// One self-closing markup element under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    /// Add an attribute; the value is escaped.
    pub fn add(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push((name, escape_attr(value).into_owned()));
        self
    }

    /// Add a numeric attribute.
    pub fn num(mut self, name: &'static str, value: f64) -> Self {
        self.attrs.push((name, fmt_num(value)));
        self
    }

    /// Fill and stroke attributes, in the order every fragment uses.
    pub fn paint(self, paint: &Paint) -> Self {
        self.add("fill", &paint.fill)
            .add("stroke", &paint.stroke.color)
            .num("stroke-width", paint.stroke.width)
            .add("stroke-dasharray", &paint.stroke.dasharray)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}='{value}'")?;
        }
        write!(f, " />")
    }
}

/// `<ellipse>` with the given centre and radii.
pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, paint: &Paint) -> Element {
    Element::new("ellipse")
        .num("cx", cx)
        .num("cy", cy)
        .num("rx", rx)
        .num("ry", ry)
        .paint(paint)
}

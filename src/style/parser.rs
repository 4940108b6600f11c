use crate::style::descriptor::StyleDescriptor;
use crate::style::invalidation::Invalidation;
use crate::style::parsed_style::ParsedStyle;
use crate::style::sides::{BoxSides, ShapeError};
use crate::style::unit::{UnitKind, UnitValue};
use smol_str::SmolStr;
use thiserror::Error;
use tracing::warn;

/// Why a length token could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("length `{0}` has no numeric prefix")]
    MissingNumber(SmolStr),
    #[error("length `{0}` has a malformed number")]
    InvalidNumber(SmolStr),
    #[error("length `{token}` has unknown unit `{suffix}`")]
    UnknownUnit { token: SmolStr, suffix: SmolStr },
}

/// Reads one length token.
///
/// `""` and `auto` are [`UnitValue::AUTO`], as is a bare number. Percent-family
/// units are stored as fractions.
pub fn try_parse_value(token: &str) -> Result<UnitValue, ParseError> {
    let token = token.trim();
    if token.is_empty() || token == "auto" {
        return Ok(UnitValue::AUTO);
    }

    let end = numeric_prefix_end(token).ok_or_else(|| ParseError::MissingNumber(token.into()))?;
    let (number, suffix) = token.split_at(end);
    let value: f32 = number
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.into()))?;

    let kind = match suffix {
        "" => return Ok(UnitValue::AUTO),
        "px" => return Ok(UnitValue::px(value)),
        "%" => UnitKind::Percent,
        "vw" => UnitKind::ViewportWidth,
        "vh" => UnitKind::ViewportHeight,
        "w%" => UnitKind::ParentWidthPercent,
        "h%" => UnitKind::ParentHeightPercent,
        _ => {
            return Err(ParseError::UnknownUnit {
                token: token.into(),
                suffix: suffix.into(),
            });
        }
    };
    Ok(UnitValue::new(value / 100.0, kind))
}

/// Sign, digits and at most one decimal point. `None` when no digit is seen.
fn numeric_prefix_end(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    let mut index = 0;
    let mut seen_digit = false;
    let mut seen_point = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        index += 1;
    }
    while let Some(&byte) = bytes.get(index) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        index += 1;
    }
    seen_digit.then_some(index)
}

/// Turns [`StyleDescriptor`]s into [`ParsedStyle`]s.
///
/// Malformed lengths never fail the parse: they fall back to auto. Only a side
/// list with more than four values is rejected.
#[derive(Debug, Clone, Copy)]
pub struct StyleParser {
    warnings: bool,
}

impl Default for StyleParser {
    fn default() -> Self {
        Self { warnings: true }
    }
}

impl StyleParser {
    pub const fn new() -> Self {
        Self { warnings: true }
    }

    pub const fn with_warnings(mut self, warnings: bool) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn parse_value(&self, token: &str) -> UnitValue {
        match try_parse_value(token) {
            Ok(value) => value,
            Err(err) => {
                if self.warnings {
                    match &err {
                        ParseError::UnknownUnit { token, suffix } => {
                            warn!(token = %token, suffix = %suffix, "unknown length unit, using auto");
                        }
                        ParseError::MissingNumber(token) | ParseError::InvalidNumber(token) => {
                            warn!(token = %token, suffix = "", "malformed length, using auto");
                        }
                    }
                }
                UnitValue::AUTO
            }
        }
    }

    /// One to four whitespace separated lengths, expanded like CSS shorthand.
    pub fn parse_sides(&self, raw: &str) -> Result<BoxSides<UnitValue>, ShapeError> {
        let tokens: Vec<&str> = raw.split_ascii_whitespace().collect();
        if tokens.len() > 4 {
            return Err(ShapeError::InvalidSideCount(tokens.len()));
        }
        let values: Vec<UnitValue> = tokens.iter().map(|token| self.parse_value(token)).collect();
        BoxSides::from_shorthand(&values)
    }

    fn value(&self, raw: &Option<SmolStr>) -> UnitValue {
        raw.as_deref().map_or(UnitValue::AUTO, |token| self.parse_value(token))
    }

    fn sides(&self, raw: &Option<SmolStr>) -> Result<BoxSides<UnitValue>, ShapeError> {
        match raw.as_deref() {
            Some(raw) => self.parse_sides(raw),
            None => Ok(BoxSides::default()),
        }
    }

    pub fn parse(&self, raw: &StyleDescriptor) -> Result<ParsedStyle, ShapeError> {
        Ok(ParsedStyle {
            visibility: raw.visibility,
            sizing: raw.sizing,
            width: self.value(&raw.width),
            height: self.value(&raw.height),
            min_width: self.value(&raw.min_width),
            min_height: self.value(&raw.min_height),
            max_width: self.value(&raw.max_width),
            max_height: self.value(&raw.max_height),
            positioning: raw.positioning,
            position_x: self.value(&raw.position_x),
            position_y: self.value(&raw.position_y),
            padding: self.sides(&raw.padding)?,
            margin: self.sides(&raw.margin)?,
            border_width: self.sides(&raw.border_width)?,
            border_radius: self.sides(&raw.border_radius)?,
            background_color: raw.background_color,
            border_color: raw.border_color,
            shadow_color: raw.shadow_color,
            shadow_offset_x: self.value(&raw.shadow_offset_x),
            shadow_offset_y: self.value(&raw.shadow_offset_y),
            layout: raw.layout.clone(),
            visual: raw.visual.clone(),
            input: raw.input.clone(),
            pending: Invalidation::empty(),
        })
    }

    /// Re-parses `raw` over `target` through its setters.
    ///
    /// `target` is untouched when the descriptor has a malformed side list.
    pub fn parse_into(
        &self,
        target: &mut ParsedStyle,
        raw: &StyleDescriptor,
    ) -> Result<Invalidation, ShapeError> {
        let parsed = self.parse(raw)?;
        Ok(target.assign(&parsed))
    }
}

pub fn parse_value(token: &str) -> UnitValue {
    StyleParser::new().parse_value(token)
}

pub fn parse_sides(raw: &str) -> Result<BoxSides<UnitValue>, ShapeError> {
    StyleParser::new().parse_sides(raw)
}

pub fn parse_style(raw: &StyleDescriptor) -> Result<ParsedStyle, ShapeError> {
    StyleParser::new().parse(raw)
}

#[cfg(test)]
mod tests {
    use super::{ParseError, StyleParser, parse_sides, parse_style, parse_value, try_parse_value};
    use crate::style::color::Color;
    use crate::style::descriptor::{SizingPolicy, StyleDescriptor};
    use crate::style::invalidation::Invalidation;
    use crate::style::parsed_style::ParsedStyle;
    use crate::style::sides::{BoxSides, ShapeError};
    use crate::style::unit::{UnitKind, UnitValue};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-5
    }

    #[test]
    fn parses_every_unit_suffix() {
        assert_eq!(parse_value("12px"), UnitValue::px(12.0));
        assert_eq!(parse_value("50%"), UnitValue::percent(0.5));
        assert_eq!(parse_value("25vw"), UnitValue::vw(0.25));
        assert_eq!(parse_value("20vh"), UnitValue::vh(0.2));
        assert_eq!(parse_value("10w%"), UnitValue::parent_width(0.1));
        assert_eq!(parse_value("40h%"), UnitValue::parent_height(0.4));
    }

    #[test]
    fn auto_forms() {
        assert_eq!(parse_value("auto"), UnitValue::AUTO);
        assert_eq!(parse_value(""), UnitValue::AUTO);
        assert_eq!(parse_value("12"), UnitValue::AUTO);
    }

    #[test]
    fn signed_and_fractional_numbers() {
        assert_eq!(parse_value("-4px"), UnitValue::px(-4.0));
        assert_eq!(parse_value("+1.5px"), UnitValue::px(1.5));
        assert_eq!(parse_value(".5px"), UnitValue::px(0.5));
    }

    #[test]
    fn percent_round_trips_as_fraction() {
        for m in [0.0_f32, 0.1, 0.25, 0.5, 0.75, 1.0, 2.0] {
            let token = format!("{}%", 100.0 * m);
            let parsed = parse_value(&token);
            assert_eq!(parsed.kind, UnitKind::Percent);
            assert!(approx_eq(parsed.magnitude, m), "{token} -> {parsed:?}");
        }
    }

    #[test]
    fn malformed_tokens_report_why() {
        assert_eq!(try_parse_value("px"), Err(ParseError::MissingNumber("px".into())));
        assert_eq!(
            try_parse_value("10em"),
            Err(ParseError::UnknownUnit {
                token: "10em".into(),
                suffix: "em".into(),
            })
        );
        assert_eq!(
            try_parse_value("1.2.3px"),
            Err(ParseError::UnknownUnit {
                token: "1.2.3px".into(),
                suffix: ".3px".into(),
            })
        );
    }

    #[test]
    fn malformed_tokens_fall_back_to_auto() {
        let parser = StyleParser::new().with_warnings(false);
        assert_eq!(parser.parse_value("10em"), UnitValue::AUTO);
        assert_eq!(parser.parse_value("abc"), UnitValue::AUTO);
        assert_eq!(parser.parse_value("-"), UnitValue::AUTO);
    }

    #[test]
    fn side_lists_expand_like_css() {
        let ten = UnitValue::px(10.0);
        let five = UnitValue::px(5.0);
        assert_eq!(parse_sides("10px"), Ok(BoxSides::uniform(ten)));
        assert_eq!(parse_sides("10px 5px"), Ok(BoxSides::new(ten, five, ten, five)));
        assert_eq!(
            parse_sides("1px 2px 3px"),
            Ok(BoxSides::new(
                UnitValue::px(1.0),
                UnitValue::px(2.0),
                UnitValue::px(3.0),
                UnitValue::px(2.0)
            ))
        );
        assert_eq!(
            parse_sides(" 1px  2px 3px 4px "),
            Ok(BoxSides::new(
                UnitValue::px(1.0),
                UnitValue::px(2.0),
                UnitValue::px(3.0),
                UnitValue::px(4.0)
            ))
        );
        assert_eq!(parse_sides(""), Ok(BoxSides::uniform(UnitValue::AUTO)));
    }

    #[test]
    fn too_many_sides_is_a_shape_error() {
        assert_eq!(
            parse_sides("1px 2px 3px 4px 5px"),
            Err(ShapeError::InvalidSideCount(5))
        );
    }

    #[test]
    fn descriptor_parses_without_pending_changes() {
        let raw = StyleDescriptor::new()
            .size("300px", "50%")
            .sizing(SizingPolicy::Content)
            .padding("10px")
            .background_color(Color::rgb(1, 2, 3));
        let mut style = parse_style(&raw).unwrap();
        assert_eq!(style.width(), UnitValue::px(300.0));
        assert_eq!(style.height(), UnitValue::percent(0.5));
        assert_eq!(style.min_width(), UnitValue::AUTO);
        assert_eq!(style.sizing(), Some(SizingPolicy::Content));
        assert_eq!(style.padding(), BoxSides::uniform(UnitValue::px(10.0)));
        assert_eq!(style.margin(), BoxSides::uniform(UnitValue::AUTO));
        assert_eq!(style.background_color(), Some(Color::rgb(1, 2, 3)));
        assert_eq!(style.visibility(), None);
        assert_eq!(style.take_invalidation(), Invalidation::empty());
    }

    #[test]
    fn bad_side_list_leaves_target_untouched() {
        let parser = StyleParser::new();
        let mut target = ParsedStyle::new();
        target.set_width(UnitValue::px(5.0));
        target.take_invalidation();

        let raw = StyleDescriptor::new().width("10px").margin("1px 1px 1px 1px 1px");
        assert_eq!(
            parser.parse_into(&mut target, &raw),
            Err(ShapeError::InvalidSideCount(5))
        );
        assert_eq!(target.width(), UnitValue::px(5.0));
    }

    #[test]
    fn parse_into_publishes_changes() {
        let parser = StyleParser::new();
        let mut target = ParsedStyle::new();
        let raw = StyleDescriptor::new().border_color(Color::rgb(9, 9, 9));
        assert_eq!(parser.parse_into(&mut target, &raw), Ok(Invalidation::REDRAW));
        assert_eq!(parser.parse_into(&mut target, &raw), Ok(Invalidation::empty()));
    }
}

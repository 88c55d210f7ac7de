//! Caller-supplied style and formality preferences
//!
//! Both axes are parsed from the exact lowercase strings the boundary
//! receives. Anything else is an [`UnknownPreference`]; there is no fallback.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which preference axis a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceAxis {
    Style,
    Formality,
}

impl fmt::Display for PreferenceAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceAxis::Style => f.write_str("style"),
            PreferenceAxis::Formality => f.write_str("formality"),
        }
    }
}

/// A preference value outside the recognized enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {axis} '{value}' (expected {})", expected(.axis))]
pub struct UnknownPreference {
    pub axis: PreferenceAxis,
    pub value: String,
}

fn expected(axis: &PreferenceAxis) -> &'static str {
    match axis {
        PreferenceAxis::Style => "'subtle' or 'bold'",
        PreferenceAxis::Formality => "'casual' or 'professional'",
    }
}

/// How loud the recommended colors should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Subtle,
    Bold,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Subtle, Style::Bold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Subtle => "subtle",
            Style::Bold => "bold",
        }
    }
}

impl FromStr for Style {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subtle" => Ok(Style::Subtle),
            "bold" => Ok(Style::Bold),
            other => Err(UnknownPreference {
                axis: PreferenceAxis::Style,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The occasion the outfits are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    #[default]
    Casual,
    Professional,
}

impl Formality {
    pub const ALL: [Formality; 2] = [Formality::Casual, Formality::Professional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::Professional => "professional",
        }
    }
}

impl FromStr for Formality {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "casual" => Ok(Formality::Casual),
            "professional" => Ok(Formality::Professional),
            other => Err(UnknownPreference {
                axis: PreferenceAxis::Formality,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated (style, formality) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub style: Style,
    pub formality: Formality,
}

impl Preferences {
    pub fn new(style: Style, formality: Formality) -> Self {
        Self { style, formality }
    }

    /// Validate both axes. Style is checked first.
    pub fn parse(style: &str, formality: &str) -> Result<Self, UnknownPreference> {
        Ok(Self {
            style: style.parse()?,
            formality: formality.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_values() {
        assert_eq!("subtle".parse::<Style>().unwrap(), Style::Subtle);
        assert_eq!("bold".parse::<Style>().unwrap(), Style::Bold);
        assert_eq!("casual".parse::<Formality>().unwrap(), Formality::Casual);
        assert_eq!(
            "professional".parse::<Formality>().unwrap(),
            Formality::Professional
        );
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let err = "medium".parse::<Style>().unwrap_err();
        assert_eq!(err.axis, PreferenceAxis::Style);
        assert_eq!(err.value, "medium");
        assert_eq!(
            err.to_string(),
            "unknown style 'medium' (expected 'subtle' or 'bold')"
        );
    }

    #[test]
    fn test_unknown_formality_is_rejected() {
        let err = "formal".parse::<Formality>().unwrap_err();
        assert_eq!(err.axis, PreferenceAxis::Formality);
        assert_eq!(
            err.to_string(),
            "unknown formality 'formal' (expected 'casual' or 'professional')"
        );
    }

    #[test]
    fn test_no_case_or_whitespace_coercion() {
        assert!("Bold".parse::<Style>().is_err());
        assert!(" subtle".parse::<Style>().is_err());
        assert!("".parse::<Formality>().is_err());
        assert!("CASUAL".parse::<Formality>().is_err());
    }

    #[test]
    fn test_preferences_parse() {
        let prefs = Preferences::parse("bold", "professional").unwrap();
        assert_eq!(prefs, Preferences::new(Style::Bold, Formality::Professional));

        let err = Preferences::parse("bold", "black-tie").unwrap_err();
        assert_eq!(err.axis, PreferenceAxis::Formality);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
        for formality in Formality::ALL {
            assert_eq!(formality.to_string().parse::<Formality>().unwrap(), formality);
        }
    }
}

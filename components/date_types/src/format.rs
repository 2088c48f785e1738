//! Format descriptors and token rendering.
//!
//! A template may contain the tokens `YYYY`, `MMMM`, `MM` and `DD`. Everything
//! else is copied verbatim; there is no escaping. `MMMM` is substituted before
//! `MM` because the shorter token is a prefix of the longer one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::DateComponents;

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How a date is rendered to text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    #[default]
    Iso,
    /// `MM/DD/YYYY`
    Us,
    /// `DD.MM.YYYY`
    Eu,
    /// `MMMM DD, YYYY`
    Verbose,
    /// Any other token template
    Custom(String),
}

impl DateFormat {
    /// The named presets
    pub const PRESETS: [DateFormat; 4] = [
        DateFormat::Iso,
        DateFormat::Us,
        DateFormat::Eu,
        DateFormat::Verbose,
    ];

    /// Build a format from a template, recognising the preset templates.
    pub fn custom(template: impl Into<String>) -> Self {
        let template = template.into();
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.template() == template)
            .unwrap_or(DateFormat::Custom(template))
    }

    /// The token template this format renders with
    pub fn template(&self) -> &str {
        match self {
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::Us => "MM/DD/YYYY",
            DateFormat::Eu => "DD.MM.YYYY",
            DateFormat::Verbose => "MMMM DD, YYYY",
            DateFormat::Custom(template) => template,
        }
    }

    /// Substitute the tokens of this template with values from `parts`.
    ///
    /// Every occurrence of a token is replaced. Unknown text is left alone.
    ///
    /// ```
    /// use date_types::{DateComponents, DateFormat};
    ///
    /// let parts = DateComponents {
    ///     year: 2024,
    ///     month: 3,
    ///     day: 9,
    ///     hours: 0,
    ///     minutes: 0,
    ///     seconds: 0,
    ///     milliseconds: 0,
    /// };
    /// assert_eq!(DateFormat::custom("DD-MM-YYYY").render(&parts), "09-03-2024");
    /// assert_eq!(DateFormat::Eu.render(&parts), "09.03.2024");
    /// ```
    pub fn render(&self, parts: &DateComponents) -> String {
        let month_name = (parts.month as usize)
            .checked_sub(1)
            .and_then(|index| MONTH_NAMES.get(index))
            .copied()
            .unwrap_or_default();

        self.template()
            .replace("YYYY", &parts.year.to_string())
            .replace("MMMM", month_name)
            .replace("MM", &format!("{:02}", parts.month))
            .replace("DD", &format!("{:02}", parts.day))
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

impl From<&str> for DateFormat {
    fn from(template: &str) -> Self {
        DateFormat::custom(template)
    }
}

impl From<String> for DateFormat {
    fn from(template: String) -> Self {
        DateFormat::custom(template)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        match format {
            DateFormat::Custom(template) => template,
            preset => preset.template().to_string(),
        }
    }
}

use core::{fmt, str::FromStr};

use crate::ArgumentIssue;

/// The allow-listed `{DATE:<pattern>}` patterns.
///
/// Patterns use the editor's `yyyy`/`MM`/`dd` notation in the canonical
/// string and are formatted in UTC.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum DatePattern {
    /// `yyyy`
    Year,
    /// `yy`
    ShortYear,
    /// `yyyyMM`
    YearMonth,
    /// `yyyy-MM`
    YearMonthDashed,
    /// `yyyyMMdd`
    #[default]
    Compact,
    /// `yyyy-MM-dd`
    Iso,
    /// `yyMMdd`
    ShortCompact,
    /// `ddMMyyyy`
    DayMonthYear,
    /// `MMddyyyy`
    MonthDayYear,
    /// `dd.MM.yyyy`
    Dotted,
    /// `yyyyMMddHHmm`
    Minute,
    /// `HHmmss`
    Time,
}

impl DatePattern {
    pub const ALL: [Self; 12] = [
        Self::Year,
        Self::ShortYear,
        Self::YearMonth,
        Self::YearMonthDashed,
        Self::Compact,
        Self::Iso,
        Self::ShortCompact,
        Self::DayMonthYear,
        Self::MonthDayYear,
        Self::Dotted,
        Self::Minute,
        Self::Time,
    ];

    /// The pattern as written in a format string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "yyyy",
            Self::ShortYear => "yy",
            Self::YearMonth => "yyyyMM",
            Self::YearMonthDashed => "yyyy-MM",
            Self::Compact => "yyyyMMdd",
            Self::Iso => "yyyy-MM-dd",
            Self::ShortCompact => "yyMMdd",
            Self::DayMonthYear => "ddMMyyyy",
            Self::MonthDayYear => "MMddyyyy",
            Self::Dotted => "dd.MM.yyyy",
            Self::Minute => "yyyyMMddHHmm",
            Self::Time => "HHmmss",
        }
    }

    /// The equivalent `chrono` strftime specification.
    pub(crate) const fn strftime(self) -> &'static str {
        match self {
            Self::Year => "%Y",
            Self::ShortYear => "%y",
            Self::YearMonth => "%Y%m",
            Self::YearMonthDashed => "%Y-%m",
            Self::Compact => "%Y%m%d",
            Self::Iso => "%Y-%m-%d",
            Self::ShortCompact => "%y%m%d",
            Self::DayMonthYear => "%d%m%Y",
            Self::MonthDayYear => "%m%d%Y",
            Self::Dotted => "%d.%m.%Y",
            Self::Minute => "%Y%m%d%H%M",
            Self::Time => "%H%M%S",
        }
    }
}

impl FromStr for DatePattern {
    type Err = ArgumentIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == s)
            .ok_or_else(|| ArgumentIssue::UnknownDatePattern(s.to_owned()))
    }
}

impl TryFrom<String> for DatePattern {
    type Error = ArgumentIssue;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DatePattern> for &'static str {
    fn from(pattern: DatePattern) -> Self {
        pattern.as_str()
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Year-specification parsing for the filter bar.
//!
//! Grammar (comma-separated tokens):
//! ```text
//! spec  := token (',' token)*
//! token := year '-' year | year
//! year  := digit+
//! ```
//!
//! Reversed ranges are normalized ("2010-2005" means 2005..=2010). A token
//! that is not a year or a range is skipped; an input with no valid token
//! at all means "match every year". Ranges spanning more than
//! [`MAX_RANGE_SPAN`] years are treated as malformed and skipped too.

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0},
    combinator::{map, map_res},
    sequence::{delimited, separated_pair},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Widest range a single token may cover.
pub const MAX_RANGE_SPAN: i32 = 1000;

/// A parsed year specification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearSpec {
    /// No constraint: every record matches, with or without a year.
    #[default]
    All,
    /// Only records whose year is in the set match; records without a year
    /// do not.
    Years(BTreeSet<i32>),
}

impl YearSpec {
    /// Parse free text into a specification. Total: malformed tokens are
    /// skipped and a wholly unparseable input yields [`YearSpec::All`].
    pub fn parse(input: &str) -> YearSpec {
        let mut years = BTreeSet::new();

        for token in input.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match year_token(token) {
                Ok(("", YearToken::Single(year))) => {
                    years.insert(year);
                }
                Ok(("", YearToken::Range(start, end))) => {
                    if end - start <= MAX_RANGE_SPAN {
                        years.extend(start..=end);
                    }
                }
                // Trailing garbage or no parse at all: skip the token.
                _ => {}
            }
        }

        if years.is_empty() {
            YearSpec::All
        } else {
            YearSpec::Years(years)
        }
    }

    /// Whether a record with the given year passes this specification.
    pub fn matches(&self, year: Option<i32>) -> bool {
        match self {
            YearSpec::All => true,
            YearSpec::Years(set) => year.map_or(false, |y| set.contains(&y)),
        }
    }

    /// Whether this specification constrains anything.
    pub fn is_all(&self) -> bool {
        matches!(self, YearSpec::All)
    }
}

enum YearToken {
    Single(i32),
    Range(i32, i32),
}

/// Parse whitespace around an inner parser.
fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn year(input: &str) -> IResult<&str, i32> {
    map_res(digit1, str::parse)(input)
}

fn year_token(input: &str) -> IResult<&str, YearToken> {
    alt((
        map(separated_pair(year, ws(char('-')), year), |(a, b)| {
            YearToken::Range(a.min(b), a.max(b))
        }),
        map(year, YearToken::Single),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(spec: &YearSpec) -> Vec<i32> {
        match spec {
            YearSpec::All => panic!("expected concrete years"),
            YearSpec::Years(set) => set.iter().copied().collect(),
        }
    }

    #[test]
    fn ranges_and_singles() {
        let spec = YearSpec::parse("2005-2007, 2009");
        assert_eq!(years(&spec), [2005, 2006, 2007, 2009]);
    }

    #[test]
    fn reversed_range_is_normalized() {
        let spec = YearSpec::parse("2010-2005");
        assert_eq!(years(&spec), [2005, 2006, 2007, 2008, 2009, 2010]);
    }

    #[test]
    fn empty_or_garbage_means_all() {
        assert_eq!(YearSpec::parse(""), YearSpec::All);
        assert_eq!(YearSpec::parse("   "), YearSpec::All);
        assert_eq!(YearSpec::parse("abc"), YearSpec::All);
        assert_eq!(YearSpec::parse("-, x-y, -2005-"), YearSpec::All);
    }

    #[test]
    fn invalid_tokens_are_dropped() {
        let spec = YearSpec::parse("2020,xyz");
        assert_eq!(years(&spec), [2020]);

        let spec = YearSpec::parse("2018-2019, 20x0, 2022");
        assert_eq!(years(&spec), [2018, 2019, 2022]);
    }

    #[test]
    fn spaces_around_dash_are_accepted() {
        let spec = YearSpec::parse(" 2005 - 2007 ");
        assert_eq!(years(&spec), [2005, 2006, 2007]);
    }

    #[test]
    fn pathological_range_is_skipped() {
        assert_eq!(YearSpec::parse("1-999999999"), YearSpec::All);
        let spec = YearSpec::parse("1-999999999, 2020");
        assert_eq!(years(&spec), [2020]);
    }

    #[test]
    fn matching() {
        let spec = YearSpec::parse("2019-2021");
        assert!(spec.matches(Some(2020)));
        assert!(!spec.matches(Some(2018)));
        assert!(!spec.matches(None));

        assert!(YearSpec::All.matches(None));
        assert!(YearSpec::All.matches(Some(1990)));
    }
}

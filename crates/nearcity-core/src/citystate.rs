// crates/nearcity-core/src/citystate.rs

//! Citystate codes: the `city-st` identifiers used by the lookup layer.
//!
//! A citystate code is the lowercase, ASCII-folded form of a `"City, ST"`
//! display name with the comma-space turned into a hyphen and the remaining
//! spaces into pluses: `"Los Angeles, CA"` <-> `"los+angeles-ca"`.

use crate::error::{NearCityError, Result};

/// Convert a display name into a citystate code.
///
/// Accents are transliterated with `deunicode` so that `"Montréal, QC"`
/// becomes `"montreal-qc"`.
///
/// ```rust
/// use nearcity_core::citystate::to_citystate;
///
/// assert_eq!(to_citystate("Irvine, CA"), "irvine-ca");
/// assert_eq!(to_citystate("Los Angeles, CA"), "los+angeles-ca");
/// assert_eq!(to_citystate("Montréal, QC"), "montreal-qc");
/// ```
pub fn to_citystate(display_name: &str) -> String {
    deunicode::deunicode(display_name.trim())
        .to_lowercase()
        .replace(", ", "-")
        .replace(' ', "+")
}

/// Convert a citystate code back into a display name.
///
/// Everything before the last hyphen is the city; the last segment is the
/// state. The city is title-cased, the state upper-cased.
///
/// Hyphenated city names (`"Winston-Salem, NC"`, `"Trois-Rivières, QC"`)
/// still convert both ways, but their codes carry more than one hyphen and
/// are rejected by [`validate_citystate`].
///
/// ```rust
/// use nearcity_core::citystate::{from_citystate, validate_citystate};
///
/// assert_eq!(from_citystate("los+angeles-ca"), "Los Angeles, CA");
/// assert_eq!(from_citystate("winston-salem-nc"), "Winston-Salem, NC");
/// assert!(validate_citystate("winston-salem-nc").is_err());
/// ```
pub fn from_citystate(code: &str) -> String {
    let code = code.trim();
    let (city, state) = match code.rfind('-') {
        Some(pos) => (&code[..pos], &code[pos + 1..]),
        None => ("", code),
    };
    format!(
        "{}, {}",
        title_case(&city.replace('+', " ")),
        state.to_uppercase()
    )
}

/// Capitalize every letter that follows a non-letter, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Check that `code` is a well-formed citystate code.
///
/// Rules: no spaces (use `+`), exactly one hyphen, non-empty city and state,
/// and only lowercase ASCII letters plus `'`, `.`, `+` and `-`.
///
/// The one-hyphen rule means codes derived from hyphenated city names never
/// validate; look those up with
/// [`ProximitySearch::find_by_code`](crate::traits::ProximitySearch::find_by_code),
/// which does not require a valid code.
pub fn validate_citystate(code: &str) -> Result<()> {
    if code.contains(' ') {
        return Err(NearCityError::invalid(format!(
            "{code:?}: spaces should be replaced with pluses (i.e., \"+\")"
        )));
    }
    if code.matches('-').count() != 1 {
        return Err(NearCityError::invalid(format!(
            "{code:?}: wrong number of hyphens"
        )));
    }
    let (city, state) = code.split_once('-').unwrap_or((code, ""));
    if city.is_empty() {
        return Err(NearCityError::invalid(format!("{code:?}: city should be filled")));
    }
    if state.is_empty() {
        return Err(NearCityError::invalid(format!("{code:?}: state should be filled")));
    }
    if let Some(bad) = code
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || matches!(c, '\'' | '.' | '+' | '-')))
    {
        return Err(NearCityError::invalid(format!(
            "{code:?}: invalid character {bad:?}, only lowercase letters and '.+- are allowed"
        )));
    }
    Ok(())
}

/// US states, DC, territories and Canadian provinces/territories.
static STATE_PROVINCE_ABBREV: &[(&str, &str)] = &[
    // US
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("District of Columbia", "DC"),
    ("American Samoa", "AS"),
    ("Guam", "GU"),
    ("Northern Mariana Islands", "MP"),
    ("Puerto Rico", "PR"),
    ("United States Minor Outlying Islands", "UM"),
    ("U.S. Virgin Islands", "VI"),
    // Canada
    ("Alberta", "AB"),
    ("British Columbia", "BC"),
    ("Manitoba", "MB"),
    ("New Brunswick", "NB"),
    ("Newfoundland and Labrador", "NL"),
    ("Northwest Territories", "NT"),
    ("Nova Scotia", "NS"),
    ("Nunavut", "NU"),
    ("Ontario", "ON"),
    ("Prince Edward Island", "PE"),
    ("Quebec", "QC"),
    ("Saskatchewan", "SK"),
    ("Yukon", "YT"),
];

/// Full state/province name to its abbreviation (`California` -> `CA`).
///
/// Unknown names come back unchanged. Linear scan is fine for ~70 entries.
pub fn state_to_short(long: &str) -> &str {
    STATE_PROVINCE_ABBREV
        .iter()
        .find(|(name, _)| *name == long)
        .map(|(_, abbrev)| *abbrev)
        .unwrap_or(long)
}

/// Abbreviation to full state/province name (`CA` -> `California`).
///
/// Unknown abbreviations come back unchanged.
pub fn state_to_long(short: &str) -> &str {
    STATE_PROVINCE_ABBREV
        .iter()
        .find(|(_, abbrev)| *abbrev == short)
        .map(|(name, _)| *name)
        .unwrap_or(short)
}

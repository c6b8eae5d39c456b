//! Value formatting shared by the widgets.

/// Shown wherever a value is missing or not numeric.
pub const PLACEHOLDER_VALUE: &str = "--";

/// Entity name used when nothing better is known.
pub const PLACEHOLDER_NAME: &str = "No Entity";

/// State strings that count as "on".
pub const TRUTHY_STATES: [&str; 6] = ["on", "true", "home", "open", "unlocked", "1"];

/// Formats `value` with `precision` decimals when it parses as a number;
/// anything else is returned untouched.
///
/// ```
/// use widgets::format::with_precision;
///
/// assert_eq!(with_precision("21.456", Some(1)), "21.5");
/// assert_eq!(with_precision("21.456", None), "21.456");
/// assert_eq!(with_precision("unavailable", Some(1)), "unavailable");
/// ```
pub fn with_precision(value: &str, precision: Option<usize>) -> String {
    match (precision, value.trim().parse::<f64>()) {
        (Some(p), Ok(v)) if v.is_finite() => format!("{v:.p$}"),
        _ => value.to_owned(),
    }
}

/// Temperature with a degree sign: whole numbers without decimals, anything
/// else with one.
///
/// ```
/// use widgets::format::temperature;
///
/// assert_eq!(temperature(Some(21.0)), "21°");
/// assert_eq!(temperature(Some(21.46)), "21.5°");
/// assert_eq!(temperature(None), "--");
/// ```
pub fn temperature(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        None => PLACEHOLDER_VALUE.to_owned(),
        Some(v) if v.fract() == 0.0 => format!("{v:.0}°"),
        Some(v) => format!("{v:.1}°"),
    }
}

/// `snake_case` state names as words: `"heat_cool"` becomes `"Heat Cool"`.
pub fn title_case(s: &str) -> String {
    s.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive, exact match against [`TRUTHY_STATES`].
pub fn is_truthy(state: &str) -> bool {
    TRUTHY_STATES.iter().any(|t| t.eq_ignore_ascii_case(state))
}

/// Share of `[min, max]` covered by `value`, in `0..=100`. A non-positive
/// range gives 0.
///
/// ```
/// use widgets::format::percent_of;
///
/// assert_eq!(percent_of(50.0, 0.0, 200.0), 25.0);
/// assert_eq!(percent_of(150.0, 0.0, 100.0), 100.0);
/// assert_eq!(percent_of(5.0, 10.0, 10.0), 0.0);
/// ```
pub fn percent_of(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if !value.is_finite() || !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    ((value - min) / range * 100.0).clamp(0.0, 100.0)
}

/// `m:ss` or `h:mm:ss`.
///
/// ```
/// use widgets::format::duration;
///
/// assert_eq!(duration(65.0), "1:05");
/// assert_eq!(duration(3725.0), "1:02:05");
/// assert_eq!(duration(-3.0), "0:00");
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn duration(seconds: f64) -> String {
    let total = if seconds.is_finite() { seconds.max(0.0) as u64 } else { 0 };
    let (h, m, s) = (total / 3600, total / 60 % 60, total % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// Integer rendering of a number for compact readouts.
pub fn rounded(value: f64) -> String {
    format!("{value:.0}")
}

/// Drops the `mdi:` namespace from an icon name.
pub fn strip_icon_prefix(icon: &str) -> &str {
    icon.strip_prefix("mdi:").unwrap_or(icon)
}

//! Countdown to the end of a time-limited offer.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use storefront_security::escape_html;

use crate::error::CommerceError;

/// Shown once the deadline has passed.
pub const FINISHED_MESSAGE: &str = "Product Selling Finished!";

/// Deadline used when a banner is configured without one.
pub const DEFAULT_DEADLINE: &str = "2021-08-20";

/// Banner layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownStyle {
    /// Four labelled sections: days, hours, minutes, seconds.
    #[default]
    Full,
    /// Single line: "Offer Ends In: DD days, HH : MM : SS".
    Compact,
}

/// Time left until a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remaining {
    pub days: i64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub completed: bool,
}

impl Remaining {
    fn from_millis(total_ms: i64) -> Self {
        if total_ms <= 0 {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
                completed: true,
            };
        }

        let total_secs = total_ms / 1000;
        Self {
            days: total_secs / 86_400,
            hours: ((total_secs / 3_600) % 24) as u32,
            minutes: ((total_secs / 60) % 60) as u32,
            seconds: (total_secs % 60) as u32,
            completed: false,
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            return f.write_str(FINISHED_MESSAGE);
        }
        write!(
            f,
            "{} days, {}:{}:{}",
            zero_pad(self.days),
            zero_pad(self.hours.into()),
            zero_pad(self.minutes.into()),
            zero_pad(self.seconds.into())
        )
    }
}

/// Pad to at least two digits.
pub fn zero_pad(value: i64) -> String {
    format!("{value:02}")
}

/// Countdown to a fixed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    deadline: DateTime<Utc>,
}

impl Countdown {
    pub fn until(deadline: DateTime<Utc>) -> Self {
        Self { deadline }
    }

    /// Parse `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
    pub fn parse(date: &str) -> Result<Self, CommerceError> {
        let date = date.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(date) {
            return Ok(Self::until(ts.with_timezone(&Utc)));
        }

        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| CommerceError::InvalidDate(format!("{date}: {e}")))?;
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| CommerceError::InvalidDate(date.to_string()))?;
        Ok(Self::until(midnight.and_utc()))
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Time left as of `now`.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Remaining {
        Remaining::from_millis((self.deadline - now).num_milliseconds())
    }

    /// Time left as of the current clock.
    pub fn remaining(&self) -> Remaining {
        self.remaining_at(Utc::now())
    }

    /// Banner markup as of `now`.
    pub fn render_at(&self, now: DateTime<Utc>, style: CountdownStyle, extra_class: &str) -> String {
        render(&self.remaining_at(now), style, extra_class)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::until(
            NaiveDate::from_ymd_opt(2021, 8, 20)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
                .unwrap_or_default(),
        )
    }
}

/// Render banner markup for a remaining time.
pub fn render(remaining: &Remaining, style: CountdownStyle, extra_class: &str) -> String {
    if remaining.completed {
        return format!("<span>{FINISHED_MESSAGE}</span>");
    }

    let days = zero_pad(remaining.days);
    let hours = zero_pad(remaining.hours.into());
    let minutes = zero_pad(remaining.minutes.into());
    let seconds = zero_pad(remaining.seconds.into());

    match style {
        CountdownStyle::Full => {
            let section = |amount: &str, period: &str| {
                format!(
                    r#"<span class="countdown-section"><span class="countdown-amount">{amount}</span><span class="countdown-period">{period}</span></span>"#
                )
            };
            let class = format!("countdown {}", escape_html(extra_class));
            format!(
                r#"<div class="{}"><div class="countdown-row countdown-show4">{}{}{}{}</div></div>"#,
                class.trim_end(),
                section(&days, "DAYS"),
                section(&hours, "HOURS"),
                section(&minutes, "MINUTES"),
                section(&seconds, "SECONDS"),
            )
        }
        CountdownStyle::Compact => format!(
            concat!(
                r#"<div class="product-countdown-container font-weight-semi-bold">"#,
                r#"<span class="product-countdown-title">Offer Ends In:&nbsp;</span>"#,
                r#"<div class="product-countdown countdown-compact">"#,
                r#"<span class="countdown-section days"><span class="countdown-amount">{days} </span><span class="countdown-period">days,&nbsp;</span></span>"#,
                r#"<span class="countdown-section hours"><span class="countdown-amount">{hours}<span class="mr-1 ml-1">:</span></span></span>"#,
                r#"<span class="countdown-section minutes"><span class="countdown-amount">{minutes}<span class="mr-1 ml-1">:</span></span></span>"#,
                r#"<span class="countdown-section seconds"><span class="countdown-amount">{seconds}</span></span>"#,
                r#"</div></div>"#,
            ),
            days = days,
            hours = hours,
            minutes = minutes,
            seconds = seconds,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_breakdown() {
        let countdown = Countdown::until(deadline());
        let now = deadline()
            - Duration::days(3)
            - Duration::hours(4)
            - Duration::minutes(5)
            - Duration::seconds(6)
            - Duration::milliseconds(500);

        let remaining = countdown.remaining_at(now);
        assert_eq!(
            remaining,
            Remaining {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6,
                completed: false
            }
        );
        assert_eq!(remaining.to_string(), "03 days, 04:05:06");
    }

    #[test]
    fn test_completed() {
        let countdown = Countdown::until(deadline());
        assert!(countdown.remaining_at(deadline()).completed);
        assert!(countdown.remaining_at(deadline() + Duration::seconds(1)).completed);
        assert_eq!(
            countdown.render_at(deadline(), CountdownStyle::Full, ""),
            "<span>Product Selling Finished!</span>"
        );
    }

    #[test]
    fn test_parse() {
        let day = Countdown::parse("2021-08-20").unwrap();
        assert_eq!(day, Countdown::default());
        assert_eq!(day.deadline(), Utc.with_ymd_and_hms(2021, 8, 20, 0, 0, 0).unwrap());

        let ts = Countdown::parse("2030-01-10T16:00:00+04:00").unwrap();
        assert_eq!(ts.deadline(), deadline());

        assert!(matches!(Countdown::parse("next week"), Err(CommerceError::InvalidDate(_))));
    }

    #[test]
    fn test_render_styles() {
        let countdown = Countdown::until(deadline());
        let now = deadline() - Duration::hours(30);

        let full = countdown.render_at(now, CountdownStyle::Full, "text-white");
        assert!(full.starts_with(r#"<div class="countdown text-white">"#));
        assert!(full.contains(r#"<span class="countdown-amount">01</span><span class="countdown-period">DAYS</span>"#));
        assert!(full.contains(r#"<span class="countdown-amount">06</span><span class="countdown-period">HOURS</span>"#));

        let compact = countdown.render_at(now, CountdownStyle::Compact, "");
        assert!(compact.contains("Offer Ends In:"));
        assert!(compact.contains(r#"<span class="countdown-amount">01 </span>"#));
    }

    #[test]
    fn test_zero_pad_keeps_wide_values() {
        assert_eq!(zero_pad(7), "07");
        assert_eq!(zero_pad(123), "123");
    }
}

//! Configuration for a report run.

use fundlens_core::{CoreResult, Date, Weekday};

/// Configuration for assembling one report.
///
/// The defaults reproduce the standing fund report: an 8% annual benchmark
/// compounded weekly, fund weeks anchored on Fridays from the fund's first
/// year, and portfolio 1 featured on the single-portfolio slides.
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// Annual benchmark rate (as decimal, e.g. 0.08 for 8%).
    pub benchmark_rate: f64,

    /// Fallback first year for the fund calendar when no portfolio
    /// reference data is available.
    pub fund_first_year: i32,

    /// Weekday the weekly valuation schedule is anchored on.
    pub week_anchor: Weekday,

    /// Last day of the reporting window.
    pub terminal_date: Date,

    /// Portfolio featured on the single-portfolio report.
    pub featured_portfolio_id: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            benchmark_rate: 0.08,
            fund_first_year: 1991,
            week_anchor: Weekday::Fri,
            terminal_date: Date::from_ymd(2024, 5, 31).expect("literal date is valid"),
            featured_portfolio_id: 1,
        }
    }
}

impl ReportConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annual benchmark rate.
    #[must_use]
    pub fn with_benchmark_rate(mut self, rate: f64) -> Self {
        self.benchmark_rate = rate;
        self
    }

    /// Sets the fallback first year of the fund calendar.
    #[must_use]
    pub fn with_fund_first_year(mut self, year: i32) -> Self {
        self.fund_first_year = year;
        self
    }

    /// Sets the weekday the valuation schedule is anchored on.
    #[must_use]
    pub fn with_week_anchor(mut self, weekday: Weekday) -> Self {
        self.week_anchor = weekday;
        self
    }

    /// Sets the last day of the reporting window.
    #[must_use]
    pub fn with_terminal_date(mut self, date: Date) -> Self {
        self.terminal_date = date;
        self
    }

    /// Sets the featured portfolio.
    #[must_use]
    pub fn with_featured_portfolio(mut self, portfolio_id: i64) -> Self {
        self.featured_portfolio_id = portfolio_id;
        self
    }

    /// The weekly valuation schedule starting in `first_year`.
    ///
    /// Anchored on the first occurrence of the anchor weekday in that
    /// year, stepping weekly up to the terminal date.
    ///
    /// # Errors
    ///
    /// Returns a `CoreError` if the year is out of range.
    pub fn fund_dates(&self, first_year: i32) -> CoreResult<Vec<Date>> {
        let inception = Date::first_weekday_of_year(first_year, self.week_anchor)?;
        Ok(inception.weekly_through(self.terminal_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.benchmark_rate, 0.08);
        assert_eq!(config.fund_first_year, 1991);
        assert_eq!(config.week_anchor, Weekday::Fri);
        assert_eq!(config.featured_portfolio_id, 1);
    }

    #[test]
    fn test_fund_dates_anchored_on_friday() {
        let config = ReportConfig::default().with_terminal_date(Date::from_ymd(1991, 2, 1).unwrap());
        let dates = config.fund_dates(1991).unwrap();
        assert_eq!(dates[0], Date::from_ymd(1991, 1, 4).unwrap());
        for date in &dates {
            assert_eq!(date.weekday(), Weekday::Fri);
        }
    }

    #[test]
    fn test_with_setters() {
        let config = ReportConfig::new()
            .with_benchmark_rate(0.05)
            .with_featured_portfolio(7);
        assert_eq!(config.benchmark_rate, 0.05);
        assert_eq!(config.featured_portfolio_id, 7);
    }
}

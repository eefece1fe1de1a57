//! Core projection loop
//!
//! Each year compounds the previous year's revenue by the growth rate. Figures
//! are rounded to cents every year and the rounded revenue is the base for the
//! following year, so results reproduce exactly across runs and platforms.

use super::{ProjectionResult, YearProjection, PROJECTION_YEARS};
use crate::error::ValidationError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Validated engine inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Current annual revenue (must be positive)
    pub current_revenue: f64,

    /// Annual growth rate as a percentage (10.0 = 10%)
    pub growth_rate: f64,
}

impl ProjectionInput {
    /// Validate optional raw values in the order the form reports them:
    /// missing revenue, missing rate, then invalid revenue
    pub fn new(
        current_revenue: Option<f64>,
        growth_rate: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let current_revenue = current_revenue.ok_or(ValidationError::MissingCurrentRevenue)?;

        // A non-numeric rate never makes it into the form field
        let growth_rate = growth_rate
            .filter(|r| r.is_finite())
            .ok_or(ValidationError::MissingGrowthRate)?;

        if !current_revenue.is_finite() || current_revenue <= 0.0 {
            return Err(ValidationError::InvalidCurrentRevenue);
        }

        Ok(Self { current_revenue, growth_rate })
    }

    /// Run the projection for these inputs
    pub fn project(&self) -> ProjectionResult {
        let multiplier = 1.0 + self.growth_rate / 100.0;
        let mut projections = Vec::with_capacity(PROJECTION_YEARS);
        let mut highest_idx = 0usize;
        let mut highest_growth = f64::NEG_INFINITY;
        let mut prev_revenue = self.current_revenue;

        for i in 0..PROJECTION_YEARS {
            let projected = prev_revenue * multiplier;
            let growth = projected - prev_revenue;

            let revenue = round_cents(projected);
            let growth_amount = round_cents(growth);

            // Strict comparison: ties keep the earlier year
            if growth_amount > highest_growth {
                highest_idx = i;
                highest_growth = growth_amount;
            }

            projections.push(YearProjection {
                year: (i + 1) as u32,
                revenue,
                growth_amount,
                is_highest_growth: false,
            });

            prev_revenue = revenue;
        }

        projections[highest_idx].is_highest_growth = true;

        let total_revenue = round_cents(projections.iter().map(|p| p.revenue).sum());
        let average_annual_growth_percent = round_cents(
            (total_revenue / self.current_revenue - 1.0) * 100.0 / PROJECTION_YEARS as f64,
        );

        ProjectionResult {
            input: *self,
            projections,
            total_revenue,
            average_annual_growth_percent,
        }
    }
}

/// Validate inputs and project five years of revenue
///
/// Either the whole result is returned or validation fails before any
/// computation starts.
pub fn compute(
    current_revenue: Option<f64>,
    growth_rate_percent: Option<f64>,
) -> Result<ProjectionResult, ValidationError> {
    let input = match ProjectionInput::new(current_revenue, growth_rate_percent) {
        Ok(input) => input,
        Err(e) => {
            warn!("projection rejected: {}", e.code());
            return Err(e);
        }
    };

    let result = input.project();
    debug!(
        "projected revenue {:.2} at {}%: total {:.2}, avg growth {:.2}%",
        input.current_revenue,
        input.growth_rate,
        result.total_revenue,
        result.average_annual_growth_percent
    );
    Ok(result)
}

/// Round to 2 decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ten_percent_example() {
        let result = compute(Some(100_000.0), Some(10.0)).expect("valid input");

        let expected = [
            (110_000.0, 10_000.0),
            (121_000.0, 11_000.0),
            (133_100.0, 12_100.0),
            (146_410.0, 13_310.0),
            (161_051.0, 14_641.0),
        ];

        assert_eq!(result.projections.len(), PROJECTION_YEARS);
        for (p, (revenue, growth)) in result.projections.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(p.revenue, *revenue, epsilon = 1e-9);
            assert_abs_diff_eq!(p.growth_amount, *growth, epsilon = 1e-9);
        }

        // Year 5 has the largest growth
        let flagged: Vec<u32> = result.projections.iter()
            .filter(|p| p.is_highest_growth)
            .map(|p| p.year)
            .collect();
        assert_eq!(flagged, vec![5]);

        assert_abs_diff_eq!(result.total_revenue, 671_561.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.average_annual_growth_percent, 114.31, epsilon = 1e-9);
        assert_abs_diff_eq!(result.final_revenue().unwrap(), 161_051.0, epsilon = 1e-9);
    }

    #[test]
    fn test_years_in_order_and_increasing() {
        for &(revenue, rate) in &[(100.0, 0.5), (2_500.75, 3.25), (1_000_000.0, 100.0), (42.0, 57.5)] {
            let result = compute(Some(revenue), Some(rate)).unwrap();
            let years: Vec<u32> = result.projections.iter().map(|p| p.year).collect();
            assert_eq!(years, vec![1, 2, 3, 4, 5]);

            let mut prev = revenue;
            for p in &result.projections {
                assert!(p.revenue > prev, "revenue {} not above {} at rate {}", p.revenue, prev, rate);
                prev = p.revenue;
            }

            assert_eq!(result.projections.iter().filter(|p| p.is_highest_growth).count(), 1);
        }
    }

    #[test]
    fn test_zero_growth_flags_first_year() {
        let result = compute(Some(50_000.0), Some(0.0)).unwrap();

        for p in &result.projections {
            assert_eq!(p.revenue, 50_000.0);
            assert_eq!(p.growth_amount, 0.0);
        }
        assert!(result.projections[0].is_highest_growth);
        assert_eq!(result.highest_growth_year().map(|p| p.year), Some(1));
        assert_eq!(result.total_revenue, 250_000.0);
        assert_eq!(result.average_annual_growth_percent, 80.0);
    }

    #[test]
    fn test_rounded_revenue_feeds_next_year() {
        // 10.00 * 1.0004 = 10.004 -> 10.00, so every year restarts from 10.00.
        // Compounding the raw figure would reach 10.01 in year 2.
        let result = compute(Some(10.0), Some(0.04)).unwrap();
        for p in &result.projections {
            assert_eq!(p.revenue, 10.0);
            assert_eq!(p.growth_amount, 0.0);
        }
        assert!(result.projections[0].is_highest_growth);
    }

    #[test]
    fn test_total_is_sum_of_rounded_revenues() {
        let result = compute(Some(12_345.67), Some(7.25)).unwrap();
        let sum: f64 = result.projections.iter().map(|p| p.revenue).sum();
        assert_abs_diff_eq!(result.total_revenue, round_cents(sum), epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_current_revenue() {
        assert_eq!(compute(Some(0.0), Some(10.0)), Err(ValidationError::InvalidCurrentRevenue));
        assert_eq!(compute(Some(-5.0), Some(10.0)), Err(ValidationError::InvalidCurrentRevenue));
        assert_eq!(compute(Some(f64::NAN), Some(10.0)), Err(ValidationError::InvalidCurrentRevenue));
    }

    #[test]
    fn test_missing_inputs() {
        assert_eq!(compute(None, Some(10.0)), Err(ValidationError::MissingCurrentRevenue));
        assert_eq!(compute(Some(100.0), None), Err(ValidationError::MissingGrowthRate));
        assert_eq!(compute(Some(100.0), Some(f64::NAN)), Err(ValidationError::MissingGrowthRate));

        // Missing revenue is reported before anything else
        assert_eq!(compute(None, None), Err(ValidationError::MissingCurrentRevenue));
        // Missing rate is reported before invalid revenue
        assert_eq!(compute(Some(-1.0), None), Err(ValidationError::MissingGrowthRate));
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(110_000.000_000_000_01), 110_000.0);
        assert_eq!(round_cents(1.234), 1.23);
        assert_eq!(round_cents(1.235_1), 1.24);
        assert_eq!(round_cents(0.0), 0.0);
    }
}

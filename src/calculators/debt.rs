use serde::{Deserialize, Serialize};

use crate::calculators::{ensure_non_negative, ensure_positive};
use crate::errors::{AdvisorError, Result};

/// time to clear a balance at a fixed monthly payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub months: u64,
    pub total_interest: f64,
}

/// fixed-rate loan repayment figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// monthly rate from an annual percentage (18.0 for 18%)
fn monthly_rate(annual_percentage_rate: f64) -> f64 {
    annual_percentage_rate / 12.0 / 100.0
}

/// months needed to pay off `balance` and the interest paid along the way
///
/// Fails with [`AdvisorError::InsufficientPayment`] when the payment does not
/// exceed the interest accrued in the first month, since the balance would
/// never shrink.
pub fn debt_payoff_time(
    balance: f64,
    monthly_payment: f64,
    annual_percentage_rate: f64,
) -> Result<DebtPayoff> {
    ensure_positive("balance", balance)?;
    ensure_positive("monthly_payment", monthly_payment)?;
    ensure_non_negative("annual_percentage_rate", annual_percentage_rate)?;

    let r = monthly_rate(annual_percentage_rate);
    if r == 0.0 {
        let months = whole_months((balance / monthly_payment).ceil())?;
        return Ok(DebtPayoff {
            months,
            total_interest: 0.0,
        });
    }

    let monthly_interest = balance * r;
    if monthly_payment <= monthly_interest {
        return Err(AdvisorError::InsufficientPayment {
            payment: monthly_payment,
            monthly_interest,
        });
    }

    // n = -ln(1 - B*r/P) / ln(1 + r), argument of ln is in (0, 1) here
    let periods = -(1.0 - monthly_interest / monthly_payment).ln() / r.ln_1p();
    let months = whole_months(periods.ceil())?;

    Ok(DebtPayoff {
        months,
        total_interest: monthly_payment * months as f64 - balance,
    })
}

// a payoff horizon that does not fit a month counter is rejected, not clamped
fn whole_months(months: f64) -> Result<u64> {
    if months.is_finite() && months < u64::MAX as f64 {
        Ok(months as u64)
    } else {
        Err(AdvisorError::InvalidTimeHorizon {
            message: format!("payoff would take {} months", months),
        })
    }
}

/// standard annuity payment for a fixed-rate loan
pub fn loan_monthly_payment(principal: f64, annual_rate: f64, years: u32) -> Result<f64> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("annual_rate", annual_rate)?;
    if years == 0 {
        return Err(AdvisorError::InvalidTimeHorizon {
            message: "loan term must be at least one year".to_string(),
        });
    }

    let n = f64::from(years * 12);
    let r = monthly_rate(annual_rate);
    if r == 0.0 {
        return Ok(principal / n);
    }

    let growth = (1.0 + r).powf(n);
    Ok(principal * (r * growth) / (growth - 1.0))
}

/// monthly payment plus lifetime totals for a fixed-rate loan
pub fn loan_summary(principal: f64, annual_rate: f64, years: u32) -> Result<LoanPayment> {
    let monthly_payment = loan_monthly_payment(principal, annual_rate, years)?;
    let total_paid = monthly_payment * f64::from(years * 12);

    Ok(LoanPayment {
        monthly_payment,
        total_paid,
        total_interest: total_paid - principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card_payoff() {
        let payoff = debt_payoff_time(5000.0, 200.0, 18.0).unwrap();
        assert!(payoff.months > 25 && payoff.months < 35);
        assert_eq!(payoff.months, 32);
        assert!(payoff.total_interest > 1000.0);
        assert!((payoff.total_interest - 1400.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate_payoff() {
        let payoff = debt_payoff_time(1000.0, 300.0, 0.0).unwrap();
        assert_eq!(payoff.months, 4);
        assert_eq!(payoff.total_interest, 0.0);
    }

    #[test]
    fn test_long_payoff_not_truncated() {
        let payoff = debt_payoff_time(1e10, 1.0, 0.0).unwrap();
        assert_eq!(payoff.months, 10_000_000_000);
        assert_eq!(payoff.total_interest, 0.0);

        let err = debt_payoff_time(1e300, 1e-10, 0.0).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidTimeHorizon { .. }));
    }

    #[test]
    fn test_payment_equal_to_interest_fails() {
        // 12000 at 12% accrues exactly 120 a month
        let err = debt_payoff_time(12_000.0, 120.0, 12.0).unwrap_err();
        assert!(err.is_domain());
        assert!(matches!(err, AdvisorError::InsufficientPayment { .. }));
    }

    #[test]
    fn test_payment_below_interest_fails() {
        for (balance, payment, apr) in [(5000.0, 50.0, 18.0), (20_000.0, 100.0, 24.0), (1000.0, 1.0, 5.0)] {
            assert!(payment <= balance * apr / 12.0 / 100.0);
            assert!(debt_payoff_time(balance, payment, apr).is_err());
        }
    }

    #[test]
    fn test_payoff_rejects_non_positive_inputs() {
        assert!(debt_payoff_time(0.0, 100.0, 10.0).is_err());
        assert!(debt_payoff_time(1000.0, 0.0, 10.0).is_err());
        assert!(debt_payoff_time(1000.0, 100.0, -1.0).is_err());
    }

    #[test]
    fn test_mortgage_payment() {
        let payment = loan_monthly_payment(200_000.0, 6.0, 30).unwrap();
        assert!((payment - 1199.10).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_loan() {
        let payment = loan_monthly_payment(12_000.0, 0.0, 1).unwrap();
        assert_eq!(payment, 1000.0);
    }

    #[test]
    fn test_loan_summary_totals() {
        let summary = loan_summary(10_000.0, 8.0, 5).unwrap();
        assert!((summary.total_paid - summary.monthly_payment * 60.0).abs() < 1e-9);
        assert!(summary.total_interest > 0.0);
        assert!(loan_summary(10_000.0, 8.0, 0).unwrap_err().is_domain());
    }
}

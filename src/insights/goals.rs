use tracing::debug;

use crate::budget::BudgetSummary;
use crate::config::InsightThresholds;
use crate::insights::{Insight, InsightKind};
use crate::profile::UserProfile;
use crate::types::Goal;

pub fn generate_goal_based_insights(
    profile: &UserProfile,
    summary: Option<&BudgetSummary>,
) -> Vec<Insight> {
    generate_goal_based_insights_with(&InsightThresholds::default(), profile, summary)
}

/// one remark per goal that has a rule, in goal order
///
/// Savings come from the summary (zero without one) and income from the
/// profile. Goals without a rule produce nothing.
pub fn generate_goal_based_insights_with(
    thresholds: &InsightThresholds,
    profile: &UserProfile,
    summary: Option<&BudgetSummary>,
) -> Vec<Insight> {
    let income = profile.monthly_income;
    let savings = summary.map_or(0.0, |s| s.savings);
    let mut insights = Vec::new();

    for goal in &profile.goals {
        match goal {
            Goal::EmergencyFund if savings > 0.0 => {
                let spending = income - savings;
                let months = if spending > 0.0 { savings / spending } else { 0.0 };
                if months < thresholds.emergency_fund_target_months {
                    insights.push(Insight::new(
                        InsightKind::EmergencyFundPlan,
                        format!(
                            "Emergency Fund: You have {:.1} months of expenses saved. Aim for 3-6 months. Want a savings plan?",
                            months
                        ),
                    ));
                } else {
                    insights.push(Insight::new(
                        InsightKind::EmergencyFundOnTrack,
                        "Emergency Fund: You're on track with your emergency fund! Great job!",
                    ));
                }
            }
            Goal::Investing if savings > 0.0 => insights.push(Insight::new(
                InsightKind::InvestmentReady,
                "Investment Ready: With your positive cash flow, you're ready to explore investment options. Want to learn about index funds?",
            )),
            Goal::DebtPayoff => insights.push(Insight::new(
                InsightKind::DebtStrategy,
                "Debt Strategy: I can help you create a debt payoff plan. Are you using the debt avalanche or snowball method?",
            )),
            _ => {}
        }
    }

    debug!(goals = profile.goals.len(), count = insights.len(), "generated goal insights");
    insights
}

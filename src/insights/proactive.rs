use tracing::debug;

use crate::budget::BudgetSummary;
use crate::config::InsightThresholds;
use crate::insights::{Insight, InsightKind};
use crate::profile::UserProfile;
use crate::types::{ExpenseCategory, UserType};

/// budget-driven insights using the default thresholds
pub fn analyze_budget_insights(summary: &BudgetSummary, profile: &UserProfile) -> Vec<Insight> {
    analyze_budget_insights_with(&InsightThresholds::default(), summary, profile)
}

/// budget-driven insights: savings tier, housing share, dominant category,
/// then user-type remarks, in that order
pub fn analyze_budget_insights_with(
    thresholds: &InsightThresholds,
    summary: &BudgetSummary,
    profile: &UserProfile,
) -> Vec<Insight> {
    let mut insights = Vec::new();
    let rate = summary.savings_rate;

    if let Some(insight) = savings_tier(thresholds, rate) {
        insights.push(insight);
    }

    if let Some(insight) = housing_check(thresholds, summary) {
        insights.push(insight);
    }

    if let Some(insight) = dominant_expense(thresholds, summary) {
        insights.push(insight);
    }

    match profile.effective_user_type() {
        UserType::Student if rate > 0.0 => insights.push(Insight::new(
            InsightKind::StudentSuccess,
            "Student Success: Great job saving while in school! Consider starting a small emergency fund if you haven't already.",
        )),
        UserType::Professional if rate > thresholds.professional_savings_above => {
            insights.push(Insight::new(
                InsightKind::ProfessionalAdvantage,
                "Professional Advantage: With your strong savings rate, you might want to explore tax-advantaged investment accounts like 401(k) or IRA.",
            ))
        }
        _ => {}
    }

    debug!(savings_rate = rate, count = insights.len(), "analyzed budget insights");
    insights
}

fn savings_tier(thresholds: &InsightThresholds, rate: f64) -> Option<Insight> {
    if rate < thresholds.savings_critical_below {
        Some(Insight::new(
            InsightKind::SavingsCritical,
            "Critical Alert: Your savings rate is very low. Would you like some tips on reducing expenses or increasing income?",
        ))
    } else if rate < thresholds.savings_improvement_below {
        Some(Insight::new(
            InsightKind::SavingsImprovement,
            format!(
                "Improvement Needed: Try to boost your savings rate to at least {:.0}%. I can help you find areas to cut back!",
                thresholds.savings_improvement_below
            ),
        ))
    } else if rate >= thresholds.savings_excellent_at {
        Some(Insight::new(
            InsightKind::SavingsExcellent,
            "Excellent Work: Your savings rate is fantastic! Ready to explore investment opportunities?",
        ))
    } else {
        None
    }
}

fn housing_check(thresholds: &InsightThresholds, summary: &BudgetSummary) -> Option<Insight> {
    let percentage = summary.category_percentage_of_income(ExpenseCategory::Housing)?;

    if percentage > thresholds.housing_alert_above {
        Some(Insight::new(
            InsightKind::HousingAlert,
            format!(
                "Housing Alert: You're spending {:.1}% on housing. The recommended maximum is {:.0}%. Want some strategies to reduce housing costs?",
                percentage, thresholds.housing_watch_above
            ),
        ))
    } else if percentage > thresholds.housing_watch_above {
        Some(Insight::new(
            InsightKind::HousingWatch,
            format!(
                "Housing Watch: Your housing costs are {:.1}% of income. This is manageable but worth monitoring.",
                percentage
            ),
        ))
    } else {
        None
    }
}

// housing is covered by its own rule, so only other categories fire here
fn dominant_expense(thresholds: &InsightThresholds, summary: &BudgetSummary) -> Option<Insight> {
    let top = summary.largest_expense()?;
    if top.category == ExpenseCategory::Housing || top.percentage <= thresholds.dominant_expense_above {
        return None;
    }

    Some(Insight::new(
        InsightKind::SpendingPattern,
        format!(
            "Spending Pattern: Your highest expense is {} at {:.1}%. Would you like tips on reducing {} costs?",
            top.category,
            top.percentage,
            top.category.name().to_lowercase()
        ),
    ))
}

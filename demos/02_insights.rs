/// insights - budget, goal and notification insights over a few months
use chrono::{Duration, TimeZone, Utc};
use finance_advisor_rs::{
    analyze_budget_insights, check_notifications, financial_health_score,
    generate_budget_summary, generate_goal_based_insights, BudgetHistory, ExpenseMap, Goal,
    LearningProgress, RawProfile, SafeTimeProvider, TimeSource, UserProfile,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== insights ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    // profile as it arrives from onboarding
    let profile = UserProfile::try_from(RawProfile {
        user_type: Some("student".to_string()),
        monthly_income: Some(1800.0),
        goals: vec!["emergency_fund".to_string(), "debt_payoff".to_string()],
    })?;

    let mut history = BudgetHistory::new();
    let progress = LearningProgress::new();

    let january = ExpenseMap::from_entries([("Housing", 950.0), ("Food", 400.0), ("Entertainment", 350.0)])?;
    let summary = generate_budget_summary(1800.0, &january)?;
    history.record(&summary, &time);

    println!("january ({:.1}% saved)", summary.savings_rate);
    for insight in analyze_budget_insights(&summary, &profile)
        .into_iter()
        .chain(generate_goal_based_insights(&profile, Some(&summary)))
    {
        println!("  [{:?}] {}", insight.severity, insight.message);
    }

    // six weeks later, without a new analysis
    controller.advance(Duration::days(42));
    println!("\nnotifications on {}", time.now().format("%Y-%m-%d"));
    for note in check_notifications(&history, &progress, Some(&summary), &time) {
        println!("  [{:?}] {}", note.severity, note.message);
    }

    let score = financial_health_score(&summary, &progress);
    println!("\nhealth score: {:.0} ({})", score.total, score.rating.message());

    if profile.has_goal(Goal::EmergencyFund) {
        println!("emergency fund goal set");
    }

    Ok(())
}

/// export - round-trip session data through the json interchange document
use chrono::{TimeZone, Utc};
use finance_advisor_rs::{
    generate_budget_summary, BudgetHistory, ChatExchange, ExpenseMap, ExportDocument, Goal,
    LearningProgress, SafeTimeProvider, TimeSource, UserProfile, UserType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap()
    ));

    let profile = UserProfile::new(UserType::General, 4200.0)?.with_goal(Goal::Retirement);

    let expenses = ExpenseMap::from_entries([("Housing", 1400.0), ("Utilities", 250.0), ("Food", 600.0)])?;
    let mut history = BudgetHistory::new();
    history.record(&generate_budget_summary(4200.0, &expenses)?, &time);

    let mut progress = LearningProgress::new();
    progress.complete_topic("How does compound interest work?", "Beginner", &time);

    let chat = vec![ChatExchange {
        question: "Should I pay off debt or invest first?".to_string(),
        response: "Compare your debt interest rate with expected returns.".to_string(),
        timestamp: "08:00".to_string(),
    }];

    let document = ExportDocument::new(profile, chat, history, progress, &time);
    let json = document.to_json_pretty()?;
    println!("{}", json);

    let restored = ExportDocument::from_json(&json)?;
    println!("\nrestored {} snapshot(s), onboarding complete: {}",
        restored.budget_history.len(), restored.onboarding_complete());

    Ok(())
}

/// quick start - analyze one month of spending
use finance_advisor_rs::{
    analyze_budget_insights, generate_budget_summary, ExpenseMap, UserProfile, UserType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a month of spending as submitted by a budget form
    let expenses = ExpenseMap::from_entries([
        ("Housing", 1500.0),
        ("Food", 500.0),
        ("Transportation", 300.0),
        ("Other", 200.0),
    ])?;

    let summary = generate_budget_summary(5000.0, &expenses)?;
    println!("savings rate: {:.1}%", summary.savings_rate);

    let profile = UserProfile::new(UserType::Professional, 5000.0)?;
    for insight in analyze_budget_insights(&summary, &profile) {
        println!("[{:?}] {}", insight.severity, insight.message);
    }

    Ok(())
}

/// calculators - the standalone financial formulas
use finance_advisor_rs::calculators::{loan_summary, retirement_savings_projection};
use finance_advisor_rs::{
    compound_interest, debt_payoff_time, emergency_fund, evaluate_housing_cost,
    fifty_thirty_twenty, retirement_needs, AdvisorError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== calculators ===\n");

    println!("emergency fund (3000/month, 6 months): {:.2}", emergency_fund(3000.0, 6)?);
    println!("1000 at 5% for 10 years, monthly: {:.2}", compound_interest(1000.0, 0.05, 10.0, 12)?);

    let split = fifty_thirty_twenty(5000.0)?;
    println!("50/30/20 of 5000: needs {:.0}, wants {:.0}, savings {:.0}", split.needs, split.wants, split.savings);

    let rating = evaluate_housing_cost(2000.0, 5000.0)?;
    println!("housing 2000 of 5000: {}", rating.description());

    let payoff = debt_payoff_time(5000.0, 200.0, 18.0)?;
    println!("\n5000 at 18% paying 200: {} months, {:.2} interest", payoff.months, payoff.total_interest);

    // payment below the monthly interest never clears the balance
    match debt_payoff_time(5000.0, 50.0, 18.0) {
        Err(err @ AdvisorError::InsufficientPayment { .. }) => println!("5000 at 18% paying 50: {}", err),
        other => println!("unexpected: {:?}", other),
    }

    let loan = loan_summary(200_000.0, 6.0, 30)?;
    println!("\nmortgage 200k at 6% over 30y: {:.2}/month, {:.2} interest", loan.monthly_payment, loan.total_interest);

    let needs = retirement_needs(30, 65, 40_000.0, 0.03)?;
    println!("nest egg for 40k/year from 30 to 65: {:.0}", needs);

    let projection = retirement_savings_projection(500.0, 30, 7.0)?;
    println!(
        "saving 500/month for 30y at 7%: {:.0} ({:.0} contributed)",
        projection.future_value, projection.total_contributions
    );

    Ok(())
}

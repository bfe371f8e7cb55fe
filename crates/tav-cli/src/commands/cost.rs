use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tav_core::AbilityScores;
use tav_mechanics::{MechError, PointBuy};

pub fn run(scores: &AbilityScores, budget: i64) -> Result<(), String> {
    let point_buy = PointBuy::default().with_budget(budget);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ability", "Score", "Cost"]);

    for (ability, score) in scores.iter() {
        let cost = match tav_mechanics::score_cost(score) {
            Ok(cost) => cost.to_string(),
            Err(_) => "out of range".to_string(),
        };
        table.add_row(vec![ability.to_string(), score.to_string(), cost]);
    }

    println!("{table}");
    println!();

    if point_buy.is_valid(scores) {
        println!("  Point-buy cost: {budget} ({})", "OK".green());
        return Ok(());
    }

    let total = point_buy.total_cost(scores).ok();
    if let (Some(total), Some(remaining)) = (total, point_buy.remaining(scores)) {
        let status = if remaining > 0 {
            format!("{remaining} left to spend")
        } else {
            format!("{} over budget", -remaining)
        };
        println!("  Point-buy cost: {total} of {budget} ({status})");
    }
    Err(MechError::PointBuyMismatch { total, budget }.to_string())
}

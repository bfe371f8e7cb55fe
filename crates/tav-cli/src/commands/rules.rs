use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tav_core::{Ability, rules};
use tav_mechanics::point_buy::{COST_TABLE, MIN_SCORE};

const KINDS: &[&str] = &[
    "origins",
    "races",
    "classes",
    "subclasses",
    "backgrounds",
    "skills",
    "feats",
    "costs",
];

pub fn run(kind: Option<&str>, ability: Option<Ability>) -> Result<(), String> {
    let kinds: Vec<&str> = match kind {
        None => KINDS.to_vec(),
        Some(k) => {
            let k = k.trim().to_lowercase();
            let found = KINDS
                .iter()
                .copied()
                .find(|known| *known == k || singular(known) == k)
                .ok_or_else(|| format!("unknown rule table \"{k}\". Use: {}", KINDS.join(", ")))?;
            vec![found]
        }
    };

    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("  {}", kind.to_uppercase().bold());
        match *kind {
            "origins" => print_list(rules::ORIGINS),
            "races" => print_list(rules::RACES),
            "classes" => print_list(rules::CLASSES),
            "subclasses" => {
                for (class, subclasses) in rules::SUBCLASSES {
                    println!("  {class}: {}", subclasses.join(", "));
                }
            }
            "backgrounds" => print_list(rules::BACKGROUNDS),
            "skills" => print_skills(ability),
            "feats" => print_list(rules::FEATS),
            _ => print_costs(),
        }
    }

    Ok(())
}

/// "classes" -> "class", "races" -> "race".
fn singular(kind: &str) -> &str {
    kind.strip_suffix("es")
        .filter(|stem| stem.ends_with("ss"))
        .or_else(|| kind.strip_suffix('s'))
        .unwrap_or(kind)
}

fn print_list(entries: &[&str]) {
    for entry in entries {
        println!("  {entry}");
    }
}

fn print_skills(ability: Option<Ability>) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Skill", "Ability"]);
    for (skill, governing) in rules::SKILLS {
        if ability.is_some_and(|a| a != *governing) {
            continue;
        }
        table.add_row(vec![skill.to_string(), governing.to_string()]);
    }
    println!("{table}");
}

fn print_costs() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Score", "Cost"]);
    for (score, cost) in (MIN_SCORE..).zip(COST_TABLE) {
        table.add_row(vec![score.to_string(), cost.to_string()]);
    }
    println!("{table}");
}

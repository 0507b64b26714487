mod rules;

pub use rules::{
    afternoon_window_points, description_points, item_pair_points, odd_day_points,
    parse_amount, quarter_multiple_points, retailer_points, round_dollar_points,
};

use super::domain::Receipt;
use serde::{Deserialize, Serialize};

/// Scoring criteria in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    RetailerAlphanumeric,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl PointsRule {
    pub const ALL: [PointsRule; 7] = [
        PointsRule::RetailerAlphanumeric,
        PointsRule::RoundDollarTotal,
        PointsRule::QuarterMultipleTotal,
        PointsRule::ItemPairs,
        PointsRule::DescriptionLength,
        PointsRule::OddPurchaseDay,
        PointsRule::AfternoonPurchase,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PointsRule::RetailerAlphanumeric => "Alphanumeric characters in retailer name",
            PointsRule::RoundDollarTotal => "Round dollar total",
            PointsRule::QuarterMultipleTotal => "Total is a multiple of 0.25",
            PointsRule::ItemPairs => "Every two items",
            PointsRule::DescriptionLength => "Descriptions with length divisible by 3",
            PointsRule::OddPurchaseDay => "Odd purchase day",
            PointsRule::AfternoonPurchase => "Purchased between 14:00 and 16:59",
        }
    }
}

/// Contribution of one rule to a receipt's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: PointsRule,
    pub points: u32,
}

/// Per-rule audit trail for a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: u32,
}

impl ScoreBreakdown {
    pub fn points_for(&self, rule: PointsRule) -> u32 {
        self.components
            .iter()
            .find(|component| component.rule == rule)
            .map(|component| component.points)
            .unwrap_or(0)
    }
}

/// Total reward points for a receipt. Never fails: fields that do not parse add nothing.
pub fn score(receipt: &Receipt) -> u32 {
    breakdown(receipt).total
}

/// Evaluate every rule and keep each contribution.
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    // Rules 2 and 3 share a single parse of the total.
    let parsed_total = parse_amount(&receipt.total);

    let components: Vec<ScoreComponent> = PointsRule::ALL
        .into_iter()
        .map(|rule| {
            let points = match rule {
                PointsRule::RetailerAlphanumeric => retailer_points(&receipt.retailer),
                PointsRule::RoundDollarTotal => round_dollar_points(parsed_total),
                PointsRule::QuarterMultipleTotal => quarter_multiple_points(parsed_total),
                PointsRule::ItemPairs => item_pair_points(receipt.items.len()),
                PointsRule::DescriptionLength => description_points(&receipt.items),
                PointsRule::OddPurchaseDay => odd_day_points(&receipt.purchase_date),
                PointsRule::AfternoonPurchase => afternoon_window_points(&receipt.purchase_time),
            };
            ScoreComponent { rule, points }
        })
        .collect();

    let total = components
        .iter()
        .fold(0u32, |sum, component| sum.saturating_add(component.points));

    ScoreBreakdown { components, total }
}

use crate::asset::{Asset, AssetCategory, AssetStatus};
use serde::Serialize;
use std::collections::BTreeMap;

const STATUSES: [AssetStatus; 5] = [
    AssetStatus::Moving,
    AssetStatus::Idle,
    AssetStatus::Stopped,
    AssetStatus::Breakdown,
    AssetStatus::Maintenance,
];

const CATEGORIES: [AssetCategory; 4] = [
    AssetCategory::HeavyTransport,
    AssetCategory::Shuttle,
    AssetCategory::Construction,
    AssetCategory::Support,
];

/// Dashboard aggregates over the current asset collection
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total_assets: usize,
    /// Every status is present, zero when unused
    pub by_status: BTreeMap<&'static str, usize>,
    pub by_category: BTreeMap<&'static str, usize>,
    /// Share of assets currently Moving, rounded to a whole percent
    pub utilization_percent: u32,
    pub total_revenue_month_to_date: f64,
    pub total_cost_month_to_date: f64,
    pub net_profit_month_to_date: f64,
    /// kg
    pub total_co2_emissions: f64,
}

impl FleetSummary {
    /// Missing financial fields count as zero
    pub fn from_assets(assets: &[Asset]) -> Self {
        let mut by_status: BTreeMap<&'static str, usize> =
            STATUSES.iter().map(|s| (s.as_str(), 0)).collect();
        let mut by_category: BTreeMap<&'static str, usize> =
            CATEGORIES.iter().map(|c| (c.as_str(), 0)).collect();

        let mut revenue = 0.0;
        let mut cost = 0.0;
        let mut co2 = 0.0;

        for asset in assets {
            *by_status.entry(asset.status.as_str()).or_insert(0) += 1;
            *by_category.entry(asset.category.as_str()).or_insert(0) += 1;
            revenue += asset.details.revenue_month_to_date.unwrap_or(0.0);
            cost += asset.details.cost_month_to_date.unwrap_or(0.0);
            co2 += asset.details.co2_emissions.unwrap_or(0.0);
        }

        let moving = assets.iter().filter(|a| a.is_moving()).count();
        let utilization_percent = if assets.is_empty() {
            0
        } else {
            (moving as f64 * 100.0 / assets.len() as f64).round() as u32
        };

        Self {
            total_assets: assets.len(),
            by_status,
            by_category,
            utilization_percent,
            total_revenue_month_to_date: revenue,
            total_cost_month_to_date: cost,
            net_profit_month_to_date: revenue - cost,
            total_co2_emissions: co2,
        }
    }
}

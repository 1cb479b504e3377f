use crate::types::preferences::UsageVolume;
use crate::types::recommendation::CostRange;
use crate::types::tool::Tool;

/// Synthetic monthly token volume at a multiplier of 1.0.
pub const BASE_MONTHLY_TOKENS: f64 = 100_000.0;

/// Estimated metered spend for one month, assuming API costs are quoted per
/// 1K tokens and usage splits evenly between input and output.
pub fn api_monthly_cost(tool: &Tool, multiplier: f64) -> Option<f64> {
    let api = tool.pricing.api.as_ref()?;
    let tokens = multiplier * BASE_MONTHLY_TOKENS;
    let per_thousand = api.input_cost.unwrap_or(0.0) + api.output_cost.unwrap_or(0.0);
    Some((tokens / 1000.0) * per_thousand / 2.0)
}

pub fn estimate_cost(tool: &Tool, volume: UsageVolume) -> CostRange {
    let pricing = &tool.pricing;
    let mut min: Option<f64> = None;
    let mut max = 0.0_f64;

    if pricing.has_free_tier() {
        min = Some(0.0);
    }

    let prices = pricing.subscription_prices();
    let cheapest = prices.iter().copied().reduce(f64::min);
    let dearest = prices.iter().copied().reduce(f64::max);
    if let (Some(cheapest), Some(dearest)) = (cheapest, dearest) {
        if pricing.has_free_tier() {
            max = cheapest;
        } else {
            min = Some(cheapest);
            max = dearest;
        }
    }

    if let Some(api_cost) = api_monthly_cost(tool, volume.multiplier()) {
        match min {
            None => {
                min = Some(api_cost);
                max = api_cost * 2.0;
            }
            Some(_) => max = max.max(api_cost * 2.0),
        }
    }

    CostRange {
        min: min.unwrap_or(0.0).round() as i64,
        max: max.round() as i64,
    }
}

pub const INSIGHT_FALLBACK: &str = "Optimize your parking with our AI-driven suggestions.";

#[derive(Debug, Clone, PartialEq)]
pub struct ParkingReport {
    pub summary: String,
    pub total_spent: f64,
    pub most_visited_lot: String,
    pub savings_tip: String,
}

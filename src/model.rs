use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub predictions: Vec<MatchPrediction>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPrediction {
    pub home_team: String,
    pub away_team: String,
    pub prediction: String,
    pub confidence: u8,
}

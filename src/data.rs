use crate::model::{FeedResponse, MatchPrediction};
use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;

pub struct DataClient {
    client: Client,
}

impl DataClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch_predictions(&self, url: &str) -> Result<Vec<MatchPrediction>> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        let feed = resp.json::<FeedResponse>().await?;
        Ok(feed.predictions)
    }
}

pub fn load_predictions(path: &Path) -> Result<Vec<MatchPrediction>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let feed: FeedResponse = serde_json::from_str(&content)
        .with_context(|| format!("invalid feed document in {}", path.display()))?;
    Ok(feed.predictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sample() {
        let matches =
            load_predictions(Path::new("fixtures/predictions.json")).expect("Failed to load fixture");
        assert_eq!(matches.len(), 6);
        assert_eq!(matches[0].home_team, "Man Utd");
        assert_eq!(matches[0].away_team, "Wolves");
    }

    #[test]
    fn test_missing_field_is_a_decode_error() {
        let doc = r#"{"predictions":[{"home_team":"Arsenal","away_team":"Chelsea","confidence":78}]}"#;
        assert!(serde_json::from_str::<FeedResponse>(doc).is_err());
    }
}

use maud::{html, Markup, DOCTYPE};
use thiserror::Error;

use crate::model::MatchPrediction;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("record {index} is missing required field {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index} has out-of-range confidence {value} (expected 0-100)")]
    ConfidenceOutOfRange { index: usize, value: u8 },
}

/// Renders the full prediction page. Fails on the first bad record rather
/// than emitting a partial page.
pub fn render_page(matches: &[MatchPrediction]) -> Result<String, RenderError> {
    for (index, m) in matches.iter().enumerate() {
        validate(index, m)?;
    }

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Football AI" }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="bg-gray-900 text-white min-h-screen p-6" {
                div class="max-w-6xl mx-auto" {
                    header class="text-center mb-12" {
                        h1 class="text-4xl font-bold text-green-400 tracking-wider" {
                            "AI FOOTBALL PREDICTIONS"
                        }
                        p class="text-gray-400 mt-2" { "Model-generated picks for upcoming fixtures" }
                    }
                    div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
                        @for m in matches {
                            (card(m))
                        }
                    }
                }
            }
        }
    };

    Ok(page.into_string())
}

fn card(m: &MatchPrediction) -> Markup {
    html! {
        div class="bg-gray-800 rounded-xl border border-gray-700 shadow-lg overflow-hidden hover:border-green-500 transition duration-300" {
            div class="p-6 text-center border-b border-gray-700" {
                div class="text-xl font-bold flex justify-between items-center" {
                    span class="w-1/3 text-right" { (m.home_team) }
                    span class="text-gray-500 text-sm px-2" { "VS" }
                    span class="w-1/3 text-left" { (m.away_team) }
                }
            }
            div class="p-4 bg-black/50 text-center" {
                p class="text-xs text-gray-500 uppercase tracking-wide mb-1" { "AI Prediction" }
                p class="text-2xl font-extrabold text-green-400" { (m.prediction) }
                div class="mt-2 inline-block px-3 py-1 rounded-full text-xs font-bold bg-gray-700" {
                    (m.confidence) "% Confidence"
                }
            }
        }
    }
}

fn validate(index: usize, m: &MatchPrediction) -> Result<(), RenderError> {
    let fields = [
        ("home_team", &m.home_team),
        ("away_team", &m.away_team),
        ("prediction", &m.prediction),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(RenderError::MissingField { index, field });
        }
    }
    if m.confidence > 100 {
        return Err(RenderError::ConfidenceOutOfRange {
            index,
            value: m.confidence,
        });
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// What the generator is asked to narrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationInput {
    pub prompt: String,
    #[serde(default)]
    pub mode: Mode,
}

impl GenerationInput {
    pub fn new(prompt: impl Into<String>, mode: Mode) -> Self {
        Self {
            prompt: prompt.into(),
            mode,
        }
    }
}

/// One phase of the generated roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub phase: String,
    pub focus: String,
    pub impact: String,
}

/// The structured narrative produced for one input.
///
/// `insights` always holds three entries and `roadmap` one entry per
/// phase, in phase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub title: String,
    pub summary: String,
    pub insights: Vec<String>,
    pub roadmap: Vec<RoadmapEntry>,
    pub call_to_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = GenerationResult {
            title: "t".to_string(),
            summary: "s".to_string(),
            insights: vec!["i".to_string()],
            roadmap: vec![RoadmapEntry {
                phase: "Explorasi".to_string(),
                focus: "Explorasi Produk Baru".to_string(),
                impact: "Mengurangi siklus iterasi produk.".to_string(),
            }],
            call_to_action: "c".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["callToAction"], "c");
        assert_eq!(json["roadmap"][0]["phase"], "Explorasi");
        assert!(json.get("call_to_action").is_none());
    }

    #[test]
    fn input_mode_defaults_when_absent() {
        let input: GenerationInput = serde_json::from_str(r#"{"prompt": "x"}"#).unwrap();
        assert_eq!(input.mode, Mode::Strategi);
    }
}

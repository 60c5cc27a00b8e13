//! ElizaOS character profile written as `eliza_character_template.json`.
//!
//! Field names follow the ElizaOS character schema, which mixes snake_case
//! (`system_prompt`) with camelCase (`messageExamples`).

use serde::{Deserialize, Serialize};

/// File name of the character profile inside the base directory.
pub const CHARACTER_TEMPLATE_FILE: &str = "eliza_character_template.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub bio: String,
    pub knowledge: Vec<String>,
    #[serde(rename = "messageExamples")]
    pub message_examples: Vec<MessageExample>,
    #[serde(rename = "postExamples")]
    pub post_examples: Vec<String>,
    pub topics: Vec<String>,
    pub style: CharacterStyle,
    pub adjectives: Vec<String>,
}

/// One user/assistant exchange used as a few-shot example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageExample {
    pub user: String,
    pub assistant: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStyle {
    /// Style adjectives applied to every kind of output.
    pub all: Vec<String>,
}

impl CharacterProfile {
    /// The stock ElizaCog persona.
    pub fn elizacog() -> Self {
        Self {
            name: "ElizaCog AI".to_string(),
            description: "An AI assistant powered by OpenCog reasoning and ElizaOS capabilities"
                .to_string(),
            system_prompt: "You are an AI assistant with access to OpenCog's knowledge \
                representation and reasoning capabilities. Use logical inference and knowledge \
                graphs to provide thoughtful, well-reasoned responses."
                .to_string(),
            bio: "I am ElizaCog, an AI that combines symbolic reasoning with conversational \
                abilities."
                .to_string(),
            knowledge: strings(&[
                "cognitive_science",
                "knowledge_representation",
                "artificial_intelligence",
            ]),
            message_examples: vec![MessageExample {
                user: "How does knowledge representation work?".to_string(),
                assistant: "Knowledge representation involves encoding information in a \
                    structured format that AI systems can process and reason with. In my case, \
                    I use OpenCog's AtomSpace to store and manipulate knowledge as hypergraphs."
                    .to_string(),
            }],
            post_examples: strings(&[
                "Exploring the intersection of symbolic AI and natural language understanding",
            ]),
            topics: strings(&["reasoning", "knowledge_graphs", "cognitive_architectures"]),
            style: CharacterStyle {
                all: strings(&["thoughtful", "analytical", "educational", "precise"]),
            },
            adjectives: strings(&["intelligent", "reasoning", "knowledgeable", "helpful"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elizacog_profile_serializes_schema_keys() {
        let json = serde_json::to_value(CharacterProfile::elizacog()).unwrap();
        for key in [
            "name",
            "description",
            "system_prompt",
            "bio",
            "knowledge",
            "messageExamples",
            "postExamples",
            "topics",
            "style",
            "adjectives",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["name"], "ElizaCog AI");
        assert_eq!(json["style"]["all"][0], "thoughtful");
    }

    #[test]
    fn test_system_prompt_is_single_spaced() {
        let profile = CharacterProfile::elizacog();
        assert!(!profile.system_prompt.contains("  "));
        assert!(profile.system_prompt.starts_with("You are an AI assistant"));
        assert!(profile.system_prompt.ends_with("well-reasoned responses."));
    }
}

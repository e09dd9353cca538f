use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, UsernameError};

// Order matters: seeded and scripted picks index into these lists directly.

pub const DESCRIPTORS: &[&str] = &[
    "cute", "adorable", "lovable", "happy", "sandy",
    "bubbly", "friendly", "floating", "drifting",
];

pub const CREATURE_DESCRIPTORS: &[&str] = &[
    "swimming", "sleepy", "sad", "hungry", "big",
    "small", "huge", "tiny", "massive", "fat",
    "skinny", "shy", "fast", "slow", "wiggly",
    // Also a generic descriptor: drifting suits creatures and objects alike.
    "drifting",
];

pub const COLORS: &[&str] = &[
    "blue", "blueGreen", "darkCyan", "electricBlue", "greenBlue",
    "lightCyan", "lightSeaGreen", "seaGreen", "turquoise", "aqua",
    "aquamarine", "teal", "cyan", "gray", "darkBlue",
    "cerulean", "azure", "lapis", "navy",
];

pub const SEA_OBJECTS: &[&str] = &[
    "boat", "ship", "submarine", "yacht", "dinghy",
    "raft", "kelp", "seaweed", "anchor",
];

pub const SEA_CREATURES: &[&str] = &[
    "walrus", "seal", "fish", "shark", "clam",
    "coral", "whale", "crab", "lobster", "starfish",
    "eel", "dolphin", "squid", "jellyfish", "ray",
    "shrimp", "mantaRay", "angler", "snorkler", "scubaDiver",
    "urchin", "anemone", "morel", "axolotl",
];

/// The five word lists a [`Generator`](crate::names::Generator) draws from.
///
/// Every field falls back to the built-in list when missing from a TOML file,
/// so a file only needs the lists it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLists {
    #[serde(default = "default_descriptors")]
    pub descriptors: Vec<String>,
    #[serde(default = "default_creature_descriptors")]
    pub creature_descriptors: Vec<String>,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default = "default_sea_objects")]
    pub sea_objects: Vec<String>,
    #[serde(default = "default_sea_creatures")]
    pub sea_creatures: Vec<String>,
}

pub fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_descriptors() -> Vec<String> {
    to_owned_list(DESCRIPTORS)
}

fn default_creature_descriptors() -> Vec<String> {
    to_owned_list(CREATURE_DESCRIPTORS)
}

fn default_colors() -> Vec<String> {
    to_owned_list(COLORS)
}

fn default_sea_objects() -> Vec<String> {
    to_owned_list(SEA_OBJECTS)
}

fn default_sea_creatures() -> Vec<String> {
    to_owned_list(SEA_CREATURES)
}

impl Default for WordLists {
    fn default() -> Self {
        WordLists {
            descriptors: default_descriptors(),
            creature_descriptors: default_creature_descriptors(),
            colors: default_colors(),
            sea_objects: default_sea_objects(),
            sea_creatures: default_sea_creatures(),
        }
    }
}

impl WordLists {
    /// Reject words that would break the no-whitespace shape of a name.
    pub fn validate(&self) -> Result<()> {
        let lists: [(&'static str, &Vec<String>); 5] = [
            ("descriptors", &self.descriptors),
            ("creature_descriptors", &self.creature_descriptors),
            ("colors", &self.colors),
            ("sea_objects", &self.sea_objects),
            ("sea_creatures", &self.sea_creatures),
        ];
        for (list, words) in lists {
            if let Some(word) = words
                .iter()
                .find(|w| w.is_empty() || w.chars().any(char::is_whitespace))
            {
                return Err(UsernameError::InvalidWord {
                    list,
                    word: word.clone(),
                });
            }
        }
        Ok(())
    }
}

pub fn write_default_word_lists(path: &Path) -> Result<()> {
    let words = WordLists::default();
    let content = toml::to_string_pretty(&words)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn read_word_lists(path: &Path) -> Result<WordLists> {
    let content = std::fs::read_to_string(path)?;
    let words: WordLists = toml::from_str(&content)?;
    words.validate()?;
    Ok(words)
}

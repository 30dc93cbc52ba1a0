//! Content generation from static lookup tables
//!
//! The generator assembles captions, hashtag sets, asset prompts, and a
//! heuristic engagement score from fixed string pools. Randomness comes from
//! an injected seedable source so generation is reproducible in tests; there
//! is no real model behind it.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{GeneratedPost, Platform, Tone};

const CTA_LIBRARY: [&str; 6] = [
    "Tap the link in bio to explore",
    "Save this for your next inspiration boost",
    "Share with a friend who needs to see this",
    "Drop your thoughts in the comments",
    "Follow for more actionable insights",
    "Double-tap if you agree",
];

const INSPIRATIONAL_DESCRIPTORS: [&str; 5] =
    ["Bold", "Energetic", "Visionary", "Motivational", "Empowering"];
const EDUCATIONAL_DESCRIPTORS: [&str; 5] = [
    "Actionable",
    "Research-backed",
    "Step-by-step",
    "Practical",
    "Insightful",
];
const FRIENDLY_DESCRIPTORS: [&str; 5] =
    ["Conversational", "Warm", "Playful", "Relatable", "Casual"];
const BOLD_DESCRIPTORS: [&str; 5] = [
    "Provocative",
    "Unfiltered",
    "Unapologetic",
    "Confident",
    "Trailblazing",
];

const HASHTAG_SETS: [(&str, [&str; 6]); 5] = [
    (
        "wellness",
        [
            "#HealthyHabits",
            "#MindfulLiving",
            "#WellnessJourney",
            "#SelfCareDaily",
            "#HolisticHealth",
            "#BalanceYourLife",
        ],
    ),
    (
        "marketing",
        [
            "#GrowthTips",
            "#SocialStrategy",
            "#ContentCreator",
            "#BrandBuilding",
            "#DigitalMarketing",
            "#CreatorsOfInstagram",
        ],
    ),
    (
        "travel",
        [
            "#Wanderlust",
            "#TravelDiaries",
            "#HiddenGems",
            "#ExploreMore",
            "#PassportReady",
            "#AdventureCulture",
        ],
    ),
    (
        "food",
        [
            "#Foodstagram",
            "#ChefMode",
            "#FlavorJourney",
            "#RecipeIdea",
            "#KitchenDiaries",
            "#TastyTrends",
        ],
    ),
    (
        "design",
        [
            "#DesignInspiration",
            "#CreativeProcess",
            "#BuildInPublic",
            "#DesignThinking",
            "#StudioDay",
            "#VisualStorytelling",
        ],
    ),
];

/// Descriptor pool for a tone
pub fn tone_descriptors(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Inspirational => &INSPIRATIONAL_DESCRIPTORS,
        Tone::Educational => &EDUCATIONAL_DESCRIPTORS,
        Tone::Friendly => &FRIENDLY_DESCRIPTORS,
        Tone::Bold => &BOLD_DESCRIPTORS,
    }
}

/// Fixed hashtag pool for a recognized category
pub fn hashtag_pool(category: &str) -> Option<&'static [&'static str; 6]> {
    HASHTAG_SETS
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, tags)| tags)
}

/// Category keys the generator recognizes
pub fn known_categories() -> Vec<&'static str> {
    HASHTAG_SETS.iter().map(|(key, _)| *key).collect()
}

/// Editorial strengths per platform, shown alongside account summaries
pub fn platform_strengths(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Instagram => &["visual storytelling", "reels", "community building"],
        Platform::Facebook => &["longer narratives", "groups", "event-driven content"],
        Platform::Pinterest => &["evergreen inspiration", "how-to guides", "visual catalogs"],
    }
}

/// One-line strengths blurb for a platform
pub fn suggested_platform_copy(platform: Platform) -> String {
    platform_strengths(platform).join(", ")
}

/// A content-generation request
///
/// All fields are defensively defaulted during generation: an unrecognized
/// category falls back to a pooled hashtag sample and an empty platform list
/// falls back to Instagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub category: String,
    pub tone: Tone,
    pub platforms: Vec<Platform>,
}

/// Table-driven post generator with a seedable random source
pub struct ContentGenerator {
    rng: StdRng,
}

impl ContentGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed for reproducible output
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a post artifact from the request
    ///
    /// Never fails: every unexpected input is substituted with a sane
    /// default rather than signalled to the caller.
    pub fn generate(&mut self, request: &GenerateRequest) -> GeneratedPost {
        let platforms = if request.platforms.is_empty() {
            vec![Platform::Instagram]
        } else {
            request.platforms.clone()
        };

        let descriptor = self.pick_descriptor(request.tone);
        let hashtags = self.pick_hashtags(&request.category);
        let cta = self.pick_cta();

        let caption = format!(
            "Let's talk {} today. Here is a {} approach you can implement right away. \
             What resonates most with your audience about this? {}.",
            request.topic.to_lowercase(),
            descriptor,
            cta,
        );

        let palette = if request.tone == Tone::Friendly {
            "bright color palette"
        } else {
            "bold contrast palette"
        };
        let composition = if platforms.contains(&Platform::Pinterest) {
            "vertical composition"
        } else {
            "square format"
        };
        let image_prompt = format!(
            "High-impact {} visual, {}, {}",
            request.category, palette, composition
        );

        let engagement_score = score_engagement(&request.category, request.tone, &platforms);

        GeneratedPost {
            id: Uuid::new_v4().to_string(),
            topic: request.topic.clone(),
            category: request.category.clone(),
            tone: request.tone,
            caption,
            hashtags,
            image_prompt,
            recommended_platforms: platforms,
            call_to_action: cta.to_string(),
            engagement_score,
        }
    }

    /// Two tone descriptors sampled without replacement, joined lowercase
    fn pick_descriptor(&mut self, tone: Tone) -> String {
        let picks: Vec<&str> = tone_descriptors(tone)
            .choose_multiple(&mut self.rng, 2)
            .copied()
            .collect();
        picks.join(" & ").to_lowercase()
    }

    /// Five hashtags from the category's pool, or from a six-tag sample
    /// pooled across all categories when the key is unrecognized
    fn pick_hashtags(&mut self, category: &str) -> Vec<String> {
        let seed: Vec<&str> = match hashtag_pool(category) {
            Some(pool) => pool.to_vec(),
            None => {
                let all: Vec<&str> = HASHTAG_SETS
                    .iter()
                    .flat_map(|(_, tags)| tags.iter().copied())
                    .collect();
                all.choose_multiple(&mut self.rng, 6).copied().collect()
            }
        };

        seed.choose_multiple(&mut self.rng, 5)
            .map(|tag| tag.to_string())
            .collect()
    }

    fn pick_cta(&mut self) -> &'static str {
        CTA_LIBRARY
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(CTA_LIBRARY[0])
    }
}

impl Default for ContentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Heuristic 0-100 engagement estimate
fn score_engagement(category: &str, tone: Tone, platforms: &[Platform]) -> u8 {
    let tone_bonus = match tone {
        Tone::Bold => 8,
        Tone::Friendly => 5,
        Tone::Educational => 6,
        Tone::Inspirational => 7,
    };
    let platform_bonus = if platforms.contains(&Platform::Instagram) {
        7
    } else {
        5
    };
    let category_base = (category.len() % 10) + 72;
    (category_base + tone_bonus + platform_bonus).min(100) as u8
}

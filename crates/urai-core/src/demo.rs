//! Demo image "generator".
//!
//! This is not a real generator: it waits for a fixed delay and returns a
//! canned stock-photo URL picked by naive keyword matching on the prompt.
//! No inference happens and the model choice only shows up in logs.

use crate::types::Model;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::time::Duration;

const NATURE_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1579546929518-9e396f3cc809",
    "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05",
    "https://images.unsplash.com/photo-1501854140801-50d01698950b",
];

const ABSTRACT_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1516116216624-53e697fedbea",
    "https://images.unsplash.com/photo-1557672172-298e090bd0f1",
    "https://images.unsplash.com/photo-1574169208507-84376144848b",
];

const TECHNOLOGY_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1682686581221-c129e7636df8",
    "https://images.unsplash.com/photo-1550745165-9bc0b252726f",
    "https://images.unsplash.com/photo-1518770660439-4636190af475",
];

const NATURE_KEYWORDS: [&str; 6] = ["nature", "landscape", "mountain", "forest", "sky", "water"];
const TECHNOLOGY_KEYWORDS: [&str; 6] = ["tech", "computer", "digital", "future", "robot", "ai"];

/// Pool a demo image is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    Nature,
    Technology,
    Abstract,
}

impl ImageCategory {
    /// Pick a pool by substring match on the lowercased prompt.
    ///
    /// Nature is checked first, so "mountain" never lands in technology even
    /// though it contains "ai".
    pub fn for_prompt(prompt: &str) -> Self {
        let prompt = prompt.to_lowercase();
        if NATURE_KEYWORDS.iter().any(|k| prompt.contains(k)) {
            ImageCategory::Nature
        } else if TECHNOLOGY_KEYWORDS.iter().any(|k| prompt.contains(k)) {
            ImageCategory::Technology
        } else {
            ImageCategory::Abstract
        }
    }

    fn pool(&self) -> &'static [&'static str] {
        match self {
            ImageCategory::Nature => &NATURE_IMAGES,
            ImageCategory::Technology => &TECHNOLOGY_IMAGES,
            ImageCategory::Abstract => &ABSTRACT_IMAGES,
        }
    }
}

/// A canned demo result.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedImage {
    pub image_url: String,
    pub category: ImageCategory,
    /// Always true: the URL is stock content, not generated output.
    pub demo: bool,
}

/// Non-functional stand-in for an image generation backend.
#[derive(Debug, Clone)]
pub struct DemoImageGenerator {
    delay: Duration,
}

impl DemoImageGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Wait out the artificial delay, then return a stock URL for the prompt.
    pub async fn generate(&self, prompt: &str, model: Model) -> GeneratedImage {
        tracing::debug!(%model, "Demo image generator called; returning canned URL");
        tokio::time::sleep(self.delay).await;

        let category = ImageCategory::for_prompt(prompt);
        let pool = category.pool();
        let image_url = pool
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(pool[0]);

        GeneratedImage {
            image_url: image_url.to_string(),
            category,
            demo: true,
        }
    }
}

impl Default for DemoImageGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

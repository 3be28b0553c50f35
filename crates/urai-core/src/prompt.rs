//! Platform-to-instruction mapping.
//!
//! Every provider builds its instruction text here so the prompt table
//! exists exactly once.

use crate::types::Platform;

/// Joins the platform instruction and user-supplied context.
pub const CONTEXT_CONNECTIVE: &str = " Consider the following additional context: ";

/// The fixed instruction for a platform.
pub fn instruction(platform: Platform) -> &'static str {
    match platform {
        Platform::Twitter => {
            "Generate a compelling Twitter post description with relevant hashtags for this image. \
             Keep it within 280 characters. Make it engaging, optimize for engagement, \
             and include 3-5 relevant hashtags."
        }
        Platform::Instagram => {
            "Create an engaging Instagram caption for this image. Include relevant emojis and \
             8-10 hashtags at the end. Make it visually appealing with some paragraph breaks."
        }
        Platform::Pinterest => {
            "Write a SEO-optimized Pinterest description for this image. Include relevant \
             keywords and 4-6 hashtags. Focus on making it discoverable in Pinterest search."
        }
        Platform::Youtube => {
            "Generate a YouTube video description for this thumbnail image. Include relevant \
             keywords, a short engaging summary, and 3-5 hashtags. Make it SEO friendly."
        }
        Platform::Threads => {
            "Create a casual, conversational Threads post about this image. Keep it authentic \
             and engaging, include 2-3 relevant hashtags. Focus on starting discussions."
        }
        Platform::Snapchat => {
            "Write a fun, informal Snapchat caption for this image. Keep it short, playful, \
             and include 1-2 trending hashtags or a catchy phrase. Make it appeal to the \
             Snapchat audience."
        }
    }
}

/// Build the full prompt for a platform.
///
/// A present, non-empty `custom` string is appended verbatim after
/// [`CONTEXT_CONNECTIVE`]. Nothing is escaped or trimmed; oversized prompts
/// are left for the provider to reject.
pub fn build_prompt(platform: Platform, custom: Option<&str>) -> String {
    let base = instruction(platform);
    match custom {
        Some(context) if !context.is_empty() => format!("{base}{CONTEXT_CONNECTIVE}{context}"),
        _ => base.to_string(),
    }
}

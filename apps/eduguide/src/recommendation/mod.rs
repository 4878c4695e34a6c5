// Recommendation pipeline: profile → prompt + schema → engine → GuidanceData.
// All engine calls go through llm_client; no direct HTTP here.

pub mod client;
pub mod prompts;
pub mod request;
pub mod schema;

pub use client::RecommendationClient;

//! AI drafting helpers
//!
//! Prompt text is assembled from the optional fields of a request, sent to a
//! chat-completions endpoint once, and the JSON reply is deserialized as-is.
//! There is no retry, caching or repair of malformed replies.

pub mod client;
pub mod prompts;

pub use client::{LlmClient, LlmError, OpenAiClient};
pub use prompts::{BlogDraft, BlogDraftRequest, DraftLength, SeoRequest, SeoSuggestion};

use serde::de::DeserializeOwned;

/// Draft a blog post for the admin editor.
pub async fn draft_blog_post(
    client: &dyn LlmClient,
    req: &BlogDraftRequest,
) -> Result<BlogDraft, LlmError> {
    let prompt = prompts::blog_draft(req);
    tracing::debug!(topic = %req.topic, prompt_len = prompt.len(), "requesting blog draft");
    let reply = client.complete(prompts::BLOG_SYSTEM_PROMPT, &prompt).await?;
    parse_reply(&reply)
}

/// Suggest SEO metadata for an existing post.
pub async fn suggest_seo(
    client: &dyn LlmClient,
    req: &SeoRequest,
) -> Result<SeoSuggestion, LlmError> {
    let prompt = prompts::seo(req);
    tracing::debug!(title = %req.title, prompt_len = prompt.len(), "requesting seo suggestions");
    let reply = client.complete(prompts::SEO_SYSTEM_PROMPT, &prompt).await?;
    parse_reply(&reply)
}

fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, LlmError> {
    serde_json::from_str(reply).map_err(|e| {
        tracing::warn!(error = %e, reply_len = reply.len(), "LLM reply was not the expected JSON");
        LlmError::MalformedReply(e)
    })
}

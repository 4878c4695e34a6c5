// Cross-cutting prompt fragments shared by every engine call.
// Each feature that needs the engine defines its own prompts.rs alongside it.

/// System instruction that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with a single valid JSON document only. \
    Do NOT include any text outside the JSON document. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

pub mod gemini;
pub mod model_client;
pub mod prompts;

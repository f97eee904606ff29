/// Service name under which every secret is filed in the OS credential vault.
pub const APP_SERVICE_NAME: &str = "OdinView";

/// Vault account holding the OpenAI API key.
pub const OPENAI_ACCOUNT: &str = "openai";

/// Vault account holding the Gemini API key.
pub const GEMINI_ACCOUNT: &str = "gemini";

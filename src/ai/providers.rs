// Well-known AI providers and their endpoints
// Author: kelexine (https://github.com/kelexine)

/// Providers whose endpoint is known without configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownProvider {
    OpenAi,
    DeepSeek,
}

impl KnownProvider {
    pub const ALL: [KnownProvider; 2] = [KnownProvider::OpenAi, KnownProvider::DeepSeek];

    /// Look up a provider by its identifier (case-sensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            KnownProvider::OpenAi => "openai",
            KnownProvider::DeepSeek => "deepseek",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            KnownProvider::OpenAi => "https://api.openai.com/v1/chat/completions",
            KnownProvider::DeepSeek => "https://api.deepseek.com/v1/seo",
        }
    }
}

use log::Level;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

// WhatsApp number that receives enrollment requests.
pub const WHATSAPP_RECIPIENT: &str = "7858926596";

pub const PURCHASE_DELAY_MS: u32 = 2_000;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: Level = Level::Info;

/// Gemini API key baked in at build time (`GEMINI_API_KEY=... trunk build`).
/// An empty value is treated the same as a missing one.
pub fn gemini_api_key() -> Option<&'static str> {
    non_empty(option_env!("GEMINI_API_KEY"))
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_count_as_missing() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some(" abc ")), Some("abc"));
    }
}

//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Optional remote API base, commented out when unset
    fn api_base_to_toml(&self) -> String {
        match &self.engine.api_base {
            Some(base) => format!("api_base = \"{}\"\n", base),
            None => format!("# api_base = \"{}\"\n", crate::engine::DEFAULT_API_BASE),
        }
    }

    /// Serialize config to TOML string
    ///
    /// The API key is never written out; it belongs in the environment.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# precis configuration

# Theme: {theme_names}
theme = "{theme}"

# ─────────────────────────────────────────────────────────────────────────────
# SUMMARIZATION ENGINE
# ─────────────────────────────────────────────────────────────────────────────
# Provider options: "extractive" (default), "huggingface", "none"
# - extractive: local sentence scoring, works offline
# - huggingface: Hugging Face Inference API (set PRECIS_API_KEY or HF_TOKEN)
# - none: summarization disabled
[engine]
provider = "{provider}"
model = "{model}"
{api_base}# api_key = ""  # prefer PRECIS_API_KEY or HF_TOKEN
timeout_secs = {timeout}
min_length = {min_length}
max_length = {max_length}
# Sentences kept by the extractive engine
max_sentences = {max_sentences}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the log panel or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"

# Terminal UI
[ui]
tick_ms = {tick_ms}
show_logs = {show_logs}
"#,
            theme_names = crate::theme::THEME_NAMES.join(", "),
            theme = self.theme,
            provider = self.engine.provider,
            model = self.engine.model,
            api_base = self.api_base_to_toml(),
            timeout = self.engine.timeout_secs,
            min_length = self.engine.min_length,
            max_length = self.engine.max_length,
            max_sentences = self.engine.max_sentences,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
            tick_ms = self.ui.tick_ms,
            show_logs = self.ui.show_logs,
        )
    }
}

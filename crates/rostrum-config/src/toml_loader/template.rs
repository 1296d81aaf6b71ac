//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Rostrum configuration
# Only override what you want to change -- missing fields use defaults.

[ai]
# api_key = ""                 # falls back to the GEMINI_API_KEY env var
# model = "gemini-2.5-flash"
# max_tokens = 4096
# temperature = 0.7            # 0.0-2.0

[logging]
# level = "rostrum=info"       # tracing directive, e.g. "rostrum=debug"
"##
    .to_string()
}

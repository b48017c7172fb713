//! Configuration: TOML schema, discovery, and validation.

mod core;
mod loader;
pub mod validation;

pub use self::core::{AspectConfig, AspectlensConfig, LexiconConfig, MatchingConfig, OutputConfig};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};

pub use validation::{validate_config, validate_config_result, ConfigIssue, ConfigValidation};

/// Commented starting point written by `aspectlens init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# aspectlens configuration

[matching]
# "substring" matches terms anywhere, even inside larger words.
# "word-boundary" only matches whole words and phrases.
mode = "substring"

[output]
default_format = "terminal"

# Uncomment to replace the built-in lexicon. Either list may be given alone.
# [lexicon]
# positive = ["supportive", "caring", "friendly", "helpful"]
# negative = ["crowded", "rude", "dirty", "slow"]

# Uncomment to replace the built-in aspect catalog. Order sets output order.
# [[aspects]]
# id = "dietitian"
# label = "Dietitian Guidance"
# keywords = ["dietitian", "nutritionist"]
"#;

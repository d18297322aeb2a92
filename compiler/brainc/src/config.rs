//! REPL configuration from command-line flags and environment variables.
//!
//! Flags win over environment variables, which win over defaults.
//!
//! | Flag              | Variable          | Default   |
//! |-------------------|-------------------|-----------|
//! | `--max-depth=<n>` | `BRAIN_MAX_DEPTH` | unlimited |
//! | `--prompt=<text>` | `BRAIN_PROMPT`    | `brain> ` |
//! | `--quiet`, `-q`   |                   | off       |

use brain_eval::EvalConfig;
use thiserror::Error;

pub const DEFAULT_PROMPT: &str = "brain> ";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid maximum call depth `{0}`: expected a non-negative integer")]
    InvalidMaxDepth(String),
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    /// Print the farewell line on exit.
    pub farewell: bool,
    pub eval: EvalConfig,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_owned(),
            farewell: true,
            eval: EvalConfig::default(),
        }
    }
}

impl ReplConfig {
    /// Build from the process environment and `args` (options only, the
    /// command name already stripped). Returns the positional arguments
    /// left over.
    pub fn from_args(args: &[String]) -> Result<(Self, Vec<String>), ConfigError> {
        Self::from_sources(args, |key| std::env::var(key).ok())
    }

    /// Like [`ReplConfig::from_args`] with an explicit variable lookup.
    pub fn from_sources(
        args: &[String],
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = ReplConfig::default();

        if let Some(prompt) = var("BRAIN_PROMPT") {
            config.prompt = prompt;
        }
        if let Some(depth) = var("BRAIN_MAX_DEPTH") {
            config.eval.max_call_depth = Some(parse_depth(&depth)?);
        }

        let mut positional = Vec::new();
        for arg in args {
            if let Some(depth) = arg.strip_prefix("--max-depth=") {
                config.eval.max_call_depth = Some(parse_depth(depth)?);
            } else if let Some(prompt) = arg.strip_prefix("--prompt=") {
                config.prompt = prompt.to_owned();
            } else if arg == "--quiet" || arg == "-q" {
                config.farewell = false;
            } else if arg.starts_with('-') && arg.len() > 1 {
                return Err(ConfigError::UnknownFlag(arg.clone()));
            } else {
                positional.push(arg.clone());
            }
        }

        Ok((config, positional))
    }
}

fn parse_depth(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidMaxDepth(value.to_owned()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    fn no_vars(_: &str) -> Option<String> {
        None
    }

    fn parsed(
        list: &[&str],
        var: impl Fn(&str) -> Option<String>,
    ) -> (ReplConfig, Vec<String>) {
        match ReplConfig::from_sources(&args(list), var) {
            Ok(parsed) => parsed,
            Err(err) => panic!("{list:?} rejected: {err}"),
        }
    }

    #[test]
    fn defaults() {
        let (config, rest) = parsed(&[], no_vars);
        assert_eq!(config, ReplConfig::default());
        assert_eq!(config.prompt, "brain> ");
        assert!(config.farewell);
        assert_eq!(config.eval.max_call_depth, None);
        assert!(rest.is_empty());
    }

    #[test]
    fn flags_and_positionals() {
        let (config, rest) = parsed(&["--quiet", "prog.brain", "--max-depth=64"], no_vars);
        assert!(!config.farewell);
        assert_eq!(config.eval.max_call_depth, Some(64));
        assert_eq!(rest, args(&["prog.brain"]));
    }

    #[test]
    fn flags_override_variables() {
        let vars = |key: &str| match key {
            "BRAIN_PROMPT" => Some("? ".to_owned()),
            "BRAIN_MAX_DEPTH" => Some("10".to_owned()),
            _ => None,
        };
        let (config, _) = parsed(&["--max-depth=3"], vars);
        assert_eq!(config.prompt, "? ");
        assert_eq!(config.eval.max_call_depth, Some(3));
    }

    #[test]
    fn invalid_depth() {
        let err = ReplConfig::from_sources(&args(&["--max-depth=lots"]), no_vars).err();
        assert_eq!(err, Some(ConfigError::InvalidMaxDepth("lots".to_owned())));

        let vars = |_: &str| Some("-1".to_owned());
        let err = ReplConfig::from_sources(&[], vars).err();
        assert_eq!(err, Some(ConfigError::InvalidMaxDepth("-1".to_owned())));
    }

    #[test]
    fn unknown_flag() {
        let err = ReplConfig::from_sources(&args(&["--fast"]), no_vars).err();
        assert_eq!(err.map(|e| e.to_string()), Some("unknown option `--fast`".to_owned()));
    }
}

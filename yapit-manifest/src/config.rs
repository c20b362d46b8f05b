use std::{path::PathBuf, str::FromStr, time::Duration};

use serde::{Deserialize, Deserializer};

use crate::{Error, NamingConfig, Result, SourceContext};

/// Default per-request timeout for the schema source.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of retries after a transient fetch failure.
pub const DEFAULT_RETRIES: u32 = 1;

/// Root of `yapit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub interfaces: Vec<InterfaceEntry>,
}

/// `[source]`: where interface documents are fetched from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub retries: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retries: DEFAULT_RETRIES,
        }
    }
}

/// One `[[interfaces]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceEntry {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub output: PathBuf,
    #[serde(default)]
    pub request_path: Option<String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "yapit.toml")
    }
}

impl Config {
    /// Parse a yapit.toml file from the given path
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a yapit.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(url) = &self.source.base_url {
            check_base_url(url).map_err(|reason| ctx.validation_error(reason, url))?;
        }
        if self.source.timeout_secs == 0 {
            return Err(ctx.validation_error("timeout_secs must be at least 1", "timeout_secs"));
        }

        let mut outputs = std::collections::HashSet::new();
        for entry in &self.interfaces {
            if entry.id.trim().is_empty() {
                return Err(ctx.validation_error("interface id must not be empty", "id"));
            }
            if entry.output.as_os_str().is_empty() {
                return Err(ctx.validation_error("output path must not be empty", "output"));
            }
            if !outputs.insert(&entry.output) {
                let shown = entry.output.display().to_string();
                return Err(ctx.validation_error(
                    format!("output '{shown}' is used by more than one interface"),
                    &shown,
                ));
            }
        }
        Ok(())
    }

    /// Resolve every `[[interfaces]]` entry into a complete invocation.
    pub fn invocations(&self) -> Result<Vec<Invocation>> {
        if self.interfaces.is_empty() {
            return Err(Error::missing(
                "interfaces",
                "add at least one [[interfaces]] entry with an id and an output",
            ));
        }
        self.interfaces
            .iter()
            .map(|entry| {
                InvocationBuilder::from_config(self)
                    .interface_id(entry.id.clone())
                    .output_dir(entry.output.clone())
                    .request_path(entry.request_path.clone())
                    .build()
            })
            .collect()
    }
}

/// Connection settings for the schema source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub retries: u32,
}

/// A fully resolved request to generate one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: SourceSettings,
    pub interface_id: String,
    pub output_dir: PathBuf,
    /// Overrides the endpoint path as the request URL in the function document.
    pub request_path: Option<String>,
    pub naming: NamingConfig,
}

/// Collects settings from config and CLI flags, then checks completeness.
///
/// Later setters win, so flags are applied after [`InvocationBuilder::from_config`].
#[derive(Debug, Clone, Default)]
pub struct InvocationBuilder {
    base_url: Option<String>,
    token: Option<String>,
    timeout_secs: Option<u64>,
    retries: Option<u32>,
    interface_id: Option<String>,
    output_dir: Option<PathBuf>,
    request_path: Option<String>,
    naming: NamingConfig,
}

impl InvocationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the shared settings of a config file.
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.source.base_url.clone(),
            token: config.source.token.clone(),
            timeout_secs: Some(config.source.timeout_secs),
            retries: Some(config.source.retries),
            naming: config.naming,
            ..Self::default()
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn token(mut self, token: Option<String>) -> Self {
        if token.is_some() {
            self.token = token;
        }
        self
    }

    pub fn interface_id(mut self, id: impl Into<String>) -> Self {
        self.interface_id = Some(id.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn request_path(mut self, path: Option<String>) -> Self {
        if path.is_some() {
            self.request_path = path;
        }
        self
    }

    pub fn naming(mut self, naming: NamingConfig) -> Self {
        self.naming = naming;
        self
    }

    pub fn build(self) -> Result<Invocation> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                Error::missing(
                    "source.base_url",
                    "pass --base-url or set base_url under [source] in yapit.toml",
                )
            })?;
        check_base_url(&base_url).map_err(|reason| Error::invalid("source.base_url", reason))?;

        let interface_id = self
            .interface_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::missing("id", "pass --id with the interface id"))?;

        let output_dir = self
            .output_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .ok_or_else(|| Error::missing("output", "pass --output with a target directory"))?;

        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::invalid("source.timeout_secs", "must be at least 1"));
        }

        Ok(Invocation {
            source: SourceSettings {
                base_url: base_url.trim_end_matches('/').to_string(),
                token: self.token.filter(|t| !t.is_empty()),
                timeout: Duration::from_secs(timeout_secs),
                retries: self.retries.unwrap_or(DEFAULT_RETRIES),
            },
            interface_id: interface_id.trim().to_string(),
            output_dir,
            request_path: self.request_path.filter(|p| !p.trim().is_empty()),
            naming: self.naming,
        })
    }
}

fn check_base_url(url: &str) -> std::result::Result<(), String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("base_url '{url}' must start with http:// or https://"))
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Number(n) => n.to_string(),
        Id::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollisionPolicy, RoleSuffix};

    const CONFIG: &str = r#"
[source]
base_url = "https://yapi.example.com/"
token = "secret"

[naming]
role_suffix = "long"

[[interfaces]]
id = 4242
output = "src/api/withdraw"
request_path = "/finance-service/finance/bill_file_task/withdraw"

[[interfaces]]
id = "17"
output = "src/api/user"
"#;

    #[test]
    fn test_parse_config() {
        let config: Config = CONFIG.parse().unwrap();
        assert_eq!(config.source.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.naming.role_suffix, RoleSuffix::Long);
        assert_eq!(config.naming.collisions, CollisionPolicy::Suffix);
        assert_eq!(config.interfaces.len(), 2);
        assert_eq!(config.interfaces[0].id, "4242");
        assert_eq!(config.interfaces[1].id, "17");
    }

    #[test]
    fn test_invocations() {
        let config: Config = CONFIG.parse().unwrap();
        let invocations = config.invocations().unwrap();

        assert_eq!(invocations.len(), 2);
        let first = &invocations[0];
        assert_eq!(first.source.base_url, "https://yapi.example.com");
        assert_eq!(first.source.token.as_deref(), Some("secret"));
        assert_eq!(first.source.timeout, Duration::from_secs(10));
        assert_eq!(first.source.retries, 1);
        assert_eq!(
            first.request_path.as_deref(),
            Some("/finance-service/finance/bill_file_task/withdraw")
        );
        assert_eq!(invocations[1].request_path, None);
    }

    #[test]
    fn test_missing_base_url() {
        let config: Config = "[[interfaces]]\nid = 1\noutput = \"out\"\n".parse().unwrap();
        let err = config.invocations().unwrap_err();
        assert!(matches!(
            *err,
            Error::Missing {
                field: "source.base_url",
                ..
            }
        ));
    }

    #[test]
    fn test_no_interfaces() {
        let config: Config = "[source]\nbase_url = \"http://x\"\n".parse().unwrap();
        assert!(matches!(
            *config.invocations().unwrap_err(),
            Error::Missing {
                field: "interfaces",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = "[source]\nbase_url = \"yapi.example.com\"\n"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_duplicate_outputs() {
        let err = r#"
[[interfaces]]
id = 1
output = "out"

[[interfaces]]
id = 2
output = "out"
"#
        .parse::<Config>()
        .unwrap_err();
        assert!(err.to_string().contains("more than one interface"));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = "[source]\nbase = \"http://x\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_builder_requires_id_and_output() {
        let err = InvocationBuilder::new()
            .base_url("http://yapi")
            .output_dir("out")
            .build()
            .unwrap_err();
        assert!(matches!(*err, Error::Missing { field: "id", .. }));

        let err = InvocationBuilder::new()
            .base_url("http://yapi")
            .interface_id("1")
            .build()
            .unwrap_err();
        assert!(matches!(*err, Error::Missing { field: "output", .. }));
    }

    #[test]
    fn test_flags_override_config() {
        let config: Config = CONFIG.parse().unwrap();
        let invocation = InvocationBuilder::from_config(&config)
            .base_url("http://localhost:3000")
            .token(None)
            .interface_id("9")
            .output_dir("out")
            .build()
            .unwrap();

        assert_eq!(invocation.source.base_url, "http://localhost:3000");
        assert_eq!(invocation.source.token.as_deref(), Some("secret"));
        assert_eq!(invocation.naming.role_suffix, RoleSuffix::Long);
    }
}

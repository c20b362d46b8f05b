//! Check operation - config validation without contacting the source.

use std::path::Path;

use yapit_manifest::Config;

use crate::reports::{CheckReport, CheckedInterface};

/// Execute the check operation.
///
/// Resolves every `[[interfaces]]` entry the way `batch` would.
pub fn check(config: &Config, config_path: &Path) -> yapit_manifest::Result<CheckReport> {
    let invocations = config.invocations()?;
    let base_url = invocations
        .first()
        .map(|inv| inv.source.base_url.clone())
        .unwrap_or_default();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        base_url,
        role_suffix: config.naming.role_suffix.to_string(),
        collisions: config.naming.collisions.to_string(),
        interfaces: invocations
            .into_iter()
            .map(|inv| CheckedInterface {
                id: inv.interface_id,
                output: inv.output_dir,
                request_path: inv.request_path,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{RecordingOutput, Report};

    const CONFIG: &str = r#"
[source]
base_url = "https://yapi.example.com"

[naming]
role_suffix = "long"

[[interfaces]]
id = 4242
output = "src/api/withdraw"
request_path = "/finance-service/finance/bill_file_task/withdraw"

[[interfaces]]
id = "17"
output = "src/api/order"
"#;

    #[test]
    fn test_check_lists_interfaces() {
        let config: Config = CONFIG.parse().unwrap();
        let report = check(&config, Path::new("yapit.toml")).unwrap();

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "✓ yapit.toml is valid",
                "",
                "Source: https://yapi.example.com",
                "Naming: role_suffix = long, collisions = suffix",
                "",
                "2 interfaces:",
                "  - 4242 → src/api/withdraw (/finance-service/finance/bill_file_task/withdraw)",
                "  - 17 → src/api/order",
            ]
        );
    }

    #[test]
    fn test_check_requires_base_url() {
        let config: Config = "[[interfaces]]\nid = 1\noutput = \"out\"\n".parse().unwrap();
        let err = check(&config, Path::new("yapit.toml")).unwrap_err();
        assert!(err.to_string().contains("source.base_url"));
    }
}

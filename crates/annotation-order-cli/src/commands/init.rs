//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# annotation-order configuration
# Run `annotation-order list-orders` to see the effective conventions.

# Lowest severity that fails `annotation-order check` (info, warning, error)
fail_on = "error"

# Start from the builtin conventions. Set to false to define every kind below.
builtin = true

# Canonical orders, one list per kind: class (also enums), interface,
# method (also constructors), field, parameter.
# A list here replaces the builtin list for that kind.
[orders]
# interface = ["Repository", "FeignClient", "Slf4j"]

# Unranked annotations starting with these prefixes are not reported.
[exempt_prefixes]
class = ["Enable"]

# Severity overrides by code or name
#   AO001 annotation-out-of-order       (default: error)
#   AO002 annotation-not-configured     (default: info)
#   AO003 declaration-kind-unsupported  (default: warning)
[severity]
# AO002 = "warning"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("annotation-order.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created annotation-order.toml");
    println!("\nNext steps:");
    println!("  1. Edit annotation-order.toml to adjust the conventions");
    println!("  2. Run: annotation-order check <walker-output.json>");

    Ok(())
}

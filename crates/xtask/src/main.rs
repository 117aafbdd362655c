use anyhow::Context;
use serde::Deserialize;

/// Crates the domain layer must never pull in.
const DOMAIN_FORBIDDEN: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "tracing",
    "tracing-subscriber",
    "dotenvy",
    "dicebound-player",
];

const DOMAIN_CRATE: &str = "dicebound-domain";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let violations = domain_violations(&metadata)?;
    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_CRATE} must stay free of UI and logging crates, but depends on: {}",
            violations.join(", ")
        );
    }

    println!("arch-check: {DOMAIN_CRATE} OK");
    Ok(())
}

/// Forbidden normal (non-dev, non-build) dependencies of the domain crate.
fn domain_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|d| d.kind.is_none())
        .filter(|d| DOMAIN_FORBIDDEN.contains(&d.name.as_str()))
        .map(|d| d.name.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn clean_domain_passes() {
        let meta = metadata(
            r#"{"packages":[{"name":"dicebound-domain","dependencies":[
                {"name":"serde","kind":null},
                {"name":"serde_json","kind":"dev"}
            ]}]}"#,
        );
        assert!(domain_violations(&meta).unwrap().is_empty());
    }

    #[test]
    fn ui_dependency_is_reported() {
        let meta = metadata(
            r#"{"packages":[{"name":"dicebound-domain","dependencies":[
                {"name":"dioxus","kind":null},
                {"name":"tracing","kind":"dev"}
            ]}]}"#,
        );
        assert_eq!(domain_violations(&meta).unwrap(), vec!["dioxus".to_string()]);
    }

    #[test]
    fn missing_domain_is_an_error() {
        let meta = metadata(r#"{"packages":[]}"#);
        assert!(domain_violations(&meta).is_err());
    }
}

use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::{Config, DefaultsConfig};

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let exists = path.exists();

    println!("{} {}", "Config file:".bold(), path.display());
    if !exists {
        println!("{}", "(not created yet; showing defaults)".dimmed());
    }
    println!();
    print!("{}", serde_yaml::to_string(&effective(&config))?);
    Ok(())
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    tracing::info!(key, value, path = %path.display(), "config updated");
    println!(
        "{} {} = {} ({})",
        "Set".green().bold(),
        key.cyan(),
        value,
        path.display()
    );
    Ok(())
}

/// `config` with every default filled in, as the presenter will see it.
fn effective(config: &Config) -> Config {
    let auto_advance_ms = config
        .defaults
        .as_ref()
        .and_then(|d| d.auto_advance_ms);
    Config {
        defaults: Some(DefaultsConfig {
            theme: Some(config.theme()),
            transition: Some(config.transition()),
            skip_intro: Some(config.skip_intro()),
            auto_advance_ms,
            start_slide: config.start_slide(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_fills_defaults() {
        let config = effective(&Config::default());
        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.theme.as_deref(), Some("dark"));
        assert_eq!(defaults.transition.as_deref(), Some("slide"));
        assert_eq!(defaults.skip_intro, Some(false));
        assert_eq!(defaults.auto_advance_ms, None);
        assert_eq!(defaults.start_slide, None);
    }

    #[test]
    fn test_effective_keeps_user_values() {
        let mut config = Config::default();
        config.set("defaults.theme", "light").unwrap();
        config.set("defaults.auto_advance_ms", "3000").unwrap();
        let defaults = effective(&config).defaults.unwrap();
        assert_eq!(defaults.theme.as_deref(), Some("light"));
        assert_eq!(defaults.auto_advance_ms, Some(3000));
    }
}

use anyhow::{Context, Result};
use vitrine_assist::{config, Config};

const KEYS: &str = "catalog_dir, threshold, top_n, bind, allowed_origins, openai_api_key, \
                    openai_base_url, model, temperature, max_tokens, request_timeout_secs, \
                    max_retries, log_level";

/// Show the current effective configuration.
pub fn show_config(config: &Config) {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  catalog_dir: {}", config.catalog_dir.display());
    println!("  threshold: {}", config.threshold);
    println!("  top_n: {}", config.top_n);
    println!("  bind: {}", config.bind);
    println!("  allowed_origins: {}", config.allowed_origins.join(", "));
    println!(
        "  openai_api_key: {}",
        if config.api_key().is_some() { "<set>" } else { "<not set>" }
    );
    println!("  openai_base_url: {}", config.openai_base_url);
    println!("  model: {}", config.model);
    println!("  temperature: {}", config.temperature);
    println!("  max_tokens: {}", config.max_tokens);
    println!("  request_timeout_secs: {}", config.request_timeout_secs);
    println!("  max_retries: {}", config.max_retries);
    println!("  log_level: {}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (VITRINE_*) > Config file > Defaults");
}

/// Get a specific config value, or print the whole config file.
pub fn get_config(config: &Config, key: Option<String>) -> Result<()> {
    let Some(key) = key else {
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'vitrine config init' to create it.");
        }
        return Ok(());
    };

    let value = match key.as_str() {
        "catalog_dir" => config.catalog_dir.display().to_string(),
        "threshold" => config.threshold.to_string(),
        "top_n" => config.top_n.to_string(),
        "bind" => config.bind.clone(),
        "allowed_origins" => config.allowed_origins.join(","),
        "openai_api_key" => config
            .api_key()
            .unwrap_or_else(|| String::from("<not set>")),
        "openai_base_url" => config.openai_base_url.clone(),
        "model" => config.model.clone(),
        "temperature" => config.temperature.to_string(),
        "max_tokens" => config.max_tokens.to_string(),
        "request_timeout_secs" => config.request_timeout_secs.to_string(),
        "max_retries" => config.max_retries.to_string(),
        "log_level" => config.log_level.clone(),
        _ => anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, KEYS),
    };
    println!("{}", value);

    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure vitrine.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

use anyhow::{Context, Result};
use markdown_pages_config::Config;
use markdown_pages_engine::{PageTemplate, generate_pages_recursive, io};
use std::{env, process};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let mut config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match args.len() {
        1 => {}
        2 => config.basepath = args[1].clone(),
        _ => {
            eprintln!("Usage: {} [basepath]", args[0]);
            process::exit(1);
        }
    }

    if let Err(e) = io::validate_dir(&config.content_path) {
        eprintln!(
            "Error: Invalid content directory '{}': {e}",
            config.content_path.display()
        );
        process::exit(1);
    }

    build(&config)
}

fn build(config: &Config) -> Result<()> {
    log::info!(
        "Building {} into {} with basepath {}",
        config.content_path.display(),
        config.output_path.display(),
        config.basepath
    );

    io::reset_directory(&config.output_path).with_context(|| {
        format!(
            "Failed to reset output directory {}",
            config.output_path.display()
        )
    })?;

    if config.static_path.is_dir() {
        let copied = io::copy_directory(&config.static_path, &config.output_path)
            .context("Failed to copy static files")?;
        log::info!("Copied {copied} static files");
    } else {
        log::warn!(
            "No static directory at {}, skipping",
            config.static_path.display()
        );
    }

    let template = PageTemplate::from_file(&config.template_path).with_context(|| {
        format!(
            "Failed to read template {}",
            config.template_path.display()
        )
    })?;

    let pages = generate_pages_recursive(
        &config.content_path,
        &template,
        &config.output_path,
        &config.basepath,
    )?;
    log::info!("Generated {} pages", pages.len());

    Ok(())
}

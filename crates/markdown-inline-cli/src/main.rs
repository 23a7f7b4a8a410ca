use anyhow::{Context, Result};
use markdown_inline_config::Config;
use markdown_inline_engine::paragraph_to_html_node;
use std::{
    env, fs,
    io::{self, Read},
    process,
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [markdown-file]", args[0]);
        eprintln!("Reads from stdin when no file (or '-') is given");
        process::exit(1);
    }

    let input = match args.get(1).map(String::as_str) {
        Some(path) if path != "-" => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let config = load_config();
    for html in render_paragraphs(&input, &config)? {
        println!("{html}");
    }
    Ok(())
}

/// Loads the config file, falling back to defaults when it is missing or broken.
fn load_config() -> Config {
    let config_path = Config::config_path();
    match Config::load() {
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
            log::warn!("Failed to load config file: {e}");
            log::warn!("Will use default settings");
            Config::default()
        }
    }
}

/// Splits `input` on blank lines; lines inside a paragraph are joined with a space.
fn paragraphs(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}

fn render_paragraphs(input: &str, config: &Config) -> Result<Vec<String>> {
    paragraphs(input)
        .iter()
        .enumerate()
        .map(|(i, text)| {
            paragraph_to_html_node(text, &config.paragraph_tag, &config.pipeline)
                .map(|node| node.to_html())
                .with_context(|| format!("Failed to render paragraph {}", i + 1))
        })
        .collect()
}

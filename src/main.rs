use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use umlgen::config::{load_config, merge_with_cli_args};
use umlgen::engine;
use umlgen::parsers::ParserRegistry;
use umlgen::relationship_resolver;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the diagram file (JSON or YAML)
    #[arg(short, long)]
    diagram: Option<PathBuf>,

    /// Output directory for generated code
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file (overrides default location)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target language(s); overrides configured generations
    #[arg(short, long)]
    language: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = load_config(args.config.as_deref())?;
    let merged_config = merge_with_cli_args(config, args.diagram, args.output, &args.language);

    // Validate we have input
    let input_config = merged_config.input.ok_or_else(|| {
        anyhow::anyhow!("No diagram specified. Use --diagram or configure input in config file")
    })?;

    println!("📖 Reading diagram from: {:?}", input_config.source);

    // Create parser registry
    let parser_registry = ParserRegistry::new();

    // Determine input format (explicit or auto-detect)
    let format = input_config.format.clone().unwrap_or_else(|| {
        parser_registry
            .detect_format(&input_config.source)
            .unwrap_or("diagram")
            .to_string()
    });

    // Get parser
    let parser = parser_registry
        .get(&format)
        .ok_or_else(|| anyhow::anyhow!("Unknown input format: {}", format))?;

    // Parse input to the diagram model
    let diagram = parser
        .parse(&input_config.source)
        .with_context(|| format!("Failed to parse {} input", format))?;

    println!(
        "✅ Parsed {} classes and {} associations",
        diagram.classes.len(),
        diagram.associations.len()
    );

    // Data-quality findings are reported once up front; they never stop
    // generation.
    let resolved = relationship_resolver::resolve(&diagram.classes, &diagram.associations);
    for warning in &resolved.warnings {
        println!("⚠️  {}", warning);
    }

    // Determine output directory
    let output_dir = merged_config
        .output
        .unwrap_or_else(|| PathBuf::from("generated"));
    fs::create_dir_all(&output_dir)?;

    // Execute before hooks
    for hook in &merged_config.hooks.before_generate {
        println!("🎣 Running before hook: {}", hook);
        execute_hook(hook)?;
    }

    // Process each generation configuration
    let mut generated_count = 0;
    for gen_config in &merged_config.generations {
        if !gen_config.enabled {
            println!("⏭️  Skipping disabled generator: {}", gen_config.generator);
            continue;
        }

        println!("🔧 Generating with '{}'...", gen_config.generator);

        if engine::file_extension_for(&gen_config.generator).is_none() {
            println!(
                "⚠️  Unsupported language '{}'; writing placeholder output",
                gen_config.generator
            );
        }

        // Generate code
        let output = engine::generate_output(&diagram, &gen_config.generator)
            .with_context(|| format!("Failed to generate with '{}'", gen_config.generator))?;

        // Write to file (configured filename wins over the default)
        let filename = gen_config
            .output_file
            .clone()
            .unwrap_or(output.filename);
        let output_path = output_dir.join(&filename);

        fs::write(&output_path, output.content)
            .with_context(|| format!("Failed to write output file: {:?}", output_path))?;

        println!("✅ Generated: {:?}", output_path);
        generated_count += 1;
    }

    // Execute after hooks
    for hook in &merged_config.hooks.after_generate {
        println!("🎣 Running after hook: {}", hook);
        execute_hook(hook)?;
    }

    if generated_count == 0 {
        println!("⚠️  No generators were enabled. Use --language or check your configuration.");
    } else {
        println!("🎉 Successfully generated {} file(s)!", generated_count);
    }

    Ok(())
}

fn execute_hook(command: &str) -> Result<()> {
    use std::process::Command;

    let output = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", command]).output()
    } else {
        Command::new("sh").args(["-c", command]).output()
    }?;

    if !output.status.success() {
        anyhow::bail!(
            "Hook failed: {}\nStderr: {}",
            command,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

//! Output formatting for CLI commands.

use serde_json::json;

use crate::cli::args::{DragomanArgs, OutputFormat};
use crate::error::Result;
use crate::intent::IntentResult;
use crate::vocabulary::InterpreterConfig;

/// Render one interpretation result in the requested format.
pub fn render_result(result: &IntentResult, args: &DragomanArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let output = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{output}");
        }
        OutputFormat::Human => {
            println!("intent:     {}", result.intent);
            println!("confidence: {:.2}", result.confidence);
            if let Some(route) = &result.route {
                println!("route:      {route}");
            }
            if let Some(query) = &result.query {
                println!("query:      {query}");
            }
            if let Some(category) = &result.category {
                println!("category:   {category}");
            }
            if let Some(sort_by) = &result.sort_by {
                println!("sort by:    {sort_by}");
            }
            println!("message:    {}", result.message);
        }
    }
    Ok(())
}

/// Render the vocabulary tables in the requested format.
pub fn render_vocabulary(config: &InterpreterConfig, args: &DragomanArgs) -> Result<()> {
    // Phrase sets iterate in hash order; sort for stable output
    let mut affirmative: Vec<&str> = config.phrases.affirmative().iter().map(String::as_str).collect();
    let mut negative: Vec<&str> = config.phrases.negative().iter().map(String::as_str).collect();
    affirmative.sort_unstable();
    negative.sort_unstable();

    match args.output_format {
        OutputFormat::Json => {
            let output = json!({
                "routes": config.routes.entries(),
                "categories": config.categories.names(),
                "affirmative": affirmative,
                "negative": negative,
            });
            let output = if args.pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{output}");
        }
        OutputFormat::Human => {
            println!("Routes ({}):", config.routes.len());
            for entry in config.routes.iter() {
                println!("  {:<20} -> {}", entry.key, entry.path);
            }
            println!("Categories ({}):", config.categories.len());
            for name in config.categories.iter() {
                println!("  {name}");
            }
            println!("Affirmative phrases: {}", affirmative.join(", "));
            println!("Negative phrases:    {}", negative.join(", "));
        }
    }
    Ok(())
}

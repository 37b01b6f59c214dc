//! Example document pipeline CLI.
//!
//! Saves one document through the hook pipeline and prints the result.
//! Set `RUST_LOG` (e.g. `RUST_LOG=shifty_hooks=debug`) to watch the hooks.
//!
//! # Usage
//!
//! ```bash
//! shifty-demo <title> <body>
//! ```
//!
//! # Example
//!
//! ```bash
//! shifty-demo "  release notes " "hooks now run by priority"
//! ```

use example::{AFTER_SAVE, BEFORE_SAVE, Document, install};
use shifty_core::{LogFormat, LoggingConfig};
use shifty_hooks::{HookRegistry, HookView};

fn main() {
    LoggingConfig::from_env()
        .with_format(LogFormat::Compact)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: <title> <body>");
        eprintln!("Example: \"  release notes \" \"hooks now run by priority\"");
        std::process::exit(1);
    }

    let hooks = HookRegistry::new();
    install(&hooks);

    // A third-party hook that runs before everything else.
    hooks.add_with_priority::<Document>(
        BEFORE_SAVE,
        "sign",
        |doc| doc.body.push_str("\n-- shifty"),
        100,
    );
    // Redeclaring a list is refused with a warning.
    hooks.create::<Document>(AFTER_SAVE);

    let mut doc = Document::new(args[1].as_str(), args[2].as_str());
    doc.save(&hooks);
    tracing::debug!(revision = doc.revision, "document saved");

    println!("title:      {}", doc.title);
    println!("words:      {}", doc.word_count);
    println!("revision:   {}", doc.revision);
    for entry in &doc.journal {
        println!("journal:    {entry}");
    }

    if let Some(HookView::State(state)) = hooks.get::<Document>(None) {
        for name in state.names() {
            let count = state.get(name).map_or(0, |list| list.hook_count());
            println!("hook list:  {name} ({count} hooks)");
        }
    }
}

//! Todo list demo binary
//!
//! Walks a list through the common operations, printing renders along the way.

mod config;

use config::DemoConfig;
use todolist_core::{Item, ItemList};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_demo=info,todolist_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::from_env()?;
    tracing::info!(title = %config.list_title, items = config.items.len(), "Loaded configuration");

    println!("=== Todo List Demo ===\n");

    let mut list = ItemList::new(&config.list_title);
    for title in &config.items {
        list.add(Item::shared(title));
    }
    print!("{list}");

    if list.len() > 1 {
        println!("\n>>> mark_done_at(1)");
        list.mark_done_at(1)?;
        print!("{list}");
    }

    if let Some(first) = list.first() {
        println!("\n>>> mark_done({:?})", first.title());
        list.mark_done(first.title());
        print!("{list}");
    }

    println!("\n>>> all_done()");
    print!("{}", list.all_done());
    println!("\n>>> all_not_done()");
    print!("{}", list.all_not_done());

    println!("\n>>> item_at({})", list.len());
    match list.item_at(list.len()) {
        Ok(item) => println!("Unexpected item: {item}"),
        Err(e) => println!("Error: {e}"),
    }

    println!("\n>>> add_value(\"not an item\")");
    if let Err(e) = list.add_value(&serde_json::json!("not an item")) {
        println!("Error: {e}");
    }

    println!("\n>>> JSON");
    println!("{}", serde_json::to_string_pretty(&list)?);

    println!("\n>>> Draining with shift()");
    while let Some(item) = list.shift() {
        println!("Removed: {item}");
    }
    println!("List is done: {}", list.is_done());

    println!("\n=== Demo Complete ===");
    Ok(())
}

//! Demo: a searchable, multi-select fruit list.
//!
//! Type to filter (the list updates after a 1s pause), Up/Down to move,
//! Enter to toggle selection, Esc to clear the search, Ctrl+C to quit.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use siftlist::prelude::*;
use siftlist::runner;

#[tokio::main]
async fn main() -> Result<(), RunnerError> {
    // Log to a file: stdout belongs to the TUI
    if let Ok(file) = File::create("siftlist-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let items = vec![
        Item::new("1", "Apple"),
        Item::new("2", "Banana"),
        Item::new("3", "Cherry"),
        Item::new("4", "Dragonfruit"),
        Item::new("5", "Elderberry"),
        Item::new("6", "Fig"),
        Item::new("7", "Grape"),
        Item::new("8", "Honeydew"),
        Item::new("9", "Kiwi"),
        Item::new("10", "Lemon"),
        Item::new("11", "Mango"),
        Item::new("12", "Nectarine"),
        Item::new("13", "Orange"),
        Item::new("14", "Papaya"),
        Item::new("15", "Quince"),
        Item::new("16", "Raspberry"),
        Item::new("17", "Strawberry"),
        Item::new("18", "Tangerine"),
        Item::new("19", "Watermelon"),
    ];

    let list = SearchList::with_config(items, SearchListConfig::with_placeholder("Search fruits"));

    runner::run(&list).await?;

    for id in list.selected_ids() {
        println!("selected: {id}");
    }
    Ok(())
}

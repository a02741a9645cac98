// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A searchable combobox fed by scripted keystrokes.
//!
//! Shows the debounce (typing does not filter until the pause), keyboard
//! highlight over nested results, free-text submission, and the host
//! overriding the text through its controlled selection.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p flyout_demos --example search_walkthrough`

use std::error::Error;

use flyout_search::{
    DropdownView, Key, MenuItem, Millis, SearchConfig, SearchController, SearchHost,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
placeholder = "Find a language..."
debounceMs = 250
allowCustomValue = true
searchKeys = ["label", "id", "link"]
"#;

#[derive(Default)]
struct Form {
    selected: Option<String>,
}

impl SearchHost for Form {
    fn item_select(&mut self, item: Option<&MenuItem>) {
        self.selected = item.map(|i| i.id.clone());
        info!(selected = ?self.selected, "host: selection");
    }

    fn search_change(&mut self, text: &str) {
        info!(text, "host: query committed");
    }

    fn custom_value(&mut self, text: &str) {
        info!(text, "host: custom value");
    }
}

fn languages() -> Vec<MenuItem> {
    vec![
        MenuItem::new("systems", "Systems").with_children([
            MenuItem::new("rust", "Rust").with_link("https://rust-lang.org"),
            MenuItem::new("zig", "Zig"),
            MenuItem::new("c", "C").disabled(),
        ]),
        MenuItem::new("scripting", "Scripting").with_children([
            MenuItem::new("ruby", "Ruby"),
            MenuItem::new("lua", "Lua"),
        ]),
    ]
}

fn draw(search: &SearchController, items: &[MenuItem]) {
    let clear = if search.show_clear_button() { " [x]" } else { "" };
    let shown = if search.text().is_empty() {
        search.placeholder()
    } else {
        search.text()
    };
    println!("  |{shown}|{clear}");

    let filtered = search.filtered(items);
    match search.dropdown(&filtered) {
        DropdownView::Closed => {}
        DropdownView::Rows(rows) => {
            for row in rows {
                let cursor = if row.highlighted { ">" } else { " " };
                println!(
                    "  {cursor}{:indent$}{}",
                    "",
                    row.item.label,
                    indent = 1 + row.depth * 2
                );
            }
        }
        DropdownView::NoResults {
            text,
            custom_option,
        } => {
            println!("   {text}");
            if let Some(value) = custom_option {
                println!("   [Add \"{value}\"]");
            }
        }
    }
}

fn type_text(search: &mut SearchController, text: &str, now: &mut Millis) {
    for end in 1..=text.len() {
        search.on_text_input(&text[..end], *now);
        *now += 60;
    }
}

fn settle(search: &mut SearchController, host: &mut Form, now: &mut Millis) {
    if let Some(due) = search.next_deadline() {
        *now = (*now).max(due);
        search.tick(*now, host);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // `RUST_LOG` overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config: SearchConfig = toml::from_str(CONFIG)?;
    let items = languages();
    let mut search = SearchController::new(config);
    let mut host = Form::default();
    let mut now: Millis = 0;

    search.sync_selected(None, now);
    search.on_focus();
    println!("t={now}: focused");
    draw(&search, &items);

    type_text(&mut search, "ru", &mut now);
    println!("t={now}: typed \"ru\", not committed yet");
    draw(&search, &items);

    settle(&mut search, &mut host, &mut now);
    println!("t={now}: committed");
    draw(&search, &items);

    for key in [Key::ArrowDown, Key::ArrowDown, Key::ArrowDown] {
        search.on_keyboard(key, &items, now, &mut host);
    }
    println!("t={now}: three ArrowDowns");
    draw(&search, &items);

    let response = search.on_keyboard(Key::Enter, &items, now, &mut host);
    println!("t={now}: Enter (prevent_default={})", response.prevent_default);
    settle(&mut search, &mut host, &mut now);
    draw(&search, &items);

    search.clear(now, &mut host);
    type_text(&mut search, "cobol", &mut now);
    settle(&mut search, &mut host, &mut now);
    println!("t={now}: no match for \"cobol\"");
    draw(&search, &items);
    search.choose_custom_option(&mut host);

    let lua = &items[1].children[1];
    search.sync_selected(Some(lua), now);
    println!("t={now}: host selected Lua");
    draw(&search, &items);

    search.unmount();
    Ok(())
}

// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A nested menu loaded from TOML and driven by a scripted pointer.
//!
//! This example shows how a host:
//! - loads `MenuConfig` and the item tree from configuration,
//! - forwards pointer events with its own clock,
//! - sleeps until `next_deadline` and then calls `tick`,
//! - redraws from `rows` after every step.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p flyout_demos --example menu_walkthrough`

use std::error::Error;

use flyout_menu::{
    Activation, ItemFlags, MenuConfig, MenuController, MenuHost, MenuItem, Millis, Size,
};
use kurbo::{Point, Rect};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

const MENU: &str = r#"
[config]
variant = "navbar"
hoverDelay = 200

[[items]]
id = "file"
label = "File"
icon = "F"

  [[items.children]]
  id = "new"
  label = "New"

  [[items.children]]
  id = "recent"
  label = "Open Recent"

    [[items.children.children]]
    id = "notes"
    label = "notes.md"
    link = "/files/notes.md"

  [[items.children]]
  id = "export"
  label = "Export"
  disabled = true

[[items]]
id = "help"
label = "Help"
link = "/help"
"#;

#[derive(Deserialize)]
struct Document {
    config: MenuConfig,
    items: Vec<MenuItem>,
}

struct Console;

impl MenuHost for Console {
    fn item_click(&mut self, item: &MenuItem) {
        info!(id = %item.id, "host: item clicked");
    }

    fn hover_change(&mut self, hovering: bool) {
        info!(hovering, "host: hover changed");
    }

    fn font_size_change(&mut self, size: Size) {
        info!(%size, "host: font size");
    }
}

fn draw(menu: &MenuController, items: &[MenuItem]) {
    let rows = menu.rows(items);
    if rows.is_empty() {
        println!("  [Menu]");
        return;
    }
    println!("  [Menu] (open)");
    for row in rows.iter().filter(|r| r.visible) {
        let mut marks = String::new();
        if row.flags.contains(ItemFlags::HOVERING) {
            marks.push('*');
        }
        if row.flags.contains(ItemFlags::DISABLED) {
            marks.push_str(" (disabled)");
        }
        let arrow = match row.aria_expanded() {
            Some(true) => " v",
            Some(false) => " >",
            None => "",
        };
        println!(
            "  {:indent$}{}{arrow}{marks}",
            "",
            row.item.label,
            indent = 2 + row.level * 2
        );
    }
}

fn advance(menu: &mut MenuController, now: &mut Millis, to: Millis) {
    while let Some(due) = menu.next_deadline().filter(|&d| d <= to) {
        *now = due;
        for id in menu.tick(due) {
            println!("  t={due}: submenu `{id}` closed by timer");
        }
    }
    *now = to;
}

fn main() -> Result<(), Box<dyn Error>> {
    // `RUST_LOG` overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let Document { config, items } = toml::from_str(MENU)?;
    let mut menu = MenuController::new(config);
    let mut host = Console;
    let mut now: Millis = 0;

    menu.mount(&mut host);
    menu.set_trigger_region(Some(Rect::new(0.0, 0.0, 60.0, 24.0)));

    println!("t={now}: click the trigger");
    menu.toggle_root(now, &mut host);
    menu.set_panel_regions([Rect::new(0.0, 24.0, 160.0, 120.0)]);
    draw(&menu, &items);

    let file = &items[0];
    let recent = &file.children[1];

    now = 100;
    println!("t={now}: hover File, then Open Recent");
    menu.handle_item_hover_enter(file, &mut host);
    menu.handle_item_hover_enter(recent, &mut host);
    draw(&menu, &items);

    println!("t={now}: leave Open Recent toward its flyout");
    menu.handle_item_hover_leave(recent, now, &mut host);
    advance(&mut menu, &mut now, 150);
    menu.handle_submenu_hover_enter(&recent.id, &mut host);
    advance(&mut menu, &mut now, 1_000);
    println!("t={now}: flyout reached in time, still open");
    draw(&menu, &items);

    println!("t={now}: leave the File panel entirely");
    menu.handle_submenu_hover_leave(&recent.id, now);
    menu.handle_submenu_hover_leave(&file.id, now);
    menu.handle_item_hover_leave(file, now, &mut host);
    advance(&mut menu, &mut now, 1_500);
    draw(&menu, &items);

    println!("t={now}: click Help");
    let outcome = menu.handle_item_activate(&items[1], &mut host);
    if let Activation::Activated { closed } = outcome {
        println!("  activated, closed={closed}, follow link {:?}", items[1].href());
    }

    now = 2_000;
    println!("t={now}: reopen and press outside");
    menu.toggle_root(now, &mut host);
    let dismissed = menu.handle_outside_interaction(Point::new(400.0, 300.0), now + 80, &mut host);
    println!("  dismissed={dismissed}");
    draw(&menu, &items);

    menu.unmount();
    Ok(())
}

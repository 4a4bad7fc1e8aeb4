use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use script_pad::{
    AppState, ConfigStore, EventDisposition, KeyEvent, PrimaryModifier, SizeBucket, WindowSize,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Rc::new(ConfigStore::load(ConfigStore::default_path()));
    let mut app = AppState::new(Rc::clone(&config), PrimaryModifier::detect());

    println!("ScriptPad shell - type a key chord (e.g. Ctrl+Enter, Meta+0),");
    println!("or: set-window <width> <height> | show | quit");

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        match line {
            "" => {}
            "quit" | "exit" => break,
            "show" => show(&app),
            _ => run_command(&mut app, line),
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn run_command(app: &mut AppState, line: &str) {
    if let Some(rest) = line.strip_prefix("set-window ") {
        set_window(app, rest);
        return;
    }

    let event: KeyEvent = match line.parse() {
        Ok(event) => event,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    match app.on_key_down(&event) {
        Ok(EventDisposition::Consumed) => println!("consumed"),
        Ok(EventDisposition::PassThrough) => println!("passed through"),
        Err(e) => warn!("dispatch failed: {e}"),
    }
}

fn set_window(app: &AppState, args: &str) {
    let buckets: Vec<&str> = args.split_whitespace().collect();
    let [width, height] = buckets.as_slice() else {
        eprintln!("usage: set-window <small|medium|large> <small|medium|large>");
        return;
    };
    let (width, height) = match (width.parse::<SizeBucket>(), height.parse::<SizeBucket>()) {
        (Ok(w), Ok(h)) => (w, h),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{}", e);
            return;
        }
    };
    if let Err(e) = app.config.set_window_size(WindowSize::new(width, height)) {
        warn!("failed to persist window size: {e}");
    }
}

fn show(app: &AppState) {
    let surface = app.surface.borrow();
    println!("script running: {}", app.editor.is_running());
    println!("menu visible:   {}", app.menu.is_visible());
    println!(
        "font size:      editor {}px, config {}px, surface {}",
        app.editor.options().font_size,
        app.config.font_size(),
        surface
            .font_size_px()
            .map(|px| format!("{}px", px))
            .unwrap_or_else(|| "unset".to_string()),
    );
    let classes: Vec<&str> = surface.classes().collect();
    println!("classes:        {}", classes.join(" "));
    println!("messages:       {}", app.editor.messages().len());
}

//! Counter demo.
//!
//! Run with: cargo run --example counter
//!
//! Keys: `+`/`↑` increment, `-`/`↓` decrement, `r` reset, `q`/`Esc` quit.
//! Logs go to `counter.log`; set `RUST_LOG=flint_tui=trace` for per-frame detail.

use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing_subscriber::EnvFilter;

use flint_tui::{
    box_node, create_memo, mount, signal, text, AlignItems, BorderStyle, FlexDirection,
    JustifyContent, NamedColor, RenderConfig, Renderer, TerminalGuard, TextAlign,
};

fn init_logging() -> io::Result<()> {
    let file = File::create("counter.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flint_tui=debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> flint_tui::Result<()> {
    init_logging()?;

    let config = match RenderConfig::load("counter.toml") {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(%err, "using default config");
            RenderConfig {
                hide_cursor: true,
                synchronized_output: true,
                ..RenderConfig::default()
            }
        }
    };

    let count = signal(0i64);
    let c = count.clone();
    let parity = create_memo(move || if c.get() % 2 == 0 { "even" } else { "odd" });

    let _guard = TerminalGuard::enter()?;

    let c = count.clone();
    let handle = mount(
        move || {
            let value = c.get();
            let color = if value < 0 { NamedColor::Red } else { NamedColor::Green };
            box_node()
                .border(BorderStyle::Rounded)
                .border_color(NamedColor::Cyan)
                .justify(JustifyContent::Center)
                .align(AlignItems::Center)
                .child(
                    box_node()
                        .direction(FlexDirection::Row)
                        .gap(1)
                        .child(text("Count:").bold())
                        .child(text(value.to_string()).fg(color).bold())
                        .child(text(format!("({})", parity.get())).dim()),
                )
                .child(
                    text("+/- change · r reset · q quit")
                        .width(30u16)
                        .text_align(TextAlign::Center)
                        .dim(),
                )
                .build()
        },
        Renderer::with_config(io::stdout(), config),
    );

    loop {
        if let Some(err) = handle.last_error() {
            tracing::error!(%err, "stopping after render failure");
            break;
        }
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('+') | KeyCode::Up => count.update(|n| n + 1),
                KeyCode::Char('-') | KeyCode::Down => count.update(|n| n - 1),
                KeyCode::Char('r') => count.set(0),
                _ => {}
            },
            Event::Resize(width, height) => handle.resize(width, height),
            _ => {}
        }
    }

    handle.unmount();
    Ok(())
}

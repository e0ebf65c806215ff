//! Main event loop: terminal keys and settled search queries.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::{debug, info, trace, warn};

use crate::page::{DemoPage, PageAction};
use crate::terminal::TerminalGuard;

/// Run the page until the user quits or the terminal closes.
pub async fn run(mut page: DemoPage) -> anyhow::Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();
    let mut settled = page.settled_queries();

    terminal.draw(&page.view())?;
    page.clear_dirty();
    info!("Event loop started");

    loop {
        let mut redraw = false;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    trace!("Key event: {:?}", key);
                    if page.handle_key(key.into()) == PageAction::Quit {
                        info!("Quit requested");
                        break;
                    }
                }
                Some(Ok(Event::Resize(width, height))) => {
                    debug!("Terminal resized to {}x{}", width, height);
                    redraw = true;
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    page.dispose();
                    return Err(err.into());
                }
                None => break,
            },
            changed = settled.changed() => {
                if changed.is_err() {
                    warn!("Search channel closed");
                    break;
                }
                // Failures stay visible in the page; keep running.
                if let Err(err) = page.poll_search() {
                    warn!("Cyclist search failed: {}", err);
                }
            }
        }

        if redraw || page.is_dirty() {
            terminal.draw(&page.view())?;
            page.clear_dirty();
        }
    }

    page.dispose();
    Ok(())
}

// TUI event loop and terminal management
use crate::app::{App, Modal, Screen};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mealdash_core::CatalogProvider;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Run the TUI until the user quits
///
/// Single-threaded and event-driven: draw, block on a key event, mutate app
/// state to completion, repeat. The only await in the loop is the item fetch
/// when opening a category, during which a loading frame is shown.
pub async fn run_tui(
    mut app: App,
    provider: &dyn CatalogProvider,
    mouse_enabled: bool,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                // Modals eat every key while open
                if app.modal.is_some() {
                    handle_modal_key(&mut app, key.code);
                } else {
                    match app.screen {
                        Screen::Catalog => {
                            handle_catalog_key(&mut app, key.code, provider, &mut terminal)
                                .await?;
                        }
                        Screen::Detail => handle_detail_key(&mut app, key.code),
                        Screen::Cart => handle_cart_key(&mut app, key.code),
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    Ok(())
}

fn handle_modal_key(app: &mut App, code: KeyCode) {
    match app.modal.as_mut() {
        Some(Modal::Confirm { .. }) => match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_modal(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.dismiss_modal(),
            _ => {}
        },
        Some(Modal::AddMenu(form)) => match code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Char(c) => form.current_field_mut().push(c),
            KeyCode::Backspace => {
                form.current_field_mut().pop();
            }
            KeyCode::Enter => app.save_add_menu(),
            KeyCode::Esc => app.dismiss_modal(),
            _ => {}
        },
        Some(Modal::EditPrice(form)) => match code {
            KeyCode::Char(c) => form.price.push(c),
            KeyCode::Backspace => {
                form.price.pop();
            }
            KeyCode::Enter => app.save_edit_price(),
            KeyCode::Esc => app.dismiss_modal(),
            _ => {}
        },
        Some(Modal::ActionMenu { .. }) => match code {
            KeyCode::Down | KeyCode::Char('j') => app.action_menu_next(),
            KeyCode::Up | KeyCode::Char('k') => app.action_menu_previous(),
            KeyCode::Enter => app.action_menu_select(),
            KeyCode::Esc => app.dismiss_modal(),
            _ => {}
        },
        None => {}
    }
}

async fn handle_catalog_key(
    app: &mut App,
    code: KeyCode,
    provider: &dyn CatalogProvider,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> anyhow::Result<()> {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.next_category(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_category(),
        KeyCode::Char('a') => app.open_add_menu(),
        KeyCode::Char('e') => app.open_edit_price(),
        KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('m') => app.open_action_menu(),
        KeyCode::Char('c') => app.go_to_cart(),
        KeyCode::Enter => {
            if let Some(category) = app.selected_category() {
                let name = category.name.clone();
                app.loading = true;
                // Paint the loading frame before blocking on the fetch
                terminal.draw(|f| crate::ui::render(f, app))?;

                match provider.fetch_category_items(&name).await {
                    Ok(items) => {
                        app.loading = false;
                        app.open_detail(name, items);
                    }
                    Err(e) => {
                        // Logged, not surfaced: stay on the catalog screen
                        tracing::error!(category = %name, "failed to fetch items: {}", e);
                        app.loading = false;
                    }
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_detail_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
        KeyCode::Char('j') | KeyCode::Down => app.next_item(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_item(),
        KeyCode::Enter | KeyCode::Char('o') => app.add_selected_item_to_cart(),
        KeyCode::Char('c') => app.go_to_cart(),
        _ => {}
    }
}

fn handle_cart_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => app.leave_cart(),
        KeyCode::Char('j') | KeyCode::Down => app.next_cart_line(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_cart_line(),
        KeyCode::Char('+') | KeyCode::Right => app.increase_selected_quantity(),
        KeyCode::Char('-') | KeyCode::Left => app.decrease_selected_quantity(),
        KeyCode::Enter => app.checkout(),
        _ => {}
    }
}

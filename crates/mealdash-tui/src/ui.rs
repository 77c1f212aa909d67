// UI rendering logic
use crate::app::{AddMenuForm, App, Modal, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.screen {
        Screen::Catalog => render_catalog(frame, app, chunks[1]),
        Screen::Detail => render_detail(frame, app, chunks[1]),
        Screen::Cart => render_cart(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);

    if app.modal.is_some() {
        render_modal(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Catalog => "Menu",
        Screen::Detail => "Detail",
        Screen::Cart => "Order",
    };

    let cart_badge = format!("Cart: {}", app.cart.len());

    let line = Line::from(vec![
        Span::styled(
            "MealDash",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(title, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw("  |  "),
        Span::styled(cart_badge, Style::default().fg(Color::Magenta)),
    ]);

    let header = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_catalog(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.loading {
        let loading_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Loading menu...",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )]),
        ];
        let paragraph = Paragraph::new(loading_text)
            .block(Block::default().borders(Borders::ALL).title(" Menu (Loading...) "))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    if app.catalog.is_empty() {
        let empty_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "No categories available",
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press 'a' to add a menu entry",
                Style::default().fg(Color::DarkGray),
            )]),
        ];
        let paragraph = Paragraph::new(empty_text)
            .block(Block::default().borders(Borders::ALL).title(" Menu "))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .catalog
        .categories()
        .iter()
        .map(|category| {
            let price = app.pricing.lookup(&category.name);
            let line1 = Line::from(vec![
                Span::styled(
                    category.name.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(price.to_string(), Style::default().fg(Color::Green)),
            ]);

            let description = if category.description.chars().count() > 60 {
                let truncated: String = category.description.chars().take(57).collect();
                format!("  {}...", truncated)
            } else {
                format!("  {}", category.description)
            };
            let line2 = Line::from(Span::styled(
                description,
                Style::default().fg(Color::DarkGray),
            ));

            ListItem::new(vec![line1, line2])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Menu ({}) ", app.catalog.len())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut app.catalog_state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(detail) = &app.detail else {
        let paragraph = Paragraph::new("Nothing selected")
            .block(Block::default().borders(Borders::ALL).title(" Detail "));
        frame.render_widget(paragraph, area);
        return;
    };

    if app.loading {
        let paragraph = Paragraph::new("Loading items...")
            .block(Block::default().borders(Borders::ALL).title(" Detail (Loading...) "))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let price = app.pricing.lookup(&detail.category).to_string();

    if detail.items.is_empty() {
        let paragraph = Paragraph::new("No meals found in this category.")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", detail.category)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = detail
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.detail_index {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            ListItem::new(Line::from(vec![
                Span::styled(item.name.clone(), style),
                Span::raw("  "),
                Span::styled(price.clone(), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", detail.category)),
        )
        .highlight_symbol(">> ");
    frame.render_widget(list, chunks[0]);

    // Right pane: description and price of the selected item
    let mut lines = vec![];
    if let Some(item) = detail.items.get(app.detail_index) {
        lines.push(Line::from(Span::styled(
            item.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Description:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(item.description.clone()));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Price: "),
            Span::styled(
                price.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ENTER to add to cart",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let preview = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Description "))
        .wrap(Wrap { trim: true });
    frame.render_widget(preview, chunks[1]);
}

fn render_cart(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.cart.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Your cart is empty",
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Order "))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = app
        .cart
        .lines()
        .iter()
        .map(|line| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    line.category.name.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(line.price.clone(), Style::default().fg(Color::Green)),
                Span::raw("   "),
                Span::styled(
                    format!("[-]  {}  [+]", line.quantity),
                    Style::default().fg(Color::Yellow),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Order ({}) ", app.cart.len())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    frame.render_stateful_widget(list, chunks[0], &mut app.cart_state);

    // Total plus the checkout affordance
    let footer = Line::from(vec![
        Span::styled(
            format!("Total: $ {}", app.cart.total()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            "[ Checkout (ENTER) ]",
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]);
    let footer_widget = Paragraph::new(footer)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer_widget, chunks[1]);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(message) = &app.status_message {
        vec![Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        )]
    } else {
        vec![match app.screen {
            Screen::Catalog => Span::raw(
                "j/k: navigate | ENTER: open | a: add menu | e: edit price | d: delete | m: options | c: cart | q: quit",
            ),
            Screen::Detail => {
                Span::raw("j/k: navigate | ENTER: add to cart | c: cart | ESC: back | q: quit")
            }
            Screen::Cart => Span::raw(
                "j/k: navigate | +/-: quantity | ENTER: checkout | ESC: back | q: quit",
            ),
        }]
    };

    let paragraph = Paragraph::new(Line::from(status));
    frame.render_widget(paragraph, area);
}

fn render_modal(frame: &mut Frame, app: &App) {
    let Some(modal) = &app.modal else { return };

    match modal {
        Modal::Confirm { message, .. } => {
            let area = centered_rect(50, 20, frame.area());
            frame.render_widget(Clear, area);

            let lines = vec![
                Line::from(""),
                Line::from(Span::raw(message.clone())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("[Y]es", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                    Span::raw("   "),
                    Span::styled("[N]o", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                ]),
            ];
            let widget = Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Confirm ")
                        .border_style(Style::default().fg(Color::Red)),
                )
                .alignment(Alignment::Center);
            frame.render_widget(widget, area);
        }
        Modal::AddMenu(form) => {
            let area = centered_rect(60, 50, frame.area());
            frame.render_widget(Clear, area);

            let lines = render_form_lines(form);
            let widget = Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Add Menu ")
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .wrap(Wrap { trim: false });
            frame.render_widget(widget, area);
        }
        Modal::EditPrice(form) => {
            let area = centered_rect(50, 25, frame.area());
            frame.render_widget(Clear, area);

            let lines = vec![
                Line::from(vec![
                    Span::styled("Category: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        form.category.clone(),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("New price: ", Style::default().fg(Color::Gray)),
                    Span::styled(form.price.clone(), Style::default().fg(Color::Yellow)),
                    Span::styled("\u{2588}", Style::default().fg(Color::Yellow)), // Cursor
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "ENTER: save | ESC: cancel",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let widget = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Edit Price ")
                    .border_style(Style::default().fg(Color::Yellow)),
            );
            frame.render_widget(widget, area);
        }
        Modal::ActionMenu { category, cursor } => {
            let area = centered_rect(40, 30, frame.area());
            frame.render_widget(Clear, area);

            let entries = ["Edit", "Delete", "Cancel"];
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("What would you like to do with {}?", category),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ];
            for (i, entry) in entries.iter().enumerate() {
                let style = if i == *cursor {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else if i == 1 {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                let marker = if i == *cursor { ">> " } else { "   " };
                lines.push(Line::from(Span::styled(
                    format!("{}{}", marker, entry),
                    style,
                )));
            }

            let widget = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Choose Action ")
                    .border_style(Style::default().fg(Color::Yellow)),
            );
            frame.render_widget(widget, area);
        }
    }
}

fn render_form_lines(form: &AddMenuForm) -> Vec<Line<'static>> {
    let fields = [
        ("Menu Name:   ", &form.name),
        ("Menu Price:  ", &form.price),
        ("Image URL:   ", &form.thumb_url),
        ("Description: ", &form.description),
    ];

    let mut lines = Vec::new();
    for (i, (label, value)) in fields.iter().enumerate() {
        let active = i == form.field;
        let label_style = if active {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::styled(label.to_string(), label_style),
            Span::styled(
                value.to_string(),
                if active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                },
            ),
        ];
        if active {
            spans.push(Span::styled("\u{2588}", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "TAB: next field | ENTER: add | ESC: cancel",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Helper to carve a centered popup area out of the full frame
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

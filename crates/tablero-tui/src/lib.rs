// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use std::io;
use std::time::Instant;
use tablero_app::{
    ASSISTANT_REPLY_DELAY, AppCommand, AppState, ChatLog, ChatSender, ChatVisibility, Client,
    ColumnSpec, EditOutcome, FaqArticle, FieldKind, ListController, Order, Product, Record,
    RecordSet, RowState, STATUS_CLEAR_DELAY, TICKET_ACK_DELAY, TaskKind, TaskQueue, TabKind,
    TicketFormInput, TicketPriority,
};
use tablero_store::TicketQueue;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(120);
const EDIT_MARK: &str = "▸";
const CONFIRM_MARK: &str = "delete? y/n";

/// Seam between the view loop and whoever owns the data: the three list
/// controllers, the help-desk pieces, and the chat transcript.
pub trait AppRuntime {
    fn orders(&mut self) -> &mut ListController<Order>;
    fn products(&mut self) -> &mut ListController<Product>;
    fn clients(&mut self) -> &mut ListController<Client>;
    fn faqs(&mut self) -> &mut RecordSet<FaqArticle>;
    fn tickets(&mut self) -> &mut TicketQueue;
    fn chat(&mut self) -> &mut ChatLog;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct TableUiState {
    selected: usize,
    search_focused: bool,
    edit_column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct TicketFormUiState {
    form: Option<TicketFormInput>,
    field: usize,
}

impl TicketFormUiState {
    const FIELDS: [&'static str; 4] = ["subject", "contact", "description", "priority"];
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ChatUiState {
    input: String,
}

#[derive(Debug, Default)]
struct ViewData {
    tasks: TaskQueue,
    orders: TableUiState,
    products: TableUiState,
    clients: TableUiState,
    help: TableUiState,
    ticket_form: TicketFormUiState,
    chat: ChatUiState,
    keys_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();

    let mut result = Ok(());
    loop {
        drain_due_tasks(state, runtime, &mut view_data, Instant::now());

        if let Err(error) = terminal.draw(|frame| render(frame, state, runtime, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(POLL_INTERVAL).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    // Teardown cancels every pending delayed effect with the view.
    view_data.tasks.clear();
    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn drain_due_tasks<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    now: Instant,
) {
    for task in view_data.tasks.due(now) {
        match task {
            TaskKind::TicketAck { ticket_id } => {
                emit_status(state, view_data, format!("ticket {ticket_id} acknowledged"));
            }
            TaskKind::AssistantReply => {
                runtime.chat().push_assistant_reply();
            }
            TaskKind::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            TaskKind::ClearStatus { .. } => {}
        }
    }
}

fn emit_status(state: &mut AppState, view_data: &mut ViewData, message: impl Into<String>) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    view_data.tasks.schedule(
        TaskKind::ClearStatus {
            token: view_data.status_token,
        },
        STATUS_CLEAR_DELAY,
        Instant::now(),
    );
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.keys_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.keys_visible = false;
        }
        return false;
    }

    if state.chat == ChatVisibility::Visible {
        handle_chat_key(state, runtime, view_data, key);
        return false;
    }

    if view_data.ticket_form.form.is_some() {
        handle_ticket_form_key(state, runtime, view_data, key);
        return false;
    }

    let (status, captured) = match state.active_tab {
        TabKind::Orders => handle_table_key(runtime.orders(), &mut view_data.orders, key),
        TabKind::Products => handle_table_key(runtime.products(), &mut view_data.products, key),
        TabKind::Clients => handle_table_key(runtime.clients(), &mut view_data.clients, key),
        TabKind::Help => {
            handle_help_key(state, runtime, view_data, key);
            return false;
        }
    };
    if let Some(message) = status {
        emit_status(state, view_data, message);
    }
    if !captured {
        handle_global_key(state, view_data, key);
    }
    false
}

/// Returns an optional status message plus whether the key was captured by
/// search or edit mode, which keeps it away from the global bindings.
fn handle_table_key<T: Record>(
    list: &mut ListController<T>,
    ui: &mut TableUiState,
    key: KeyEvent,
) -> (Option<String>, bool) {
    if ui.search_focused {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => ui.search_focused = false,
            KeyCode::Backspace => {
                let mut query = list.query().to_owned();
                query.pop();
                list.set_query(query);
            }
            KeyCode::Char(c) => {
                let mut query = list.query().to_owned();
                query.push(c);
                list.set_query(query);
            }
            _ => {}
        }
        ui.selected = clamp_selection(ui.selected, list.visible().len());
        return (None, true);
    }

    if let Some(editing_id) = list.editing_row().map(str::to_owned) {
        return (handle_edit_key(list, ui, &editing_id, key), true);
    }

    let visible_len = list.visible().len();
    match key.code {
        KeyCode::Char('/') => ui.search_focused = true,
        KeyCode::Char('j') | KeyCode::Down => {
            ui.selected = clamp_selection(ui.selected + 1, visible_len);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            ui.selected = ui.selected.saturating_sub(1);
        }
        KeyCode::Char('e') => {
            if let Some(id) = selected_row_id(list, ui.selected) {
                list.start_edit(&id);
                ui.edit_column = 0;
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = selected_row_id(list, ui.selected) {
                list.request_delete(&id);
            }
        }
        KeyCode::Char('y') => {
            if let Some(id) = selected_row_id(list, ui.selected)
                && list.row_state(&id) == RowState::ConfirmingDelete
            {
                list.confirm_delete(&id);
                ui.selected = clamp_selection(ui.selected, list.visible().len());
                return (Some(format!("{id} deleted")), false);
            }
        }
        KeyCode::Char('n') => {
            if let Some(id) = selected_row_id(list, ui.selected) {
                list.cancel_delete(&id);
            }
        }
        _ => {}
    }
    (None, false)
}

fn handle_edit_key<T: Record>(
    list: &mut ListController<T>,
    ui: &mut TableUiState,
    editing_id: &str,
    key: KeyEvent,
) -> Option<String> {
    let editable: Vec<&'static ColumnSpec> = list.schema().editable_columns().collect();
    if editable.is_empty() {
        list.save_edit(editing_id);
        return None;
    }
    ui.edit_column = ui.edit_column.min(editable.len() - 1);
    let column = editable[ui.edit_column];

    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            list.save_edit(editing_id);
            return Some(format!("{editing_id} saved"));
        }
        KeyCode::Tab | KeyCode::Right => {
            ui.edit_column = (ui.edit_column + 1) % editable.len();
        }
        KeyCode::BackTab | KeyCode::Left => {
            ui.edit_column = (ui.edit_column + editable.len() - 1) % editable.len();
        }
        KeyCode::Backspace => {
            apply_edit_candidate(list, editing_id, column, |current| {
                let mut next = current;
                next.pop();
                next
            });
        }
        KeyCode::Char(c) => {
            apply_edit_candidate(list, editing_id, column, |mut current| {
                current.push(c);
                current
            });
        }
        _ => {}
    }
    None
}

/// Build the next cell value from the currently displayed one and route it
/// through the controller; a `Rejected` outcome drops the keystroke.
fn apply_edit_candidate<T: Record>(
    list: &mut ListController<T>,
    id: &str,
    column: &ColumnSpec,
    mutate: impl FnOnce(String) -> String,
) -> EditOutcome {
    let current = list
        .records()
        .iter()
        .find(|record| record.id() == id)
        .and_then(|record| record.field(column.name))
        .map(|value| value.display())
        .unwrap_or_default();
    list.change_field(id, column.name, &mutate(current))
}

fn handle_global_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => {
            state.dispatch(AppCommand::NextTab);
        }
        KeyCode::BackTab => {
            state.dispatch(AppCommand::PrevTab);
        }
        KeyCode::Char('?') => view_data.keys_visible = true,
        KeyCode::Char('c') => {
            state.dispatch(AppCommand::OpenChat);
        }
        _ => {}
    }
}

fn handle_help_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) {
    let ui = &mut view_data.help;
    if ui.search_focused {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => ui.search_focused = false,
            KeyCode::Backspace => {
                let mut query = runtime.faqs().query().to_owned();
                query.pop();
                let ticket_query = query.clone();
                runtime.faqs().set_query(query);
                runtime.tickets().set_query(ticket_query);
            }
            KeyCode::Char(c) => {
                let mut query = runtime.faqs().query().to_owned();
                query.push(c);
                let ticket_query = query.clone();
                runtime.faqs().set_query(query);
                runtime.tickets().set_query(ticket_query);
            }
            _ => {}
        }
        ui.selected = clamp_selection(ui.selected, runtime.faqs().visible().len());
        return;
    }

    match key.code {
        KeyCode::Char('/') => ui.search_focused = true,
        KeyCode::Char('j') | KeyCode::Down => {
            let len = runtime.faqs().visible().len();
            ui.selected = clamp_selection(ui.selected + 1, len);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            ui.selected = ui.selected.saturating_sub(1);
        }
        KeyCode::Char('t') => {
            view_data.ticket_form = TicketFormUiState {
                form: Some(TicketFormInput::blank()),
                field: 0,
            };
        }
        KeyCode::Char('r') => {
            runtime.tickets().resolve_all();
            let count = runtime.tickets().len();
            emit_status(state, view_data, format!("{count} ticket(s) resolved"));
        }
        KeyCode::Char('X') => {
            runtime.tickets().clear();
            emit_status(state, view_data, "ticket queue cleared");
        }
        _ => handle_global_key(state, view_data, key),
    }
}

fn handle_ticket_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) {
    let field_count = TicketFormUiState::FIELDS.len();
    let field = view_data.ticket_form.field;
    let Some(form) = view_data.ticket_form.form.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            view_data.ticket_form = TicketFormUiState::default();
            emit_status(state, view_data, "ticket discarded");
        }
        KeyCode::Tab | KeyCode::Down => {
            view_data.ticket_form.field = (field + 1) % field_count;
        }
        KeyCode::BackTab | KeyCode::Up => {
            view_data.ticket_form.field = (field + field_count - 1) % field_count;
        }
        KeyCode::Left | KeyCode::Right if field == 3 => {
            form.priority = cycle_priority(form.priority, key.code == KeyCode::Right);
        }
        KeyCode::Backspace => {
            form_field_mut(form, field).pop();
        }
        KeyCode::Enter => {
            let input = form.clone();
            match runtime.tickets().submit(&input) {
                Ok(ticket) => {
                    view_data.ticket_form = TicketFormUiState::default();
                    view_data.tasks.schedule(
                        TaskKind::TicketAck {
                            ticket_id: ticket.id.clone(),
                        },
                        TICKET_ACK_DELAY,
                        Instant::now(),
                    );
                    emit_status(state, view_data, format!("ticket {} filed", ticket.id));
                }
                Err(error) => emit_status(state, view_data, format!("{error:#}")),
            }
        }
        KeyCode::Char(c) if field != 3 => {
            form_field_mut(form, field).push(c);
        }
        _ => {}
    }
}

fn form_field_mut(form: &mut TicketFormInput, field: usize) -> &mut String {
    match field {
        0 => &mut form.subject,
        1 => &mut form.contact,
        _ => &mut form.description,
    }
}

fn cycle_priority(priority: TicketPriority, forward: bool) -> TicketPriority {
    let all = TicketPriority::ALL;
    let current = all.iter().position(|p| *p == priority).unwrap_or(1);
    let next = if forward {
        (current + 1) % all.len()
    } else {
        (current + all.len() - 1) % all.len()
    };
    all[next]
}

fn handle_chat_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            state.dispatch(AppCommand::CloseChat);
        }
        KeyCode::Enter => {
            let input = view_data.chat.input.clone();
            if runtime.chat().send(&input) {
                view_data.chat.input.clear();
                view_data.tasks.schedule(
                    TaskKind::AssistantReply,
                    ASSISTANT_REPLY_DELAY,
                    Instant::now(),
                );
            }
        }
        KeyCode::Backspace => {
            view_data.chat.input.pop();
        }
        KeyCode::Char(c) => view_data.chat.input.push(c),
        _ => {}
    }
}

fn selected_row_id<T: Record>(list: &ListController<T>, selected: usize) -> Option<String> {
    list.visible()
        .get(selected)
        .map(|row| row.record.id().to_owned())
}

fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 { 0 } else { selected.min(len - 1) }
}

fn render<R: AppRuntime>(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    runtime: &mut R,
    view_data: &ViewData,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], state);

    match state.active_tab {
        TabKind::Orders => render_list_tab(frame, chunks[1], runtime.orders(), &view_data.orders),
        TabKind::Products => {
            render_list_tab(frame, chunks[1], runtime.products(), &view_data.products);
        }
        TabKind::Clients => {
            render_list_tab(frame, chunks[1], runtime.clients(), &view_data.clients);
        }
        TabKind::Help => render_help_tab(frame, chunks[1], runtime, &view_data.help),
    }

    render_status_line(frame, chunks[2], state);

    if view_data.ticket_form.form.is_some() {
        render_ticket_form(frame, &view_data.ticket_form);
    }
    if state.chat == ChatVisibility::Visible {
        render_chat_overlay(frame, runtime.chat(), &view_data.chat);
    }
    if view_data.keys_visible {
        render_keys_overlay(frame);
    }
}

fn render_tabs(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let titles: Vec<Line> = TabKind::ALL
        .iter()
        .map(|tab| Line::from(tab.label()))
        .collect();
    let selected = TabKind::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_list_tab<T: Record>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    list: &ListController<T>,
    ui: &TableUiState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(2)])
        .split(area);

    frame.render_widget(
        Paragraph::new(search_line(list.query(), ui.search_focused)),
        chunks[0],
    );

    let columns = list.schema().columns;
    let header = Row::new(
        columns
            .iter()
            .map(|column| Cell::from(column.header))
            .collect::<Vec<Cell>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let editable: Vec<&'static ColumnSpec> = list.schema().editable_columns().collect();
    let edit_column_name = editable
        .get(ui.edit_column.min(editable.len().saturating_sub(1)))
        .map(|column| column.name);

    let rows: Vec<Row> = list
        .visible()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut cells: Vec<Cell> = columns
                .iter()
                .map(|column| {
                    let text = row
                        .record
                        .field(column.name)
                        .map(|value| value.display())
                        .unwrap_or_default();
                    if row.state == RowState::Editing && Some(column.name) == edit_column_name {
                        Cell::from(format!("{EDIT_MARK}{text}"))
                            .style(Style::default().add_modifier(Modifier::UNDERLINED))
                    } else {
                        Cell::from(text)
                    }
                })
                .collect();
            if row.state == RowState::ConfirmingDelete {
                cells.push(Cell::from(CONFIRM_MARK).style(Style::default().fg(Color::Red)));
            }
            let style = match row.state {
                RowState::Editing => Style::default().fg(Color::Yellow),
                RowState::ConfirmingDelete => Style::default().fg(Color::Red),
                RowState::Viewing => Style::default(),
            };
            let style = if index == ui.selected {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            };
            Row::new(cells).style(style)
        })
        .collect();

    let mut widths: Vec<Constraint> = columns.iter().map(column_width).collect();
    widths.push(Constraint::Length(CONFIRM_MARK.len() as u16));

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(table, chunks[1]);
}

fn column_width(column: &ColumnSpec) -> Constraint {
    match column.kind {
        FieldKind::Number => Constraint::Length(10),
        FieldKind::Text => Constraint::Min(8),
    }
}

fn search_line(query: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "search> " } else { "search: " };
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(marker.to_owned(), style),
        Span::raw(query.to_owned()),
    ])
}

fn render_help_tab<R: AppRuntime>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    runtime: &mut R,
    ui: &TableUiState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(2)])
        .split(area);

    frame.render_widget(
        Paragraph::new(search_line(runtime.faqs().query(), ui.search_focused)),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let faq_lines: Vec<Line> = runtime
        .faqs()
        .visible()
        .iter()
        .enumerate()
        .flat_map(|(index, faq)| {
            let style = if index == ui.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            vec![
                Line::from(Span::styled(faq.question.clone(), style)),
                Line::from(Span::styled(
                    format!("  {}", truncate(&faq.answer, 90)),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(faq_lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP).title("knowledge base")),
        columns[0],
    );

    let tickets = runtime.tickets();
    let mut ticket_lines: Vec<Line> = vec![Line::from(format!(
        "{} ticket(s), {} open  [t]icket [r]esolve-all [X]clear",
        tickets.len(),
        tickets.open_count(),
    ))];
    if tickets.is_empty() {
        ticket_lines.push(Line::from(Span::styled(
            "No open tickets yet -- create one and we'll take care of it.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for ticket in tickets.visible() {
        ticket_lines.push(Line::from(ticket_summary_line(
            &ticket.id,
            &ticket.subject,
            ticket.priority.as_str(),
            ticket.status.as_str(),
        )));
    }
    frame.render_widget(
        Paragraph::new(ticket_lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP).title("your tickets")),
        columns[1],
    );
}

fn ticket_summary_line(id: &str, subject: &str, priority: &str, status: &str) -> String {
    format!("{id}  {}  {priority}/{status}", truncate(subject, 32))
}

fn render_status_line(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let text = match &state.status_line {
        Some(message) => message.clone(),
        None => "Tab switch  / search  e edit  d delete  t ticket  c chat  ? keys  C-q quit"
            .to_owned(),
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_ticket_form(frame: &mut ratatui::Frame<'_>, ui: &TicketFormUiState) {
    let Some(form) = &ui.form else {
        return;
    };
    let area = centered_rect(frame.area(), 60, 10);
    frame.render_widget(Clear, area);

    let values = [
        form.subject.clone(),
        form.contact.clone(),
        form.description.clone(),
        format!("< {} >", form.priority.as_str()),
    ];
    let mut lines = Vec::new();
    for (index, (label, value)) in TicketFormUiState::FIELDS.iter().zip(values).enumerate() {
        let style = if index == ui.field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{label:>12}: {value}"),
            style,
        )));
    }
    lines.push(Line::from(Span::styled(
        "Enter submit  Tab next field  Esc cancel",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("create support ticket")),
        area,
    );
}

fn render_chat_overlay(frame: &mut ratatui::Frame<'_>, chat: &ChatLog, ui: &ChatUiState) {
    let area = centered_rect(frame.area(), 64, 14);
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = chat
        .messages()
        .iter()
        .map(|message| {
            let style = match message.sender {
                ChatSender::Assistant => Style::default().fg(Color::Cyan),
                ChatSender::You => Style::default(),
            };
            Line::from(Span::styled(
                format!("{:>9}: {}", message.sender.label(), message.text),
                style,
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(format!("> {}", ui.input)));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("assistant (simulated)")),
        area,
    );
}

fn render_keys_overlay(frame: &mut ratatui::Frame<'_>) {
    let area = centered_rect(frame.area(), 54, 14);
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = [
        "Tab / Shift-Tab   switch tab",
        "/                 focus search (type to filter)",
        "j / k             move selection",
        "e                 edit selected row",
        "Tab (editing)     next editable field",
        "Enter (editing)   save row",
        "d                 request delete",
        "y / n             confirm / cancel delete",
        "t                 new support ticket (help tab)",
        "r                 resolve all tickets (help tab)",
        "c                 chat overlay",
        "Ctrl-q            quit",
    ]
    .iter()
    .map(|entry| Line::from(*entry))
    .collect();

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("keys")),
        area,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::{
        AppRuntime, TableUiState, TicketFormUiState, clamp_selection, cycle_priority,
        drain_due_tasks, handle_chat_key, handle_key_event, handle_table_key,
        handle_ticket_form_key, ticket_summary_line, truncate,
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::{Duration, Instant};
    use tablero_app::{
        AppCommand, AppState, ChatLog, Client, FAQ_SCHEMA, FaqArticle, ListController, Order,
        ORDER_SCHEMA, OrderStatus, PRODUCT_SCHEMA, Product, RecordSet, RowState, TabKind,
        TicketPriority,
    };
    use tablero_store::{Store, TicketQueue};

    struct SimRuntime {
        orders: ListController<Order>,
        products: ListController<Product>,
        clients: ListController<Client>,
        faqs: RecordSet<FaqArticle>,
        tickets: TicketQueue,
        chat: ChatLog,
    }

    impl SimRuntime {
        fn new() -> Self {
            Self {
                orders: ListController::new(ORDER_SCHEMA, vec![sample_order()]),
                products: ListController::new(PRODUCT_SCHEMA, vec![sample_product()]),
                clients: ListController::new(tablero_app::CLIENT_SCHEMA, Vec::new()),
                faqs: RecordSet::new(FAQ_SCHEMA, Vec::new()),
                tickets: TicketQueue::open(Store::open_memory()),
                chat: ChatLog::new(),
            }
        }
    }

    impl AppRuntime for SimRuntime {
        fn orders(&mut self) -> &mut ListController<Order> {
            &mut self.orders
        }
        fn products(&mut self) -> &mut ListController<Product> {
            &mut self.products
        }
        fn clients(&mut self) -> &mut ListController<Client> {
            &mut self.clients
        }
        fn faqs(&mut self) -> &mut RecordSet<FaqArticle> {
            &mut self.faqs
        }
        fn tickets(&mut self) -> &mut TicketQueue {
            &mut self.tickets
        }
        fn chat(&mut self) -> &mut ChatLog {
            &mut self.chat
        }
    }

    fn sample_order() -> Order {
        Order {
            id: "ORD-1".to_owned(),
            client: "Liv".to_owned(),
            email: "liv@x.io".to_owned(),
            total: 100.0,
            status: OrderStatus::Pending,
            date: "2026-01-04".to_owned(),
            country: "Canada".to_owned(),
        }
    }

    fn sample_product() -> Product {
        Product {
            id: "P-1".to_owned(),
            name: "Lamp".to_owned(),
            category: "Home".to_owned(),
            price: 24.99,
            stock: 40.0,
            sales: 10.0,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn search_keystrokes_filter_immediately() {
        let mut list = ListController::new(ORDER_SCHEMA, vec![sample_order()]);
        let mut ui = TableUiState {
            search_focused: true,
            ..TableUiState::default()
        };

        let (_, captured) = handle_table_key(&mut list, &mut ui, key(KeyCode::Char('z')));
        assert!(captured);
        assert_eq!(list.query(), "z");
        assert!(list.visible().is_empty());

        handle_table_key(&mut list, &mut ui, key(KeyCode::Backspace));
        assert_eq!(list.query(), "");
        assert_eq!(list.visible().len(), 1);
    }

    #[test]
    fn edit_keystrokes_route_through_the_numeric_gate() {
        let mut list = ListController::new(PRODUCT_SCHEMA, vec![sample_product()]);
        let mut ui = TableUiState::default();

        handle_table_key(&mut list, &mut ui, key(KeyCode::Char('e')));
        assert_eq!(list.row_state("P-1"), RowState::Editing);

        // price currently "24.99"; 'a' is rejected, '5' lands.
        handle_table_key(&mut list, &mut ui, key(KeyCode::Char('a')));
        assert_eq!(list.records()[0].price, 24.99);
        handle_table_key(&mut list, &mut ui, key(KeyCode::Char('5')));
        assert_eq!(list.records()[0].price, 24.995);

        let (status, captured) = handle_table_key(&mut list, &mut ui, key(KeyCode::Enter));
        assert!(captured);
        assert_eq!(list.row_state("P-1"), RowState::Viewing);
        assert_eq!(status.as_deref(), Some("P-1 saved"));
    }

    #[test]
    fn delete_flow_requires_confirmation() {
        let mut list = ListController::new(ORDER_SCHEMA, vec![sample_order()]);
        let mut ui = TableUiState::default();

        handle_table_key(&mut list, &mut ui, key(KeyCode::Char('d')));
        assert_eq!(list.row_state("ORD-1"), RowState::ConfirmingDelete);
        assert_eq!(list.len(), 1);

        handle_table_key(&mut list, &mut ui, key(KeyCode::Char('n')));
        assert_eq!(list.row_state("ORD-1"), RowState::Viewing);

        handle_table_key(&mut list, &mut ui, key(KeyCode::Char('d')));
        let (status, _) = handle_table_key(&mut list, &mut ui, key(KeyCode::Char('y')));
        assert!(list.is_empty());
        assert_eq!(status.as_deref(), Some("ORD-1 deleted"));
    }

    #[test]
    fn tab_while_editing_cycles_fields_instead_of_tabs() {
        let mut state = AppState::default();
        let mut runtime = SimRuntime::new();
        let mut view_data = super::ViewData::default();

        handle_key_event(&mut state, &mut runtime, &mut view_data, key(KeyCode::Char('e')));
        assert!(runtime.orders.editing_row().is_some());

        handle_key_event(&mut state, &mut runtime, &mut view_data, key(KeyCode::Tab));
        assert_eq!(state.active_tab, TabKind::Orders);
        assert_eq!(view_data.orders.edit_column, 1);
    }

    #[test]
    fn submitting_the_ticket_form_schedules_an_ack() {
        let mut state = AppState::default();
        let mut runtime = SimRuntime::new();
        let mut view_data = super::ViewData {
            ticket_form: TicketFormUiState {
                form: Some(tablero_app::TicketFormInput {
                    subject: "Login issue".to_owned(),
                    description: "Cannot log in".to_owned(),
                    contact: "a@b.com".to_owned(),
                    priority: TicketPriority::High,
                }),
                field: 0,
            },
            ..super::ViewData::default()
        };

        handle_ticket_form_key(&mut state, &mut runtime, &mut view_data, key(KeyCode::Enter));

        assert_eq!(runtime.tickets.len(), 1);
        assert!(view_data.ticket_form.form.is_none());
        // The ack and the status clear are both pending.
        assert_eq!(view_data.tasks.pending(), 2);
        assert!(
            state
                .status_line
                .as_deref()
                .is_some_and(|s| s.contains("filed"))
        );
    }

    #[test]
    fn invalid_ticket_form_surfaces_the_validation_error() {
        let mut state = AppState::default();
        let mut runtime = SimRuntime::new();
        let mut view_data = super::ViewData {
            ticket_form: TicketFormUiState {
                form: Some(tablero_app::TicketFormInput::blank()),
                field: 0,
            },
            ..super::ViewData::default()
        };

        handle_ticket_form_key(&mut state, &mut runtime, &mut view_data, key(KeyCode::Enter));

        assert!(runtime.tickets.is_empty());
        assert!(view_data.ticket_form.form.is_some(), "form stays open");
        assert!(
            state
                .status_line
                .as_deref()
                .is_some_and(|s| s.contains("subject"))
        );
    }

    #[test]
    fn chat_send_schedules_a_delayed_reply_and_drain_delivers_it() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenChat);
        let mut runtime = SimRuntime::new();
        let mut view_data = super::ViewData::default();
        view_data.chat.input = "help me".to_owned();

        handle_chat_key(&mut state, &mut runtime, &mut view_data, key(KeyCode::Enter));
        assert_eq!(runtime.chat.messages().len(), 2);
        assert_eq!(view_data.tasks.pending(), 1);

        let later = Instant::now() + Duration::from_secs(2);
        drain_due_tasks(&mut state, &mut runtime, &mut view_data, later);
        assert_eq!(runtime.chat.messages().len(), 3);
        assert_eq!(view_data.tasks.pending(), 0);
    }

    #[test]
    fn blank_chat_input_schedules_nothing() {
        let mut state = AppState::default();
        let mut runtime = SimRuntime::new();
        let mut view_data = super::ViewData::default();
        view_data.chat.input = "   ".to_owned();

        handle_chat_key(&mut state, &mut runtime, &mut view_data, key(KeyCode::Enter));
        assert_eq!(runtime.chat.messages().len(), 1);
        assert_eq!(view_data.tasks.pending(), 0);
    }

    #[test]
    fn ctrl_q_requests_exit() {
        let mut state = AppState::default();
        let mut runtime = SimRuntime::new();
        let mut view_data = super::ViewData::default();

        let quit = handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(quit);
    }

    #[test]
    fn tab_key_rotates_tabs() {
        let mut state = AppState::default();
        let mut runtime = SimRuntime::new();
        let mut view_data = super::ViewData::default();

        handle_key_event(&mut state, &mut runtime, &mut view_data, key(KeyCode::Tab));
        assert_eq!(state.active_tab, TabKind::Products);
    }

    #[test]
    fn priority_cycles_in_both_directions() {
        assert_eq!(
            cycle_priority(TicketPriority::Normal, true),
            TicketPriority::High
        );
        assert_eq!(
            cycle_priority(TicketPriority::Low, false),
            TicketPriority::High
        );
    }

    #[test]
    fn selection_clamps_to_visible_rows() {
        assert_eq!(clamp_selection(5, 3), 2);
        assert_eq!(clamp_selection(0, 0), 0);
    }

    #[test]
    fn ticket_summary_truncates_long_subjects() {
        let line = ticket_summary_line(
            "T-ABC123-417",
            "A very long subject line that keeps going and going",
            "High",
            "Open",
        );
        assert!(line.starts_with("T-ABC123-417"));
        assert!(line.contains("High/Open"));
        assert!(line.len() < 70);
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ábcdéf", 4), "ábc…");
    }
}

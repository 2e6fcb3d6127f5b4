//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row as TableRow, Table};

use super::runtime::{App, Focus};
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // table + customization panel
            Constraint::Length(4), // summary
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(26)])
        .split(chunks[1]);

    render_header(frame, app, chunks[0]);
    render_table(frame, app, middle[0]);
    render_customize(frame, app, middle[1]);
    render_summary(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Header bar: preset name, evaluation date, sort state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " ROUTEBOARD ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {} │ sort={} {} │ page={}{} ",
            app.today,
            app.spec.sort_by,
            app.spec.sort_order,
            app.spec.page_size,
            if app.spec.partition_by_status {
                " │ ON-first"
            } else {
                ""
            },
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Main board: the derived view rendered as a table.
fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.view();

    let header = TableRow::new(
        view.headers
            .iter()
            .map(|h| Cell::from(h.as_str()))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(style::TABLE_HEADER_FG)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<TableRow> = view
        .rows
        .iter()
        .map(|r| {
            let cells: Vec<Cell> = view
                .column_ids
                .iter()
                .zip(&r.cells)
                .map(|(id, text)| {
                    let cell = Cell::from(text.as_str());
                    if id == "status" {
                        cell.style(Style::default().fg(style::status_color(r.status)))
                    } else {
                        cell
                    }
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();

    let n = view.headers.len().max(1) as u32;
    let widths = vec![Constraint::Ratio(1, n); n as usize];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Board ").borders(Borders::ALL));
    frame.render_widget(table, area);
}

/// Side panel: column and row customization lists with the cursor.
fn render_customize(frame: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_column_list(frame, app, halves[0]);
    render_row_list(frame, app, halves[1]);
}

fn render_column_list(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Columns;
    let items: Vec<ListItem> = app
        .columns
        .ordered_ids()
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let column = app.columns.column(id);
            let label = column.map_or(id.as_str(), |c| c.label.as_str());
            let locked = column.is_some_and(|c| c.locked);
            let visible = column.is_some_and(|c| c.visible);

            let marker = if locked { "▪" } else if visible { "●" } else { "○" };
            let mut line_style = Style::default();
            if locked {
                line_style = line_style.fg(style::LOCKED_FG);
            } else if !visible {
                line_style = line_style.fg(style::HIDDEN_FG);
            }
            if focused && i == app.cursor {
                line_style = line_style.bg(style::CURSOR_BG);
            }
            ListItem::new(format!(" {marker} {label}")).style(line_style)
        })
        .collect();

    let title = if focused { " Columns* " } else { " Columns " };
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn render_row_list(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Rows;
    let items: Vec<ListItem> = app
        .spec
        .custom_order
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let status = app
                .rows
                .iter()
                .find(|r| r.id == *id)
                .is_some_and(|r| r.status);
            let mut line_style = Style::default().fg(style::status_color(status));
            if focused && i == app.cursor {
                line_style = line_style.bg(style::CURSOR_BG);
            }
            ListItem::new(format!(" #{id}")).style(line_style)
        })
        .collect();

    let title = if focused { " Row order* " } else { " Row order " };
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Summary panel with the aggregate view counts.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let s = app.summary();
    let lines = vec![
        Line::from(format!(
            "  columns {}/{}  rows {}/{}",
            s.columns_visible, s.columns_total, s.rows_shown, s.rows_total,
        )),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("ON {}", s.on_count),
                Style::default().fg(style::STATUS_ON),
            ),
            Span::raw("  "),
            Span::styled(
                format!("OFF {}", s.off_count),
                Style::default().fg(style::STATUS_OFF),
            ),
        ]),
    ];
    let block = Block::default().title(" Summary ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Tab:Focus  ↑/↓:Cursor  Shift-↑/↓:Move  Space:Show/Hide  s:Sort  o:Order  p:Partition  +/-:Page  1/2/3:Preset  r:Restart",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}

//! Dashboard home view

use crate::app::App;
use crate::data::{format_count, CountryShare, Metric, MonthlyTarget, Order, OrderStatus, MONTHS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Cell, Chart, Dataset, Gauge, GraphType, Paragraph, Row,
        Table, Wrap,
    },
    Frame,
};

/// Draw the dashboard home view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Header
            Constraint::Percentage(30), // Metrics, monthly sales, target
            Constraint::Percentage(28), // Statistics chart
            Constraint::Percentage(28), // Demographics, recent orders
            Constraint::Min(3),         // Help panel
        ])
        .split(area);

    draw_header(frame, chunks[0]);
    draw_sales_band(frame, chunks[1], app);
    draw_statistics(frame, chunks[2], app);
    draw_activity_band(frame, chunks[3], app);
    draw_help_panel(frame, chunks[4]);
}

/// Draw the page header with the current date on the right
fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        "Ecommerce Dashboard",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);

    let date = chrono::Local::now().format("%A, %B %e, %Y").to_string();
    let date_widget = Paragraph::new(Span::styled(date, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Right);
    frame.render_widget(date_widget, area);
}

/// Draw the top band: metric cards and monthly sales on the left, target on the right
fn draw_sales_band(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Metric cards
            Constraint::Min(0),    // Monthly sales chart
        ])
        .split(columns[0]);

    let metrics = &app.state.dashboard.metrics;
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, metrics.len().max(1) as u32);
            metrics.len().max(1)
        ])
        .split(left[0]);
    for (metric, chunk) in metrics.iter().zip(card_chunks.iter()) {
        draw_metric_card(frame, *chunk, metric);
    }

    draw_monthly_sales(frame, left[1], app);
    draw_monthly_target(frame, columns[1], &app.state.dashboard.target);
}

/// Draw a single metric card (value plus delta against last month)
fn draw_metric_card(frame: &mut Frame, area: Rect, metric: &Metric) {
    let delta_style = if metric.is_up() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    let arrow = if metric.is_up() { "▲" } else { "▼" };

    let lines = vec![
        Line::from(Span::styled(
            format_count(metric.value),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {}", arrow, metric.delta_label()),
            delta_style,
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", metric.label)),
    );
    frame.render_widget(card, area);
}

/// Draw the monthly sales bar chart
fn draw_monthly_sales(frame: &mut Frame, area: Rect, app: &App) {
    let sales = &app.state.dashboard.monthly_sales;
    let bars: Vec<(&str, u64)> = sales
        .iter()
        .enumerate()
        .map(|(i, value)| (&MONTHS[i][..1], *value))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Monthly Sales "),
        )
        .data(bars.as_slice())
        .bar_width(2)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(chart, area);
}

/// Draw the monthly target panel with gauge and summary
fn draw_monthly_target(frame: &mut Frame, area: Rect, target: &MonthlyTarget) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Monthly Target ");
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Delta vs last month
            Constraint::Min(1),    // Summary text
            Constraint::Length(1), // Target / revenue / today
        ])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(target.ratio())
        .label(format!("{:.2}%", target.progress_pct));
    frame.render_widget(gauge, chunks[0]);

    let delta = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{:+.0}%", target.delta_pct),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" vs last month", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(delta, chunks[1]);

    let summary = Paragraph::new(target.summary)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, chunks[2]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Target ", Style::default().fg(Color::DarkGray)),
        Span::raw(format_usd_k(target.target_usd)),
        Span::styled("  Revenue ", Style::default().fg(Color::DarkGray)),
        Span::raw(format_usd_k(target.revenue_usd)),
        Span::styled("  Today ", Style::default().fg(Color::DarkGray)),
        Span::raw(format_usd_k(target.today_usd)),
    ]));
    frame.render_widget(footer, chunks[3]);
}

/// Draw the sales vs revenue line chart
fn draw_statistics(frame: &mut Frame, area: Rect, app: &App) {
    let stats = &app.state.dashboard.statistics;
    let sales_points: Vec<(f64, f64)> = stats
        .sales
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v as f64))
        .collect();
    let revenue_points: Vec<(f64, f64)> = stats
        .revenue
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v as f64))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Sales")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&sales_points),
        Dataset::default()
            .name("Revenue")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&revenue_points),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Statistics "),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, 11.0])
                .labels(["Jan", "Jun", "Dec"]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, 250.0])
                .labels(["0", "125", "250"]),
        );
    frame.render_widget(chart, area);
}

/// Draw the bottom band: demographics on the left, recent orders on the right
fn draw_activity_band(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    draw_demographics(frame, columns[0], &app.state.dashboard.demographics);
    draw_recent_orders(frame, columns[1], &app.state.dashboard.recent_orders);
}

/// Draw the customers-per-country panel
fn draw_demographics(frame: &mut Frame, area: Rect, demographics: &[CountryShare]) {
    // Room for the trailing " 100%" label next to each bar
    let bar_width = area.width.saturating_sub(9) as usize;

    let mut lines = Vec::new();
    for entry in demographics {
        lines.push(Line::from(vec![
            Span::styled(entry.country, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {} customers", format_count(entry.customers)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let filled = bar_width * entry.share_pct.min(100) as usize / 100;
        lines.push(Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
            Span::styled(
                "░".repeat(bar_width.saturating_sub(filled)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(" {}%", entry.share_pct),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::default());
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Customers Demographic "),
    );
    frame.render_widget(panel, area);
}

/// Draw the recent orders table
fn draw_recent_orders(frame: &mut Frame, area: Rect, orders: &[Order]) {
    let header = Row::new(vec!["Product", "Category", "Price", "Status"])
        .style(Style::default().fg(Color::DarkGray))
        .bottom_margin(1);

    let rows: Vec<Row> = orders
        .iter()
        .map(|order| {
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::raw(order.product),
                    Span::styled(
                        format!(" ({} variants)", order.variants),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                Cell::from(order.category),
                Cell::from(format!("${:.2}", order.price_usd)),
                Cell::from(Span::styled(
                    order.status.label(),
                    Style::default().fg(status_color(order.status)),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Recent Orders "),
    );
    frame.render_widget(table, area);
}

fn format_usd_k(value: u64) -> String {
    format!("${}K", value / 1000)
}

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Delivered => Color::Green,
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Canceled => Color::Red,
    }
}

/// Draw the support entry point at the bottom of the dashboard
fn draw_help_panel(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Questions about orders or billing?",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                "[s]",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Go to Support"),
        ]),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Need Help? "),
    );
    frame.render_widget(panel, area);
}

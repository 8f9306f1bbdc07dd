use crate::cards::Card;
use crate::round::{Mode, Phase, MAX_BET, MIN_BET};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_lines_count: u16 = 2;
    // Add borders (2 rows) to get total block height
    let header_height = header_lines_count + 2;
    let status_lines: u16 = 2;
    let status_height: u16 = status_lines + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(5),             // dealer
            Constraint::Length(5),             // player
            Constraint::Length(3),             // recommendation
            Constraint::Min(0),                // spacer
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    // Header (multi-line for readability)
    let game = &app.game;
    let doubled_marker = if game.doubled() { " (2x)" } else { "" };
    let last = match game.last_result() {
        Some(s) => format!("{} — {}", fmt_signed(s.amount), s.result.label()),
        None => String::from("--"),
    };
    let mut header_lines: Vec<Line> = Vec::new();
    header_lines.push(Line::from(format!(
        "Balance: ${}   Bet: ${}{}   Last: {}",
        fmt_amount(game.balance()),
        game.effective_bet(),
        doubled_marker,
        last,
    )));
    header_lines.push(if matches!(game.mode(), Mode::Counting) {
        Line::from(format!(
            "Running: {:+}   True: {:+}   Decks left: {:.1}",
            game.counter().running_count(),
            game.counter().true_count(),
            game.counter().decks_remaining(),
        ))
    } else {
        let auto = if app.auto_play { "   Auto Play: On" } else { "" };
        Line::from(format!("Mode: {}{auto}", game.mode().label()))
    });
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("blackjack-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Dealer: hole card shown as an empty slot until it is revealed.
    let dealer_hidden = matches!(game.phase(), Phase::Playing) && !game.dealer().is_empty();
    render_hand_row(
        f,
        chunks[1],
        format!("Dealer ({})", game.dealer().value()),
        game.dealer().cards(),
        dealer_hidden,
    );

    let mut player_title = format!("Player ({})", game.player().value());
    if game.player().is_soft() {
        player_title.push_str(" soft");
    }
    if game.doubled() {
        player_title.push_str(" [Doubled]");
    }
    if game.split_used() {
        player_title.push_str(" [Split]");
    }
    render_hand_row(f, chunks[2], player_title, game.player().cards(), false);

    // Recommendation panel
    let advice_text = match game.advice() {
        Some(advice) => advice.to_string(),
        None => String::from("Deal cards to start"),
    };
    let advice_style = if game.advice().is_some() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let advice = Paragraph::new(Line::from(Span::styled(advice_text, advice_style)))
        .alignment(Alignment::Center)
        .block(Block::default().title("Strategy Helper").borders(Borders::ALL));
    f.render_widget(advice, chunks[3]);

    // Status bar: info vs keys, two lines of content
    let status_area = chunks[5];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info: Vec<Line> = match game.phase() {
        Phase::Betting => vec![Line::from("No hand in play — press Space to deal.")],
        Phase::Finished => vec![Line::from("Hand over — press Space for a new hand.")],
        Phase::DealerPlaying => vec![Line::from("Dealer is playing...")],
        Phase::Playing => {
            let action_style = |enabled: bool| {
                if enabled {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                }
            };
            vec![Line::from(vec![
                Span::raw("Actions: "),
                Span::styled("H hit", action_style(true)),
                Span::raw(" • "),
                Span::styled("S stand", action_style(true)),
                Span::raw(" • "),
                Span::styled("D double", action_style(game.can_double())),
                Span::raw(" • "),
                Span::styled("P split", action_style(game.can_split())),
            ])]
        }
    };
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right_keys =
        vec![Line::from(""), Line::from("? help • A auto • B bet • L results • M menu")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.bet_entry_active() {
        draw_bet_entry(f, app);
    }
}

fn render_hand_row(f: &mut Frame, area: Rect, title: String, cards: &[Card], hidden_slot: bool) {
    let block = Block::default().title(title).borders(Borders::ALL);
    let row_inner = inner(area);
    f.render_widget(block, area);
    let slots = cards.len() + usize::from(hidden_slot);
    if slots == 0 || row_inner.width < 4 {
        return;
    }
    let card_width = (row_inner.width / slots.min(10) as u16).clamp(4, 8);
    let constraints: Vec<Constraint> =
        (0..slots).map(|_| Constraint::Length(card_width)).collect();
    let card_chunks =
        Layout::default().direction(Direction::Horizontal).constraints(constraints).split(row_inner);
    for (i, chunk) in card_chunks.iter().enumerate() {
        render_card_widget(f, *chunk, cards.get(i).copied(), None);
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Results").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent(AppState::HISTORY_PAGE_SIZE);
    if entries.is_empty() {
        lines.push(Line::from("No finished hands yet."));
    } else {
        for entry in entries {
            let style = if entry.amount > 0.0 {
                Style::default().fg(Color::Green)
            } else if entry.amount < 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{:>6}  {}", fmt_signed(entry.amount), entry.result.label()),
                style,
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Close: L or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal new hand"),
        Line::from("- H: hit"),
        Line::from("- S: stand"),
        Line::from("- D: double down (first action only)"),
        Line::from("- P: split (pairs, once per hand)"),
        Line::from("- A: toggle auto-play"),
        Line::from("- B: bet amount"),
        Line::from("- L: results"),
        Line::from("- R: reset game"),
        Line::from(""),
        Line::from(Span::styled("Drill:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal a run of cards"),
        Line::from("- 0-9 / -: edit your count"),
        Line::from("- Enter: check answer"),
        Line::from("- R: reset drill"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Q: quit (menu)"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_bet_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let current = app.bet_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Current: {current}")),
        Line::from(format!("Limits: {MIN_BET}-{MAX_BET} (out of range clamps)")),
        Line::from("Digits to edit, Backspace to delete"),
        Line::from("Enter submit, Esc cancel"),
    ];
    let block = Block::default().title("Bet Amount").borders(Borders::ALL);
    let inner_area = inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, chunks[0]);
    let error = app.bet_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, chunks[1]);
}

/// "1000" for whole amounts, "7.5" style otherwise.
fn fmt_amount(x: f64) -> String {
    if (x - x.round()).abs() < 1e-9 {
        format!("{x:.0}")
    } else {
        format!("{x:.1}")
    }
}

fn fmt_signed(x: f64) -> String {
    if x > 0.0 {
        format!("+{}", fmt_amount(x))
    } else {
        fmt_amount(x)
    }
}

fn suit_glyph_and_style(s: crate::cards::Suit) -> (char, Style) {
    use crate::cards::Suit::*;
    match s {
        Hearts => ('♥', Style::default().fg(Color::Red)),
        Diamonds => ('♦', Style::default().fg(Color::Red)),
        Spades => ('♠', Style::default().fg(Color::White)),
        Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_char(r: crate::cards::Rank) -> &'static str {
    use crate::cards::Rank::*;
    match r {
        Two => "2",
        Three => "3",
        Four => "4",
        Five => "5",
        Six => "6",
        Seven => "7",
        Eight => "8",
        Nine => "9",
        Ten => "10",
        Jack => "J",
        Queen => "Q",
        King => "K",
        Ace => "A",
    }
}

pub(super) fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    card: Option<Card>,
    border: Option<Color>,
) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = if let Some(c) = card {
        let (sg, style) = suit_glyph_and_style(c.suit());
        let text = format!("{}{}", rank_char(c.rank()), sg);
        Line::from(Span::styled(text, style))
    } else {
        Line::from("[ ? ]")
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}

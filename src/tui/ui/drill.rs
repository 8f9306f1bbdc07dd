use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::inner;
use super::table::render_card_widget;

pub(super) fn draw_drill(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // stats
            Constraint::Length(8), // dealt run
            Constraint::Length(6), // guess / answer
            Constraint::Min(0),    // legend
            Constraint::Length(4), // status bar
        ])
        .split(size);

    let drill = &app.drill;
    let counter = drill.counter();

    // Stats: the running count stays hidden until the answer is revealed.
    let (running, true_count) = if drill.revealed() {
        (counter.running_count().to_string(), counter.true_count().to_string())
    } else {
        (String::from("?"), String::from("?"))
    };
    let accuracy = match drill.score().accuracy() {
        Some(pct) => format!("{}% ({}/{})", pct.round(), drill.score().correct, drill.score().total),
        None => format!("0% (0/{})", drill.score().total),
    };
    let stats_lines = vec![
        Line::from(format!(
            "Running: {running}   True: {true_count}   Decks left: {:.1}",
            counter.decks_remaining()
        )),
        Line::from(format!("Accuracy: {accuracy}   Shoe: {} cards", drill.shoe_remaining())),
    ];
    let stats = Paragraph::new(stats_lines)
        .block(Block::default().title("Counting Practice").borders(Borders::ALL));
    f.render_widget(stats, chunks[0]);

    // Dealt run
    let cards = drill.displayed();
    let run_block = Block::default().title(format!("Cards Dealt ({})", cards.len())).borders(Borders::ALL);
    let run_inner = inner(chunks[1]);
    f.render_widget(run_block, chunks[1]);
    if !cards.is_empty() && run_inner.width >= 4 {
        let card_width = (run_inner.width / cards.len() as u16).clamp(4, 8);
        let constraints: Vec<Constraint> =
            cards.iter().map(|_| Constraint::Length(card_width)).collect();
        let card_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(run_inner);
        for (i, chunk) in card_chunks.iter().enumerate() {
            render_card_widget(f, *chunk, cards.get(i).copied(), None);
        }
    }

    // Guess entry / answer reveal
    let mut guess_lines: Vec<Line> = Vec::new();
    if drill.revealed() {
        let answer = counter.running_count();
        let guessed = app.last_guess().unwrap_or(0);
        let verdict = if guessed == answer {
            Span::styled("Correct!", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            Span::styled("Incorrect", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        };
        guess_lines.push(Line::from(format!("Correct answer: {answer}")));
        guess_lines.push(Line::from(format!("Your answer: {guessed}")));
        guess_lines.push(Line::from(verdict));
        guess_lines.push(Line::from(Span::styled(
            "Space deals the next run.",
            Style::default().add_modifier(Modifier::DIM),
        )));
    } else if cards.is_empty() {
        guess_lines.push(Line::from("Press Space to deal a run of 5-12 cards."));
    } else {
        let entry = if app.guess_text().is_empty() { "_" } else { app.guess_text() };
        guess_lines.push(Line::from("What's the running count?"));
        guess_lines.push(Line::from(Span::styled(
            entry.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        guess_lines.push(Line::from(Span::styled(
            "Enter checks your answer.",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    let guess = Paragraph::new(guess_lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Your Count").borders(Borders::ALL));
    f.render_widget(guess, chunks[2]);

    // Hi-Lo legend
    let legend_lines = vec![
        Line::from(Span::styled("Hi-Lo values:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("+1: 2,3,4,5,6"),
        Line::from(" 0: 7,8,9"),
        Line::from("-1: 10,J,Q,K,A"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Session time: {}s", app.started.elapsed().as_secs()),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let legend = Paragraph::new(legend_lines).wrap(Wrap { trim: true });
    f.render_widget(legend, inner(chunks[3]));

    // Status bar
    let status_area = chunks[4];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let mut left: Vec<Line> =
        vec![Line::from("Space deal • 0-9/- edit • Enter check • R reset • M menu")];
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), status_inner);
}

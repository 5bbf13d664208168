//! Scene renderer: maps the virtual play field onto the terminal cell grid.
//!
//! Pure consumer of simulation state. Everything here reads positions,
//! palettes, fade opacity and the shake offset; nothing mutates the game.

use crate::constants::*;
use crate::game::types::{FlappyGame, Phase};
use crate::theme::{palette, skin_palette, BirdPalette, ThemePalette};
use crate::ui::game_common::{render_banner, render_info_panel_frame, render_status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let pal = palette(game.theme);
    let skin = skin_palette(game.skin);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pal.pipe_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play area (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(inner);

    // Play area on top, 2-line status bar below
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_play_area(frame, v_chunks[0], game, &pal, &skin);
    render_status(frame, v_chunks[1], game);
    render_info_panel(frame, h_chunks[1], game);

    if game.phase == Phase::GameOver {
        render_banner(
            frame,
            v_chunks[0],
            "GAME OVER",
            Color::Red,
            &format!("Score: {}", game.score),
            "[R] Restart",
        );
    }
}

/// One terminal cell of the play area.
type Cell = Option<(char, Color)>;

fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    game: &FlappyGame,
    pal: &ThemePalette,
    skin: &BirdPalette,
) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = width as f64 / FIELD_WIDTH;
    let y_scale = height as f64 / FIELD_HEIGHT;

    // Shake displaces the whole scene by up to a couple of cells
    let shake_col = (game.shake.offset_x * x_scale).round() as isize;
    let shake_row = (game.shake.offset_y * y_scale).round() as isize;

    let mut grid: Vec<Vec<Cell>> = vec![vec![None; width]; height];

    for pipe in &game.pipes {
        draw_pipe(&mut grid, pipe, game, pal, x_scale, y_scale, shake_col, shake_row);
    }
    for particle in &game.particles {
        draw_particle(&mut grid, particle, x_scale, y_scale, shake_col, shake_row);
    }
    draw_bird(&mut grid, game, skin, x_scale, y_scale, shake_col, shake_row);

    let bg = pal.background;
    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Some((ch, color)) => Span::styled(
                        ch.to_string(),
                        Style::default().fg(color).bg(bg),
                    ),
                    None => Span::styled(" ", Style::default().bg(bg)),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

#[allow(clippy::too_many_arguments)]
fn draw_pipe(
    grid: &mut [Vec<Cell>],
    pipe: &crate::game::types::Pipe,
    game: &FlappyGame,
    pal: &ThemePalette,
    x_scale: f64,
    y_scale: f64,
    shake_col: isize,
    shake_row: isize,
) {
    let height = grid.len();
    if height == 0 {
        return;
    }
    let width = grid[0].len();

    let col_start = (pipe.x * x_scale).floor() as isize + shake_col;
    let col_end = ((pipe.x + PIPE_WIDTH) * x_scale).ceil() as isize + shake_col;
    let top_rows = (pipe.top_height * y_scale).round() as isize;
    let bottom_start = (pipe.bottom_y() * y_scale).round() as isize;

    // Cap band: the section edge nearest the gap gets the light gradient stop
    let cap = ((25.0 * y_scale).round() as isize).max(1);

    for col in col_start..col_end {
        let Some(col_idx) = in_bounds(col, width) else {
            continue;
        };
        let edge = col == col_start || col == col_end - 1;

        for row in 0..height as isize {
            let r = row - shake_row;
            let in_top = r < top_rows;
            let in_bottom = r >= bottom_start;
            if !in_top && !in_bottom {
                continue;
            }

            let near_gap = (in_top && r >= top_rows - cap) || (in_bottom && r < bottom_start + cap);
            let base = if edge {
                pal.pipe_border
            } else if near_gap {
                pal.pipe_light
            } else {
                pal.pipe_dark
            };
            let color = fade_toward(base, pal.background, game.fade_opacity);

            if let Some(row_idx) = in_bounds(row, height) {
                grid[row_idx][col_idx] = Some(('█', color));
            }
        }
    }
}

fn draw_particle(
    grid: &mut [Vec<Cell>],
    particle: &crate::game::types::Particle,
    x_scale: f64,
    y_scale: f64,
    shake_col: isize,
    shake_row: isize,
) {
    let height = grid.len();
    if height == 0 {
        return;
    }
    let width = grid[0].len();

    let col = (particle.x * x_scale).round() as isize + shake_col;
    let row = (particle.y * y_scale).round() as isize + shake_row;
    let (Some(col_idx), Some(row_idx)) = (in_bounds(col, width), in_bounds(row, height)) else {
        return;
    };

    let ratio = particle.life_ratio();
    let ch = if ratio > 0.66 {
        '●'
    } else if ratio > 0.33 {
        '•'
    } else {
        '·'
    };
    let (r, g, b) = particle.color;
    let color = Color::Rgb(
        (r as f64 * ratio) as u8,
        (g as f64 * ratio) as u8,
        (b as f64 * ratio) as u8,
    );
    grid[row_idx][col_idx] = Some((ch, color));
}

fn draw_bird(
    grid: &mut [Vec<Cell>],
    game: &FlappyGame,
    skin: &BirdPalette,
    x_scale: f64,
    y_scale: f64,
    shake_col: isize,
    shake_row: isize,
) {
    let height = grid.len();
    if height == 0 {
        return;
    }
    let width = grid[0].len();

    let bird = &game.bird;
    let col = ((bird.x + BIRD_WIDTH / 2.0) * x_scale).round() as isize + shake_col;
    let row = ((bird.y + BIRD_HEIGHT / 2.0) * y_scale).round() as isize + shake_row;
    let (Some(col_idx), Some(row_idx)) = (in_bounds(col, width), in_bounds(row, height)) else {
        return;
    };

    let ch = if bird.rotation < -10.0 {
        '▲'
    } else if bird.rotation > 10.0 {
        '▼'
    } else {
        '►'
    };
    // Wing color flashes while the flap animation plays
    let color = if bird.flapping {
        skin.wing_start
    } else {
        skin.body_start
    };
    grid[row_idx][col_idx] = Some((ch, color));
}

fn render_status(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    match game.phase {
        Phase::NotStarted => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[
                ("[Space]", "Start"),
                ("[T]", "Theme"),
                ("[S]", "Skin"),
                ("[Q]", "Quit"),
            ],
        ),
        Phase::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Green,
            &[("[Space]", "Flap"), ("[T]", "Theme"), ("[S]", "Skin")],
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            &format!("Crashed! Final score: {}", game.score),
            Color::Red,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Theme: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.theme.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" Skin:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.skin.name(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" Pipes: {}", game.pipes.len()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Bounds check for a signed cell index.
fn in_bounds(idx: isize, len: usize) -> Option<usize> {
    if idx >= 0 && (idx as usize) < len {
        Some(idx as usize)
    } else {
        None
    }
}

/// Blend `color` toward `background` by the fade-in opacity (1.0 = fully
/// visible). Non-RGB colors pass through untouched.
fn fade_toward(color: Color, background: Color, opacity: f64) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            lerp_u8(br, r, t),
            lerp_u8(bg, g, t),
            lerp_u8(bb, b, t),
        ),
        _ => color,
    }
}

fn lerp_u8(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert_eq!(in_bounds(-1, 10), None);
        assert_eq!(in_bounds(0, 10), Some(0));
        assert_eq!(in_bounds(9, 10), Some(9));
        assert_eq!(in_bounds(10, 10), None);
    }

    #[test]
    fn test_fade_toward_endpoints() {
        let c = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(10, 20, 30);
        assert_eq!(fade_toward(c, bg, 1.0), c);
        assert_eq!(fade_toward(c, bg, 0.0), bg);
    }

    #[test]
    fn test_fade_toward_non_rgb_passthrough() {
        assert_eq!(fade_toward(Color::White, Color::Rgb(0, 0, 0), 0.5), Color::White);
    }
}

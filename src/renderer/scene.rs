//! Per-screen drawing

use glam::IVec2;

use super::canvas::{
    BLACK, BLUE, Canvas, Color, GRAY, GREEN, LIGHT_GRAY, RED, WHITE, line_height,
};
use super::font;
use crate::consts::{HEIGHT, SCORE_HEIGHT, WIDTH};
use crate::highscores::HighScores;
use crate::screen::{Game, Screen};
use crate::sim::{BrickColor, PlayState, Rect};
use crate::ui::{BACK_BUTTON, Button, MENU_BUTTONS};

const TITLE_SCALE: i32 = 4;
const TEXT_SCALE: i32 = 3;
const BUTTON_SCALE: i32 = 2;

/// Draw whatever the active screen shows
pub fn draw(game: &Game, canvas: &mut Canvas) {
    match game.screen() {
        Screen::Menu => draw_menu(canvas, game.mouse_pos()),
        Screen::Scores => draw_scores(canvas, game.high_scores(), game.mouse_pos()),
        Screen::Play => match game.play() {
            Some(state) => draw_play(canvas, state),
            None => canvas.clear(BLACK),
        },
        Screen::Quit => canvas.clear(BLACK),
    }
}

fn draw_button(canvas: &mut Canvas, button: &Button, mouse: Option<IVec2>) {
    let fill = if button.hovered(mouse) { BLUE } else { WHITE };
    canvas.fill_rounded_rect(button.rect, 5, fill);
    canvas.draw_text_centered(button.rect, button.label, BLACK, BUTTON_SCALE);
}

fn draw_title(canvas: &mut Canvas, text: &str) {
    let (w, _) = font::text_size(text, TITLE_SCALE);
    canvas.draw_text((WIDTH - w) / 2, HEIGHT / 4, text, WHITE, TITLE_SCALE);
}

pub fn draw_menu(canvas: &mut Canvas, mouse: Option<IVec2>) {
    canvas.clear(BLACK);
    draw_title(canvas, "Breakout Game");
    for button in &MENU_BUTTONS {
        draw_button(canvas, button, mouse);
    }
}

pub fn draw_scores(canvas: &mut Canvas, scores: &HighScores, mouse: Option<IVec2>) {
    canvas.clear(BLACK);
    draw_title(canvas, "High Scores");

    let x = WIDTH / 2 - 50;
    let row_step = line_height(TEXT_SCALE) + 9;
    if scores.is_empty() {
        let text = "No scores yet";
        let (w, _) = font::text_size(text, TEXT_SCALE);
        canvas.draw_text((WIDTH - w) / 2, HEIGHT / 2, text, LIGHT_GRAY, TEXT_SCALE);
    }
    for (i, score) in scores.entries().iter().enumerate() {
        let y = HEIGHT / 2 + i as i32 * row_step;
        canvas.draw_text(x, y, &format!("{}. {}", i + 1, score), WHITE, TEXT_SCALE);
    }

    draw_button(canvas, &BACK_BUTTON, mouse);
}

fn brick_color(color: BrickColor) -> Color {
    match color {
        BrickColor::Red => RED,
        BrickColor::Green => GREEN,
        BrickColor::Blue => BLUE,
    }
}

pub fn draw_play(canvas: &mut Canvas, state: &PlayState) {
    canvas.clear(BLACK);

    canvas.fill_rect(Rect::new(0, 0, WIDTH, SCORE_HEIGHT), GRAY);
    let hud = format!("Score: {}  Level: {}", state.score, state.level);
    let text_y = (SCORE_HEIGHT - line_height(TEXT_SCALE)) / 2;
    canvas.draw_text(20, text_y, &hud, WHITE, TEXT_SCALE);

    canvas.fill_rounded_rect(state.paddle.rect, 5, BLUE);
    canvas.fill_ellipse(state.ball.rect, WHITE);
    for brick in &state.bricks {
        canvas.fill_rounded_rect(brick.rect, 3, brick_color(brick.color));
    }
}

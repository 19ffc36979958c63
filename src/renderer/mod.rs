//! 2D rendering module
//!
//! Every draw function is a pure read of game state onto a [`Surface`]. The
//! browser backs the surface with a Canvas 2D context; tests and the native
//! demo use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::{Rect, beveled_block};

use crate::sim::{Color, Ending, GamePhase, GameSession};
use crate::tuning::Tuning;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
        }
    }
}

/// Font and placement state for one piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub color: Color,
}

/// Drawing primitives the game needs from its host
pub trait Surface {
    /// Clear the whole `width` x `height` area
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: &Rect);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}

const TITLE_FONT_SIZE: f32 = 36.0;

const TITLE_STYLE: TextStyle = TextStyle {
    font: "bold 36px Helvetica",
    align: TextAlign::Center,
    baseline: TextBaseline::Middle,
    color: Color::WHITE,
};

const PROMPT_STYLE: TextStyle = TextStyle {
    font: "italic bold 18px Helvetica",
    align: TextAlign::Center,
    baseline: TextBaseline::Top,
    color: Color::WHITE,
};

const SCORE_STYLE: TextStyle = TextStyle {
    font: "18px Helvetica",
    align: TextAlign::Left,
    baseline: TextBaseline::Top,
    color: Color::WHITE,
};

const BEST_STYLE: TextStyle = TextStyle {
    align: TextAlign::Right,
    ..SCORE_STYLE
};

const END_STYLE: TextStyle = TextStyle {
    font: "bold 40px Helvetica",
    align: TextAlign::Center,
    baseline: TextBaseline::Middle,
    color: Color::YELLOW,
};

/// Terminal screen message
pub fn end_message(ending: Ending) -> &'static str {
    match ending {
        Ending::Lost => "GAME OVER",
        Ending::Won => "YOU WIN!",
    }
}

/// Draw whatever the phase calls for
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    phase: GamePhase,
    session: Option<&GameSession>,
    tuning: &Tuning,
) {
    match (phase, session) {
        (GamePhase::Playing, Some(session)) => draw_frame(surface, session, tuning),
        (GamePhase::Ended(ending), _) => draw_end(surface, ending, tuning),
        _ => draw_title(surface, tuning),
    }
}

pub fn draw_title<S: Surface + ?Sized>(surface: &mut S, tuning: &Tuning) {
    let (w, h) = (tuning.canvas_width, tuning.canvas_height);
    surface.clear(w, h);
    surface.fill_text("BREAKOUT", w / 2.0, h / 2.0, &TITLE_STYLE);
    surface.fill_text(
        "Press SPACE to begin",
        w / 2.0,
        h / 2.0 + TITLE_FONT_SIZE / 2.0 + 10.0,
        &PROMPT_STYLE,
    );
}

/// One playing frame: scores first, then every visible object
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, session: &GameSession, tuning: &Tuning) {
    surface.clear(tuning.canvas_width, tuning.canvas_height);
    draw_score(surface, session, tuning);
    draw_objects(surface, session, tuning);
}

pub fn draw_score<S: Surface + ?Sized>(surface: &mut S, session: &GameSession, tuning: &Tuning) {
    surface.fill_text(&session.score.to_string(), 20.0, 20.0, &SCORE_STYLE);
    surface.fill_text(
        &session.best_score.to_string(),
        tuning.canvas_width - 100.0,
        20.0,
        &BEST_STYLE,
    );
}

pub fn draw_objects<S: Surface + ?Sized>(surface: &mut S, session: &GameSession, tuning: &Tuning) {
    for object in &session.objects {
        let Some(color) = object.visual else {
            continue;
        };
        for rect in beveled_block(object.position, object.size, color, tuning.bevel_width) {
            surface.fill_rect(&rect);
        }
    }
}

/// Terminal screen: nothing but the centered message
pub fn draw_end<S: Surface + ?Sized>(surface: &mut S, ending: Ending, tuning: &Tuning) {
    let (w, h) = (tuning.canvas_width, tuning.canvas_height);
    surface.clear(w, h);
    surface.fill_text(end_message(ending), w / 2.0, h / 2.0, &END_STYLE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> GameSession {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut session = GameSession::new(&Tuning::default(), &mut rng, 17);
        session.score = 4;
        session
    }

    #[test]
    fn test_title_screen() {
        let mut surface = RecordingSurface::new();
        draw_title(&mut surface, &Tuning::default());

        assert_eq!(surface.commands[0], DrawCommand::Clear { width: 1280.0, height: 720.0 });
        assert_eq!(surface.texts(), vec!["BREAKOUT", "Press SPACE to begin"]);
        match &surface.commands[2] {
            DrawCommand::Text { y, style, .. } => {
                assert_eq!(*y, 360.0 + 18.0 + 10.0);
                assert_eq!(style.baseline, TextBaseline::Top);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_frame_draws_scores_before_objects() {
        let tuning = Tuning::default();
        let session = session();
        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, &session, &tuning);

        assert!(matches!(surface.commands[0], DrawCommand::Clear { .. }));
        assert_eq!(
            surface.commands[1],
            DrawCommand::Text {
                text: "4".to_string(),
                x: 20.0,
                y: 20.0,
                style: SCORE_STYLE,
            }
        );
        assert_eq!(
            surface.commands[2],
            DrawCommand::Text {
                text: "17".to_string(),
                x: 1180.0,
                y: 20.0,
                style: BEST_STYLE,
            }
        );
        assert!(
            surface.commands[3..]
                .iter()
                .all(|c| matches!(c, DrawCommand::Rect(_)))
        );
    }

    #[test]
    fn test_walls_are_not_drawn() {
        let tuning = Tuning::default();
        let session = session();
        let mut surface = RecordingSurface::new();
        draw_objects(&mut surface, &session, &tuning);

        // Paddle + ball + 50 bricks, five rectangles each
        assert_eq!(surface.rect_count(), (2 + 50) * 5);
    }

    #[test]
    fn test_end_screens() {
        let tuning = Tuning::default();
        for (ending, message) in [(Ending::Lost, "GAME OVER"), (Ending::Won, "YOU WIN!")] {
            let mut surface = RecordingSurface::new();
            draw(&mut surface, GamePhase::Ended(ending), Some(&session()), &tuning);

            assert_eq!(surface.commands.len(), 2);
            assert!(matches!(surface.commands[0], DrawCommand::Clear { .. }));
            assert_eq!(
                surface.commands[1],
                DrawCommand::Text {
                    text: message.to_string(),
                    x: 640.0,
                    y: 360.0,
                    style: END_STYLE,
                }
            );
            assert_eq!(surface.rect_count(), 0);
        }
    }
}

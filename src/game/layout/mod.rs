use crate::game::quiz::definition::Label;
use crate::game::quiz::phase::Phase;
use crate::game::quiz::Snapshot;


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Rect {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    // Edges are not part of the rectangle.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px > self.x && px < self.x + self.width && py > self.y && py < self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Hit {
    Option(Label),
    Restart,
}

/// Screen geometry of the quiz, used to turn pointer clicks into quiz
/// operations.
#[derive(Clone, Debug)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub options_top: f32,
    pub option_pitch: f32,
    pub option_gap: f32,
    pub restart_width: f32,
    pub restart_height: f32,
    pub restart_bottom_offset: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            width: 800.0,
            height: 600.0,
            margin: 50.0,
            options_top: 150.0,
            option_pitch: 60.0,
            option_gap: 10.0,
            restart_width: 180.0,
            restart_height: 50.0,
            restart_bottom_offset: 50.0,
        }
    }
}

impl Layout {
    pub fn option_rect(&self, index: usize) -> Rect {
        Rect {
            x: self.margin,
            y: self.options_top + index as f32 * self.option_pitch,
            width: self.width - 2.0 * self.margin,
            height: self.option_pitch - self.option_gap,
        }
    }

    pub fn restart_rect(&self) -> Rect {
        Rect::from_center(
            self.width / 2.0,
            self.height - self.restart_bottom_offset,
            self.restart_width,
            self.restart_height,
        )
    }

    pub fn hit_test(&self, snapshot: &Snapshot, px: f32, py: f32) -> Option<Hit> {
        match snapshot.phase {
            Phase::Answering => {
                let question = snapshot.question.as_ref()?;
                question
                    .options
                    .iter()
                    .enumerate()
                    .find(|(index, _option)| self.option_rect(*index).contains(px, py))
                    .map(|(_index, option)| Hit::Option(option.label))
            }
            Phase::Finished => {
                if self.restart_rect().contains(px, py) {
                    Some(Hit::Restart)
                } else {
                    None
                }
            }
            Phase::CorrectFeedback | Phase::IncorrectFeedback => None,
        }
    }
}

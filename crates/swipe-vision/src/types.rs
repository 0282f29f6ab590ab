/// A directional swipe inferred from object motion.
///
/// "No gesture" is `Option::<Gesture>::None` throughout the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Up,
    Down,
    Left,
    Right,
}

impl Gesture {
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::Up => "UP",
            Gesture::Down => "DOWN",
            Gesture::Left => "LEFT",
            Gesture::Right => "RIGHT",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

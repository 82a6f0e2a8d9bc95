/// Which way the bus is travelling along its route.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward = 1isize,
    Backward = -1isize,
}

impl Direction {
    /// +1 or -1, for scaling cursor steps.
    pub const fn sign(&self) -> f64 {
        *self as isize as f64
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

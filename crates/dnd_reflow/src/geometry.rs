use serde::{Deserialize, Serialize};

/// A span along the list's primary axis (top/bottom or left/right).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BeginEnd {
    pub begin: f32,
    pub end: f32,
}

impl BeginEnd {
    pub fn new(begin: f32, end: f32) -> Self {
        Self { begin, end }
    }

    pub fn size(&self) -> f32 {
        self.end - self.begin
    }

    pub fn midpoint(&self) -> f32 {
        (self.begin + self.end) / 2.0
    }

    pub fn contains(&self, pos: f32) -> bool {
        self.begin <= pos && pos <= self.end
    }

    pub fn translated(&self, offset: f32) -> Self {
        Self {
            begin: self.begin + offset,
            end: self.end + offset,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The coordinate of `point` along this axis.
    pub fn axis_value(self, point: Point) -> f32 {
        match self {
            Orientation::Vertical => point.y,
            Orientation::Horizontal => point.x,
        }
    }

    /// The extent of `size` along this axis.
    pub fn axis_size(self, size: Size) -> f32 {
        match self {
            Orientation::Vertical => size.height,
            Orientation::Horizontal => size.width,
        }
    }

    /// The coordinate of `point` across this axis.
    pub fn cross_value(self, point: Point) -> f32 {
        match self {
            Orientation::Vertical => point.x,
            Orientation::Horizontal => point.y,
        }
    }

    /// Builds a point from an along-axis and a cross-axis coordinate.
    pub fn point(self, along: f32, across: f32) -> Point {
        match self {
            Orientation::Vertical => Point::new(across, along),
            Orientation::Horizontal => Point::new(along, across),
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "vertical" => Ok(Orientation::Vertical),
            "horizontal" => Ok(Orientation::Horizontal),
            other => Err(crate::Error::UnknownOrientation {
                value: other.to_string(),
            }),
        }
    }
}

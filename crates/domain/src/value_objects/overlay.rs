//! Map overlay items: placed logos and free text annotations.

/// An image asset (unit insignia, landmark icon) placed on the map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlacedLogo {
    filename: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl PlacedLogo {
    pub fn new(filename: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            filename: filename.into(),
            x,
            y,
            width,
            height,
        }
    }

    // Read-only accessors

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

/// A text label drawn on the map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAnnotation {
    text: String,
    x: f64,
    y: f64,
    /// Color name or hex string, passed through to the renderer
    color: String,
    font_size: u32,
}

impl TextAnnotation {
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        color: impl Into<String>,
        font_size: u32,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color: color.into(),
            font_size,
        }
    }

    // Read-only accessors

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

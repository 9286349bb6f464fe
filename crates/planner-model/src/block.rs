use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// A named attachment point on a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
}

impl Resource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A service on the canvas.
///
/// Consumer ports are drawn on the left edge and provider ports on the right edge, one row
/// per resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub consumers: Vec<Resource>,
    #[serde(default)]
    pub providers: Vec<Resource>,
}

impl Block {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_bounds(mut self, left: f64, top: f64, width: f64, height: f64) -> Self {
        self.left = left;
        self.top = top;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_consumer(mut self, name: impl Into<String>) -> Self {
        self.consumers.push(Resource::new(name));
        self
    }

    pub fn with_provider(mut self, name: impl Into<String>) -> Self {
        self.providers.push(Resource::new(name));
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    pub fn resource_count(&self) -> usize {
        self.consumers.len() + self.providers.len()
    }

    pub fn consumer_index(&self, name: &str) -> Option<usize> {
        self.consumers.iter().position(|r| r.name == name)
    }

    pub fn provider_index(&self, name: &str) -> Option<usize> {
        self.providers.iter().position(|r| r.name == name)
    }
}

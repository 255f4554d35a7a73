use crate::border::{Border, Edge};
use crate::geometry::{Color, EdgeInsets, Rect};

/// Where a view is inserted among the subviews of its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewPositioning {
    /// Behind every existing subview
    Back,
    /// In front of every existing subview
    #[default]
    Front,
}

/// Minimal view tree node, holding only what layout needs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    pub name: Option<String>,
    pub frame: Rect,
    pub background: Option<Color>,
    /// Back to front
    pub subviews: Vec<View>,
    /// Set once the view is pinned to the edges of its container
    pub pinned: Option<EdgeInsets>,
}

impl View {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            ..Default::default()
        }
    }

    pub fn named(name: impl Into<String>, frame: Rect) -> Self {
        Self {
            name: Some(name.into()),
            frame,
            ..Default::default()
        }
    }

    /// The frame of the view in its own coordinates
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.frame.size)
    }

    /// Adds a subview painted with the border color along `edge`
    ///
    /// `offset` shortens the border, by default it spans the whole edge
    pub fn add_border(&mut self, edge: Edge, border: &Border, offset: f32) -> &View {
        let mut border_view = View::new(border.frame(edge, &self.bounds(), offset));
        border_view.background = Some(border.color);
        self.subviews.push(border_view);
        &self.subviews[self.subviews.len() - 1]
    }

    /// Moves the view into `container`, pinned to all four of its edges
    ///
    /// The frame is resolved right away as the container bounds shrunk by `insets`, so
    /// this does not depend on the view having a frame beforehand
    pub fn load_into(
        mut self,
        container: &mut View,
        positioning: ViewPositioning,
        insets: EdgeInsets,
    ) {
        self.frame = container.bounds().inset(&insets);
        self.pinned = Some(insets);
        tracing::trace!(
            "Pinned {:?} into {:?} at {:?}",
            self.name,
            container.name,
            self.frame
        );
        match positioning {
            ViewPositioning::Front => container.subviews.push(self),
            ViewPositioning::Back => container.subviews.insert(0, self),
        }
    }

    /// Recomputes the frames of pinned subviews after the view was resized
    pub fn layout(&mut self) {
        let bounds = self.bounds();
        for subview in self.subviews.iter_mut() {
            if let Some(insets) = subview.pinned {
                subview.frame = bounds.inset(&insets);
            }
            subview.layout();
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Canvas pane that renders the open image with the viewer transform.
//!
//! The image is fitted into the pane ("object-contain": fully visible,
//! centered, never upscaled past its pixel size), then the zoom factor and
//! pan translation are applied around the pane center. The pan is applied in
//! screen pixels, so a drag follows the cursor one to one at any zoom.

use iced::widget::canvas::{self, Canvas};
use iced::widget::image::Handle;
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// One frame of the lightbox image view.
#[derive(Debug, Clone)]
pub struct ImagePane {
    handle: Handle,
    image_width: f32,
    image_height: f32,
    zoom: f32,
    pan: Vector,
    /// Horizontal shift of an in-flight swipe, for drag feedback.
    swipe_offset_x: f32,
}

impl ImagePane {
    #[must_use]
    pub fn new(
        handle: Handle,
        image_width: u32,
        image_height: u32,
        zoom: f32,
        pan: Vector,
        swipe_offset_x: f32,
    ) -> Self {
        Self {
            handle,
            image_width: image_width as f32,
            image_height: image_height as f32,
            zoom,
            pan,
            swipe_offset_x,
        }
    }

    /// Wraps the pane into a fill-sized canvas element.
    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Size of the image fitted into `bounds` without cropping or upscaling.
    fn fitted_size(&self, bounds: Size) -> Size {
        if self.image_width <= 0.0 || self.image_height <= 0.0 {
            return Size::ZERO;
        }
        let fit = (bounds.width / self.image_width)
            .min(bounds.height / self.image_height)
            .min(1.0);
        Size::new(self.image_width * fit, self.image_height * fit)
    }
}

impl<Message> canvas::Program<Message> for ImagePane {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let fitted = self.fitted_size(bounds.size());
        if fitted.width <= 0.0 || fitted.height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let center = frame.center();
        frame.translate(
            Vector::new(center.x + self.swipe_offset_x, center.y) + self.pan,
        );
        frame.scale(self.zoom);

        let top_left = Point::new(-fitted.width / 2.0, -fitted.height / 2.0);
        frame.draw_image(
            Rectangle::new(top_left, fitted),
            canvas::Image::new(self.handle.clone()),
        );

        vec![frame.into_geometry()]
    }
}

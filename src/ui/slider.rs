/// Photo slider widget for a room card
///
/// Shows the current photo with prev/next arrows and one dot per photo.
/// Navigation controls only appear when there is more than one photo;
/// an empty photo list renders nothing at all.
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::slider::{SliderDirection, SliderState};
use crate::Message;

const PHOTO_HEIGHT: f32 = 240.0;

/// Render the slider for the room at `room_index`
pub fn photo_slider<'a>(room_index: usize, state: &SliderState) -> Element<'a, Message> {
    let Some(current) = state.current_image() else {
        // No photos for this room: render nothing
        return Space::with_height(0).into();
    };

    let photo = image(image::Handle::from_path(current))
        .width(Length::Fill)
        .height(Length::Fixed(PHOTO_HEIGHT))
        .content_fit(ContentFit::Cover);

    if !state.has_navigation() {
        return container(photo).width(Length::Fill).into();
    }

    let previous = button(text("‹").size(28))
        .on_press(Message::SliderAdvance(room_index, SliderDirection::Previous))
        .style(button::text)
        .padding([0, 8]);

    let next = button(text("›").size(28))
        .on_press(Message::SliderAdvance(room_index, SliderDirection::Next))
        .style(button::text)
        .padding([0, 8]);

    let mut dots = row![].spacing(6).align_y(Alignment::Center);
    for i in 0..state.len() {
        let glyph = if i == state.current_index() { "●" } else { "○" };
        dots = dots.push(
            button(text(glyph).size(12))
                .on_press(Message::SliderSelect(room_index, i))
                .style(button::text)
                .padding(2),
        );
    }

    column![
        row![previous, photo, next].align_y(Alignment::Center),
        container(dots).width(Length::Fill).center_x(Length::Fill),
    ]
    .spacing(6)
    .into()
}

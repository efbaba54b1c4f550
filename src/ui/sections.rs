/// Page sections of the guest house presence app
///
/// Everything here renders static content from the `content` module;
/// the only interactive pieces are the room photo sliders and the
/// booking form at the bottom of the page.
use iced::widget::{button, column, container, horizontal_rule, row, text, text_input, Space};
use iced::{Alignment, Color, Element, Length, Theme};
use iced_aw::Wrap;

use crate::content::{Highlight, PriceItem, Review, Room, Service};
use crate::state::booking::{BookingDraft, BookingField};
use crate::state::slider::SliderState;
use crate::ui::slider::photo_slider;
use crate::Message;

const SECTION_WIDTH: f32 = 860.0;

const ACCENT: Color = Color::from_rgb(0.18, 0.42, 0.31);
const MUTED: Color = Color::from_rgb(0.42, 0.45, 0.43);

/// Center a section's content and give it vertical breathing room
fn section<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(container(content).max_width(SECTION_WIDTH))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([32, 24])
        .into()
}

fn section_title<'a>(title: &'a str) -> Element<'a, Message> {
    container(text(title).size(32))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// A bordered card, the basic building block of every section
fn card<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

pub fn hero<'a>() -> Element<'a, Message> {
    let banner = column![
        text("Гостевой дом «Семейный»").size(44),
        text("Уютный отдых для всей семьи в окружении природы").size(20).color(MUTED),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(banner)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([56, 24])
        .into()
}

pub fn about<'a>(highlights: &'a [Highlight]) -> Element<'a, Message> {
    let mut cards = row![].spacing(16);
    for h in highlights {
        cards = cards.push(card(
            column![
                text(h.title).size(20).color(ACCENT),
                text(h.text).size(15).color(MUTED),
            ]
            .spacing(8)
            .into(),
        ));
    }

    section(
        column![section_title("О нашем гостевом доме"), cards]
            .spacing(24)
            .into(),
    )
}

pub fn rooms<'a>(rooms: &'a [Room], sliders: &'a [SliderState]) -> Element<'a, Message> {
    let mut cards = column![].spacing(20);

    for (index, room) in rooms.iter().enumerate() {
        let slider: Element<'a, Message> = match sliders.get(index) {
            Some(state) => photo_slider(index, state),
            None => Space::with_height(0).into(),
        };

        let chips: Vec<Element<'a, Message>> = room
            .amenities
            .iter()
            .map(|amenity| amenity_chip(amenity))
            .collect();

        cards = cards.push(card(
            column![
                slider,
                text(room.name).size(24),
                text(room.description).size(15).color(MUTED),
                text(room.capacity).size(14).color(ACCENT),
                Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0),
            ]
            .spacing(10)
            .into(),
        ));
    }

    section(
        column![section_title("Наши номера"), cards]
            .spacing(24)
            .into(),
    )
}

fn amenity_chip<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(13))
        .padding([4, 10])
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgb(0.92, 0.95, 0.93).into()),
            border: iced::Border {
                color: Color::from_rgb(0.80, 0.87, 0.82),
                width: 1.0,
                radius: 12.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

pub fn prices<'a>(items: &'a [PriceItem]) -> Element<'a, Message> {
    let mut list = column![].spacing(0);

    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            list = list.push(horizontal_rule(1));
        }

        let mut left = column![text(item.period).size(17)].spacing(4);
        if let Some(note) = item.note {
            left = left.push(text(note).size(13).color(MUTED));
        }

        list = list.push(
            row![
                left.width(Length::Fill),
                text(item.price).size(19).color(ACCENT),
            ]
            .padding(14)
            .align_y(Alignment::Center),
        );
    }

    section(
        column![
            section_title("Прайс-лист"),
            card(list.into()),
            container(
                text("Скидки при проживании от 7 дней. Действует система скидок для постоянных гостей.")
                    .size(14)
                    .color(MUTED)
            )
            .width(Length::Fill)
            .center_x(Length::Fill),
        ]
        .spacing(20)
        .into(),
    )
}

pub fn services<'a>(services: &'a [Service]) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = services
        .iter()
        .map(|service| {
            container(
                column![
                    text(service.name).size(16),
                    text(service.price).size(15).color(ACCENT),
                ]
                .spacing(6),
            )
            .padding(14)
            .width(Length::Fixed(260.0))
            .style(container::rounded_box)
            .into()
        })
        .collect();

    section(
        column![
            section_title("Дополнительные услуги"),
            Wrap::with_elements(cards).spacing(14.0).line_spacing(14.0),
        ]
        .spacing(24)
        .into(),
    )
}

pub fn reviews<'a>(reviews: &'a [Review]) -> Element<'a, Message> {
    let mut cards = column![].spacing(16);
    for review in reviews {
        cards = cards.push(card(
            column![
                row![
                    text(review.author).size(16).color(ACCENT),
                    Space::with_width(Length::Fill),
                    text(review.stay).size(13).color(MUTED),
                ]
                .align_y(Alignment::Center),
                text(review.text).size(15),
            ]
            .spacing(8)
            .into(),
        ));
    }

    section(
        column![section_title("Отзывы гостей"), cards]
            .spacing(24)
            .into(),
    )
}

/// The booking form. The submit control is disabled while a previous
/// attempt is still outstanding.
pub fn booking<'a>(draft: &'a BookingDraft, submitting: bool) -> Element<'a, Message> {
    let field = |label: &'a str, placeholder: &'a str, value: &'a str, target: BookingField| {
        column![
            text(label).size(14),
            text_input(placeholder, value)
                .on_input(move |v| Message::DraftEdited(target, v))
                .padding(10)
                .size(16),
        ]
        .spacing(6)
    };

    let submit_label = if submitting {
        "Отправляем заявку..."
    } else {
        "Отправить заявку"
    };

    let submit = button(
        container(text(submit_label).size(17))
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .on_press_maybe((!submitting).then_some(Message::SubmitBooking))
    .style(button::primary)
    .padding(12)
    .width(Length::Fill);

    let form = column![
        field("Ваше имя *", "Иван Иванов", &draft.name, BookingField::Name),
        field("Телефон *", "+7 (999) 123-45-67", &draft.phone, BookingField::Phone),
        field(
            "Даты заезда и выезда *",
            "01.06.2026 - 07.06.2026",
            &draft.dates,
            BookingField::Dates,
        ),
        field("Количество гостей", "2", &draft.guests, BookingField::Guests),
        field(
            "Дополнительные пожелания",
            "Напишите ваши пожелания или вопросы",
            &draft.message,
            BookingField::Message,
        ),
        submit,
    ]
    .spacing(16);

    section(
        column![
            section_title("Забронировать номер"),
            container(
                text("Оставьте заявку, и мы свяжемся с вами в ближайшее время")
                    .size(15)
                    .color(MUTED)
            )
            .width(Length::Fill)
            .center_x(Length::Fill),
            card(form.into()),
        ]
        .spacing(16)
        .into(),
    )
}

pub fn footer<'a>() -> Element<'a, Message> {
    let contacts = column![
        text("Гостевой дом «Семейный»").size(18),
        text("Телефон: +7 (999) 123-45-67").size(14).color(MUTED),
        text("Почта: info@semeiniy.ru").size(14).color(MUTED),
        text("© 2026 Гостевой дом «Семейный». Все права защищены.")
            .size(12)
            .color(MUTED),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    container(contacts)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([36, 24])
        .into()
}

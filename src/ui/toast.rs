/// Toast notifications for submission outcomes
///
/// The app holds at most one toast; a new outcome replaces it. Toasts
/// stay until dismissed — the page has no timers or background tasks.
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Color, Element, Length, Padding, Theme};

use crate::Message;

/// Visual flavor of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// One user-facing notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Render the toast as an overlay card pinned to the top-right corner
pub fn toast_overlay(toast: &Toast) -> Element<'_, Message> {
    let accent = match toast.kind {
        ToastKind::Info => Color::from_rgb(0.18, 0.55, 0.34),
        ToastKind::Error => Color::from_rgb(0.75, 0.22, 0.17),
    };

    let dismiss = button(text("✕").size(14))
        .on_press(Message::DismissToast)
        .style(button::text)
        .padding(4);

    let body = row![
        column![
            text(toast.title.as_str()).size(16).color(accent),
            text(toast.description.as_str()).size(14),
        ]
        .spacing(4),
        Space::with_width(12),
        dismiss,
    ]
    .align_y(Alignment::Start);

    let card = container(body)
        .padding(Padding::new(12.0).right(8.0))
        .max_width(380)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Color::WHITE.into()),
            border: iced::Border {
                color: accent,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: iced::Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 10.0,
            },
            ..container::Style::default()
        });

    // Full-size transparent layer so the card lands in the corner
    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Top)
        .padding(16)
        .into()
}

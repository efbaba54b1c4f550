use iced::widget::{column, scrollable, stack};
use iced::{Element, Length, Task, Theme};

mod booking_api;
mod content;
mod state;
mod ui;

use booking_api::{BookingAck, BookingClient, SubmitError};
use content::{Highlight, PriceItem, Review, Room, Service};
use state::booking::{BookingDraft, BookingField};
use state::slider::{SliderDirection, SliderState};
use ui::toast::Toast;

/// Main application state
struct GuestHouse {
    /// Static page content
    rooms: Vec<Room>,
    prices: Vec<PriceItem>,
    services: Vec<Service>,
    reviews: Vec<Review>,
    highlights: Vec<Highlight>,
    /// One photo slider per room, in room order
    sliders: Vec<SliderState>,
    /// The booking form being edited
    draft: BookingDraft,
    /// Whether a submission is currently outstanding
    submitting: bool,
    /// The single visible notification, if any
    toast: Option<Toast>,
    /// Client for the remote booking endpoint
    client: BookingClient,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a prev/next arrow on a room's photo slider
    SliderAdvance(usize, SliderDirection),
    /// User clicked a dot selector: (room index, photo index)
    SliderSelect(usize, usize),
    /// User edited one field of the booking form
    DraftEdited(BookingField, String),
    /// User pressed the submit button
    SubmitBooking,
    /// The submission task finished with its outcome
    SubmissionFinished(Result<BookingAck, SubmitError>),
    /// User dismissed the visible notification
    DismissToast,
}

impl GuestHouse {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let rooms = content::rooms();
        let sliders = rooms
            .iter()
            .map(|room| SliderState::new(room.photos.iter().map(|p| p.to_string()).collect()))
            .collect();

        let endpoint = std::env::var("BOOKING_ENDPOINT")
            .unwrap_or_else(|_| booking_api::DEFAULT_ENDPOINT.to_string());

        println!("🏡 Guest house app initialized");
        println!("📮 Booking endpoint: {}", endpoint);

        (
            GuestHouse {
                rooms,
                prices: content::prices(),
                services: content::services(),
                reviews: content::reviews(),
                highlights: content::highlights(),
                sliders,
                draft: BookingDraft::new(),
                submitting: false,
                toast: None,
                client: BookingClient::new(endpoint),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SliderAdvance(room, direction) => {
                if let Some(slider) = self.sliders.get_mut(room) {
                    slider.advance(direction);
                }
                Task::none()
            }
            Message::SliderSelect(room, index) => {
                if let Some(slider) = self.sliders.get_mut(room) {
                    slider.select(index);
                }
                Task::none()
            }
            Message::DraftEdited(field, value) => {
                self.draft.set(field, value);
                Task::none()
            }
            Message::SubmitBooking => {
                // One outstanding request at a time
                if self.submitting {
                    return Task::none();
                }

                if !self.draft.is_complete() {
                    self.toast = Some(Toast::error(
                        "Заполните обязательные поля",
                        "Пожалуйста, укажите имя, телефон и даты заезда",
                    ));
                    return Task::none();
                }

                self.submitting = true;
                println!("📨 Submitting booking request for {}", self.draft.name);

                let client = self.client.clone();
                let draft = self.draft.clone();
                Task::perform(
                    async move { client.submit(&draft).await },
                    Message::SubmissionFinished,
                )
            }
            Message::SubmissionFinished(outcome) => {
                self.submitting = false;

                match outcome {
                    Ok(_ack) => {
                        println!("✅ Booking request accepted");
                        self.draft.clear();
                        self.toast = Some(Toast::info(
                            "Заявка отправлена!",
                            "Мы свяжемся с вами в ближайшее время",
                        ));
                    }
                    Err(SubmitError::Rejected(message)) => {
                        eprintln!("⚠️  Booking rejected: {}", message);
                        self.toast = Some(Toast::error("Не удалось отправить заявку", message));
                    }
                    Err(SubmitError::Network(detail)) => {
                        eprintln!("⚠️  Network failure: {}", detail);
                        self.toast = Some(Toast::error(
                            "Нет соединения",
                            "Проверьте подключение к интернету и попробуйте ещё раз",
                        ));
                    }
                }

                Task::none()
            }
            Message::DismissToast => {
                self.toast = None;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = scrollable(column![
            ui::sections::hero(),
            ui::sections::about(&self.highlights),
            ui::sections::rooms(&self.rooms, &self.sliders),
            ui::sections::prices(&self.prices),
            ui::sections::services(&self.services),
            ui::sections::reviews(&self.reviews),
            ui::sections::booking(&self.draft, self.submitting),
            ui::sections::footer(),
        ])
        .width(Length::Fill)
        .height(Length::Fill);

        match &self.toast {
            Some(toast) => stack![page, ui::toast::toast_overlay(toast)].into(),
            None => page.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application(
        "Гостевой дом «Семейный»",
        GuestHouse::update,
        GuestHouse::view,
    )
    .theme(GuestHouse::theme)
    .centered()
    .run_with(GuestHouse::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::toast::ToastKind;

    fn app() -> GuestHouse {
        GuestHouse::new().0
    }

    fn fill_draft(app: &mut GuestHouse) {
        app.draft.set(BookingField::Name, "Ivan".to_string());
        app.draft.set(BookingField::Phone, "+79991234567".to_string());
        app.draft.set(BookingField::Dates, "01.06-07.06".to_string());
        app.draft.set(BookingField::Guests, "2".to_string());
    }

    #[test]
    fn test_missing_name_is_rejected_without_dispatch() {
        let mut app = app();
        app.draft.set(BookingField::Phone, "+79991234567".to_string());
        app.draft.set(BookingField::Dates, "01.06-07.06".to_string());

        let _ = app.update(Message::SubmitBooking);

        // Rejected locally: nothing outstanding, input preserved
        assert!(!app.submitting);
        assert_eq!(app.draft.phone, "+79991234567");

        let toast = app.toast.expect("one notification per attempt");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_valid_submit_goes_pending_and_keeps_draft() {
        let mut app = app();
        fill_draft(&mut app);

        let _ = app.update(Message::SubmitBooking);

        assert!(app.submitting);
        assert!(app.toast.is_none());
        assert_eq!(app.draft.name, "Ivan");
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut app = app();
        fill_draft(&mut app);

        let _ = app.update(Message::SubmitBooking);
        let _ = app.update(Message::SubmitBooking);

        // Still the same single attempt: no extra notification appeared
        assert!(app.submitting);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_success_clears_draft_and_toasts_once() {
        let mut app = app();
        fill_draft(&mut app);
        app.submitting = true;

        let _ = app.update(Message::SubmissionFinished(Ok(BookingAck::default())));

        assert!(!app.submitting);
        assert_eq!(app.draft, BookingDraft::default());

        let toast = app.toast.expect("success notification");
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[test]
    fn test_remote_rejection_keeps_draft_and_quotes_server() {
        let mut app = app();
        fill_draft(&mut app);
        app.submitting = true;

        let _ = app.update(Message::SubmissionFinished(Err(SubmitError::Rejected(
            "Room unavailable".to_string(),
        ))));

        assert!(!app.submitting);
        assert_eq!(app.draft.name, "Ivan");

        let toast = app.toast.expect("failure notification");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.description.contains("Room unavailable"));
    }

    #[test]
    fn test_network_failure_keeps_draft_with_generic_message() {
        let mut app = app();
        fill_draft(&mut app);
        app.submitting = true;

        let _ = app.update(Message::SubmissionFinished(Err(SubmitError::Network(
            "connection refused".to_string(),
        ))));

        assert!(!app.submitting);
        assert_eq!(app.draft.name, "Ivan");

        let toast = app.toast.expect("failure notification");
        assert_eq!(toast.kind, ToastKind::Error);
        // The raw transport detail stays in the log, not in the toast
        assert!(!toast.description.contains("connection refused"));
    }

    #[test]
    fn test_slider_messages_are_routed_by_room() {
        let mut app = app();
        let _ = app.update(Message::SliderAdvance(0, SliderDirection::Next));
        let _ = app.update(Message::SliderSelect(1, 1));

        assert_eq!(app.sliders[0].current_index(), 1);
        assert_eq!(app.sliders[1].current_index(), 1);
        assert_eq!(app.sliders[2].current_index(), 0);
    }

    #[test]
    fn test_dismiss_clears_the_toast() {
        let mut app = app();
        app.toast = Some(Toast::info("Заявка отправлена!", ""));

        let _ = app.update(Message::DismissToast);

        assert!(app.toast.is_none());
    }
}

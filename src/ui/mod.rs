/// UI building blocks
///
/// - Page sections and the booking form (sections.rs)
/// - The room photo slider widget (slider.rs)
/// - Toast notifications for submission outcomes (toast.rs)

pub mod sections;
pub mod slider;
pub mod toast;

pub mod category_picker;
pub mod feedback_page;
pub mod rating_picker;
pub mod success_toast;

use crate::gui::screens::{ScreenMessage, signup_form::SignupFormScreen};

#[derive(Debug, Clone)]
pub enum Message {
    SignupForm(ScreenMessage<SignupFormScreen>),
}

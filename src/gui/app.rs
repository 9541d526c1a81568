use iced::{Element, Task};

use super::{
    AppState, Message,
    screens::{
        Screen, ScreenMessage,
        signup_form::{ParentMessage, SignupFormScreen},
    },
};
use crate::SignupConfig;

pub struct SignupApp {
    state: AppState,
    screen: SignupFormScreen,
}

impl SignupApp {
    pub fn new(config: SignupConfig) -> Self {
        Self {
            state: AppState::new(config),
            screen: SignupFormScreen::default(),
        }
    }

    pub fn title(&self) -> String {
        "Course Signup".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SignupForm(ScreenMessage::ScreenMessage(msg)) => self
                .screen
                .update(msg, &mut self.state)
                .map(Message::SignupForm),
            Message::SignupForm(ScreenMessage::ParentMessage(ParentMessage::Registered)) => {
                tracing::info!("registration acknowledged");
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(Message::SignupForm)
    }
}

/// Open the signup window and block until it is closed.
pub fn run(config: SignupConfig) -> anyhow::Result<()> {
    iced::application(
        move || SignupApp::new(config),
        SignupApp::update,
        SignupApp::view,
    )
    .title(SignupApp::title)
    .run()
    .map_err(|e| anyhow::anyhow!("Failed to run signup window: {}", e))
}

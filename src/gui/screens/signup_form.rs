use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, container, pick_list, radio, row, text, text_input},
};
use iced_aw::{date_picker::Date as PickerDate, helpers::date_picker};

use crate::{
    core::{Field, FieldChange, Finished, SubmitOutcome, date::display_date},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{field_row, layout, modal},
    },
};

const TITLE: &str = "Register Form";
const DATE_PLACEHOLDER: &str = "Click to select a date";
const SUBJECT_PLACEHOLDER: &str = "Select subject";

#[derive(Debug, Clone, Default)]
pub struct SignupFormScreen {
    show_date_picker: bool,
}

#[derive(Debug, Clone)]
pub enum SignupFormMessage {
    CourseSelected(&'static str),
    SubjectSelected(&'static str),
    NoteChanged(String),
    OpenDatePicker,
    CancelDatePicker,
    DatePicked(PickerDate),
    Submit,
    SubmissionFinished(Finished),
    Acknowledge,
    Dismiss,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Registered,
}

fn msg(message: SignupFormMessage) -> ScreenMessage<SignupFormScreen> {
    ScreenMessage::ScreenMessage(message)
}

fn to_picker_date(date: time::Date) -> PickerDate {
    PickerDate::from_ymd(
        date.year(),
        u32::from(u8::from(date.month())),
        u32::from(date.day()),
    )
}

fn from_picker_date(date: PickerDate) -> anyhow::Result<time::Date> {
    let month = time::Month::try_from(u8::try_from(date.month)?)?;
    Ok(time::Date::from_calendar_date(
        date.year,
        month,
        u8::try_from(date.day)?,
    )?)
}

impl SignupFormScreen {
    fn form_view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let form = &state.form;
        let data = form.data();
        let errors = form.errors();

        let selected_course = form.selected_course().map(|course| course.id);
        let courses: Column<'_, ScreenMessage<Self>> =
            Column::with_children(form.catalog().iter().map(|course| {
                radio(course.label, course.id, selected_course, |id| {
                    msg(SignupFormMessage::CourseSelected(id))
                })
                .into()
            }))
            .spacing(6);

        let subjects = form.subjects();
        let selected_subject = subjects
            .iter()
            .copied()
            .find(|subject| *subject == data.subject);
        let subject_list = pick_list(subjects, selected_subject, |subject| {
            msg(SignupFormMessage::SubjectSelected(subject))
        })
        .placeholder(SUBJECT_PLACEHOLDER)
        .width(Length::Fill);

        let date_label = data
            .startdate
            .and_then(|date| display_date(date).ok())
            .unwrap_or_else(|| DATE_PLACEHOLDER.to_string());
        // Open the picker on the first offered day when nothing is chosen yet.
        let initial_date = data
            .startdate
            .or_else(|| {
                form.allowed_dates()
                    .dates()
                    .ok()
                    .and_then(|dates| dates.first().copied())
            })
            .map(to_picker_date)
            .unwrap_or_else(PickerDate::today);
        let start_date: Element<'_, ScreenMessage<Self>> = date_picker(
            self.show_date_picker,
            initial_date,
            button(text(date_label)).on_press(msg(SignupFormMessage::OpenDatePicker)),
            msg(SignupFormMessage::CancelDatePicker),
            |date| msg(SignupFormMessage::DatePicked(date)),
        )
        .into();

        let note = text_input("", &data.note)
            .on_input(|note| msg(SignupFormMessage::NoteChanged(note)))
            .width(Length::Fill);

        let submit_label = if form.is_submitting() {
            "Submitting..."
        } else {
            "Submit"
        };
        let submit = button(text(submit_label))
            .on_press_maybe((!form.is_submitting()).then(|| msg(SignupFormMessage::Submit)));

        let content = column![
            field_row("Course", true, courses, errors.get(Field::Course)),
            field_row("Subject", true, subject_list, errors.get(Field::Subject)),
            field_row("Start date", true, start_date, errors.get(Field::StartDate)),
            field_row("Additional Notes", false, note, errors.get(Field::Note)),
            container(submit).center_x(Length::Fill),
        ]
        .spacing(16)
        .width(Length::Fill);

        layout(TITLE, content)
    }

    fn success_dialog<'a>(&self) -> Element<'a, ScreenMessage<Self>> {
        let header = row![
            text("Success!").size(22).width(Length::Fill),
            button(text("x"))
                .on_press(msg(SignupFormMessage::Dismiss))
                .style(button::text),
        ]
        .align_y(Center);

        container(
            column![
                header,
                text("Your course has been successfully registered."),
                button(text("Ok"))
                    .on_press(msg(SignupFormMessage::Acknowledge))
                    .style(button::success),
            ]
            .spacing(12)
            .align_x(Center),
        )
        .width(Length::Fixed(360.0))
        .padding(20)
        .style(container::rounded_box)
        .into()
    }
}

impl Screen for SignupFormScreen {
    type Message = SignupFormMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let form = self.form_view(state);
        if state.form.is_success_dialog_open() {
            modal(
                form,
                self.success_dialog(),
                msg(SignupFormMessage::Dismiss),
            )
        } else {
            form
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            SignupFormMessage::CourseSelected(id) => {
                state.form.set_field(FieldChange::Course(id.to_string()));
                Task::none()
            }
            SignupFormMessage::SubjectSelected(subject) => {
                state
                    .form
                    .set_field(FieldChange::Subject(subject.to_string()));
                Task::none()
            }
            SignupFormMessage::NoteChanged(note) => {
                state.form.set_field(FieldChange::Note(note));
                Task::none()
            }
            SignupFormMessage::OpenDatePicker => {
                self.show_date_picker = true;
                Task::none()
            }
            SignupFormMessage::CancelDatePicker => {
                self.show_date_picker = false;
                Task::none()
            }
            SignupFormMessage::DatePicked(date) => {
                self.show_date_picker = false;
                match from_picker_date(date) {
                    Ok(date) => state.form.set_start_date(date),
                    Err(e) => tracing::warn!(error = %e, "ignoring picked date"),
                }
                Task::none()
            }
            SignupFormMessage::Submit => match state.form.submit() {
                SubmitOutcome::Started(pending) => Task::perform(pending.wait(), |finished| {
                    msg(SignupFormMessage::SubmissionFinished(finished))
                }),
                SubmitOutcome::Invalid | SubmitOutcome::AlreadySubmitting => Task::none(),
            },
            SignupFormMessage::SubmissionFinished(finished) => {
                state.form.finish_submission(finished);
                Task::none()
            }
            SignupFormMessage::Acknowledge => {
                state.form.acknowledge();
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Registered))
            }
            SignupFormMessage::Dismiss => {
                state.form.close_dialog();
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::core::{Completion, FormPhase, SubmissionId};

    #[test]
    fn test_picker_date_conversion() -> anyhow::Result<()> {
        let picked = to_picker_date(date!(2019-12-20));
        assert_eq!((picked.year, picked.month, picked.day), (2019, 12, 20));
        assert_eq!(from_picker_date(picked)?, date!(2019-12-20));
        Ok(())
    }

    #[test]
    fn test_invalid_picker_dates_are_rejected() {
        assert!(from_picker_date(PickerDate::from_ymd(2020, 2, 30)).is_err());
        assert!(from_picker_date(PickerDate::from_ymd(2019, 13, 1)).is_err());
        assert!(from_picker_date(PickerDate::from_ymd(2019, 12, 0)).is_err());
    }

    #[test]
    fn test_invalid_picked_date_leaves_start_date_unset() {
        let mut screen = SignupFormScreen::default();
        let mut state = AppState::default();

        let _ = screen.update(SignupFormMessage::OpenDatePicker, &mut state);
        let _ = screen.update(
            SignupFormMessage::DatePicked(PickerDate::from_ymd(2020, 2, 30)),
            &mut state,
        );

        assert!(!screen.show_date_picker);
        assert_eq!(state.form.data().startdate, None);
    }

    #[test]
    fn test_submit_routing_through_dialog() {
        let mut screen = SignupFormScreen::default();
        let mut state = AppState::default();

        // Empty form fails validation
        let _ = screen.update(SignupFormMessage::Submit, &mut state);
        assert_eq!(state.form.phase(), FormPhase::Idle);
        assert!(state.form.errors().contains(Field::Course));

        let _ = screen.update(SignupFormMessage::CourseSelected("english"), &mut state);
        let _ = screen.update(SignupFormMessage::SubjectSelected("Drama"), &mut state);
        let _ = screen.update(
            SignupFormMessage::DatePicked(to_picker_date(date!(2020-01-15))),
            &mut state,
        );
        let _ = screen.update(SignupFormMessage::Submit, &mut state);
        assert_eq!(state.form.phase(), FormPhase::Submitting);

        // The first submission the form starts has id 0
        let _ = screen.update(
            SignupFormMessage::SubmissionFinished(Finished {
                id: SubmissionId(0),
                completion: Completion::Elapsed,
            }),
            &mut state,
        );
        assert_eq!(state.form.phase(), FormPhase::Completed);

        let _ = screen.update(SignupFormMessage::Dismiss, &mut state);
        assert_eq!(state.form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_acknowledge_resets_form() {
        let mut screen = SignupFormScreen::default();
        let mut state = AppState::default();

        let _ = screen.update(SignupFormMessage::CourseSelected("technical"), &mut state);
        let _ = screen.update(SignupFormMessage::NoteChanged("short".into()), &mut state);
        let _ = screen.update(SignupFormMessage::Acknowledge, &mut state);

        assert_eq!(state.form.data(), &crate::core::FormData::default());
        assert!(!state.form.is_success_dialog_open());
    }
}

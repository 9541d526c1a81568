use iced::{
    Alignment::Center,
    Color, Element, Length,
    widget::{center, column, container, mouse_area, opaque, row, stack, text},
};
use iced_widget::container::bordered_box;

const LABEL_PORTION: u16 = 1;
const CONTROL_PORTION: u16 = 3;

/// Page frame: a heading above a bordered card, centered in the window.
pub fn layout<'a, Message>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        column![
            text(title).size(28),
            container(content.into())
                .style(bordered_box)
                .padding(20)
                .max_width(640.0),
        ]
        .spacing(20)
        .align_x(Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// One labelled form row with an optional error line under the control.
pub fn field_row<'a, Message>(
    label: &'a str,
    required: bool,
    control: impl Into<Element<'a, Message>>,
    error: Option<&'a str>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let label: Element<'a, Message> = if required {
        row![text(label), text("*").style(text::danger)]
            .spacing(4)
            .into()
    } else {
        text(label).into()
    };

    let mut control_column = column![control.into()].spacing(4);
    if let Some(error) = error {
        control_column = control_column.push(text(error).size(14).style(text::danger));
    }

    row![
        container(label).width(Length::FillPortion(LABEL_PORTION)),
        container(control_column).width(Length::FillPortion(CONTROL_PORTION)),
    ]
    .spacing(10)
    .into()
}

/// Overlay `content` on a dimmed `base`; clicking the backdrop emits `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

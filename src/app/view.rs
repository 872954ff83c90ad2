// SPDX-License-Identifier: MPL-2.0
//! View rendering for the ready state: the grid, plus the modal overlay
//! while a selection exists.

use super::{App, Message};
use crate::ui::design_tokens::spacing;
use crate::ui::{grid, modal, styles};
use iced::widget::{center, mouse_area, opaque, Stack};
use iced::Element;

pub fn gallery(app: &App) -> Element<'_, Message> {
    let grid_view = grid::view(grid::ViewContext {
        navigator: &app.navigator,
        thumbnails: &app.thumbnails,
    });

    match (
        app.navigator.selected_index(),
        app.navigator.selected_photo(),
    ) {
        (Some(index), Some(photo)) => {
            let modal_view = modal::view(modal::ViewContext {
                navigator: &app.navigator,
                photo,
                index,
                full_images: &app.full_images,
                thumbnails: &app.thumbnails,
            });

            // The opaque backdrop suppresses grid scrolling and clicks for
            // as long as a selection exists. Clicking it closes the modal;
            // the inner opaque keeps clicks on the modal body from falling
            // through.
            let backdrop = opaque(
                mouse_area(
                    center(opaque(modal_view))
                        .style(styles::backdrop)
                        .padding(spacing::LG),
                )
                .on_press(Message::CloseModal),
            );

            Stack::new().push(grid_view).push(backdrop).into()
        }
        _ => grid_view,
    }
}

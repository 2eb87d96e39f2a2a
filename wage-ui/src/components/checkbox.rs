//! Checkbox with an optional label, drawn with the active theme.

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_component::ActiveTheme;

type ChangeHandler = Box<dyn Fn(bool, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    on_change: Option<ChangeHandler>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            on_change: None,
        }
    }

    pub fn checked(
        mut self,
        checked: bool,
    ) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(
        mut self,
        label: impl Into<SharedString>,
    ) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Called with the new checked state when clicked.
    pub fn on_change(
        mut self,
        handler: impl Fn(bool, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(
        self,
        _window: &mut Window,
        cx: &mut App,
    ) -> impl IntoElement {
        let checked = self.checked;
        let theme = cx.theme();

        let (box_bg, box_border) = if checked {
            (theme.primary, theme.primary)
        } else {
            (theme.background, theme.border)
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(
                div()
                    .size(px(18.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(box_border)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(theme.primary_foreground)
                    .text_size(px(12.0))
                    .child(if checked { "✓" } else { "" }),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(div().text_sm().text_color(theme.foreground).child(label));
        }

        if let Some(handler) = self.on_change {
            checkbox = checkbox.on_click(move |_event, window, cx| handler(!checked, window, cx));
        }

        checkbox
    }
}

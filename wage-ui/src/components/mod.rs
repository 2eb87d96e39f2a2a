pub mod checkbox;
pub mod dialogs;
pub mod ledger_table;
pub mod tracker_view;
pub mod window;

use gpui::{App, ClickEvent, Pixels, SharedString, Size, Styled, Window, px};
use gpui_component::{
    Disableable, Sizable,
    button::{Button, ButtonVariants},
};

pub use checkbox::Checkbox;
pub use ledger_table::LedgerTable;
pub use tracker_view::WageTrackerView;
pub use window::AppWindow;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            size: Size {
                width: px(960.0),
                height: px(900.0),
            },
        }
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w(px(180.))
        .label(label.into())
        .on_click(on_click)
}

/// Like [`make_button`], but greyed out and inert while `disabled` is set.
pub fn make_guarded_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    disabled: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    make_button(id, label, on_click).disabled(disabled)
}

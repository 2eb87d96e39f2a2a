use gpui::{
    AnyElement, App, Context, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};
use gpui_component::{ActiveTheme, StyledExt};
use tracing::info;

use crate::{Quit, quit};

/// Top-level view of the main window.
///
/// Hosts whatever content factory it is given and quits the application once
/// the last window closes.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    content: Option<Box<dyn Fn() -> AnyElement>>,
}

impl AppWindow {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            if cx.windows().is_empty() {
                info!("Last window closed");
                quit(&Quit, cx);
            }
        });

        info!("Window constructed");
        Self {
            _window_close_subscription: subscription,
            content: None,
        }
    }

    /// Set a factory that produces the content to be rendered in the window.
    ///
    /// The factory is called on every render.
    pub fn set_content(
        &mut self,
        content: impl Fn() -> AnyElement + 'static,
    ) {
        self.content = Some(Box::new(content));
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content = self.content.as_ref().map(|f| f());

        div()
            .v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .children(content)
    }
}

//! The single-screen tracker: language bar, entry form, live preview,
//! submitted-entries table and report export.

use std::path::{Path, PathBuf};

use gpui::{
    App, AppContext, ClickEvent, Context, Div, Entity, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Subscription, Window,
    div, prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    v_flex,
};
use tracing::{debug, info, warn};
use wage_core::{Locale, Report, Roster, Session, SystemClock, Weekday, WorkerId};

use crate::{
    components::{Checkbox, LedgerTable, dialogs, make_button, make_guarded_button},
    config::AppConfig,
    models::Notice,
    utils::{format_rupees, worker_option_label},
};

pub struct WageTrackerView {
    session: Session,
    repayment: Entity<InputState>,
    notice: Option<Notice>,
    export_dir: PathBuf,
    _subscriptions: Vec<Subscription>,
}

impl WageTrackerView {
    pub fn new(
        config: &AppConfig,
        roster: Roster,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let repayment = cx.new(|cx| InputState::new(window, cx).placeholder("Enter amount"));

        let subscriptions = vec![cx.subscribe(
            &repayment,
            |this: &mut Self, state, event: &InputEvent, cx| {
                if matches!(event, InputEvent::Change) {
                    let text = state.read(cx).value().to_string();
                    this.session.set_repayment_input(text);
                    cx.notify();
                }
            },
        )];

        info!(locale = %config.locale, export_dir = %config.export_dir.display(), "tracker ready");
        Self {
            session: Session::with_roster(roster, config.locale),
            repayment,
            notice: None,
            export_dir: config.export_dir.clone(),
            _subscriptions: subscriptions,
        }
    }

    // --- Actions ---

    fn set_locale(
        &mut self,
        locale: Locale,
        cx: &mut Context<Self>,
    ) {
        self.session.set_locale(locale);
        cx.notify();
    }

    fn pick_worker(
        &mut self,
        worker: WorkerId,
        cx: &mut Context<Self>,
    ) {
        // Clicking the current pick again clears it.
        let next = match self.session.selected_worker() {
            Some(current) if current.id == worker => None,
            _ => Some(worker),
        };
        if let Err(error) = self.session.select_worker(next) {
            warn!(%error, "worker selection refused");
        }
        cx.notify();
    }

    fn toggle_day(
        &mut self,
        day: Weekday,
        cx: &mut Context<Self>,
    ) {
        let worked = self.session.toggle_day(day);
        debug!(?day, worked, "day toggled");
        cx.notify();
    }

    fn submit(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match self.session.submit() {
            Ok(_) => {
                self.repayment
                    .update(cx, |state, cx| state.set_value("", window, cx));
            }
            Err(error) => warn!(%error, "submit refused"),
        }
        cx.notify();
    }

    fn toggle_paid(
        &mut self,
        index: usize,
        cx: &mut Context<Self>,
    ) {
        if let Err(error) = self.session.toggle_paid(index) {
            warn!(%error, "paid toggle refused");
        }
        cx.notify();
    }

    fn export_report(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        let report = match self.session.export(&SystemClock) {
            Ok(report) => report,
            Err(error) => {
                self.notice = Some(Notice::report_failed(&error));
                cx.notify();
                return;
            }
        };

        let directory = self.export_dir.clone();
        let file_name = report.file_name.clone();
        cx.spawn(async move |this, cx| {
            let Some(path) = dialogs::pick_report_path(directory, file_name).await else {
                info!("report save cancelled");
                return;
            };
            if this
                .update(cx, |this, cx| this.save_report(&report, &path, cx))
                .is_err()
            {
                warn!(path = %path.display(), "tracker closed before the report was saved");
            }
        })
        .detach();
    }

    fn save_report(
        &mut self,
        report: &Report,
        path: &Path,
        cx: &mut Context<Self>,
    ) {
        self.notice = Some(match report.save_to(path) {
            Ok(()) => {
                info!(path = %path.display(), rows = report.rows, "report saved");
                if let Some(dir) = dialogs::next_export_dir(path) {
                    self.export_dir = dir;
                }
                Notice::report_saved(path)
            }
            Err(error) => Notice::report_failed(&error),
        });
        cx.notify();
    }

    fn dismiss_notice(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        self.notice = None;
        cx.notify();
    }

    // --- Sections ---

    fn render_language_bar(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let active = self.session.locale();

        Locale::ALL.into_iter().fold(
            h_flex().w_full().justify_end().gap_2(),
            |bar, locale| {
                let button = Button::new(SharedString::from(format!("lang-{locale}")))
                    .small()
                    .label(locale.display_name())
                    .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                        this.set_locale(locale, cx);
                    }));
                bar.child(if locale == active {
                    button.primary()
                } else {
                    button.ghost()
                })
            },
        )
    }

    fn render_notice(
        &self,
        cx: &mut Context<Self>,
    ) -> Option<Div> {
        let notice = self.notice.as_ref()?;
        let colour = if notice.is_error() {
            cx.theme().danger
        } else {
            cx.theme().success
        };

        Some(
            h_flex()
                .w_full()
                .p_3()
                .gap_3()
                .rounded_md()
                .border_1()
                .border_color(colour)
                .text_color(colour)
                .child(div().flex_1().child(notice.message.clone()))
                .child(
                    Button::new("dismiss-notice")
                        .ghost()
                        .small()
                        .label("✖")
                        .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                            this.dismiss_notice(cx);
                        })),
                ),
        )
    }

    fn render_worker_picker(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let locale = self.session.locale();
        let selected = self.session.selected_worker().map(|worker| worker.id);
        let workers = self.session.available_workers();

        let list = if workers.is_empty() {
            v_flex().child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Every worker has an entry this week"),
            )
        } else {
            workers
                .into_iter()
                .enumerate()
                .fold(v_flex().gap_1(), |list, (index, worker)| {
                    let id = worker.id;
                    let is_selected = selected == Some(id);
                    list.child(
                        div()
                            .id(("worker", index))
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .border_1()
                            .border_color(cx.theme().border)
                            .cursor_pointer()
                            .when(is_selected, |this| {
                                this.bg(cx.theme().accent)
                                    .text_color(cx.theme().accent_foreground)
                                    .font_weight(FontWeight::SEMIBOLD)
                            })
                            .hover(|this| this.bg(cx.theme().accent.opacity(0.5)))
                            .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                                this.pick_worker(id, cx);
                            }))
                            .child(worker_option_label(worker, locale)),
                    )
                })
        };

        labeled_section("Select Resource").child(list)
    }

    fn render_days(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let locale = self.session.locale();
        let view = cx.entity();

        let grid = Weekday::ALL
            .into_iter()
            .fold(h_flex().flex_wrap().gap_4(), |grid, day| {
                let view = view.clone();
                grid.child(
                    div().w(px(180.)).child(
                        Checkbox::new(("day", day.index()))
                            .checked(self.session.form().is_day_set(day))
                            .label(day.label(locale))
                            .on_change(move |_, _, cx| {
                                view.update(cx, |this, cx| this.toggle_day(day, cx));
                            }),
                    ),
                )
            });

        labeled_section("Work Days").child(grid)
    }

    fn render_repayment(&self) -> Div {
        labeled_section("Jama (Loan Repayment)").child(Input::new(&self.repayment))
    }

    fn render_preview(&self) -> Option<Div> {
        self.session.selected_worker()?;
        let preview = self.session.preview();

        Some(
            v_flex()
                .gap_1()
                .child(format!("Rate: {} per day", format_rupees(preview.daily_rate)))
                .child(format!("Total Days: {}", preview.worked_day_count))
                .child(format!("Total Amount: {}", format_rupees(preview.gross_total)))
                .child(format!("Net Payment: {}", format_rupees(preview.net_payment))),
        )
    }

    fn render_submit(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        h_flex().w_full().justify_center().child(make_guarded_button(
            "submit-entry",
            "Submit",
            !self.session.can_submit(),
            cx.listener(|this, _: &ClickEvent, window, cx| this.submit(window, cx)),
        ))
    }

    fn render_ledger(
        &self,
        cx: &mut Context<Self>,
    ) -> Option<Div> {
        let ledger = self.session.ledger();
        if ledger.is_empty() {
            return None;
        }
        let view = cx.entity();

        Some(
            v_flex()
                .gap_3()
                .child(
                    h_flex()
                        .w_full()
                        .justify_between()
                        .items_center()
                        .child(
                            div()
                                .text_xl()
                                .font_weight(FontWeight::BOLD)
                                .child("Submitted Entries"),
                        )
                        .child(make_button(
                            "generate-report",
                            "Generate Report",
                            cx.listener(|this, _: &ClickEvent, _, cx| this.export_report(cx)),
                        )),
                )
                .child(LedgerTable::new(ledger).on_toggle_paid(move |index, _, cx| {
                    view.update(cx, |this, cx| this.toggle_paid(index, cx));
                })),
        )
    }
}

impl Render for WageTrackerView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let form = v_flex()
            .gap_5()
            .p_5()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .child("Resource Work Day Tracker"),
            )
            .child(self.render_worker_picker(cx))
            .child(self.render_days(cx))
            .child(self.render_repayment())
            .children(self.render_preview())
            .child(self.render_submit(cx));

        v_flex()
            .id("tracker-scroll")
            .size_full()
            .overflow_y_scroll()
            .p_5()
            .gap_4()
            .child(self.render_language_bar(cx))
            .children(self.render_notice(cx))
            .child(form)
            .children(self.render_ledger(cx))
    }
}

/// A titled block of the form.
fn labeled_section(label: impl Into<SharedString>) -> Div {
    v_flex().gap_2().child(
        div()
            .text_sm()
            .font_weight(FontWeight::SEMIBOLD)
            .child(label.into()),
    )
}

/// Builds the tracker as a new entity.
pub fn new_tracker(
    config: &AppConfig,
    roster: Roster,
    window: &mut Window,
    cx: &mut App,
) -> Entity<WageTrackerView> {
    cx.new(|cx| WageTrackerView::new(config, roster, window, cx))
}

//! Table of submitted entries with a paid checkbox per row.

use std::rc::Rc;

use gpui::{
    App, Div, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
    div, prelude::FluentBuilder, px,
};
use gpui_component::{ActiveTheme, h_flex, v_flex};
use wage_core::{Ledger, LedgerTotals};

use crate::{components::Checkbox, models::LedgerRow, utils::format_rupees};

type TogglePaidHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Column headings and widths, left to right.
const COLUMNS: [(&str, f32); 7] = [
    ("RESOURCE", 170.),
    ("DAYS OF THE WEEK", 260.),
    ("WORK DAYS", 90.),
    ("TOTAL (₹)", 90.),
    ("JAMA (₹)", 90.),
    ("NET PAYMENT (₹)", 120.),
    ("PAID", 60.),
];

#[derive(IntoElement)]
pub struct LedgerTable {
    rows: Vec<LedgerRow>,
    totals: LedgerTotals,
    on_toggle_paid: Option<TogglePaidHandler>,
}

impl LedgerTable {
    pub fn new(ledger: &Ledger) -> Self {
        Self {
            rows: ledger
                .iter()
                .enumerate()
                .map(|(index, entry)| LedgerRow::new(index, entry))
                .collect(),
            totals: ledger.totals(),
            on_toggle_paid: None,
        }
    }

    /// Called with the row index when a paid checkbox is clicked.
    pub fn on_toggle_paid(
        mut self,
        handler: impl Fn(usize, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_toggle_paid = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for LedgerTable {
    fn render(
        self,
        _window: &mut Window,
        cx: &mut App,
    ) -> impl IntoElement {
        let header = COLUMNS
            .iter()
            .fold(table_row(), |row, (title, width)| {
                row.child(
                    cell(*width)
                        .font_weight(FontWeight::SEMIBOLD)
                        .child(SharedString::from(*title)),
                )
            })
            .border_b_1()
            .border_color(cx.theme().border);

        let stripe = cx.theme().muted;
        let body = self.rows.into_iter().map(|row| {
            let index = row.index;
            let handler = self.on_toggle_paid.clone();
            let mut paid = Checkbox::new(("paid", index)).checked(row.paid);
            if let Some(handler) = handler {
                paid = paid.on_change(move |_, window, cx| handler(index, window, cx));
            }

            table_row()
                .when(index % 2 == 1, |this| this.bg(stripe))
                .child(cell(COLUMNS[0].1).child(row.worker))
                .child(cell(COLUMNS[1].1).child(row.days))
                .child(cell(COLUMNS[2].1).child(row.work_days))
                .child(cell(COLUMNS[3].1).child(row.total))
                .child(cell(COLUMNS[4].1).child(row.jama))
                .child(cell(COLUMNS[5].1).child(row.net_payment))
                .child(cell(COLUMNS[6].1).child(paid))
        });

        v_flex()
            .w_full()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .child(header)
            .children(body)
            .child(totals_line(&self.totals).text_color(cx.theme().muted_foreground))
    }
}

/// Summary of every column below the table.
pub fn totals_summary(totals: &LedgerTotals) -> String {
    format!(
        "Total {} · Jama {} · Net {} · Paid {}/{}",
        format_rupees(totals.gross_total),
        format_rupees(totals.repayment),
        format_rupees(totals.net_payment),
        totals.paid_entries,
        totals.entries
    )
}

fn totals_line(totals: &LedgerTotals) -> Div {
    h_flex()
        .px_3()
        .py_2()
        .text_sm()
        .child(totals_summary(totals))
}

fn table_row() -> Div {
    h_flex().w_full().px_3().py_2().gap_2().items_center()
}

fn cell(width: f32) -> Div {
    div().w(px(width)).text_sm()
}

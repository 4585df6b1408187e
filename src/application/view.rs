// Presentation-ready projection of the viewed week.
//
// Purpose
// - Give any front end what it needs to draw the records table, the summary and the
//   daily earnings bar chart, without knowing about the domain types.
//
// Responsibilities
// - Format dates as "DD/MM/YYYY", times as "HH:MM" and money as "$x.xx".
// - Keep row positions aligned with the collection order, so a row's position is the
//   position to pass to delete.
// - Render a plain text table and bar chart through Display.

use std::fmt;

use serde::Serialize;

use crate::core::shift::{record::ShiftRecord, time_of_day};
use crate::core::week::{collection::WeekCollection, navigator::WeekRange, summary::WeekSummary};

pub const CHART_LABEL: &str = "Daily earnings";

const DATE_FORMAT: &str = "%d/%m/%Y";
const WEEKDAY_FORMAT: &str = "%a";
const BAR_WIDTH: usize = 40;

pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub position: usize,
    pub date: String,
    pub weekday: String,
    pub start_time: String,
    pub end_time: String,
    pub earnings: String,
    pub discounts: String,
    pub extras: String,
}

impl RecordRow {
    fn from_record(position: usize, record: &ShiftRecord) -> Self {
        Self {
            position,
            date: record.date().format(DATE_FORMAT).to_string(),
            weekday: record.date().format(WEEKDAY_FORMAT).to_string(),
            start_time: time_of_day::format(&record.start_time()),
            end_time: time_of_day::format(&record.end_time()),
            earnings: format_money(record.earnings()),
            discounts: format_money(record.discounts()),
            extras: format_money(record.extras()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub earnings: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub total_earned: String,
    pub total_discounts: String,
    pub total_extras: String,
    pub final_amount: String,
}

impl From<WeekSummary> for SummaryView {
    fn from(summary: WeekSummary) -> Self {
        Self {
            total_earned: format_money(summary.total_earned),
            total_discounts: format_money(summary.total_discounts),
            total_extras: format_money(summary.total_extras),
            final_amount: format_money(summary.final_amount()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    pub week_key: String,
    pub range_label: String,
    pub rows: Vec<RecordRow>,
    pub chart: ChartSeries,
    pub summary: SummaryView,
}

impl WeekView {
    pub fn from_collection(range: WeekRange, collection: &WeekCollection) -> Self {
        let rows: Vec<RecordRow> = collection
            .list()
            .iter()
            .enumerate()
            .map(|(position, record)| RecordRow::from_record(position, record))
            .collect();
        let chart = ChartSeries {
            label: CHART_LABEL.to_string(),
            labels: rows.iter().map(|row| row.date.clone()).collect(),
            earnings: collection.list().iter().map(ShiftRecord::earnings).collect(),
        };
        Self {
            week_key: collection.key().to_string(),
            range_label: range.label(),
            rows,
            chart,
            summary: collection.summary().into(),
        }
    }

    fn bar_len(&self, earnings: f64) -> usize {
        let max = self.chart.earnings.iter().copied().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return 0;
        }
        ((earnings / max) * BAR_WIDTH as f64).round() as usize
    }
}

impl fmt::Display for WeekView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Week {}", self.range_label)?;
        writeln!(
            f,
            "{:>3}  {:<10}  {:<3}  {:<8}  {:<8}  {:>10}  {:>10}  {:>10}",
            "#", "Date", "Day", "Start", "End", "Earned", "Discounts", "Extras"
        )?;
        if self.rows.is_empty() {
            writeln!(f, "  (no records)")?;
        }
        for row in &self.rows {
            writeln!(
                f,
                "{:>3}  {:<10}  {:<3}  {:<8}  {:<8}  {:>10}  {:>10}  {:>10}",
                row.position,
                row.date,
                row.weekday,
                row.start_time,
                row.end_time,
                row.earnings,
                row.discounts,
                row.extras
            )?;
        }
        writeln!(
            f,
            "Earned {}  Discounts {}  Extras {}  Final {}",
            self.summary.total_earned,
            self.summary.total_discounts,
            self.summary.total_extras,
            self.summary.final_amount
        )?;

        if !self.chart.earnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.chart.label)?;
            for (label, earnings) in self.chart.labels.iter().zip(&self.chart.earnings) {
                writeln!(
                    f,
                    "{label:<10} | {} {}",
                    "#".repeat(self.bar_len(*earnings)),
                    format_money(*earnings)
                )?;
            }
        }
        Ok(())
    }
}

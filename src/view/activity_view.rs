use crate::activity::{format_currency, page_query};
use crate::entity::{ActivityCategory, ActivityDetail, ActivityPage, Currency, RecordViewModel};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

pub const ACTIVITY_ROUTE: &str = "/activities";
pub const EMPTY_ACTIVITY_TEXT: &str = "No hay actividad registrada";

#[async_trait]
pub trait ActivityView: Send + Sync {
    async fn display_loading(&self) -> Result<()>;
    async fn display_page(&self, page: ActivityPage) -> Result<()>;
    async fn display_detail(&self, detail: ActivityDetail) -> Result<()>;
    async fn display_empty(&self) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
    async fn display_notice(&self, text: String) -> Result<()>;
    async fn clear_notice(&self) -> Result<()>;
}

/// Plain-text view writing to a terminal or any other sink
pub struct TerminalActivityView {
    out: Mutex<Box<dyn Write + Send>>,
    date_format: String,
    currency: Currency,
}

impl TerminalActivityView {
    pub fn new(out: Box<dyn Write + Send>, date_format: String, currency: Currency) -> Self {
        Self {
            out: Mutex::new(out),
            date_format,
            currency,
        }
    }

    pub fn stdout(date_format: String, currency: Currency) -> Self {
        Self::new(Box::new(std::io::stdout()), date_format, currency)
    }

    fn write(&self, text: &str) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("Terminal output lock poisoned"))?;
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }

    // Incoming money keeps its sign, outgoing shows a leading minus
    fn format_record(&self, record: &RecordViewModel) -> String {
        let amount = format_currency(record.transaction.amount.abs(), &self.currency);
        let amount = match record.category {
            ActivityCategory::TransferOut => format!("-{}", amount),
            _ => amount,
        };

        let counterpart = record
            .transaction
            .name
            .as_deref()
            .or(record.transaction.destination.as_deref())
            .unwrap_or("-");

        format!(
            "{}\n  #{} {} | {} | {} | {}",
            record.identifier.label(),
            record.id(),
            record.timestamp.render(&self.date_format),
            record.category,
            counterpart,
            amount
        )
    }

    pub fn render_page(&self, page: &ActivityPage) -> String {
        let mut text = String::from("Tu actividad\n\n");

        for record in &page.records {
            text.push_str(&self.format_record(record));
            text.push('\n');
        }

        if page.has_multiple_pages {
            let links: Vec<String> = (1..=page.total_pages)
                .map(|n| {
                    let link = page_query(ACTIVITY_ROUTE, n);
                    if n == page.page_number {
                        format!("[{}]", link)
                    } else {
                        link
                    }
                })
                .collect();
            text.push_str(&format!(
                "\nPage {}/{}: {}",
                page.page_number,
                page.total_pages,
                links.join(" ")
            ));
        }

        text
    }

    pub fn render_detail(&self, detail: &ActivityDetail) -> String {
        let mut text = format!("Monto\n{}\n\n{}\n", detail.display_amount, detail.category.detail_label());

        for line in [&detail.name, &detail.destination].into_iter().flatten() {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str(&detail.identifier.label());
        text.push('\n');
        text.push_str(&detail.display_timestamp.render(&self.date_format));

        text
    }
}

#[async_trait]
impl ActivityView for TerminalActivityView {
    async fn display_loading(&self) -> Result<()> {
        self.write("Loading activity...")
    }

    async fn display_page(&self, page: ActivityPage) -> Result<()> {
        self.write(&self.render_page(&page))
    }

    async fn display_detail(&self, detail: ActivityDetail) -> Result<()> {
        self.write(&self.render_detail(&detail))
    }

    async fn display_empty(&self) -> Result<()> {
        self.write(EMPTY_ACTIVITY_TEXT)
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        self.write(&format!("Error: {}", error_message))
    }

    async fn display_notice(&self, text: String) -> Result<()> {
        self.write(&format!("! {}", text))
    }

    async fn clear_notice(&self) -> Result<()> {
        Ok(())
    }
}

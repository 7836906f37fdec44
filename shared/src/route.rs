//! URL routing for the single-page app.
//!
//! Paths map to views, never to business state. The optional trailing
//! segment carries the sheet id between views; how a missing or unreadable
//! segment is resolved depends on the view.

use chrono::NaiveDate;

use crate::sheet::SheetId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: date picker that jumps into the entry grid.
    Home,
    /// `/daily-sales[/:sheet]`
    DailySales(Option<String>),
    /// `/eod-report[/:sheet]`
    EodReport(Option<String>),
    /// `/whatsapp[/:sheet]`
    Whatsapp(Option<String>),
    NotFound,
}

const DAILY_SALES: &str = "daily-sales";
const EOD_REPORT: &str = "eod-report";
const WHATSAPP: &str = "whatsapp";

impl Route {
    /// Match a location path. Query strings and fragments are ignored, as
    /// are empty segments, so `/whatsapp/` and `/whatsapp` are the same.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let sheet = segments.get(1).map(|s| s.to_string());
        match (segments.first().copied(), segments.len()) {
            (None, _) => Route::Home,
            (Some(DAILY_SALES), 1 | 2) => Route::DailySales(sheet),
            (Some(EOD_REPORT), 1 | 2) => Route::EodReport(sheet),
            (Some(WHATSAPP), 1 | 2) => Route::Whatsapp(sheet),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        let with_sheet = |base: &str, sheet: &Option<String>| match sheet {
            Some(s) => format!("/{}/{}", base, s),
            None => format!("/{}", base),
        };
        match self {
            Route::Home => "/".to_string(),
            Route::DailySales(sheet) => with_sheet(DAILY_SALES, sheet),
            Route::EodReport(sheet) => with_sheet(EOD_REPORT, sheet),
            Route::Whatsapp(sheet) => with_sheet(WHATSAPP, sheet),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn daily_sales(sheet: &SheetId) -> Self {
        Route::DailySales(Some(sheet.to_string()))
    }

    pub fn eod_report(sheet: &SheetId) -> Self {
        Route::EodReport(Some(sheet.to_string()))
    }

    pub fn whatsapp(sheet: &SheetId) -> Self {
        Route::Whatsapp(Some(sheet.to_string()))
    }

    /// Same view, pointed at another sheet. Views without a sheet are
    /// returned unchanged.
    pub fn with_sheet(&self, sheet: &SheetId) -> Self {
        match self {
            Route::DailySales(_) => Route::daily_sales(sheet),
            Route::EodReport(_) => Route::eod_report(sheet),
            Route::Whatsapp(_) => Route::whatsapp(sheet),
            other => other.clone(),
        }
    }

    pub fn sheet_segment(&self) -> Option<&str> {
        match self {
            Route::DailySales(s) | Route::EodReport(s) | Route::Whatsapp(s) => s.as_deref(),
            Route::Home | Route::NotFound => None,
        }
    }

    /// The sheet a view should show. The entry grid falls back to today's
    /// sheet; the report and export fall back to the configured default.
    pub fn resolve_sheet(&self, today: NaiveDate, default: &SheetId) -> Option<SheetId> {
        let parsed = self.sheet_segment().and_then(|s| SheetId::parse(s).ok());
        match self {
            Route::DailySales(_) => Some(parsed.unwrap_or_else(|| SheetId::from_date(today))),
            Route::EodReport(_) | Route::Whatsapp(_) => {
                Some(parsed.unwrap_or_else(|| default.clone()))
            }
            Route::Home | Route::NotFound => None,
        }
    }

    /// Sheet carried by the bottom navigation links: whatever the current
    /// route names, else the configured default.
    pub fn nav_sheet(&self, default: &SheetId) -> SheetId {
        self.sheet_segment()
            .and_then(|s| SheetId::parse(s).ok())
            .unwrap_or_else(|| default.clone())
    }
}

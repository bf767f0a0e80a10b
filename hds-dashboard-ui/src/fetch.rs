//! Browser-side data access: `web-sys` fetch wrapped into typed, `anyhow`-returning calls.

use anyhow::{anyhow, bail, Context};
use chrono::NaiveDate;
use hds_core::endpoints::{self, api_error_message};
use hds_core::models::{ChartDataPoint, Dashboard, DashboardSummary, HistoryEntry, Reservoir};
use serde::de::DeserializeOwned;
use std::future::Future;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

/// Backend base URL used when none was baked in at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Base URL compiled in from `HDS_API_BASE_URL`, or the local default.
pub fn api_base_url() -> &'static str {
    match option_env!("HDS_API_BASE_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    }
}

fn js_error(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(msg) => anyhow!(msg),
        None => anyhow!("{:?}", value),
    }
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no browser window"))?;
    let request = Request::new_with_str(url).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)
        .with_context(|| format!("request to {} failed", url))?;
    let response: Response = value.dyn_into().map_err(js_error)?;
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        let message = api_error_message(response.status(), &response.status_text(), &body);
        log::warn!("GET {} -> {}", url, message);
        bail!(message);
    }
    Ok(body)
}

async fn get_json<T: DeserializeOwned>(endpoint: &str) -> anyhow::Result<T> {
    let url = endpoints::join(api_base_url(), endpoint);
    log::info!("GET {}", url);
    let body = fetch_text(&url).await?;
    serde_json::from_str(&body).with_context(|| format!("unexpected payload from {}", url))
}

pub async fn get_reservoirs() -> anyhow::Result<Vec<Reservoir>> {
    get_json(endpoints::RESERVOIRS).await
}

pub async fn get_dashboard_summary(id: i64) -> anyhow::Result<DashboardSummary> {
    get_json(&endpoints::dashboard_summary(id)).await
}

pub async fn get_history(id: i64) -> anyhow::Result<Vec<HistoryEntry>> {
    get_json(&endpoints::history(id)).await
}

pub async fn get_volume_chart(id: i64) -> anyhow::Result<Vec<ChartDataPoint>> {
    get_json(&endpoints::volume_chart(id)).await
}

/// Summary, history and volume chart of one reservoir, requested concurrently.
pub async fn get_dashboard(id: i64) -> anyhow::Result<Dashboard> {
    join_dashboard(
        get_dashboard_summary(id),
        get_history(id),
        get_volume_chart(id),
    )
    .await
}

/// Drive the three dashboard requests together; the first failure wins.
async fn join_dashboard<S, H, C>(summary: S, history: H, chart: C) -> anyhow::Result<Dashboard>
where
    S: Future<Output = anyhow::Result<DashboardSummary>>,
    H: Future<Output = anyhow::Result<Vec<HistoryEntry>>>,
    C: Future<Output = anyhow::Result<Vec<ChartDataPoint>>>,
{
    let (summary, history, chart) = futures::try_join!(summary, history, chart)?;
    Ok(Dashboard {
        summary,
        history,
        chart,
    })
}

/// Today's local calendar date according to the browser clock.
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{self, poll_fn};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::task::Poll;

    fn summary() -> DashboardSummary {
        DashboardSummary {
            volume_atual_hm3: 80.0,
            volume_percentual: 40.0,
            estado_atual_seca: "Alerta".to_string(),
            data_ultima_medicao: "2024-05-01".to_string(),
            dias_desde_ultima_mudanca: 3,
            medidas_recomendadas: Vec::new(),
        }
    }

    #[test]
    fn test_join_dashboard_starts_every_request_before_awaiting_one() {
        let chart_started = Rc::new(Cell::new(false));

        // the summary only resolves once the chart request has been polled
        let started = chart_started.clone();
        let slow_summary = poll_fn(move |cx| {
            if started.get() {
                Poll::Ready(Ok::<_, anyhow::Error>(summary()))
            } else {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        });
        let flag = chart_started.clone();
        let chart = async move {
            flag.set(true);
            Ok::<_, anyhow::Error>(Vec::<ChartDataPoint>::new())
        };
        let history = future::ready(Ok::<_, anyhow::Error>(vec![HistoryEntry::new(
            "01/05/2024",
            "Alerta",
        )]));

        let dashboard = block_on(join_dashboard(slow_summary, history, chart)).unwrap();
        assert!(chart_started.get());
        assert_eq!(dashboard.summary, summary());
        assert_eq!(dashboard.history.len(), 1);
        assert!(dashboard.chart.is_empty());
    }

    #[test]
    fn test_join_dashboard_fails_when_any_request_fails() {
        let result = block_on(join_dashboard(
            future::ready(Ok::<_, anyhow::Error>(summary())),
            future::ready(Err::<Vec<HistoryEntry>, _>(anyhow!("Erro na API: 500"))),
            future::ready(Ok::<_, anyhow::Error>(Vec::<ChartDataPoint>::new())),
        ));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Erro na API: 500");
    }
}

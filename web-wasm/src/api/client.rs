//! Lost & Found API呼び出し
//!
//! fetchのPromiseをJsFutureで待ち、タイマーと競争させて期限を切る。
//! レスポンスはここでデシリアライズと境界検証まで済ませ、呼び出し側
//! にはcommonの型だけを渡す。

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use lostfound_common::{
    sanitize_results, sanitize_submissions, Error, ErrorDetail, Result, SearchResponse,
    Submission, SubmissionsResponse,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

const SUBMISSIONS_URL: &str = "/api/submissions";
const SEARCH_URL: &str = "/api/search";
const SUBMIT_URL: &str = "/api/submit";

/// 1リクエストの期限（ミリ秒）
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// 検索の類似度しきい値。フォームフィールドとしてそのまま送る。
pub const SEARCH_THRESHOLD: f64 = 0.3;

fn js_err(value: JsValue) -> Error {
    let text = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    Error::Network(text)
}

/// fetchを期限付きで実行する
async fn fetch_with_timeout(request: Request) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| Error::Network("no window".to_string()))?;
    let fetch = Box::pin(JsFuture::from(window.fetch_with_request(&request)));
    let deadline = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));

    let resp_value = match select(fetch, deadline).await {
        Either::Left((result, _)) => result.map_err(js_err)?,
        Either::Right(_) => return Err(Error::Timeout(REQUEST_TIMEOUT_MS)),
    };
    resp_value.dyn_into::<Response>().map_err(js_err)
}

async fn response_text(resp: &Response) -> Result<String> {
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(text.as_string().unwrap_or_default())
}

/// 投稿一覧を取得する
///
/// タイムスタンプが解釈できないレコードはここで落とし、件数だけ
/// ログに残す。
pub async fn fetch_submissions() -> Result<Vec<Submission>> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(SUBMISSIONS_URL, &opts).map_err(js_err)?;

    let resp = fetch_with_timeout(request).await?;
    if !resp.ok() {
        return Err(Error::Http(resp.status()));
    }

    let body = response_text(&resp).await?;
    let parsed: SubmissionsResponse = serde_json::from_str(&body)?;
    let (items, dropped) = sanitize_submissions(parsed.submissions);
    if dropped > 0 {
        leptos::logging::warn!("dropped {} submission(s) with bad timestamps", dropped);
    }
    Ok(items)
}

/// キーワード・意味検索を実行する
///
/// `success: false`はApplicationエラーとして返す。結果は境界検証済み。
pub async fn search_submissions(query: &str) -> Result<SearchResponse> {
    let form = FormData::new().map_err(js_err)?;
    form.append_with_str("query", query).map_err(js_err)?;
    form.append_with_str("threshold", &SEARCH_THRESHOLD.to_string())
        .map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());
    let request = Request::new_with_str_and_init(SEARCH_URL, &opts).map_err(js_err)?;

    let resp = fetch_with_timeout(request).await?;
    if !resp.ok() {
        return Err(Error::Http(resp.status()));
    }

    let body = response_text(&resp).await?;
    let mut parsed: SearchResponse = serde_json::from_str(&body)?;
    if !parsed.success {
        return Err(Error::Application("search reported failure".to_string()));
    }

    let (results, dropped) = sanitize_results(std::mem::take(&mut parsed.results));
    if dropped > 0 {
        leptos::logging::warn!("dropped {} search result(s) with bad timestamps", dropped);
    }
    parsed.results = results;
    Ok(parsed)
}

/// フォーム内容を投稿する
///
/// 非2xxのときはボディの`detail`をApplicationエラーに載せる
/// （そのままアラートに出す文面）。
pub async fn submit_item(form: &FormData) -> Result<()> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());
    let request = Request::new_with_str_and_init(SUBMIT_URL, &opts).map_err(js_err)?;

    let resp = fetch_with_timeout(request).await?;
    if resp.ok() {
        return Ok(());
    }

    let status = resp.status();
    let body = response_text(&resp).await.unwrap_or_default();
    if let Ok(error_body) = serde_json::from_str::<ErrorDetail>(&body) {
        if !error_body.detail.is_empty() {
            return Err(Error::Application(error_body.detail));
        }
    }
    Err(Error::Http(status))
}

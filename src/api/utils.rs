use super::{ApiError, ApiResult};
use reqwest::{Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};

async fn send(request: RequestBuilder, url: &Url) -> ApiResult<String> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        tracing::debug!(%url, %status, "request failed");
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

fn decode_json<T: DeserializeOwned>(body: String) -> ApiResult<T> {
    let decoded = serde_json::from_str::<T>(&body);
    decoded.map_err(|source| {
        tracing::debug!(%source, "malformed response body");
        ApiError::Decode { source, body }
    })
}

pub(super) async fn fetch_json<T: DeserializeOwned>(url: Url) -> ApiResult<T> {
    tracing::debug!(method = "GET", %url, "sending request");
    let client = Client::new();
    let body = send(client.get(url.clone()), &url).await?;
    decode_json(body)
}

pub(super) async fn fetch_text(url: Url) -> ApiResult<String> {
    tracing::debug!(method = "GET", %url, "sending request");
    let client = Client::new();
    send(client.get(url.clone()), &url).await
}

pub(super) async fn fetch_json_post<B: Serialize + ?Sized, T: DeserializeOwned>(
    url: Url,
    body: &B,
) -> ApiResult<T> {
    tracing::debug!(method = "POST", %url, "sending request");
    let client = Client::new();
    let response = send(client.post(url.clone()).json(body), &url).await?;
    decode_json(response)
}

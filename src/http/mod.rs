// HTTP 客户端适配器
// 所有请求都带上会话 Cookie（等价于浏览器端的 credentials: include），
// 非 2xx 响应统一翻译成类型化错误

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::schema::common::ErrorBody;
use crate::config::Config;
use crate::error::AppError;

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET 请求，带查询参数，响应按 JSON 解析
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let request = self.client.get(self.url(path)).query(query);
        self.send_json(request).await
    }

    /// POST 请求，JSON 负载
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = self.client.post(self.url(path)).json(body);
        self.send_json(request).await
    }

    /// POST 请求，表单负载（仅登录使用）
    pub async fn post_form<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        form: &B,
    ) -> Result<T, AppError> {
        let request = self.client.post(self.url(path)).form(form);
        self.send_json(request).await
    }

    /// POST 请求，无负载、不关心响应体（登出）
    pub async fn post_empty(&self, path: &str) -> Result<(), AppError> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// PATCH 请求，JSON 负载
    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = self.client.patch(self.url(path)).json(body);
        self.send_json(request).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await?;
        let response = Self::check_status(response).await?;

        response.json().await.map_err(|e| AppError::Network {
            status: None,
            message: format!("invalid response body: {}", e),
        })
    }

    /// 非 2xx 响应翻译：401/403 视为未认证，其余带后端的 detail 文本
    async fn check_status(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::AuthenticationRequired);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.message(),
            Err(_) => body,
        };

        Err(AppError::Network {
            status: Some(status.as_u16()),
            message,
        })
    }
}

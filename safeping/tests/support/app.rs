use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    response::Response,
    Router,
};
use safeping::{
    api,
    error::ProbeError,
    hostname::Hostname,
    probe::{ProbeOutcome, Prober},
    AppState,
};

/// スタブが返す結果
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum StubBehavior {
    /// exit 0, ping風の応答
    Reply,
    /// exit 2, stderrに名前解決失敗
    Unreachable,
    /// 起動失敗
    SpawnError,
    /// タイムアウト
    Timeout,
}

/// 呼び出しを記録するスタブprober
pub struct StubProber {
    behavior: StubBehavior,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl StubProber {
    pub fn new(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// probeに渡されたホスト一覧
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prober for StubProber {
    async fn probe(&self, host: &Hostname) -> Result<ProbeOutcome, ProbeError> {
        self.calls.lock().unwrap().push(host.to_string());
        match self.behavior {
            StubBehavior::Reply => Ok(ProbeOutcome {
                exit_code: Some(0),
                success: true,
                stdout: format!(
                    "PING {host} ({host}) 56(84) bytes of data.\n64 bytes from {host}: icmp_seq=1 ttl=64 time=0.05 ms\n"
                ),
                stderr: String::new(),
                elapsed: Duration::from_millis(1),
            }),
            StubBehavior::Unreachable => Ok(ProbeOutcome {
                exit_code: Some(2),
                success: false,
                stdout: String::new(),
                stderr: format!("ping: {host}: Name or service not known\n"),
                elapsed: Duration::from_millis(1),
            }),
            StubBehavior::SpawnError => Err(ProbeError::Spawn {
                program: "ping".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            }),
            StubBehavior::Timeout => Err(ProbeError::Timeout(Duration::from_secs(5))),
        }
    }
}

/// スタブproberでルーターを作成する（.oneshot()スタイルのテスト用）
#[allow(dead_code)]
pub fn build_stub_app(behavior: StubBehavior) -> (Router, Arc<StubProber>) {
    let prober = StubProber::new(behavior);
    let app = api::create_app(AppState::with_prober(prober.clone()));
    (app, prober)
}

/// `host=<value>` のフォームPOSTを組み立てる
#[allow(dead_code)]
pub fn ping_request(host: &str) -> Request<Body> {
    let body = serde_urlencoded::to_string([("host", host)]).unwrap();
    raw_form_request(body)
}

/// 任意のフォームボディでPOST /pingを組み立てる
#[allow(dead_code)]
pub fn raw_form_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ping")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.into()))
        .unwrap()
}

/// レスポンスボディを文字列で取得
#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

use std::net::SocketAddr;

use tokio::{net::TcpListener, task::JoinHandle};
use visitor_logbook::{server, AppState};

/// 実TCPでサーバーを起動するテストユーティリティ
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    state: AppState,
    handle: JoinHandle<anyhow::Result<()>>,
}

#[allow(dead_code)]
impl TestServer {
    /// サーバーがバインドしているアドレスを返す
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// ベースURL
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// サーバーを停止し、バックグラウンドタスクの終了を待つ
    pub async fn stop(self) {
        self.state.shutdown.request_shutdown();
        let _ = self.handle.await;
    }
}

/// 127.0.0.1の空きポートでサーバーを起動する
#[allow(dead_code)]
pub async fn spawn_server(state: AppState) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let handle = tokio::spawn(server::serve(state.clone(), listener));
    TestServer {
        addr,
        state,
        handle,
    }
}

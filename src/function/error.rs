//错误处理板块
use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("配置错误: {0}")]
    InvalidConfig(String),

    #[error("网络错误: {0}")]
    NetworkError(String),

    #[error("文件操作错误: {0}")]
    IOError(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("请求失败: {0}")]
    RequestFailed(String),

    #[error("HTTP客户端错误: {0}")]
    ClientError(String),
}

impl From<io::Error> for ProbeError {
    fn from(err: io::Error) -> Self {
        ProbeError::IOError(err.to_string())
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::NetworkError(format!("请求超时: {}", err))
        } else if err.is_connect() {
            ProbeError::NetworkError(format!("连接错误: {}", err))
        } else {
            ProbeError::RequestFailed(format!("请求失败: {}", err))
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::ParseError(err.to_string())
    }
}

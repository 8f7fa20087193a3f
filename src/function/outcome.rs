// outcome.rs
use serde::{Serialize, Deserialize};

/// 单个候选路径按状态码的分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 404: 路径不存在
    NotFound,
    /// 非404错误状态: 路径大概率存在, 请求体格式不对
    SuspectedMatch(u16),
    /// 2xx: 命中
    Success(u16),
}

/// 整次探测的最终结论
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeVerdict {
    Found { url: String, status: u16, body: String },
    Suspected { url: String, status: u16 },
    Exhausted { attempted: usize },
}

/// 探测结束后的汇总数据
#[derive(Debug, Serialize, Deserialize)]
pub struct ProbeReport {
    pub target: String,
    pub verdict: ProbeVerdict,
    pub attempted: usize,
    pub paths_total: usize,
    pub probe_duration: u64,
    pub probe_timestamp: String,
}

/// POST 请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPayload {
    pub phone: String,
    pub message: String,
}

/// 命中后的服务器应答 (字段均为可选)
#[derive(Debug, Deserialize)]
pub struct SendReply {
    pub status: Option<String>,
    pub message: Option<String>,
}

// config.rs
use structopt::StructOpt;
use std::path::PathBuf;
use regex::Regex;
use super::ProbeError;

#[derive(Debug, StructOpt)]
pub struct Config {
    /// 目标基础 URL (例如: http://localhost:4000)
    #[structopt(short, long)]
    pub target: String,

    /// 请求体 phone 字段 (测试用手机号)
    #[structopt(long, default_value = "6285523568081")]
    pub phone: String,

    /// 请求体 message 字段 (测试用消息内容)
    #[structopt(long, default_value = "tes")]
    pub message: String,

    /// 候选路径字典文件 (每行一个路径, 不指定则使用内置列表)
    #[structopt(short, long)]
    pub dictionary: Option<PathBuf>,

    /// 请求超时时间 (秒)
    #[structopt(long, default_value = "10")]
    pub timeout: u64,

    /// 代理服务器 (例如: http://localhost:8080)
    #[structopt(long)]
    pub proxy: Option<String>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ProbeError> {
        // 目标url格式验证
        if !self.target.starts_with("http://") && !self.target.starts_with("https://") {
            return Err(ProbeError::InvalidConfig("请输入正确的URL".to_string()));
        }

        // 验证手机号为纯数字
        let phone_pattern = Regex::new(r"^[0-9]{6,15}$")
            .map_err(|e| ProbeError::InvalidConfig(format!("手机号校验规则无效: {}", e)))?;
        if !phone_pattern.is_match(&self.phone) {
            return Err(ProbeError::InvalidConfig("手机号必须为6~15位数字。".to_string()));
        }

        // 验证消息内容
        if self.message.trim().is_empty() {
            return Err(ProbeError::InvalidConfig("消息内容不能为空。".to_string()));
        }

        // 验证字典路径存在
        if let Some(dict) = &self.dictionary {
            if !dict.exists() {
                return Err(ProbeError::InvalidConfig("字典文件不存在。".to_string()));
            }
            if std::fs::metadata(dict)?.len() == 0 {
                return Err(ProbeError::InvalidConfig("字典文件不能为空.".to_string()));
            }
        }

        // 验证超时合理性
        if self.timeout == 0 || self.timeout > 300 {
            return Err(ProbeError::InvalidConfig("超时区间为1~300秒。".to_string()));
        }

        // 验证代理
        if let Some(proxy) = &self.proxy {
            if !proxy.starts_with("http://") && !proxy.starts_with("https://") {
                return Err(ProbeError::InvalidConfig("代理URL必须以http://或https://开头".to_string()));
            }
        }

        Ok(())
    }
}
